//! Per-item scheduling state kept for every phrase in the review queue.
use serde::{Deserialize, Serialize};

/// Ease assigned to items that have never been reviewed.
pub const DEFAULT_EASE: f64 = 2.5;
/// Ease never drops below this value.
pub const MIN_EASE: f64 = 1.3;
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Scheduling state of a single learning item.
///
/// Stored documents may be partial; every missing field falls back to the
/// value of a never-reviewed item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewState {
    /// Days until the next review. 0 means never successfully reviewed.
    #[serde(default)]
    pub interval: u32,
    #[serde(default = "default_ease")]
    pub ease: f64,
    /// Milliseconds since the Unix epoch when the item becomes due.
    #[serde(default, rename = "dueTs")]
    pub due_ts: i64,
}

fn default_ease() -> f64 {
    DEFAULT_EASE
}

impl Default for ReviewState {
    fn default() -> Self {
        Self {
            interval: 0,
            ease: DEFAULT_EASE,
            due_ts: 0,
        }
    }
}

impl ReviewState {
    /// State of an item that was just added to the review queue: due immediately.
    pub fn fresh(now_ms: i64) -> Self {
        Self {
            due_ts: now_ms,
            ..Self::default()
        }
    }

    /// Ease to schedule from. A zero or NaN stored ease counts as unset; any other
    /// value is passed through and left to the scheduler's floor.
    pub fn resolved_ease(&self) -> f64 {
        if self.ease == 0.0 || self.ease.is_nan() {
            DEFAULT_EASE
        } else {
            self.ease
        }
    }

    pub fn is_due(&self, now_ms: i64) -> bool {
        self.due_ts <= now_ms
    }

    /// Whole days left until due, zero when already due.
    pub fn days_until_due(&self, now_ms: i64) -> i64 {
        if self.is_due(now_ms) {
            0
        } else {
            let remaining = self.due_ts.saturating_sub(now_ms);
            remaining / MS_PER_DAY + i64::from(remaining % MS_PER_DAY != 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_is_due_now() {
        let state = ReviewState::fresh(1_000);

        assert_eq!(state.interval, 0);
        assert_eq!(state.ease, 2.5);
        assert_eq!(state.due_ts, 1_000);
        assert!(state.is_due(1_000));
        assert!(!state.is_due(999));
    }

    #[test]
    fn test_partial_record_defaults() {
        let state: ReviewState = serde_json::from_str(r#"{"interval": 3}"#).unwrap();

        assert_eq!(state.interval, 3);
        assert_eq!(state.ease, DEFAULT_EASE);
        assert_eq!(state.due_ts, 0);
    }

    #[test]
    fn test_due_ts_uses_camel_case_key() {
        let json = serde_json::to_string(&ReviewState::fresh(42)).unwrap();
        assert!(json.contains("\"dueTs\":42"));
    }

    #[test]
    fn test_zero_ease_resolves_to_default() {
        let state = ReviewState {
            ease: 0.0,
            ..ReviewState::default()
        };
        assert_eq!(state.resolved_ease(), DEFAULT_EASE);

        let state = ReviewState {
            ease: f64::NAN,
            ..ReviewState::default()
        };
        assert_eq!(state.resolved_ease(), DEFAULT_EASE);
    }

    #[test]
    fn test_negative_ease_is_kept() {
        let state = ReviewState {
            ease: -1.0,
            ..ReviewState::default()
        };
        assert_eq!(state.resolved_ease(), -1.0);
    }

    #[test]
    fn test_days_until_due_with_extreme_timestamps() {
        let state = ReviewState {
            due_ts: i64::MAX,
            ..ReviewState::default()
        };
        assert_eq!(state.days_until_due(i64::MIN), i64::MAX / MS_PER_DAY + 1);
    }

    #[test]
    fn test_days_until_due_rounds_up() {
        let state = ReviewState {
            due_ts: MS_PER_DAY + 1,
            ..ReviewState::default()
        };

        assert_eq!(state.days_until_due(0), 2);
        assert_eq!(state.days_until_due(MS_PER_DAY + 1), 0);
    }
}
