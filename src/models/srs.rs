//! Review scheduler: a simplified SM-2 style spaced repetition rule.
//!
//! The learner only answers right or wrong, so instead of a 0-5 grade:
//! - Ease grows by 0.1 on a correct answer and shrinks by 0.2 on a wrong one, never below 1.3
//! - New items (interval 0) go to 1 day when right and stay due when wrong
//! - Items at 1 day go to 3 days when right and stay at 1 day when wrong
//! - Longer intervals are multiplied by the new ease when right and halved when wrong

use super::ReviewState;
use super::review_state::{MIN_EASE, MS_PER_DAY};

const EASE_BONUS: f64 = 0.1;
const EASE_PENALTY: f64 = 0.2;
const LAPSE_FACTOR: f64 = 0.5;

/// Computes the next review state. A missing prior state counts as a never-reviewed item.
pub fn compute_next(prev: Option<&ReviewState>, correct: bool, now_ms: i64) -> ReviewState {
    let prev = prev.cloned().unwrap_or_default();

    let delta = if correct { EASE_BONUS } else { -EASE_PENALTY };
    let ease = (prev.resolved_ease() + delta).max(MIN_EASE);

    let interval = match prev.interval {
        0 => {
            if correct {
                1
            } else {
                0
            }
        }
        1 => {
            if correct {
                3
            } else {
                1
            }
        }
        // Failing at 2 days lands on 1 and re-enters the branch above next time.
        n => {
            let factor = if correct { ease } else { LAPSE_FACTOR };
            (n as f64 * factor).round() as u32
        }
    };

    ReviewState {
        interval,
        ease,
        due_ts: now_ms.saturating_add(i64::from(interval).saturating_mul(MS_PER_DAY)),
    }
}

/// Outcomes of answering wrong and right, in that order.
pub fn preview(prev: Option<&ReviewState>, now_ms: i64) -> (ReviewState, ReviewState) {
    (
        compute_next(prev, false, now_ms),
        compute_next(prev, true, now_ms),
    )
}

/// Short label for an interval in days, e.g. "3d" or "2w".
pub fn format_interval(days: u32) -> String {
    match days {
        0 => "now".to_string(),
        1..=6 => format!("{}d", days),
        7..=29 => format!("{}w", days / 7),
        30..=364 => format!("{}mo", days / 30),
        _ => format!("{}y", days / 365),
    }
}
