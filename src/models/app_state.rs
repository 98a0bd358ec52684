//! The learner's progress document: review states, counters and display settings.
//!
//! Everything here is plain data plus pure updates. Callers persist the
//! document through [`crate::database::Store::save`] after each mutation.

use super::ReviewState;
use super::review_state::MS_PER_DAY;
use super::srs::compute_next;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Language used for UI labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LangUi {
    #[default]
    #[serde(rename = "KR")]
    Kr,
    #[serde(rename = "EN")]
    En,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    #[serde(rename = "sm")]
    Small,
    #[default]
    Base,
    #[serde(rename = "lg")]
    Large,
}

impl FontSize {
    pub fn zoom_factor(self) -> f32 {
        match self {
            FontSize::Small => 0.875,
            FontSize::Base => 1.0,
            FontSize::Large => 1.125,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_true")]
    pub show_romaji: bool,
    #[serde(default)]
    pub font_size: FontSize,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_romaji: true,
            font_size: FontSize::Base,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(default)]
    pub learned: u32,
    #[serde(default)]
    pub quizzes: u32,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub last_ts: i64,
}

/// Streak after studying at `now_ms` when the last activity was at `last_ts`.
///
/// Same day keeps the streak, the next day extends it, any longer gap restarts at 1.
pub fn next_streak(streak: u32, last_ts: i64, now_ms: i64) -> u32 {
    let elapsed_days = now_ms.saturating_sub(last_ts).div_euclid(MS_PER_DAY);
    match elapsed_days {
        0 => streak,
        1 => streak.saturating_add(1),
        _ => 1,
    }
}

/// Review states keyed by item id, iterated in id order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SrsBook(BTreeMap<String, ReviewState>);

impl SrsBook {
    pub fn get(&self, item_id: &str) -> Option<&ReviewState> {
        self.0.get(item_id)
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.0.contains_key(item_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReviewState)> {
        self.0.iter().map(|(id, state)| (id.as_str(), state))
    }

    /// Inserts a fresh state unless the item is already tracked. Returns true if inserted.
    pub fn add(&mut self, item_id: &str, now_ms: i64) -> bool {
        if self.0.contains_key(item_id) {
            return false;
        }
        self.0
            .insert(item_id.to_string(), ReviewState::fresh(now_ms));
        true
    }

    /// Replaces the item's state with the scheduler's next state.
    pub fn record_answer(&mut self, item_id: &str, correct: bool, now_ms: i64) -> ReviewState {
        let next = compute_next(self.0.get(item_id), correct, now_ms);
        self.0.insert(item_id.to_string(), next.clone());
        next
    }

    pub(crate) fn insert(&mut self, item_id: String, state: ReviewState) {
        self.0.insert(item_id, state);
    }
}

/// Whole progress document, loaded once on start and written after every change.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default, rename = "langUI")]
    pub lang_ui: LangUi,
    #[serde(default)]
    pub srs: SrsBook,
    #[serde(default)]
    pub stats: Stats,
    #[serde(default)]
    pub settings: Settings,
}

impl AppState {
    /// Puts an item in the review queue. Existing progress for the item is kept,
    /// but the learned counter counts every add.
    pub fn add_to_review(&mut self, item_id: &str, now_ms: i64) {
        self.srs.add(item_id, now_ms);
        self.stats.learned = self.stats.learned.saturating_add(1);
    }

    pub fn answer_review(&mut self, item_id: &str, correct: bool, now_ms: i64) -> ReviewState {
        self.srs.record_answer(item_id, correct, now_ms)
    }

    /// Counts a finished quiz and updates the daily streak.
    pub fn record_quiz(&mut self, now_ms: i64) {
        self.stats.quizzes = self.stats.quizzes.saturating_add(1);
        self.stats.streak = next_streak(self.stats.streak, self.stats.last_ts, now_ms);
        self.stats.last_ts = now_ms;
    }

    pub fn due_count(&self, now_ms: i64) -> usize {
        self.srs.iter().filter(|(_, s)| s.is_due(now_ms)).count()
    }
}
