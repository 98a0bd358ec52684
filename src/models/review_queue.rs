//! Review queue: picks which tracked items to show and cycles through them.
//!
//! The selection is a snapshot taken when the queue is built. If any item is
//! due, only due items are shown; otherwise every tracked item is offered so
//! the learner can review ahead of schedule. Answers do not reshuffle the
//! snapshot, the cursor just moves round-robin until [`ReviewQueue::refresh`].

use super::app_state::SrsBook;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueMode {
    /// At least one item was due; only due items are queued.
    Due,
    /// Nothing was due; all tracked items are queued.
    Ahead,
}

#[derive(Clone, Debug)]
pub struct ReviewQueue {
    item_ids: Vec<String>,
    current_index: usize,
    mode: QueueMode,
}

/// Ids of tracked items that are due at `now_ms`, falling back to all tracked ids.
pub fn select_items(book: &SrsBook, now_ms: i64) -> (Vec<String>, QueueMode) {
    let due: Vec<String> = book
        .iter()
        .filter(|(_, state)| state.is_due(now_ms))
        .map(|(id, _)| id.to_string())
        .collect();

    if due.is_empty() {
        let all = book.iter().map(|(id, _)| id.to_string()).collect();
        (all, QueueMode::Ahead)
    } else {
        (due, QueueMode::Due)
    }
}

impl ReviewQueue {
    pub fn snapshot(book: &SrsBook, now_ms: i64) -> Self {
        let (item_ids, mode) = select_items(book, now_ms);
        log::debug!(
            "review queue built with {} items ({:?})",
            item_ids.len(),
            mode
        );
        Self {
            item_ids,
            current_index: 0,
            mode,
        }
    }

    /// Re-selects items and rewinds to the start.
    pub fn refresh(&mut self, book: &SrsBook, now_ms: i64) {
        *self = Self::snapshot(book, now_ms);
    }

    pub fn current(&self) -> Option<&str> {
        self.item_ids.get(self.current_index).map(String::as_str)
    }

    /// Moves to the next item, wrapping to the first after the last.
    pub fn advance(&mut self) {
        if !self.item_ids.is_empty() {
            self.current_index = (self.current_index + 1) % self.item_ids.len();
        }
    }

    pub fn item_ids(&self) -> &[String] {
        &self.item_ids
    }

    pub fn len(&self) -> usize {
        self.item_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item_ids.is_empty()
    }

    pub fn position(&self) -> usize {
        self.current_index
    }

    pub fn mode(&self) -> QueueMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReviewState;

    const NOW: i64 = 1_700_000_000_000;

    fn book(entries: &[(&str, i64)]) -> SrsBook {
        let mut book = SrsBook::default();
        for (id, due_ts) in entries {
            book.insert(
                id.to_string(),
                ReviewState {
                    due_ts: *due_ts,
                    ..ReviewState::default()
                },
            );
        }
        book
    }

    #[test]
    fn test_only_due_items_selected() {
        let book = book(&[("a", NOW - 1), ("b", NOW + 1)]);
        let queue = ReviewQueue::snapshot(&book, NOW);

        assert_eq!(queue.item_ids(), ["a"]);
        assert_eq!(queue.mode(), QueueMode::Due);
    }

    #[test]
    fn test_due_boundary_is_inclusive() {
        let book = book(&[("a", NOW), ("b", NOW + 1)]);
        let (ids, _) = select_items(&book, NOW);

        assert_eq!(ids, ["a"]);
    }

    #[test]
    fn test_falls_back_to_all_items_when_nothing_due() {
        let book = book(&[("a", NOW + 5), ("b", NOW + 10)]);
        let queue = ReviewQueue::snapshot(&book, NOW);

        assert_eq!(queue.item_ids(), ["a", "b"]);
        assert_eq!(queue.mode(), QueueMode::Ahead);
    }

    #[test]
    fn test_empty_book_gives_empty_queue() {
        let mut queue = ReviewQueue::snapshot(&SrsBook::default(), NOW);

        assert!(queue.is_empty());
        assert_eq!(queue.current(), None);
        queue.advance();
        assert_eq!(queue.position(), 0);
    }

    #[test]
    fn test_round_robin_wraps() {
        let book = book(&[("a", NOW), ("b", NOW), ("c", NOW)]);
        let mut queue = ReviewQueue::snapshot(&book, NOW);

        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(queue.current().unwrap().to_string());
            queue.advance();
        }
        assert_eq!(seen, ["a", "b", "c", "a"]);
    }

    #[test]
    fn test_snapshot_ignores_later_changes_until_refresh() {
        let mut state = crate::models::AppState::default();
        state.add_to_review("a", NOW);
        state.add_to_review("b", NOW);

        let mut queue = ReviewQueue::snapshot(&state.srs, NOW);
        state.answer_review("a", true, NOW);
        queue.advance();
        assert_eq!(queue.current(), Some("b"));
        assert_eq!(queue.len(), 2);

        queue.refresh(&state.srs, NOW);
        assert_eq!(queue.item_ids(), ["b"]);
        assert_eq!(queue.position(), 0);
    }
}
