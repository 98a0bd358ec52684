//! State container that owns the progress document and its SQLite connection.
//!
//! The document is read once when the store opens. Mutate it through
//! [`Store::state_mut`] and call [`Store::save`] afterwards; nothing is
//! written implicitly.

use super::db;
use crate::error::Result;
use crate::models::AppState;
use rusqlite::Connection;
use std::path::Path;

pub struct Store {
    conn: Connection,
    state: AppState,
}

impl Store {
    /// Opens (or creates) the database at `path` and loads the document.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        let store = Self::from_connection(conn)?;
        log::info!(
            "Loaded progress from {} ({} review items)",
            path.display(),
            store.state.srs.len()
        );
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        db::init_database(&conn)?;
        let state = db::load_state(&conn)?;
        Ok(Self { conn, state })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Writes the whole document.
    pub fn save(&mut self) -> Result<()> {
        db::save_state(&mut self.conn, &self.state)?;
        log::debug!("Progress saved");
        Ok(())
    }

    /// Replaces the document with `state` and saves it.
    pub fn replace(&mut self, state: AppState) -> Result<()> {
        self.state = state;
        self.save()
    }

    /// Erases all stored progress and starts over from defaults.
    pub fn reset(&mut self) -> Result<()> {
        db::clear_state(&self.conn)?;
        self.state = AppState::default();
        log::info!("All progress reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, FixedClock};
    use tempfile::tempdir;

    #[test]
    fn test_state_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.sqlite3");
        let clock = FixedClock::new(1_700_000_000_000);

        {
            let mut store = Store::open(&path).unwrap();
            store.state_mut().add_to_review("p4", clock.now_ms());
            store.state_mut().answer_review("p4", true, clock.now_ms());
            store.save().unwrap();
        }

        let store = Store::open(&path).unwrap();
        let review = store.state().srs.get("p4").unwrap();
        assert_eq!(review.interval, 1);
        assert_eq!(review.due_ts, clock.now_ms() + 86_400_000);
        assert_eq!(store.state().stats.learned, 1);
    }

    #[test]
    fn test_unsaved_changes_are_not_persisted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.sqlite3");

        {
            let mut store = Store::open(&path).unwrap();
            store.state_mut().add_to_review("p1", 0);
        }

        let store = Store::open(&path).unwrap();
        assert!(store.state().srs.is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.sqlite3");

        let mut store = Store::open(&path).unwrap();
        store.state_mut().add_to_review("p1", 0);
        store.state_mut().record_quiz(0);
        store.save().unwrap();

        store.reset().unwrap();
        assert_eq!(store.state(), &AppState::default());

        drop(store);
        let store = Store::open(&path).unwrap();
        assert_eq!(store.state(), &AppState::default());
    }

    #[test]
    fn test_replace_saves_new_document() {
        let mut store = Store::open_in_memory().unwrap();
        let mut imported = AppState::default();
        imported.add_to_review("p9", 5);

        store.replace(imported.clone()).unwrap();

        assert_eq!(store.state(), &imported);
    }
}
