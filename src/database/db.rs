//! Database operations for learner progress
//!
//! The progress document is kept in two tables: one row per reviewed item in
//! `review_state`, and JSON blobs for stats, settings and UI language in
//! `app_state`. The whole document is read at startup and rewritten on save.

use crate::error::Result;
use crate::models::{AppState, ReviewState};
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

const KEY_LANG_UI: &str = "lang_ui";
const KEY_STATS: &str = "stats";
const KEY_SETTINGS: &str = "settings";

/// Creates the progress tables if they don't exist yet
pub fn init_database(conn: &Connection) -> Result<()> {
    // One row per item in the review queue
    conn.execute(
        "CREATE TABLE IF NOT EXISTS review_state (
            item_id TEXT PRIMARY KEY,
            interval INTEGER NOT NULL DEFAULT 0,
            ease REAL NOT NULL DEFAULT 2.5,
            due_ts INTEGER NOT NULL
        )",
        (),
    )?;

    // Key/value store for the rest of the document
    conn.execute(
        "CREATE TABLE IF NOT EXISTS app_state (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

/// Reads every review state, ordered by item id
pub fn load_review_states(conn: &Connection) -> Result<Vec<(String, ReviewState)>> {
    let mut stmt =
        conn.prepare("SELECT item_id, interval, ease, due_ts FROM review_state ORDER BY item_id")?;

    let states = stmt
        .query_map([], |row| {
            Ok((
                row.get(0)?,
                ReviewState {
                    interval: row.get(1)?,
                    ease: row.get(2)?,
                    due_ts: row.get(3)?,
                },
            ))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(states)
}

/// Reads a JSON value stored under `key`, falling back to its default when absent
/// or unreadable.
fn load_value<T: DeserializeOwned + Default>(conn: &Connection, key: &str) -> Result<T> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT value FROM app_state WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()?;

    Ok(match raw {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable '{}' entry: {}", key, e);
            T::default()
        }),
        None => T::default(),
    })
}

fn store_value<T: Serialize>(conn: &Connection, key: &str, value: &T) -> Result<()> {
    conn.execute(
        "INSERT INTO app_state (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, serde_json::to_string(value)?],
    )?;
    Ok(())
}

/// Loads the whole progress document
pub fn load_state(conn: &Connection) -> Result<AppState> {
    let mut state = AppState {
        lang_ui: load_value(conn, KEY_LANG_UI)?,
        stats: load_value(conn, KEY_STATS)?,
        settings: load_value(conn, KEY_SETTINGS)?,
        ..AppState::default()
    };

    for (item_id, review) in load_review_states(conn)? {
        state.srs.insert(item_id, review);
    }

    Ok(state)
}

/// Rewrites the whole progress document in a single transaction
pub fn save_state(conn: &mut Connection, state: &AppState) -> Result<()> {
    let tx = conn.transaction()?;

    tx.execute("DELETE FROM review_state", ())?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO review_state (item_id, interval, ease, due_ts) VALUES (?1, ?2, ?3, ?4)",
        )?;
        for (item_id, review) in state.srs.iter() {
            stmt.execute(params![item_id, review.interval, review.ease, review.due_ts])?;
        }
    }

    store_value(&tx, KEY_LANG_UI, &state.lang_ui)?;
    store_value(&tx, KEY_STATS, &state.stats)?;
    store_value(&tx, KEY_SETTINGS, &state.settings)?;

    tx.commit()?;
    Ok(())
}

/// Deletes all stored progress
pub fn clear_state(conn: &Connection) -> Result<()> {
    conn.execute("DELETE FROM review_state", ())?;
    conn.execute("DELETE FROM app_state", ())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FontSize, LangUi, Stats};

    fn open() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_database(&conn).unwrap();
        conn
    }

    #[test]
    fn test_empty_database_loads_default_state() {
        let conn = open();
        assert_eq!(load_state(&conn).unwrap(), AppState::default());
    }

    #[test]
    fn test_init_is_idempotent() {
        let conn = open();
        assert!(init_database(&conn).is_ok());
    }

    #[test]
    fn test_save_and_load_state() {
        let mut conn = open();
        let mut state = AppState::default();
        state.add_to_review("p1", 1_000);
        state.add_to_review("p2", 1_000);
        state.answer_review("p2", true, 2_000);
        state.record_quiz(3_000);
        state.lang_ui = LangUi::En;
        state.settings.font_size = FontSize::Small;

        save_state(&mut conn, &state).unwrap();

        assert_eq!(load_state(&conn).unwrap(), state);
    }

    #[test]
    fn test_save_replaces_previous_rows() {
        let mut conn = open();
        let mut state = AppState::default();
        state.add_to_review("p1", 0);
        save_state(&mut conn, &state).unwrap();

        let fresh = AppState::default();
        save_state(&mut conn, &fresh).unwrap();

        assert!(load_review_states(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_clear_state() {
        let mut conn = open();
        let mut state = AppState::default();
        state.add_to_review("p3", 0);
        save_state(&mut conn, &state).unwrap();

        clear_state(&conn).unwrap();

        assert_eq!(load_state(&conn).unwrap(), AppState::default());
    }

    #[test]
    fn test_unreadable_entry_falls_back_to_default() {
        let conn = open();
        conn.execute(
            "INSERT INTO app_state (key, value) VALUES ('stats', 'not json')",
            (),
        )
        .unwrap();

        assert_eq!(load_state(&conn).unwrap().stats, Stats::default());
    }
}
