//! Startup configuration read from environment variables.
//!
//! - `JASPRESSO_DB`: SQLite file holding learner progress (default `jaspresso.sqlite3`)
//! - `JASPRESSO_FONT`: optional TTF/OTF with Japanese and Korean glyphs for the UI

use std::path::PathBuf;

pub const DB_PATH_VAR: &str = "JASPRESSO_DB";
pub const FONT_PATH_VAR: &str = "JASPRESSO_FONT";
pub const DEFAULT_DB_PATH: &str = "jaspresso.sqlite3";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub font_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            font_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            db_path: non_empty(DB_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
            font_path: non_empty(FONT_PATH_VAR).map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_reads_paths() {
        let config = AppConfig::from_lookup(lookup(&[
            (DB_PATH_VAR, "/tmp/progress.db"),
            (FONT_PATH_VAR, "/fonts/NotoSansCJK.otf"),
        ]));

        assert_eq!(config.db_path, PathBuf::from("/tmp/progress.db"));
        assert_eq!(
            config.font_path,
            Some(PathBuf::from("/fonts/NotoSansCJK.otf"))
        );
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = AppConfig::from_lookup(lookup(&[(DB_PATH_VAR, "  "), (FONT_PATH_VAR, "")]));
        assert_eq!(config, AppConfig::default());
    }
}
