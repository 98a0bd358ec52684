//! JSON backup of learner progress.
//! Saves the whole progress document to a file and loads it back.

use crate::error::Result;
use crate::models::AppState;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Exports the progress document to a pretty-printed JSON file.
pub fn export_json_to_path(state: &AppState, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json_string = serde_json::to_string_pretty(state)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    log::info!("Progress exported to '{}'", path.display());
    Ok(())
}

/// Imports a progress document. Fields missing from the file take their defaults.
pub fn import_json(path: impl AsRef<Path>) -> Result<AppState> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let state: AppState = serde_json::from_str(&contents)?;

    log::info!(
        "Progress imported from '{}' ({} review items)",
        path.display(),
        state.srs.len()
    );
    Ok(state)
}
