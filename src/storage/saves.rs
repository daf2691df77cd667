//! Saving and loading a game snapshot as a JSON file.

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::game::GameSnapshot;

/// Default file used by `:save` and `:load` when no path is given.
pub const DEFAULT_SAVE_FILE: &str = "save.json";

/// Writes the snapshot to `path` as pretty-printed JSON, creating missing
/// parent directories first.
///
/// # Errors
///
/// Any I/O failure, with the offending path attached as context.
pub fn save(path: &Path, snapshot: &GameSnapshot) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(snapshot).context("serializing game snapshot")?;
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating directory {}", dir.display()))?;
        }
    }
    fs::write(path, json).with_context(|| format!("writing save file {}", path.display()))?;
    debug!(path = %path.display(), "game saved");
    Ok(())
}

/// Reads a snapshot back from `path`.
///
/// The board data is *not* validated here: feeding the result to
/// [`crate::game::Game::from_snapshot`] is what rejects malformed rows.
///
/// # Errors
///
/// A missing or unreadable file, or a file that is not valid snapshot JSON.
pub fn load(path: &Path) -> anyhow::Result<GameSnapshot> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading save file {}", path.display()))?;
    let snapshot =
        serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))?;
    debug!(path = %path.display(), "game loaded");
    Ok(snapshot)
}
