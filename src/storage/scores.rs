//! Ranking of completed matches: fewer plies rank higher, ties go to the
//! more recent result, and only the best N records survive an insertion.

use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::game::Side;

/// Default file used for the scoreboard.
pub const DEFAULT_SCORES_FILE: &str = "scores.json";

/// How many records the scoreboard keeps unless told otherwise.
pub const DEFAULT_KEEP_TOP: usize = 20;

/// One completed match, as consumed and produced by the scoreboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Display name of the winning player.
    pub winner_name: String,
    /// Which side the winner played.
    pub winner_side: Side,
    /// Display name of the losing player.
    pub loser_name: String,
    /// Ply count at the moment of victory.
    pub ply_count: u32,
    /// When the match finished (UTC).
    pub finished_at: DateTime<Utc>,
}

/// The ranked record table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    entries: Vec<ScoreEntry>,
}

impl Scoreboard {
    /// Records in ranking order: ascending ply count, ties broken by the
    /// most recent timestamp first.
    #[must_use]
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Inserts a result, re-sorts the table and keeps the best `keep_top`
    /// records (never fewer than one).
    pub fn record(&mut self, entry: ScoreEntry, keep_top: usize) {
        self.entries.push(entry);
        self.entries.sort_by(|a, b| {
            a.ply_count
                .cmp(&b.ply_count)
                .then(b.finished_at.cmp(&a.finished_at))
        });
        self.entries.truncate(keep_top.max(1));
    }
}

/// Loads the scoreboard from `path`; a missing file is an empty table.
///
/// # Errors
///
/// An unreadable file, or a file that is not valid scoreboard JSON.
pub fn load(path: &Path) -> anyhow::Result<Scoreboard> {
    if !path.exists() {
        return Ok(Scoreboard::default());
    }
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading scores file {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))
}

/// Loads the table, records `entry` and writes the table back.
///
/// # Errors
///
/// Any failure to read, parse or write the scoreboard file.
pub fn add_result(path: &Path, entry: ScoreEntry, keep_top: usize) -> anyhow::Result<()> {
    let mut board = load(path)?;
    board.record(entry, keep_top);
    let json = serde_json::to_string_pretty(&board).context("serializing scoreboard")?;
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating directory {}", dir.display()))?;
        }
    }
    fs::write(path, json).with_context(|| format!("writing scores file {}", path.display()))?;
    debug!(path = %path.display(), "score recorded");
    Ok(())
}
