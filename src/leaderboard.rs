//! Leaderboard persistence: a pretty-printed JSON array of the top runs.
//!
//! The file keeps at most [`LEADERBOARD_MAX_ENTRIES`] entries sorted by hit
//! count descending; ties keep their insertion order (stable sort).  A
//! missing file reads as an empty leaderboard.  A file that exists but is
//! unreadable or malformed is an error; the caller decides whether that is
//! fatal.  Last writer wins; there is no cross-process locking because the
//! game is single-process and writes once per session.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{LEADERBOARD_FILE, LEADERBOARD_MAX_ENTRIES};
use crate::error::{TrainerError, TrainerResult};

/// One finished session as stored on disk.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    /// Name committed on the main menu.
    pub player: String,
    /// Elapsed session time, already formatted as `MM:SS.d`.
    pub time: String,
    /// Targets hit; the ranking key.
    pub hits: u32,
    /// Hit percentage, one decimal.
    pub accuracy: f32,
}

/// Default storage location, relative to the process working directory.
pub fn leaderboard_path() -> PathBuf {
    PathBuf::from(LEADERBOARD_FILE)
}

/// Load every stored entry.  A missing file is an empty leaderboard, not an
/// error; anything else that goes wrong is surfaced.
pub fn load(path: &Path) -> TrainerResult<Vec<LeaderboardEntry>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => {
            return Err(TrainerError::LeaderboardRead {
                path: path.to_path_buf(),
                message: err.to_string(),
            })
        }
    };

    serde_json::from_str(&contents).map_err(|err| TrainerError::LeaderboardParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Append one entry, re-rank by hits descending (stable for ties), keep the
/// top [`LEADERBOARD_MAX_ENTRIES`], and overwrite the file.
pub fn append(path: &Path, entry: LeaderboardEntry) -> TrainerResult<()> {
    let mut entries = load(path)?;
    entries.push(entry);
    entries.sort_by(|a, b| b.hits.cmp(&a.hits));
    entries.truncate(LEADERBOARD_MAX_ENTRIES);

    let serialized =
        serde_json::to_string_pretty(&entries).map_err(|err| TrainerError::LeaderboardWrite {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

    fs::write(path, serialized).map_err(|err| TrainerError::LeaderboardWrite {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Up to `n` entries in stored order (the file is already ranked at write
/// time).
pub fn load_top(path: &Path, n: usize) -> TrainerResult<Vec<LeaderboardEntry>> {
    let mut entries = load(path)?;
    entries.truncate(n);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entry(player: &str, hits: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            player: player.to_string(),
            time: "00:30.0".to_string(),
            hits,
            accuracy: 75.0,
        }
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("leaderboard.json");
        assert_eq!(load(&path).unwrap(), Vec::new());
    }

    #[test]
    fn entries_are_ranked_by_hits_and_capped_at_ten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("leaderboard.json");

        for hits in 0..12 {
            append(&path, entry(&format!("p{hits}"), hits)).unwrap();
        }

        let entries = load(&path).unwrap();
        assert_eq!(entries.len(), LEADERBOARD_MAX_ENTRIES);
        assert_eq!(entries[0].hits, 11);
        for pair in entries.windows(2) {
            assert!(pair[0].hits >= pair[1].hits, "entries must be ranked");
        }
        // The two lowest scorers fell off the end.
        assert!(entries.iter().all(|e| e.hits >= 2));
    }

    #[test]
    fn ties_keep_insertion_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("leaderboard.json");

        append(&path, entry("first", 5)).unwrap();
        append(&path, entry("second", 5)).unwrap();
        append(&path, entry("third", 5)).unwrap();

        let entries = load(&path).unwrap();
        let players: Vec<&str> = entries.iter().map(|e| e.player.as_str()).collect();
        assert_eq!(players, ["first", "second", "third"]);
    }

    #[test]
    fn load_top_returns_leading_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("leaderboard.json");

        for hits in [3, 9, 1, 7] {
            append(&path, entry(&format!("p{hits}"), hits)).unwrap();
        }

        let top = load_top(&path, 2).unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].hits, 9);
        assert_eq!(top[1].hits, 7);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("leaderboard.json");
        fs::write(&path, "{ not json ]").unwrap();

        match load(&path) {
            Err(TrainerError::LeaderboardParse { .. }) => {}
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn round_trips_through_pretty_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("leaderboard.json");

        append(&path, entry("ace", 42)).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"player\": \"ace\""), "file must be pretty-printed");
        assert_eq!(load(&path).unwrap()[0], entry("ace", 42));
    }
}
