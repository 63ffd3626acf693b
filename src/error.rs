//! Error types for the persistence layer.
//!
//! The leaderboard and heatmap functions propagate failures through these
//! types instead of panicking; the systems that call them decide whether to
//! log and continue or abort.  A missing leaderboard file is *not* an error
//! ([`crate::leaderboard::load`] returns an empty list for it), but a file
//! that exists and cannot be read or parsed is surfaced, since silently
//! discarding a corrupt leaderboard would lose player data.

use std::fmt;
use std::path::PathBuf;

/// Top-level error enum for the aim trainer.
#[derive(Debug)]
pub enum TrainerError {
    /// Leaderboard storage exists but could not be read.
    LeaderboardRead {
        /// File the read was attempted on.
        path: PathBuf,
        /// Underlying I/O error text.
        message: String,
    },

    /// Leaderboard storage was read but is not valid JSON for the expected
    /// entry shape.
    LeaderboardParse {
        path: PathBuf,
        message: String,
    },

    /// Updated leaderboard could not be written back.
    LeaderboardWrite {
        path: PathBuf,
        message: String,
    },

    /// Heatmap image could not be encoded or saved.
    HeatmapSave {
        path: PathBuf,
        message: String,
    },
}

impl fmt::Display for TrainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainerError::LeaderboardRead { path, message } => {
                write!(f, "failed to read leaderboard {}: {}", path.display(), message)
            }
            TrainerError::LeaderboardParse { path, message } => {
                write!(f, "failed to parse leaderboard {}: {}", path.display(), message)
            }
            TrainerError::LeaderboardWrite { path, message } => {
                write!(f, "failed to write leaderboard {}: {}", path.display(), message)
            }
            TrainerError::HeatmapSave { path, message } => {
                write!(f, "failed to save heatmap {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for TrainerError {}

/// Convenience alias: a `Result` using `TrainerError` as the error type.
pub type TrainerResult<T> = Result<T, TrainerError>;
