//! Error types for the tournament runner

use std::path::PathBuf;

use duck_core::{DuckError, Move};
use thiserror::Error;

/// Errors that can occur while configuring or running a match
#[derive(Error, Debug)]
pub enum TournamentError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid match config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An engine answered with a move the board rejected
    #[error("engine {engine} played {mv} at ply {ply}: {source}")]
    IllegalMove {
        engine: String,
        mv: Move,
        ply: u32,
        #[source]
        source: DuckError,
    },

    /// An engine reported no move although the game was still running
    #[error("engine {engine} returned no move at ply {ply}")]
    NoMove { engine: String, ply: u32 },

    #[error("engine {engine} did not finish within {ticks} ticks at ply {ply}")]
    Stalled { engine: String, ticks: u32, ply: u32 },
}

impl TournamentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TournamentError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for tournament operations
pub type TournamentResult<T> = Result<T, TournamentError>;
