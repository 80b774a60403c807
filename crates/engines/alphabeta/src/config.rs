use serde::{Deserialize, Serialize};

/// Settings for [`AlphaBetaEngine`](crate::AlphaBetaEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlphaBetaConfig {
    /// Search depth in plies. Piece plies and duck plies count alike.
    pub depth: u8,
}

impl Default for AlphaBetaConfig {
    fn default() -> Self {
        Self { depth: 3 }
    }
}
