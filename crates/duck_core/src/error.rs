use thiserror::Error;

use crate::moves::Move;
use crate::types::{Color, PieceKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DuckError {
    /// The move is not in the board's legal list for the current phase.
    #[error("illegal move {0}")]
    IllegalMove(Move),

    #[error("too many {color:?} {kind:?} pieces (capacity {capacity})")]
    CapacityOverflow {
        kind: PieceKind,
        color: Color,
        capacity: usize,
    },

    /// An undo token was replayed against a board whose last ply is not the one it records.
    #[error("unmake out of order: token is for ply {token_ply}, board is at ply {board_ply}")]
    UnmakeOutOfOrder { token_ply: u32, board_ply: u32 },

    #[error("invalid setup: {0}")]
    InvalidSetup(String),
}
