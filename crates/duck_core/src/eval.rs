//! Material evaluation.

use crate::board::Board;
use crate::types::{Color, PieceKind};

/// Score of a won game. Losses score its negation so `evaluate` stays antisymmetric.
pub const WIN_SCORE: i32 = i32::MAX;
pub const LOSS_SCORE: i32 = -i32::MAX;

/// Material values in centipawns. Kings only leave the board in finished games, so
/// their value never moves a running score; it cancels out.
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 300,
        PieceKind::Bishop => 300,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20_000,
        PieceKind::Duck => 0,
    }
}

/// Evaluates the position from `perspective`'s point of view.
///
/// Finished games score [`WIN_SCORE`], [`LOSS_SCORE`] or 0 for a draw. Otherwise the
/// score is own material minus enemy material; the duck counts for nobody.
pub fn evaluate(board: &Board, perspective: Color) -> i32 {
    if board.is_game_over() {
        return match board.winner() {
            Some(c) if c == perspective => WIN_SCORE,
            Some(_) => LOSS_SCORE,
            None => 0,
        };
    }

    let mut score = 0i32;
    for kind in PieceKind::COLORED {
        let value = piece_value(kind);
        let own = board.pieces(perspective, kind).len() as i32;
        let theirs = board.pieces(perspective.other(), kind).len() as i32;
        score += value * (own - theirs);
    }
    score
}

/// Win/draw/loss estimate in `{-1, 0, 1}` for `perspective`.
pub fn outcome_sign(board: &Board, perspective: Color) -> i32 {
    evaluate(board, perspective).signum()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
