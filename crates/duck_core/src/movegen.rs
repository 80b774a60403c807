use crate::board::{castle_rook_squares, king_home, Board};
use crate::moves::{Move, MoveKind};
use crate::types::*;

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Generate all legal moves for the current phase into a fresh vector.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    generate_into(board, &mut out);
    out
}

/// Append every legal move for the current phase to `out`.
///
/// There is no check in duck chess, so piece moves need no king-safety filter:
/// leaving the king en prise just lets the opponent take it.
pub fn generate_into(board: &Board, out: &mut Vec<Move>) {
    if board.is_game_over() {
        return;
    }
    if board.is_duck_turn() {
        gen_duck(board, out);
        return;
    }

    let c = board.turn();
    for &from in board.pieces(c, PieceKind::Pawn).squares() {
        gen_pawn(board, from, c, out);
    }
    for &from in board.pieces(c, PieceKind::Knight).squares() {
        gen_steps(board, from, c, out, &KNIGHT_DELTAS);
    }
    for &from in board.pieces(c, PieceKind::Bishop).squares() {
        gen_slider(board, from, c, out, &DIAGONALS);
    }
    for &from in board.pieces(c, PieceKind::Rook).squares() {
        gen_slider(board, from, c, out, &ORTHOGONALS);
    }
    for &from in board.pieces(c, PieceKind::Queen).squares() {
        gen_slider(board, from, c, out, &DIAGONALS);
        gen_slider(board, from, c, out, &ORTHOGONALS);
    }
    if let Some(from) = board.king_square(c) {
        gen_steps(board, from, c, out, &KING_DELTAS);
        gen_castle(board, from, c, out);
    }
}

fn gen_duck(board: &Board, out: &mut Vec<Move>) {
    let from = board.duck_square();
    for to in 0..64u8 {
        if board.piece_at(to).is_empty() {
            out.push(Move::duck(from, to));
        }
    }
}

fn push_promotions(from: Square, to: Square, captured: Piece, out: &mut Vec<Move>) {
    for piece in PieceKind::PROMOTIONS {
        out.push(Move::new(from, to, MoveKind::Promotion { piece, captured }));
    }
}

fn gen_pawn(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = row_of(from);
    let dir = c.pawn_dir();
    let promo_row = c.promotion_row();

    // forward 1
    if let Some(to) = sq(f, r + dir) {
        if board.piece_at(to).is_empty() {
            if row_of(to) == promo_row {
                push_promotions(from, to, Piece::EMPTY, out);
            } else {
                out.push(Move::quiet(from, to));
            }

            // forward 2 from start
            if r == c.pawn_start_row() {
                if let Some(to2) = sq(f, r + 2 * dir) {
                    if board.piece_at(to2).is_empty() {
                        out.push(Move::new(from, to2, MoveKind::PawnDouble));
                    }
                }
            }
        }
    }

    // captures + en-passant
    for df in [-1, 1] {
        let Some(to) = sq(f + df, r + dir) else {
            continue;
        };
        let target = board.piece_at(to);
        if target.is_enemy_of(c) {
            if row_of(to) == promo_row {
                push_promotions(from, to, target, out);
            } else {
                out.push(Move::onto(from, to, target));
            }
        } else if target.is_empty()
            && r == c.en_passant_row()
            && board.en_passant() == Some(to)
            && sq(f + df, r).is_some_and(|v| board.piece_at(v).is(PieceKind::Pawn, c.other()))
        {
            // A duck parked on the skipped square makes `target` non-empty and blocks this.
            out.push(Move::new(from, to, MoveKind::EnPassant));
        }
    }
}

/// Knight and king single steps.
fn gen_steps(board: &Board, from: Square, c: Color, out: &mut Vec<Move>, deltas: &[(i8, i8)]) {
    let f = file_of(from);
    let r = row_of(from);
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            let target = board.piece_at(to);
            if target.is_empty() || target.is_enemy_of(c) {
                out.push(Move::onto(from, to, target));
            }
        }
    }
}

/// Rays stop at the first occupied square; it is included only when it holds an enemy.
/// The duck is neither empty nor an enemy, so it ends a ray exclusively.
fn gen_slider(board: &Board, from: Square, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    let f0 = file_of(from);
    let r0 = row_of(from);
    for (df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            let target = board.piece_at(to);
            if target.is_empty() {
                out.push(Move::quiet(from, to));
            } else {
                if target.is_enemy_of(c) {
                    out.push(Move::onto(from, to, target));
                }
                break;
            }
            f += df;
            r += dr;
        }
    }
}

/// Castling needs the right, the king and rook on their home squares and empty squares
/// between them. Attacked squares are irrelevant without check.
fn gen_castle(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    let home = king_home(c);
    if from != home {
        return;
    }
    let rights = board.castling();
    let rook = Piece::new(PieceKind::Rook, c);
    let empty = |squares: &[Square]| squares.iter().all(|&s| board.piece_at(s).is_empty());

    if rights.kingside(c) {
        let to = home + 2;
        if let Some((rook_from, _)) = castle_rook_squares(to) {
            if board.piece_at(rook_from) == rook && empty(&[home + 1, home + 2]) {
                out.push(Move::new(from, to, MoveKind::Castle));
            }
        }
    }
    if rights.queenside(c) {
        let to = home - 2;
        if let Some((rook_from, _)) = castle_rook_squares(to) {
            if board.piece_at(rook_from) == rook && empty(&[home - 1, home - 2, home - 3]) {
                out.push(Move::new(from, to, MoveKind::Castle));
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
