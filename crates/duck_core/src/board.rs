use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::DuckError;
use crate::movegen::generate_into;
use crate::moves::{Move, MoveKind};
use crate::piece_set::IndexedPieceSet;
use crate::types::*;

/// Plies without a capture or pawn move after which the game is drawn.
/// Duck plies count, so this is fifty full turns.
pub const DRAW_PLY_LIMIT: u32 = 200;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        wk: true,
        wq: true,
        bk: true,
        bq: true,
    };

    pub fn kingside(&self, c: Color) -> bool {
        match c {
            Color::White => self.wk,
            Color::Black => self.bk,
        }
    }

    pub fn queenside(&self, c: Color) -> bool {
        match c {
            Color::White => self.wq,
            Color::Black => self.bq,
        }
    }

    fn clear(&mut self, c: Color) {
        match c {
            Color::White => {
                self.wk = false;
                self.wq = false;
            }
            Color::Black => {
                self.bk = false;
                self.bq = false;
            }
        }
    }

    /// Drops the right tied to a rook corner, if `sq` is one.
    fn clear_corner(&mut self, sq: Square) {
        match sq {
            0 => self.wq = false,
            7 => self.wk = false,
            56 => self.bq = false,
            63 => self.bk = false,
            _ => {}
        }
    }
}

/// Home square of each color's king.
pub fn king_home(c: Color) -> Square {
    match c {
        Color::White => 4,
        Color::Black => 60,
    }
}

/// Rook (from, to) for a castling king landing on `king_to`.
pub fn castle_rook_squares(king_to: Square) -> Option<(Square, Square)> {
    match king_to {
        6 => Some((7, 5)),
        2 => Some((0, 3)),
        62 => Some((63, 61)),
        58 => Some((56, 59)),
        _ => None,
    }
}

/// Everything needed to reverse one [`Board::make_move`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Undo {
    pub mv: Move,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    game_over: bool,
    winner: Option<Color>,
    /// Board ply right after the move was made.
    ply: u32,
}

impl Undo {
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Event counter as it stood before the move.
    pub fn previous_halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }
}

/// A duck chess position.
///
/// The mailbox and the per-(color, kind) piece sets always describe the same pieces;
/// every mutation goes through [`Board::make_move`] / [`Board::unmake_move`] (or the
/// [`BoardBuilder`]) which update both together.
#[derive(Clone, Debug)]
pub struct Board {
    squares: [Piece; 64],
    sets: [[IndexedPieceSet; 6]; 2],
    kings: [Option<Square>; 2],
    duck: Option<Square>,
    turn: Color,
    duck_turn: bool,
    castling: CastlingRights,
    en_passant: Option<Square>,
    ply: u32,
    halfmove_clock: u32,
    game_over: bool,
    winner: Option<Color>,
    legal_moves: Vec<Move>,
}

impl Board {
    /// Standard starting layout, white to make the first piece move, duck not yet placed.
    pub fn new() -> Self {
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let mut builder = BoardBuilder::new().castling(CastlingRights::ALL);
        for f in 0..8u8 {
            builder = builder
                .piece(8 + f, PieceKind::Pawn, Color::White)
                .piece(48 + f, PieceKind::Pawn, Color::Black)
                .piece(f, back[f as usize], Color::White)
                .piece(56 + f, back[f as usize], Color::Black);
        }
        builder.build().expect("standard layout is a valid setup")
    }

    pub fn builder() -> BoardBuilder {
        BoardBuilder::new()
    }

    fn empty() -> Self {
        Board {
            squares: [Piece::EMPTY; 64],
            sets: std::array::from_fn(|c| {
                std::array::from_fn(|k| IndexedPieceSet::new(PieceKind::COLORED[k], Color::ALL[c]))
            }),
            kings: [None; 2],
            duck: None,
            turn: Color::White,
            duck_turn: false,
            castling: CastlingRights::default(),
            en_passant: None,
            ply: 0,
            halfmove_clock: 0,
            game_over: false,
            winner: None,
            legal_moves: Vec::new(),
        }
    }

    pub fn piece_at(&self, sq: Square) -> Piece {
        self.squares[sq as usize]
    }

    pub fn squares(&self) -> &[Piece; 64] {
        &self.squares
    }

    /// Piece set for a colored kind. The duck has no set; see [`Board::duck_square`].
    pub fn pieces(&self, color: Color, kind: PieceKind) -> &IndexedPieceSet {
        &self.sets[color.idx()][kind.idx()]
    }

    /// `None` only after the king has been captured.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings[color.idx()]
    }

    /// `None` until the first duck placement.
    pub fn duck_square(&self) -> Option<Square> {
        self.duck
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    /// True when the side to move must relocate the duck.
    pub fn is_duck_turn(&self) -> bool {
        self.duck_turn
    }

    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn ply(&self) -> u32 {
        self.ply
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// `None` while the game runs and for a draw.
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Cached legal moves for the current phase. Empty once the game is over.
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    pub fn is_move_legal(&self, mv: &Move) -> bool {
        self.legal_moves.contains(mv)
    }

    /// Applies `mv` after checking it against the legal move list. Nothing is mutated on
    /// failure.
    pub fn try_make_move(&mut self, mv: Move) -> Result<Undo, DuckError> {
        if !self.is_move_legal(&mv) {
            return Err(DuckError::IllegalMove(mv));
        }
        self.apply(mv)
    }

    /// Applies a move taken from [`Board::legal_moves`].
    ///
    /// Panics when handed anything else; use [`Board::try_make_move`] for untrusted input.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        assert!(self.is_move_legal(&mv), "make_move given illegal move {mv}");
        match self.apply(mv) {
            Ok(undo) => undo,
            Err(e) => panic!("make_move({mv}) failed: {e}"),
        }
    }

    /// Reverses the most recent move. `undo` must be the token returned by the last
    /// `make_move` that has not been unmade yet.
    pub fn unmake_move(&mut self, undo: Undo) -> Result<(), DuckError> {
        if undo.ply != self.ply || self.ply == 0 || !self.fits_last_move(undo.mv) {
            return Err(DuckError::UnmakeOutOfOrder {
                token_ply: undo.ply,
                board_ply: self.ply,
            });
        }

        self.ply -= 1;
        if self.duck_turn {
            self.duck_turn = false;
        } else {
            self.duck_turn = true;
            self.turn = self.turn.other();
        }

        let mv = undo.mv;
        let mover = self.turn;
        match mv.kind {
            MoveKind::Duck { first } => {
                self.squares[mv.to as usize] = Piece::EMPTY;
                if first {
                    self.duck = None;
                } else {
                    self.squares[mv.from as usize] = Piece::DUCK;
                    self.duck = Some(mv.from);
                }
            }
            MoveKind::Promotion { captured, .. } => {
                self.take(mv.to);
                self.put(mv.from, Piece::new(PieceKind::Pawn, mover))?;
                if !captured.is_empty() {
                    self.put(mv.to, captured)?;
                }
            }
            MoveKind::Castle => {
                self.shift(mv.to, mv.from);
                if let Some((rook_from, rook_to)) = castle_rook_squares(mv.to) {
                    self.shift(rook_to, rook_from);
                }
            }
            MoveKind::EnPassant => {
                self.shift(mv.to, mv.from);
                let victim = en_passant_victim(mv);
                self.put(victim, Piece::new(PieceKind::Pawn, mover.other()))?;
            }
            MoveKind::Capture(captured) => {
                self.shift(mv.to, mv.from);
                self.put(mv.to, captured)?;
            }
            MoveKind::Quiet | MoveKind::PawnDouble => self.shift(mv.to, mv.from),
        }

        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.game_over = undo.game_over;
        self.winner = undo.winner;
        self.regenerate();
        Ok(())
    }

    /// Whether the board looks like `mv` was the last move made on it. A token from
    /// another line of play with the same ply fails here before anything is mutated.
    fn fits_last_move(&self, mv: Move) -> bool {
        if mv.is_duck() {
            // after a duck ply the other side is on its piece ply
            return !self.duck_turn
                && self.duck == Some(mv.to)
                && (mv.kind == MoveKind::Duck { first: true }
                    || (mv.from != mv.to && self.piece_at(mv.from).is_empty()));
        }

        let mover = self.turn;
        let landed = self.piece_at(mv.to);
        if !self.duck_turn || !self.piece_at(mv.from).is_empty() || landed.color() != Some(mover)
        {
            return false;
        }
        match mv.kind {
            MoveKind::Promotion { piece, .. } => landed.kind() == Some(piece),
            MoveKind::Castle => {
                landed.kind() == Some(PieceKind::King)
                    && castle_rook_squares(mv.to).is_some_and(|(rook_from, rook_to)| {
                        self.piece_at(rook_to).is(PieceKind::Rook, mover)
                            && self.piece_at(rook_from).is_empty()
                    })
            }
            MoveKind::EnPassant => {
                landed.kind() == Some(PieceKind::Pawn)
                    && self.piece_at(en_passant_victim(mv)).is_empty()
            }
            MoveKind::PawnDouble => landed.kind() == Some(PieceKind::Pawn),
            _ => true,
        }
    }

    fn apply(&mut self, mv: Move) -> Result<Undo, DuckError> {
        let undo = Undo {
            mv,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            game_over: self.game_over,
            winner: self.winner,
            ply: self.ply + 1,
        };

        if self.duck_turn {
            self.apply_duck(mv);
        } else {
            self.apply_piece(mv)?;
        }

        self.ply += 1;
        if self.duck_turn {
            self.duck_turn = false;
            self.turn = self.turn.other();
        } else {
            self.duck_turn = true;
        }
        self.refresh();
        Ok(undo)
    }

    fn apply_duck(&mut self, mv: Move) {
        if let Some(from) = self.duck {
            self.squares[from as usize] = Piece::EMPTY;
        }
        self.squares[mv.to as usize] = Piece::DUCK;
        self.duck = Some(mv.to);
        self.halfmove_clock += 1;
    }

    fn apply_piece(&mut self, mv: Move) -> Result<(), DuckError> {
        let moved = self.piece_at(mv.from);
        let (Some(kind), Some(color)) = (moved.kind(), moved.color()) else {
            panic!("no piece of the side to move on {}", square_name(mv.from));
        };

        // Check capacity up front so a failing promotion leaves the board untouched.
        if let Some(promo) = mv.promotion() {
            let set = &self.sets[color.idx()][promo.idx()];
            if set.is_full() {
                return Err(DuckError::CapacityOverflow {
                    kind: promo,
                    color,
                    capacity: set.capacity(),
                });
            }
        }

        let mut captured = mv.captured();
        match mv.kind {
            MoveKind::EnPassant => {
                captured = Some(self.take(en_passant_victim(mv)));
            }
            _ => {
                if captured.is_some() {
                    self.take(mv.to);
                }
            }
        }

        match mv.kind {
            MoveKind::Promotion { piece, .. } => {
                self.take(mv.from);
                self.put(mv.to, Piece::new(piece, color))?;
            }
            MoveKind::Castle => {
                self.shift(mv.from, mv.to);
                if let Some((rook_from, rook_to)) = castle_rook_squares(mv.to) {
                    self.shift(rook_from, rook_to);
                }
            }
            _ => self.shift(mv.from, mv.to),
        }

        if kind == PieceKind::King {
            self.castling.clear(color);
        }
        if kind == PieceKind::Rook {
            self.castling.clear_corner(mv.from);
        }
        if captured.is_some_and(|cp| cp.kind() == Some(PieceKind::Rook)) {
            self.castling.clear_corner(mv.to);
        }

        self.en_passant = match mv.kind {
            MoveKind::PawnDouble => sq(file_of(mv.from), (row_of(mv.from) + row_of(mv.to)) / 2),
            _ => None,
        };

        self.halfmove_clock = if kind == PieceKind::Pawn || captured.is_some() {
            0
        } else {
            self.halfmove_clock + 1
        };

        if captured.is_some_and(|cp| cp.kind() == Some(PieceKind::King)) {
            trace!(mv = %mv, ?color, "king captured");
            self.game_over = true;
            self.winner = Some(color);
        }
        Ok(())
    }

    /// Post-move bookkeeping: draw and stalemate detection, then the legal move cache.
    fn refresh(&mut self) {
        if !self.game_over && self.halfmove_clock >= DRAW_PLY_LIMIT {
            self.game_over = true;
            self.winner = None;
        }
        self.regenerate();
        // A side with no piece move to make wins.
        if !self.game_over && !self.duck_turn && self.legal_moves.is_empty() {
            self.game_over = true;
            self.winner = Some(self.turn);
        }
    }

    fn regenerate(&mut self) {
        let mut moves = std::mem::take(&mut self.legal_moves);
        moves.clear();
        generate_into(self, &mut moves);
        self.legal_moves = moves;
    }

    /// Places a piece in the mailbox and its set.
    fn put(&mut self, sq: Square, piece: Piece) -> Result<(), DuckError> {
        debug_assert!(self.squares[sq as usize].is_empty());
        if piece.is_duck() {
            self.duck = Some(sq);
        } else if let (Some(kind), Some(color)) = (piece.kind(), piece.color()) {
            self.sets[color.idx()][kind.idx()].add(sq)?;
            if kind == PieceKind::King {
                self.kings[color.idx()] = Some(sq);
            }
        }
        self.squares[sq as usize] = piece;
        Ok(())
    }

    /// Clears a square, returning what stood there.
    fn take(&mut self, sq: Square) -> Piece {
        let piece = self.squares[sq as usize];
        if piece.is_duck() {
            self.duck = None;
        } else if let (Some(kind), Some(color)) = (piece.kind(), piece.color()) {
            self.sets[color.idx()][kind.idx()].remove(sq);
            if kind == PieceKind::King {
                self.kings[color.idx()] = None;
            }
        }
        self.squares[sq as usize] = Piece::EMPTY;
        piece
    }

    /// Moves a colored piece to an empty square.
    fn shift(&mut self, from: Square, to: Square) {
        let piece = self.squares[from as usize];
        debug_assert!(self.squares[to as usize].is_empty());
        if let (Some(kind), Some(color)) = (piece.kind(), piece.color()) {
            self.sets[color.idx()][kind.idx()].relocate(from, to);
            if kind == PieceKind::King {
                self.kings[color.idx()] = Some(to);
            }
        }
        self.squares[from as usize] = Piece::EMPTY;
        self.squares[to as usize] = piece;
    }
}

/// Square of the pawn removed by an en-passant capture: beside the start square, on
/// the target's file.
fn en_passant_victim(mv: Move) -> Square {
    mv.from - file_of(mv.from) as u8 + file_of(mv.to) as u8
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Field-for-field comparison. Piece-set slot order and legal-move order are not
/// observable, so both are compared as sets.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        let sorted = |moves: &[Move]| {
            let mut bits: Vec<u32> = moves.iter().map(Move::to_bits).collect();
            bits.sort_unstable();
            bits
        };
        self.squares == other.squares
            && self.sets == other.sets
            && self.kings == other.kings
            && self.duck == other.duck
            && self.turn == other.turn
            && self.duck_turn == other.duck_turn
            && self.castling == other.castling
            && self.en_passant == other.en_passant
            && self.ply == other.ply
            && self.halfmove_clock == other.halfmove_clock
            && self.game_over == other.game_over
            && self.winner == other.winner
            && sorted(&self.legal_moves) == sorted(&other.legal_moves)
    }
}

impl Eq for Board {}

/// Eight rows of piece letters, row 8 first, then a status line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8u8).rev() {
            for file in 0..8u8 {
                write!(f, "{}", self.squares[(row * 8 + file) as usize].symbol())?;
            }
            writeln!(f)?;
        }
        let phase = if self.duck_turn { "duck" } else { "piece" };
        write!(f, "{:?} to move ({phase}), ply {}", self.turn, self.ply)
    }
}

/// Typed position setup.
///
/// ```
/// use duck_core::{Board, Color, PieceKind};
///
/// let board = Board::builder()
///     .piece(4, PieceKind::King, Color::White)
///     .piece(60, PieceKind::King, Color::Black)
///     .duck(27)
///     .build()
///     .unwrap();
/// assert_eq!(board.duck_square(), Some(27));
/// ```
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    squares: [Piece; 64],
    duck: Option<Square>,
    turn: Color,
    duck_turn: bool,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    ply: u32,
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self {
            squares: [Piece::EMPTY; 64],
            duck: None,
            turn: Color::White,
            duck_turn: false,
            castling: CastlingRights::default(),
            en_passant: None,
            halfmove_clock: 0,
            ply: 0,
        }
    }

    pub fn piece(mut self, sq: Square, kind: PieceKind, color: Color) -> Self {
        self.squares[sq as usize] = Piece::new(kind, color);
        self
    }

    pub fn duck(mut self, sq: Square) -> Self {
        self.duck = Some(sq);
        self
    }

    pub fn turn(mut self, color: Color) -> Self {
        self.turn = color;
        self
    }

    pub fn duck_turn(mut self, duck_turn: bool) -> Self {
        self.duck_turn = duck_turn;
        self
    }

    pub fn castling(mut self, castling: CastlingRights) -> Self {
        self.castling = castling;
        self
    }

    pub fn en_passant(mut self, sq: Option<Square>) -> Self {
        self.en_passant = sq;
        self
    }

    pub fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    pub fn ply(mut self, ply: u32) -> Self {
        self.ply = ply;
        self
    }

    pub fn build(self) -> Result<Board, DuckError> {
        let mut board = Board::empty();
        for (i, &piece) in self.squares.iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            if piece.is(PieceKind::Pawn, Color::White) || piece.is(PieceKind::Pawn, Color::Black) {
                let row = row_of(i as Square);
                if row == 0 || row == 7 {
                    return Err(DuckError::InvalidSetup(format!(
                        "pawn on back rank at {}",
                        square_name(i as Square)
                    )));
                }
            }
            board.put(i as Square, piece)?;
        }
        for color in Color::ALL {
            if board.kings[color.idx()].is_none() {
                return Err(DuckError::InvalidSetup(format!("no {color:?} king")));
            }
        }
        if let Some(d) = self.duck {
            if !board.squares[d as usize].is_empty() {
                return Err(DuckError::InvalidSetup(format!(
                    "duck square {} is occupied",
                    square_name(d)
                )));
            }
            board.put(d, Piece::DUCK)?;
        }
        if let Some(ep) = self.en_passant {
            let row = row_of(ep);
            if (row != 2 && row != 5) || !board.squares[ep as usize].is_empty() {
                return Err(DuckError::InvalidSetup(format!(
                    "bad en-passant square {}",
                    square_name(ep)
                )));
            }
        }

        board.turn = self.turn;
        board.duck_turn = self.duck_turn;
        board.castling = self.castling;
        board.en_passant = self.en_passant;
        board.halfmove_clock = self.halfmove_clock;
        board.ply = self.ply;
        board.refresh();
        Ok(board)
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
