//! Piece encoding and square helpers.
//!
//! A [`Piece`] is a single byte: the low three bits hold the [`PieceKind`] tag and the
//! next two bits hold the [`Color`]. Empty squares and the duck both carry no color;
//! the kind tag tells them apart.

use serde::{Deserialize, Serialize};

/// Board square, `0..64`. Row is `sq / 8`, file is `sq % 8`.
pub type Square = u8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Color bits as stored inside a [`Piece`].
    pub const fn bits(self) -> u8 {
        match self {
            Color::White => 0b01000,
            Color::Black => 0b10000,
        }
    }

    /// Row delta of a single pawn step.
    pub fn pawn_dir(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub fn pawn_start_row(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Row a pawn must stand on to capture en passant.
    pub fn en_passant_row(self) -> i8 {
        match self {
            Color::White => 4,
            Color::Black => 3,
        }
    }

    pub fn promotion_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    pub fn back_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    King = 1,
    Pawn = 2,
    Knight = 3,
    Bishop = 4,
    Rook = 5,
    Queen = 6,
    Duck = 7,
}

impl PieceKind {
    /// Kinds tracked by the per-color piece sets (everything but the duck).
    pub const COLORED: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    /// Promotion targets, in generation order.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Bishop,
    ];

    /// Index into per-kind tables. Only meaningful for colored kinds.
    pub fn idx(self) -> usize {
        self as usize - 1
    }

    pub fn from_bits(bits: u8) -> Option<PieceKind> {
        match bits {
            1 => Some(PieceKind::King),
            2 => Some(PieceKind::Pawn),
            3 => Some(PieceKind::Knight),
            4 => Some(PieceKind::Bishop),
            5 => Some(PieceKind::Rook),
            6 => Some(PieceKind::Queen),
            7 => Some(PieceKind::Duck),
            _ => None,
        }
    }

    /// Most pieces of this kind one side can ever own, promotions included.
    pub fn capacity(self) -> usize {
        match self {
            PieceKind::King | PieceKind::Duck => 1,
            PieceKind::Pawn => 8,
            PieceKind::Queen => 9,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook => 10,
        }
    }

    pub fn letter(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::Duck => '@',
        }
    }
}

const KIND_MASK: u8 = 0b00111;
const COLOR_MASK: u8 = 0b11000;

/// Bit-packed `kind | color` tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    pub const EMPTY: Piece = Piece(0);
    pub const DUCK: Piece = Piece(PieceKind::Duck as u8);

    /// A colored piece. Use [`Piece::DUCK`] for the duck.
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece(kind as u8 | color.bits())
    }

    /// Decode a packed tag, rejecting combinations that cannot occur on a board.
    pub fn from_bits(bits: u8) -> Option<Piece> {
        if bits & !(KIND_MASK | COLOR_MASK) != 0 {
            return None;
        }
        let kind = bits & KIND_MASK;
        let color = bits & COLOR_MASK;
        let valid = match (kind, color) {
            (0, 0) => true,
            (7, 0) => true,
            (1..=6, c) => c == Color::White.bits() || c == Color::Black.bits(),
            _ => false,
        };
        valid.then_some(Piece(bits))
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn kind(self) -> Option<PieceKind> {
        PieceKind::from_bits(self.0 & KIND_MASK)
    }

    pub fn color(self) -> Option<Color> {
        match self.0 & COLOR_MASK {
            b if b == Color::White.bits() => Some(Color::White),
            b if b == Color::Black.bits() => Some(Color::Black),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_duck(self) -> bool {
        self == Piece::DUCK
    }

    pub fn is(self, kind: PieceKind, color: Color) -> bool {
        self == Piece::new(kind, color)
    }

    /// True for a piece that `color` may capture. Never true for the duck.
    pub fn is_enemy_of(self, color: Color) -> bool {
        self.color() == Some(color.other())
    }

    /// Letter in board-diagram form: upper case for white, `@` for the duck, `.` empty.
    pub fn symbol(self) -> char {
        match (self.kind(), self.color()) {
            (None, _) => '.',
            (Some(kind), Some(Color::White)) => kind.letter().to_ascii_uppercase(),
            (Some(kind), _) => kind.letter(),
        }
    }
}

// Helpers
pub fn file_of(sq: Square) -> i8 {
    (sq % 8) as i8
}
pub fn row_of(sq: Square) -> i8 {
    (sq / 8) as i8
}
pub fn sq(file: i8, row: i8) -> Option<Square> {
    if (0..8).contains(&file) && (0..8).contains(&row) {
        Some((row as u8) * 8 + (file as u8))
    } else {
        None
    }
}

pub fn square_name(sq: Square) -> String {
    let f = (b'a' + (sq % 8)) as char;
    let r = (b'1' + (sq / 8)) as char;
    format!("{f}{r}")
}

pub fn parse_square(c: &str) -> Option<Square> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0];
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    Some((r - b'1') * 8 + (f - b'a'))
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
