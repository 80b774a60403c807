//! Move representation.
//!
//! A [`Move`] is a start square, a target square and a [`MoveKind`]. The kind carries
//! whatever the board needs to undo the move without consulting history, including the
//! captured piece. [`Move::to_bits`] packs the same information into 21 bits:
//!
//! ```text
//! bits  0..6   start square
//! bits  6..12  target square
//! bits 12..16  flag
//! bits 16..21  captured piece tag
//! ```

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::types::{square_name, Piece, PieceKind, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Quiet,
    Capture(Piece),
    /// Pawn takes the pawn beside it, landing on the skipped square.
    EnPassant,
    /// King move of two files; the rook is relocated alongside.
    Castle,
    /// `captured` is [`Piece::EMPTY`] for a straight push.
    Promotion { piece: PieceKind, captured: Piece },
    PawnDouble,
    /// Duck relocation. `first` marks the placement that brings the duck onto the board,
    /// in which case the start square is meaningless (always 0).
    Duck { first: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

const FLAG_NONE: u32 = 0;
const FLAG_EN_PASSANT: u32 = 1;
const FLAG_CASTLE: u32 = 2;
const FLAG_PROMO_QUEEN: u32 = 3;
const FLAG_PROMO_KNIGHT: u32 = 4;
const FLAG_PROMO_ROOK: u32 = 5;
const FLAG_PROMO_BISHOP: u32 = 6;
const FLAG_PAWN_DOUBLE: u32 = 7;
const FLAG_DUCK_FIRST: u32 = 8;
const FLAG_DUCK: u32 = 9;
/// Packed for promotions to a kind no pawn may become; [`Move::from_bits`] rejects it.
const FLAG_INVALID: u32 = 15;

impl Move {
    /// Never produced by the generator; stands for "no move".
    pub const NULL: Move = Move {
        from: 0,
        to: 0,
        kind: MoveKind::Quiet,
    };

    pub fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Self { from, to, kind }
    }

    pub fn quiet(from: Square, to: Square) -> Self {
        Self::new(from, to, MoveKind::Quiet)
    }

    /// Quiet or capture depending on what sits on `to`.
    pub fn onto(from: Square, to: Square, target: Piece) -> Self {
        if target.is_empty() {
            Self::quiet(from, to)
        } else {
            Self::new(from, to, MoveKind::Capture(target))
        }
    }

    pub fn duck(from: Option<Square>, to: Square) -> Self {
        match from {
            Some(from) => Self::new(from, to, MoveKind::Duck { first: false }),
            None => Self::new(0, to, MoveKind::Duck { first: true }),
        }
    }

    pub fn is_null(&self) -> bool {
        *self == Move::NULL
    }

    pub fn is_duck(&self) -> bool {
        matches!(self.kind, MoveKind::Duck { .. })
    }

    pub fn promotion(&self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion { piece, .. } => Some(piece),
            _ => None,
        }
    }

    /// Piece removed from the target square, if any. En-passant victims do not stand on
    /// the target square and are not reported here.
    pub fn captured(&self) -> Option<Piece> {
        match self.kind {
            MoveKind::Capture(p) => Some(p),
            MoveKind::Promotion { captured, .. } if !captured.is_empty() => Some(captured),
            _ => None,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured().is_some() || self.kind == MoveKind::EnPassant
    }

    pub fn to_bits(&self) -> u32 {
        let (flag, captured) = match self.kind {
            MoveKind::Quiet => (FLAG_NONE, Piece::EMPTY),
            MoveKind::Capture(p) => (FLAG_NONE, p),
            MoveKind::EnPassant => (FLAG_EN_PASSANT, Piece::EMPTY),
            MoveKind::Castle => (FLAG_CASTLE, Piece::EMPTY),
            MoveKind::Promotion { piece, captured } => {
                let flag = match piece {
                    PieceKind::Knight => FLAG_PROMO_KNIGHT,
                    PieceKind::Rook => FLAG_PROMO_ROOK,
                    PieceKind::Bishop => FLAG_PROMO_BISHOP,
                    PieceKind::Queen => FLAG_PROMO_QUEEN,
                    PieceKind::King | PieceKind::Pawn | PieceKind::Duck => FLAG_INVALID,
                };
                (flag, captured)
            }
            MoveKind::PawnDouble => (FLAG_PAWN_DOUBLE, Piece::EMPTY),
            MoveKind::Duck { first: true } => (FLAG_DUCK_FIRST, Piece::EMPTY),
            MoveKind::Duck { first: false } => (FLAG_DUCK, Piece::EMPTY),
        };
        (self.from as u32 & 0x3f)
            | ((self.to as u32 & 0x3f) << 6)
            | (flag << 12)
            | ((captured.bits() as u32) << 16)
    }

    /// Inverse of [`Move::to_bits`]. Returns `None` for values no move packs into.
    pub fn from_bits(bits: u32) -> Option<Move> {
        if bits >> 21 != 0 {
            return None;
        }
        let from = (bits & 0x3f) as Square;
        let to = ((bits >> 6) & 0x3f) as Square;
        let flag = (bits >> 12) & 0xf;
        let captured = Piece::from_bits(((bits >> 16) & 0x1f) as u8)?;
        if captured.is_duck() {
            return None;
        }
        let plain = |kind: MoveKind| captured.is_empty().then_some(kind);
        let promo = |piece: PieceKind| Some(MoveKind::Promotion { piece, captured });
        let kind = match flag {
            FLAG_NONE if captured.is_empty() => Some(MoveKind::Quiet),
            FLAG_NONE => Some(MoveKind::Capture(captured)),
            FLAG_EN_PASSANT => plain(MoveKind::EnPassant),
            FLAG_CASTLE => plain(MoveKind::Castle),
            FLAG_PROMO_QUEEN => promo(PieceKind::Queen),
            FLAG_PROMO_KNIGHT => promo(PieceKind::Knight),
            FLAG_PROMO_ROOK => promo(PieceKind::Rook),
            FLAG_PROMO_BISHOP => promo(PieceKind::Bishop),
            FLAG_PAWN_DOUBLE => plain(MoveKind::PawnDouble),
            FLAG_DUCK_FIRST if from == 0 => plain(MoveKind::Duck { first: true }),
            FLAG_DUCK => plain(MoveKind::Duck { first: false }),
            _ => None,
        }?;
        Some(Move { from, to, kind })
    }
}

/// Coordinate notation: `e2e4`, `e7e8q`, and `@d5` for the duck.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str("0000");
        }
        if self.is_duck() {
            return write!(f, "@{}", square_name(self.to));
        }
        write!(f, "{}{}", square_name(self.from), square_name(self.to))?;
        if let Some(p) = self.promotion() {
            write!(f, "{}", p.letter())?;
        }
        Ok(())
    }
}

impl Serialize for Move {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.to_bits())
    }
}

impl<'de> Deserialize<'de> for Move {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u32::deserialize(deserializer)?;
        Move::from_bits(bits)
            .ok_or_else(|| de::Error::custom(format!("invalid packed move {bits:#x}")))
    }
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
