//! Dense square list for one (kind, color) pair.
//!
//! `squares[..len]` holds the occupied squares in no particular order and `index[s]`
//! maps a square back to its slot. Removal moves the last entry into the freed slot so
//! both add and remove are O(1).

use crate::error::DuckError;
use crate::types::{Color, PieceKind, Square};

const MAX_SLOTS: usize = 10;
const NO_SLOT: u8 = u8::MAX;

#[derive(Clone, Debug)]
pub struct IndexedPieceSet {
    kind: PieceKind,
    color: Color,
    squares: [Square; MAX_SLOTS],
    len: usize,
    index: [u8; 64],
}

impl IndexedPieceSet {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            squares: [0; MAX_SLOTS],
            len: 0,
            index: [NO_SLOT; 64],
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn capacity(&self) -> usize {
        self.kind.capacity()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len >= self.capacity()
    }

    pub fn contains(&self, sq: Square) -> bool {
        self.index[sq as usize] != NO_SLOT
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares[..self.len]
    }

    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.squares().iter().copied()
    }

    /// Adds `sq`. Fails instead of truncating when the set is at capacity.
    pub fn add(&mut self, sq: Square) -> Result<(), DuckError> {
        debug_assert!(!self.contains(sq), "square {sq} already in set");
        if self.is_full() {
            return Err(DuckError::CapacityOverflow {
                kind: self.kind,
                color: self.color,
                capacity: self.capacity(),
            });
        }
        self.squares[self.len] = sq;
        self.index[sq as usize] = self.len as u8;
        self.len += 1;
        Ok(())
    }

    /// Removes `sq` by swapping the last entry into its slot.
    ///
    /// Panics if `sq` is not in the set: the board keeps the sets in lockstep with the
    /// mailbox, so a miss means that invariant is already broken.
    pub fn remove(&mut self, sq: Square) {
        let slot = self.index[sq as usize];
        assert!(slot != NO_SLOT, "square {sq} not in {:?} {:?} set", self.color, self.kind);
        let slot = slot as usize;
        let last = self.len - 1;
        let moved = self.squares[last];
        self.squares[slot] = moved;
        self.index[moved as usize] = slot as u8;
        self.index[sq as usize] = NO_SLOT;
        self.len = last;
    }

    /// Relocates `from` to `to` in place, keeping the slot.
    pub fn relocate(&mut self, from: Square, to: Square) {
        let slot = self.index[from as usize];
        assert!(slot != NO_SLOT, "square {from} not in {:?} {:?} set", self.color, self.kind);
        self.index[from as usize] = NO_SLOT;
        self.index[to as usize] = slot;
        self.squares[slot as usize] = to;
    }
}

/// Two sets are equal when they hold the same squares; slot order is not observable.
impl PartialEq for IndexedPieceSet {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.color == other.color
            && self.len == other.len
            && self.iter().all(|s| other.contains(s))
    }
}

impl Eq for IndexedPieceSet {}

#[cfg(test)]
#[path = "piece_set_tests.rs"]
mod piece_set_tests;
