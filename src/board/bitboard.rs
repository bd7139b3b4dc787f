//! Bitboard piece set over the 7x7 grid

use super::{Coordinate, TOTAL_CELLS};

/// Set of grid cells packed into one u64 (49 of 64 bits used).
///
/// Bit `(y - 1) * 7 + (x - 1)` stands for cell (x, y). Coordinates outside
/// the grid are never members: `get` answers false and `set` ignores them,
/// so callers that need to reject them must check `Coordinate::in_grid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self {
            bits: bits & ((1u64 << TOTAL_CELLS) - 1),
        }
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    /// Set the bit for `pos`
    #[inline]
    pub fn set(&mut self, pos: Coordinate) {
        if let Some(idx) = pos.to_index() {
            self.bits |= 1u64 << idx;
        }
    }

    /// Clear the bit for `pos`, returning whether it was set
    #[inline]
    pub fn clear(&mut self, pos: Coordinate) -> bool {
        let was_set = self.get(pos);
        if let Some(idx) = pos.to_index() {
            self.bits &= !(1u64 << idx);
        }
        was_set
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Coordinate) -> bool {
        match pos.to_index() {
            Some(idx) => (self.bits >> idx) & 1 == 1,
            None => false,
        }
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Cells present in both sets
    #[inline]
    pub fn intersection(self, other: Bitboard) -> Bitboard {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Iterate over set cells in row-major order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

impl FromIterator<Coordinate> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut board = Bitboard::new();
        for pos in iter {
            board.set(pos);
        }
        board
    }
}

impl<'a> IntoIterator for &'a Bitboard {
    type Item = Coordinate;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_ones()
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u64,
}

impl Iterator for BitboardIter {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }

        // Lowest set bit, then clear it
        let idx = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;

        Some(Coordinate::from_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}
