//! Board representation for the fox and sheep game

pub mod bitboard;
pub mod board;


use std::fmt;

use serde::{Deserialize, Serialize};

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Side length of the square grid the cross is cut from (1-indexed)
pub const GRID_SIZE: i32 = 7;
pub const TOTAL_CELLS: usize = (GRID_SIZE * GRID_SIZE) as usize; // 49

/// Pen columns and rows (inclusive)
pub const PEN_COLS: std::ops::RangeInclusive<i32> = 3..=5;
pub const PEN_ROWS: std::ops::RangeInclusive<i32> = 1..=3;

/// Starting squares of the two foxes
pub const FOX_START: [Coordinate; 2] = [Coordinate::new(3, 1), Coordinate::new(5, 1)];

/// Check whether (x, y) is a cell of the cross-shaped board.
///
/// Rows 1-2 and 6-7 are three cells wide (columns 3-5); rows 3-5 span
/// the full width.
#[inline]
pub fn is_position_valid(x: i32, y: i32) -> bool {
    match y {
        1 | 2 | 6 | 7 => (3..=5).contains(&x),
        3..=5 => (1..=GRID_SIZE).contains(&x),
        _ => false,
    }
}

/// Piece kinds (and the empty cell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    Empty,
    Fox,
    Sheep,
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Piece::Empty => "empty",
            Piece::Fox => "fox",
            Piece::Sheep => "sheep",
        };
        f.write_str(name)
    }
}

/// A cell address: column `x`, row `y`.
///
/// Carries no validation of its own. Whether a coordinate is on the board
/// is decided by [`is_position_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(self) -> i32 {
        self.y
    }

    /// Translate by (dx, dy); the result may lie anywhere
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Inside the 7x7 storage grid (not necessarily on the cross)
    #[inline]
    pub fn in_grid(self) -> bool {
        (1..=GRID_SIZE).contains(&self.x) && (1..=GRID_SIZE).contains(&self.y)
    }

    /// On the cross-shaped board
    #[inline]
    pub fn is_on_board(self) -> bool {
        is_position_valid(self.x, self.y)
    }

    /// Bit index inside the grid, `None` outside it
    #[inline]
    pub fn to_index(self) -> Option<usize> {
        if self.in_grid() {
            Some(((self.y - 1) * GRID_SIZE + (self.x - 1)) as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        debug_assert!(idx < TOTAL_CELLS);
        let idx = idx as i32;
        Self {
            x: idx % GRID_SIZE + 1,
            y: idx / GRID_SIZE + 1,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coordinate {
    /// Row-major, matching bitboard iteration order
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
