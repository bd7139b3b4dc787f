//! Terminal-state detection
//!
//! Checked in this order:
//! 1. No foxes left: sheep win
//! 2. Fewer sheep than pen cells: foxes win
//! 3. Every pen cell occupied (by either kind): sheep win
//!
//! Fox elimination comes first, so a board without foxes is a sheep win
//! whatever the sheep count.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Coordinate, Piece, PEN_COLS, PEN_ROWS};

/// Sheep needed to fill the 3x3 pen
pub const MIN_SHEEP_FOR_PEN: u32 = 9;

/// Terminal classification of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    SheepWin,
    FoxWin,
}

impl Outcome {
    #[inline]
    pub fn is_over(self) -> bool {
        self != Outcome::Ongoing
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::Ongoing => "ongoing",
            Outcome::SheepWin => "sheep win",
            Outcome::FoxWin => "fox win",
        };
        f.write_str(text)
    }
}

/// Classify `board`
pub fn check_outcome(board: &Board) -> Outcome {
    if board.foxes().is_empty() {
        return Outcome::SheepWin;
    }
    if board.sheep_count() < MIN_SHEEP_FOR_PEN {
        return Outcome::FoxWin;
    }
    if is_pen_full(board) {
        return Outcome::SheepWin;
    }
    Outcome::Ongoing
}

/// Every pen cell holds a piece. A fox inside the pen counts as filling it.
pub fn is_pen_full(board: &Board) -> bool {
    PEN_ROWS
        .flat_map(|y| PEN_COLS.map(move |x| Coordinate::new(x, y)))
        .all(|pos| board.is_occupied(pos) != Piece::Empty)
}
