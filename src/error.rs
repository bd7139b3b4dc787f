//! Error type for board mutations
//!
//! Moving a coordinate that holds no piece is not an error; the board
//! silently ignores it. The variants below are caller bugs that would
//! otherwise corrupt the board invariants.

use thiserror::Error;

use crate::board::{Coordinate, Piece};

pub type Result<T, E = BoardError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Coordinate cannot be stored: it lies outside the 7x7 grid
    #[error("coordinate {0} lies outside the 7x7 grid")]
    OutOfGrid(Coordinate),
    /// Piece sits inside the grid but off the cross-shaped board
    #[error("{piece} at {at} is off the cross-shaped board")]
    OffBoard { piece: Piece, at: Coordinate },
    /// Destination of a move already holds a piece
    #[error("cannot move to {at}: occupied by {by}")]
    Occupied { at: Coordinate, by: Piece },
    /// Same coordinate appears in both the fox and the sheep set
    #[error("{0} holds both a fox and a sheep")]
    Overlap(Coordinate),
    /// Jump endpoints are not two cells apart on a straight line
    #[error("malformed jump {from} -> {to}: endpoints must be two cells apart in a straight line")]
    MalformedJump { from: Coordinate, to: Coordinate },
}
