//! Capture rule: a fox jumps two cells in a straight line over a sheep
//!
//! Jumps run along rows, columns and both diagonals. The sheep standing
//! on the midpoint is removed; an empty midpoint captures nothing.

use crate::board::{Board, Coordinate, Piece};
use crate::error::{BoardError, Result};

/// Direction vectors for jumps (8 directions, two cells each)
pub const JUMP_VECTORS: [(i32, i32); 8] = [
    (2, 0),
    (-2, 0),
    (0, 2),
    (0, -2),
    (2, 2),
    (-2, -2),
    (2, -2),
    (-2, 2),
];

/// Whether `from -> to` spans exactly two cells along a row, column or
/// diagonal, so that the midpoint is a whole cell.
#[inline]
pub fn is_jump_shape(from: Coordinate, to: Coordinate) -> bool {
    jump_delta(from, to).is_some()
}

/// Step from `from` to `to` if it is one of `JUMP_VECTORS`.
/// Widened to i64 so distant coordinates cannot overflow.
fn jump_delta(from: Coordinate, to: Coordinate) -> Option<(i32, i32)> {
    let dx = i64::from(to.x) - i64::from(from.x);
    let dy = i64::from(to.y) - i64::from(from.y);
    JUMP_VECTORS
        .into_iter()
        .find(|&(jx, jy)| i64::from(jx) == dx && i64::from(jy) == dy)
}

/// Cell jumped over by `from -> to`.
///
/// # Errors
/// `MalformedJump` when the endpoints do not have the jump shape.
pub fn jump_midpoint(from: Coordinate, to: Coordinate) -> Result<Coordinate> {
    let (dx, dy) = jump_delta(from, to).ok_or(BoardError::MalformedJump { from, to })?;
    Ok(from.offset(dx / 2, dy / 2))
}

/// Sheep a jump `from -> to` would capture on `board`, if any.
///
/// Only the geometry is checked here; whether a fox stands on `from` and
/// whether `to` is free is up to the caller.
pub fn get_captured_position(
    board: &Board,
    from: Coordinate,
    to: Coordinate,
) -> Result<Option<Coordinate>> {
    let mid = jump_midpoint(from, to)?;
    Ok((board.is_occupied(mid) == Piece::Sheep).then_some(mid))
}
