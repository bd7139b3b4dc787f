//! Heuristic evaluation function for fox and sheep positions
//!
//! This is the leaf score a game-tree search consumes. It is pure: it only
//! reads the board and never touches the change log.

use crate::board::{Board, Coordinate, Piece};
use crate::rules::Outcome;

use super::weights::{material_score, Weights};

/// Neighbour pairs on opposite sides of a sheep (E/W, S/N, SE/NW, NE/SW).
/// A fox can only jump the sheep along a lane whose two ends exist.
const SAFETY_LANES: [((i32, i32), (i32, i32)); 4] = [
    ((1, 0), (-1, 0)),
    ((0, 1), (0, -1)),
    ((1, 1), (-1, -1)),
    ((1, -1), (-1, 1)),
];

/// Evaluation split into its terms. [`Evaluation::total`] is the utility.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Evaluation {
    /// Sheep distance from the pen row, plus wing penalty
    pub sheep_position: f64,
    /// Negative: blocked or nonexistent jump lanes through sheep
    pub sheep_safety: f64,
    /// Captured sheep
    pub captured_sheep: f64,
    /// Negative: eliminated foxes
    pub lost_foxes: f64,
    /// Negative: fox distance from the pen mouth, plus wing penalty
    pub fox_position: f64,
    /// Negative: sheep already on the top two pen rows
    pub sheep_in_pen: f64,
    /// +/- `Weights::WIN` once the game is decided
    pub terminal: f64,
}

impl Evaluation {
    #[inline]
    pub fn total(&self) -> f64 {
        self.sheep_position
            + self.sheep_safety
            + self.captured_sheep
            + self.lost_foxes
            + self.fox_position
            + self.sheep_in_pen
            + self.terminal
    }
}

/// Evaluate the board from the foxes' point of view.
///
/// Returns the score broken down per term; higher totals favor the foxes.
#[must_use]
pub fn evaluate(board: &Board) -> Evaluation {
    let (captured_sheep, lost_foxes) = material_score(board.sheep_count(), board.fox_count());

    let terminal = match board.is_terminal() {
        Outcome::SheepWin => -Weights::WIN,
        Outcome::FoxWin => Weights::WIN,
        Outcome::Ongoing => 0.0,
    };

    Evaluation {
        sheep_position: evaluate_sheep_positions(board),
        sheep_safety: evaluate_sheep_safety(board),
        captured_sheep,
        lost_foxes,
        fox_position: evaluate_fox_positions(board),
        sheep_in_pen: evaluate_sheep_in_pen(board),
        terminal,
    }
}

fn evaluate_sheep_positions(board: &Board) -> f64 {
    let target = Weights::SHEEP_TARGET;
    let mut score = 0.0;

    for pos in board.sheep().iter_ones() {
        let dx = (target.x - pos.x).abs();
        if dx > Weights::COLUMN_SLACK {
            score += f64::from(dx);
        }
        score += Weights::SHEEP_ROW_BASE.powi((target.y - pos.y).abs());
    }

    score
}

/// A lane is safe when both ends are on the board and one holds a sheep,
/// or when either end is off the board.
fn evaluate_sheep_safety(board: &Board) -> f64 {
    let mut score = 0.0;

    for pos in board.sheep().iter_ones() {
        for &((ax, ay), (bx, by)) in &SAFETY_LANES {
            let a = pos.offset(ax, ay);
            let b = pos.offset(bx, by);

            let safe = match (a.is_on_board(), b.is_on_board()) {
                (true, true) => is_sheep(board, a) || is_sheep(board, b),
                _ => true,
            };
            if safe {
                score -= Weights::SAFE_ANGLE;
            }
        }
    }

    score
}

fn evaluate_fox_positions(board: &Board) -> f64 {
    let target = Weights::FOX_TARGET;
    let mut score = 0.0;

    for pos in board.foxes().iter_ones() {
        let dx = (target.x - pos.x).abs();
        if dx > Weights::COLUMN_SLACK {
            score -= f64::from(dx) * Weights::FOX_WING_FACTOR;
        }
        score -= f64::from((target.y - pos.y).abs());
    }

    score
}

fn evaluate_sheep_in_pen(board: &Board) -> f64 {
    board
        .sheep()
        .iter_ones()
        .map(|pos| match pos.y {
            1 => -Weights::PEN_ROW_1,
            2 => -Weights::PEN_ROW_2,
            _ => 0.0,
        })
        .sum()
}

#[inline]
fn is_sheep(board: &Board, pos: Coordinate) -> bool {
    board.is_occupied(pos) == Piece::Sheep
}
