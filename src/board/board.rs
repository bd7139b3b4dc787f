//! Board structure with change tracking

use std::hash::{Hash, Hasher};

use super::bitboard::Bitboard;
use super::{Coordinate, Piece, FOX_START, GRID_SIZE};
use crate::error::{BoardError, Result};
use crate::eval::{self, Evaluation};
use crate::rules::{capture, check_outcome, Outcome};

/// Full game state: where the foxes and sheep stand, plus the cells
/// touched by the transitions applied since the change log was last cleared.
///
/// Cloning yields a fully independent board, which is how a search explores
/// sibling branches.
#[derive(Debug, Clone)]
pub struct Board {
    foxes: Bitboard,
    sheep: Bitboard,
    change_log: Vec<Coordinate>,
}

impl Board {
    /// Canonical starting layout: two foxes on the top arm, twenty sheep
    /// filling rows 4-5 and the bottom arm.
    pub fn new() -> Self {
        let foxes: Bitboard = FOX_START.into_iter().collect();

        let mut sheep = Bitboard::new();
        for y in 4..=5 {
            for x in 1..=GRID_SIZE {
                sheep.set(Coordinate::new(x, y));
            }
        }
        for y in 6..=7 {
            for x in 3..=5 {
                sheep.set(Coordinate::new(x, y));
            }
        }

        Self {
            foxes,
            sheep,
            change_log: Vec::new(),
        }
    }

    /// Build a board from arbitrary piece lists.
    ///
    /// Pieces may sit off the cross (see [`Board::validate`]) but must lie
    /// inside the grid, and no cell may hold both kinds.
    pub fn from_layout<F, S>(foxes: F, sheep: S) -> Result<Self>
    where
        F: IntoIterator<Item = Coordinate>,
        S: IntoIterator<Item = Coordinate>,
    {
        let mut board = Self {
            foxes: Bitboard::new(),
            sheep: Bitboard::new(),
            change_log: Vec::new(),
        };
        board.set_sheep(sheep)?;
        board.set_foxes(foxes)?;
        Ok(board)
    }

    #[inline]
    pub fn foxes(&self) -> &Bitboard {
        &self.foxes
    }

    #[inline]
    pub fn sheep(&self) -> &Bitboard {
        &self.sheep
    }

    #[inline]
    pub fn change_log(&self) -> &[Coordinate] {
        &self.change_log
    }

    #[inline]
    pub fn fox_count(&self) -> u32 {
        self.foxes.count()
    }

    #[inline]
    pub fn sheep_count(&self) -> u32 {
        self.sheep.count()
    }

    /// Replace every fox. Fails without touching the board if a coordinate
    /// is outside the grid or already holds a sheep.
    pub fn set_foxes<I: IntoIterator<Item = Coordinate>>(&mut self, foxes: I) -> Result<()> {
        self.foxes = collect_pieces(foxes, &self.sheep)?;
        Ok(())
    }

    /// Replace every sheep. Fails without touching the board if a coordinate
    /// is outside the grid or already holds a fox.
    pub fn set_sheep<I: IntoIterator<Item = Coordinate>>(&mut self, sheep: I) -> Result<()> {
        self.sheep = collect_pieces(sheep, &self.foxes)?;
        Ok(())
    }

    pub fn set_change_log<I: IntoIterator<Item = Coordinate>>(&mut self, log: I) -> Result<()> {
        let log: Vec<Coordinate> = log.into_iter().collect();
        if let Some(&pos) = log.iter().find(|pos| !pos.in_grid()) {
            return Err(BoardError::OutOfGrid(pos));
        }
        self.change_log = log;
        Ok(())
    }

    /// What stands on `pos`
    #[inline]
    pub fn is_occupied(&self, pos: Coordinate) -> Piece {
        if self.foxes.get(pos) {
            Piece::Fox
        } else if self.sheep.get(pos) {
            Piece::Sheep
        } else {
            Piece::Empty
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> Outcome {
        check_outcome(self)
    }

    /// Heuristic score; higher favors the foxes
    #[inline]
    pub fn utility(&self) -> f64 {
        self.evaluate().total()
    }

    /// Heuristic score split into its terms
    #[inline]
    pub fn evaluate(&self) -> Evaluation {
        eval::evaluate(self)
    }

    /// Remove the fox at `pos`, returning whether one was there
    pub fn remove_fox(&mut self, pos: Coordinate) -> bool {
        self.foxes.clear(pos)
    }

    /// Move the piece at `old` to `new`.
    ///
    /// A fox move with `is_jump` set captures whatever sheep stands halfway
    /// between the endpoints. The change log receives `old` and `new`,
    /// except that a jump continuing a non-empty log only appends `new`.
    ///
    /// Nothing happens if `old` is empty. On error the board is unchanged.
    pub fn change_position(
        &mut self,
        old: Coordinate,
        new: Coordinate,
        is_jump: bool,
    ) -> Result<()> {
        let piece = self.is_occupied(old);
        if piece == Piece::Empty {
            return Ok(());
        }

        if !new.in_grid() {
            return Err(BoardError::OutOfGrid(new));
        }

        let jump = piece == Piece::Fox && is_jump;
        let captured = if jump {
            capture::get_captured_position(self, old, new)?
        } else {
            None
        };
        let occupant = self.is_occupied(new);
        if occupant != Piece::Empty {
            return Err(BoardError::Occupied { at: new, by: occupant });
        }

        let set = if piece == Piece::Fox { &mut self.foxes } else { &mut self.sheep };
        set.clear(old);
        set.set(new);
        if let Some(victim) = captured {
            self.sheep.clear(victim);
        }

        if jump && !self.change_log.is_empty() {
            // Multi-jump continues from the previous landing cell
            self.change_log.push(new);
        } else {
            self.change_log.push(old);
            self.change_log.push(new);
        }
        Ok(())
    }

    /// Apply a transition and hand back the change log, leaving it empty.
    ///
    /// A rejected transition leaves both the board and the pending log as
    /// they were.
    pub fn update_board(
        &mut self,
        old: Coordinate,
        new: Coordinate,
        is_jump: bool,
    ) -> Result<Vec<Coordinate>> {
        self.change_position(old, new, is_jump)?;
        Ok(self.take_change_log())
    }

    /// Read and clear the change log in one step
    pub fn take_change_log(&mut self) -> Vec<Coordinate> {
        std::mem::take(&mut self.change_log)
    }

    pub fn clear_change_log(&mut self) {
        self.change_log.clear();
    }

    /// Check that every piece stands on the cross and no cell holds both
    /// kinds. Reports the first violation in row-major order.
    pub fn validate(&self) -> Result<()> {
        if let Some(pos) = self.foxes.intersection(self.sheep).iter_ones().next() {
            return Err(BoardError::Overlap(pos));
        }
        for (piece, set) in [(Piece::Fox, &self.foxes), (Piece::Sheep, &self.sheep)] {
            if let Some(at) = set.iter_ones().find(|pos| !pos.is_on_board()) {
                return Err(BoardError::OffBoard { piece, at });
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Boards are equal when they hold the same foxes and the same sheep.
/// The change log is transient and ignored.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.foxes == other.foxes && self.sheep == other.sheep
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.foxes.hash(state);
        self.sheep.hash(state);
    }
}

fn collect_pieces<I>(pieces: I, other: &Bitboard) -> Result<Bitboard>
where
    I: IntoIterator<Item = Coordinate>,
{
    let mut set = Bitboard::new();
    for pos in pieces {
        if !pos.in_grid() {
            return Err(BoardError::OutOfGrid(pos));
        }
        if other.get(pos) {
            return Err(BoardError::Overlap(pos));
        }
        set.set(pos);
    }
    Ok(set)
}
