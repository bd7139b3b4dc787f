//! Fox and sheep board engine
//!
//! State, transitions and evaluation for the fox and geese family of games
//! played on the 33-cell cross:
//! - Two foxes start on the top arm, twenty sheep fill rows 4-7
//! - Sheep step one cell; a fox may also jump a sheep in a straight line,
//!   capturing it, and chain further jumps in the same turn
//! - Sheep win by filling the 3x3 pen at the top or eliminating every fox
//! - Foxes win once fewer than nine sheep remain
//!
//! # Architecture
//!
//! - [`board`]: coordinates, bitboard piece sets and the [`Board`] state
//! - [`rules`]: jump geometry, capture, terminal detection
//! - [`eval`]: heuristic evaluation for a game-tree search
//! - [`error`]: errors raised by malformed transitions
//!
//! Move generation and the search itself live with the caller. A search
//! clones the board for every branch it explores.
//!
//! # Quick Start
//!
//! ```
//! use foxgame::{Board, Coordinate, Outcome};
//!
//! let board = Board::new();
//! assert_eq!(board.is_terminal(), Outcome::Ongoing);
//!
//! // Explore a sheep move on a copy
//! let mut child = board.clone();
//! child
//!     .change_position(Coordinate::new(4, 4), Coordinate::new(4, 3), false)
//!     .unwrap();
//! assert_eq!(
//!     child.take_change_log(),
//!     vec![Coordinate::new(4, 4), Coordinate::new(4, 3)]
//! );
//! assert_ne!(child, board);
//!
//! println!("utility: {:.3}", child.utility());
//! ```

pub mod board;
pub mod error;
pub mod eval;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{is_position_valid, Bitboard, Board, Coordinate, Piece, GRID_SIZE};
pub use error::{BoardError, Result};
pub use eval::Evaluation;
pub use rules::Outcome;
