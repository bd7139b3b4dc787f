//! Game rules for the fox and sheep game
//!
//! This module implements:
//! - Jump geometry and the capture a fox jump performs
//! - Terminal classification (fox elimination, sheep depletion, full pen)

pub mod capture;
pub mod win;

// Re-exports for convenient access
pub use capture::{get_captured_position, is_jump_shape, jump_midpoint};
pub use win::{check_outcome, is_pen_full, Outcome, MIN_SHEEP_FOR_PEN};
