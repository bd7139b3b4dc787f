//! Evaluation module for fox and sheep positions
//!
//! The evaluation is a weighted sum of:
//! - Sheep advance toward the pen row and off the outer columns
//! - Sheep safety (jump lanes that are blocked or do not exist)
//! - Material (captured sheep, eliminated foxes)
//! - Fox centralisation near the pen mouth
//! - Sheep already standing in the pen
//! - Terminal bonus
//!
//! Higher scores favor the foxes, lower scores the sheep.

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, Evaluation};
pub use weights::{material_score, Weights};
