//! Weights for the evaluation terms
//!
//! Foxes maximise, sheep minimise. Sheep terms are therefore positive when
//! a sheep is badly placed and fox terms are subtracted.

use crate::board::Coordinate;

/// Evaluation weights
pub struct Weights;

impl Weights {
    /// Sheep are pulled toward the top row, centre column
    pub const SHEEP_TARGET: Coordinate = Coordinate::new(4, 1);
    /// Foxes are pulled toward the cell below the pen
    pub const FOX_TARGET: Coordinate = Coordinate::new(4, 3);
    /// Column distance tolerated before a piece counts as stranded on a wing
    pub const COLUMN_SLACK: i32 = 2;

    /// Base of the exponential row-distance term for sheep
    pub const SHEEP_ROW_BASE: f64 = 1.1;
    /// Multiplier for a fox stranded on a wing
    pub const FOX_WING_FACTOR: f64 = 1.1;

    /// Per blocked or nonexistent jump lane through a sheep
    pub const SAFE_ANGLE: f64 = 0.01;

    /// Per sheep captured
    pub const CAPTURED_SHEEP: f64 = 3.0;
    /// Per fox eliminated
    pub const LOST_FOX: f64 = 30.0;

    /// Sheep on the top pen row
    pub const PEN_ROW_1: f64 = 2.0;
    /// Sheep on the middle pen row
    pub const PEN_ROW_2: f64 = 1.5;

    /// Decided game
    pub const WIN: f64 = 1000.0;

    pub const START_SHEEP: u32 = 20;
    pub const START_FOXES: u32 = 2;
}

/// Material balance from the fox side.
///
/// Captured sheep count for the foxes, eliminated foxes against them.
pub fn material_score(sheep: u32, foxes: u32) -> (f64, f64) {
    let captured = f64::from(Weights::START_SHEEP) - f64::from(sheep);
    let lost = f64::from(Weights::START_FOXES) - f64::from(foxes);
    (captured * Weights::CAPTURED_SHEEP, -(lost * Weights::LOST_FOX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_at_start_is_zero() {
        assert_eq!(material_score(20, 2), (0.0, 0.0));
    }

    #[test]
    fn test_material_scales_linearly() {
        assert_eq!(material_score(17, 2), (9.0, 0.0));
        assert_eq!(material_score(20, 1), (0.0, -30.0));
        assert_eq!(material_score(11, 0), (27.0, -60.0));
    }

    #[test]
    fn test_fox_loss_outweighs_single_capture() {
        let (captured, _) = material_score(19, 2);
        let (_, lost) = material_score(20, 1);
        assert!(lost.abs() > captured);
    }
}
