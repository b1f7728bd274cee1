//! Placement configuration supplied by the embedding editor.
//!
//! Grid size and wire termination length belong to the host project. They
//! are validated once here and handed to the snapper and router, never read
//! from global state.

use crate::errors::PlacementError;
use crate::route::WireRouter;
use crate::snap::GridSnapper;
use crate::types::{GridSize, TerminationLength};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementConfig {
    pub grid_size: GridSize,
    pub termination_length: TerminationLength,
}

impl PlacementConfig {
    pub fn new(grid_size: GridSize, termination_length: TerminationLength) -> Self {
        PlacementConfig { grid_size, termination_length }
    }

    /// Validate raw values from the host project.
    pub fn try_new(grid_size: f64, termination_length: f64) -> Result<Self, PlacementError> {
        let snapper = GridSnapper::try_new(grid_size)?;
        let router = WireRouter::try_new(termination_length)?;
        Ok(PlacementConfig::new(snapper.grid_size(), router.termination_length()))
    }

    pub fn snapper(&self) -> GridSnapper {
        GridSnapper::new(self.grid_size)
    }

    pub fn router(&self) -> WireRouter {
        WireRouter::new(self.termination_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NumericError;

    #[test]
    fn try_new_accepts_valid_values() {
        let config = PlacementConfig::try_new(0.25, 0.5).unwrap();
        assert_eq!(config.grid_size.raw(), 0.25);
        assert_eq!(config.termination_length.raw(), 0.5);
        assert_eq!(config.snapper().grid_size(), config.grid_size);
        assert_eq!(config.router().termination_length(), config.termination_length);
    }

    #[test]
    fn try_new_rejects_zero_grid() {
        assert_eq!(
            PlacementConfig::try_new(0.0, 1.0),
            Err(PlacementError::InvalidGridSize { value: 0.0, reason: NumericError::Zero })
        );
    }

    #[test]
    fn try_new_rejects_negative_termination() {
        assert_eq!(
            PlacementConfig::try_new(1.0, -2.0),
            Err(PlacementError::InvalidTerminationLength {
                value: -2.0,
                reason: NumericError::Negative
            })
        );
    }
}
