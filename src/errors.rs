//! Error types with diagnostics using miette
//!
//! Every failure is reported at the call that detects it. Nothing is
//! computed once an error has been found.

use miette::Diagnostic;
use thiserror::Error;

use crate::route::RotationTarget;
use crate::types::NumericError;

/// Errors reported by snapping and routing
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum PlacementError {
    #[error("invalid grid size {value}: {reason}")]
    #[diagnostic(
        code(gridroute::config::invalid_grid_size),
        help("grid size must be finite and greater than zero")
    )]
    InvalidGridSize { value: f64, reason: NumericError },

    #[error("invalid termination length {value}: {reason}")]
    #[diagnostic(
        code(gridroute::config::invalid_termination_length),
        help("termination length must be finite and not negative")
    )]
    InvalidTerminationLength { value: f64, reason: NumericError },

    #[error("unsupported routing mode: {mode}")]
    #[diagnostic(
        code(gridroute::route::unsupported_mode),
        help("use 1 for straight-then-diagonal or 2 for orthogonal routing")
    )]
    UnsupportedMode { mode: i32 },

    #[error("rotation-constrained routing toward {target} is not implemented")]
    #[diagnostic(code(gridroute::route::not_implemented))]
    NotImplemented { target: RotationTarget },
}

impl PlacementError {
    /// True for the errors caused by a bad grid size or termination length.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            PlacementError::InvalidGridSize { .. } | PlacementError::InvalidTerminationLength { .. }
        )
    }
}
