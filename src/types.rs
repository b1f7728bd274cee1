//! Strongly-typed primitives for snapping and routing.
//!
//! Points are plain `glam::DVec2` values. The scalar parameters supplied by
//! the embedding editor (grid size, termination length) are validated
//! newtypes, so once constructed every geometric operation is infallible.

use std::fmt;

use glam::DVec2;

/// A 2D point (or offset) in editor coordinates.
pub type Point2 = DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Spacing between adjacent grid lines. Always finite and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct GridSize(f64);

impl GridSize {
    /// Create a GridSize with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(val: f64) -> Result<Self, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else if val == 0.0 {
            Err(NumericError::Zero)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(GridSize(val))
        }
    }

    /// Get the raw value
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Length of the straight run reserved at each end of a terminated wire.
/// Always finite and non-negative.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct TerminationLength(f64);

impl TerminationLength {
    pub const ZERO: TerminationLength = TerminationLength(0.0);

    /// Create a non-negative TerminationLength with validation
    pub fn try_new(val: f64) -> Result<Self, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(TerminationLength(val))
        }
    }

    /// Get the raw value
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for TerminationLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-axis permission to snap onto the midpoint between grid lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CentreSnap {
    pub x: bool,
    pub y: bool,
}

impl CentreSnap {
    pub const NONE: CentreSnap = CentreSnap { x: false, y: false };
    pub const X: CentreSnap = CentreSnap { x: true, y: false };
    pub const Y: CentreSnap = CentreSnap { x: false, y: true };
    pub const BOTH: CentreSnap = CentreSnap { x: true, y: true };

    pub fn new(x: bool, y: bool) -> Self {
        CentreSnap { x, y }
    }
}

/// The axis a route travels along first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Classify an offset: horizontal when `|dx| > |dy|`, otherwise vertical.
    /// Ties (including the zero offset) are vertical.
    pub fn dominant(offset: DVec2) -> Axis {
        if offset.x.abs() > offset.y.abs() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    /// Component of `v` along this axis.
    #[inline]
    pub fn along(self, v: DVec2) -> f64 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }

    /// Component of `v` across this axis.
    #[inline]
    pub fn across(self, v: DVec2) -> f64 {
        match self {
            Axis::Horizontal => v.y,
            Axis::Vertical => v.x,
        }
    }

    /// Build a point from its along/across components.
    #[inline]
    pub fn compose(self, along: f64, across: f64) -> DVec2 {
        match self {
            Axis::Horizontal => DVec2::new(along, across),
            Axis::Vertical => DVec2::new(across, along),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    // ==================== GridSize tests ====================

    #[test]
    fn grid_size_try_new_valid() {
        assert!(GridSize::try_new(10.0).is_ok());
        assert!(GridSize::try_new(0.125).is_ok());
    }

    #[test]
    fn grid_size_try_new_rejects_zero() {
        assert_eq!(GridSize::try_new(0.0), Err(NumericError::Zero));
        assert_eq!(GridSize::try_new(-0.0), Err(NumericError::Zero));
    }

    #[test]
    fn grid_size_try_new_rejects_negative() {
        assert_eq!(GridSize::try_new(-1.0), Err(NumericError::Negative));
    }

    #[test]
    fn grid_size_try_new_rejects_nan_and_infinity() {
        assert_eq!(GridSize::try_new(f64::NAN), Err(NumericError::NaN));
        assert_eq!(GridSize::try_new(f64::INFINITY), Err(NumericError::Infinite));
    }

    // ==================== TerminationLength tests ====================

    #[test]
    fn termination_length_accepts_zero() {
        assert_eq!(TerminationLength::try_new(0.0), Ok(TerminationLength::ZERO));
    }

    #[test]
    fn termination_length_rejects_negative() {
        assert_eq!(TerminationLength::try_new(-0.5), Err(NumericError::Negative));
    }

    #[test]
    fn termination_length_rejects_infinity() {
        assert_eq!(
            TerminationLength::try_new(f64::NEG_INFINITY),
            Err(NumericError::Infinite)
        );
    }

    // ==================== Axis tests ====================

    #[test]
    fn axis_dominant_prefers_larger_component() {
        assert_eq!(Axis::dominant(dvec2(10.0, 4.0)), Axis::Horizontal);
        assert_eq!(Axis::dominant(dvec2(-10.0, 4.0)), Axis::Horizontal);
        assert_eq!(Axis::dominant(dvec2(3.0, -10.0)), Axis::Vertical);
    }

    #[test]
    fn axis_dominant_tie_is_vertical() {
        assert_eq!(Axis::dominant(dvec2(5.0, 5.0)), Axis::Vertical);
        assert_eq!(Axis::dominant(DVec2::ZERO), Axis::Vertical);
    }

    #[test]
    fn axis_compose_inverts_along_across() {
        let p = dvec2(3.0, 7.0);
        for axis in [Axis::Horizontal, Axis::Vertical] {
            assert_eq!(axis.compose(axis.along(p), axis.across(p)), p);
        }
    }

    #[test]
    fn centre_snap_default_is_none() {
        assert_eq!(CentreSnap::default(), CentreSnap::NONE);
        assert_eq!(CentreSnap::new(true, false), CentreSnap::X);
    }
}
