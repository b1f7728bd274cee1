//! Wire routing between two endpoints.
//!
//! A route is the list of vertices drawn after `prev`: zero or more bends
//! followed by `curr` itself. Every route first travels along the dominant
//! axis of `curr - prev` (see [`Axis::dominant`]) and then either cuts in at
//! 45 degrees ([`RoutingMode::StraightDiagonalHybrid`]) or turns a right
//! angle ([`RoutingMode::Orthogonal`]).
//!
//! Terminated routes additionally keep a straight stub of fixed length in
//! front of `curr`, so wires enter a component perpendicular to its edge.

use std::fmt;

use glam::DVec2;

use crate::errors::PlacementError;
use crate::types::{Axis, Point2, TerminationLength};

/// How a wire bends between its two endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoutingMode {
    /// Straight along the dominant axis, then a 45 degree run into the target.
    StraightDiagonalHybrid,
    /// Straight along the dominant axis, then a right angle into the target.
    Orthogonal,
}

impl RoutingMode {
    /// The legacy integer selector for this mode.
    pub fn raw(self) -> i32 {
        match self {
            RoutingMode::StraightDiagonalHybrid => 1,
            RoutingMode::Orthogonal => 2,
        }
    }
}

impl TryFrom<i32> for RoutingMode {
    type Error = PlacementError;

    fn try_from(mode: i32) -> Result<Self, Self::Error> {
        match mode {
            1 => Ok(RoutingMode::StraightDiagonalHybrid),
            2 => Ok(RoutingMode::Orthogonal),
            _ => Err(PlacementError::UnsupportedMode { mode }),
        }
    }
}

impl fmt::Display for RoutingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingMode::StraightDiagonalHybrid => write!(f, "diagonal"),
            RoutingMode::Orthogonal => write!(f, "orthogonal"),
        }
    }
}

/// Side of the target component a rotation-constrained wire must enter from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationTarget {
    Left,
    Right,
    Top,
    Bottom,
}

impl fmt::Display for RotationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RotationTarget::Left => "left",
            RotationTarget::Right => "right",
            RotationTarget::Top => "top",
            RotationTarget::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

/// Vertices of a routed wire, excluding the start point and ending at the target.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    points: Vec<Point2>,
}

impl Route {
    fn new(points: Vec<Point2>) -> Self {
        debug_assert!(!points.is_empty());
        Route { points }
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// The final vertex, always the `curr` the route was built for.
    pub fn end(&self) -> Point2 {
        self.points[self.points.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point2> {
        self.points.iter()
    }

    pub fn into_vec(self) -> Vec<Point2> {
        self.points
    }

    /// Full polyline as a renderer draws it: `prev` followed by every vertex.
    pub fn polyline(&self, prev: Point2) -> Vec<Point2> {
        std::iter::once(prev).chain(self.points.iter().copied()).collect()
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Point2;
    type IntoIter = std::slice::Iter<'a, Point2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for Route {
    type Item = Point2;
    type IntoIter = std::vec::IntoIter<Point2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            // Adding 0.0 turns -0.0 into 0.0.
            write!(f, "({}, {})", p.x + 0.0, p.y + 0.0)?;
        }
        Ok(())
    }
}

/// Direction of travel along an axis. Zero counts as positive.
#[inline]
fn sign(v: f64) -> f64 {
    if v >= 0.0 { 1.0 } else { -1.0 }
}

/// Routes wires, reserving `termination_length` at the ends of terminated routes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WireRouter {
    termination_length: TerminationLength,
}

impl WireRouter {
    pub fn new(termination_length: TerminationLength) -> Self {
        WireRouter { termination_length }
    }

    pub fn try_new(termination_length: f64) -> Result<Self, PlacementError> {
        TerminationLength::try_new(termination_length)
            .map(WireRouter::new)
            .map_err(|reason| PlacementError::InvalidTerminationLength {
                value: termination_length,
                reason,
            })
    }

    pub fn termination_length(&self) -> TerminationLength {
        self.termination_length
    }

    /// Two-point route: `[bend, curr]`.
    pub fn route(&self, prev: Point2, curr: Point2, mode: RoutingMode) -> Route {
        route_simple(prev, curr, mode)
    }

    /// Terminated route: `[bend1, bend2, curr]`, where `bend2 -> curr` is the
    /// straight termination stub.
    pub fn route_terminated(&self, prev: Point2, curr: Point2, mode: RoutingMode) -> Route {
        let offset = curr - prev;
        let axis = Axis::dominant(offset);
        let dir = sign(axis.along(offset));
        let stub = self.termination_length.raw() * dir;

        // Start-side stub. Not part of the returned vertices: the first drawn
        // segment prev -> bend1 already runs along the dominant axis.
        let bend0 = axis.compose(axis.along(prev) + stub, axis.across(prev));
        let bend2 = axis.compose(axis.along(curr) - stub, axis.across(curr));
        let bend1 = match mode {
            RoutingMode::StraightDiagonalHybrid => {
                let diag = axis.across(offset).abs();
                axis.compose(axis.along(bend2) - diag * dir, axis.across(prev))
            }
            RoutingMode::Orthogonal => axis.compose(axis.along(bend2), axis.across(prev)),
        };

        crate::log::debug!(
            ?axis,
            %mode,
            bend0_x = bend0.x,
            bend0_y = bend0.y,
            bend1_x = bend1.x,
            bend1_y = bend1.y,
            bend2_x = bend2.x,
            bend2_y = bend2.y,
            "terminated route"
        );
        let _ = bend0;

        Route::new(vec![bend1, bend2, curr])
    }

    /// Route that must enter the target from a particular side.
    ///
    /// Not designed yet; always returns [`PlacementError::NotImplemented`].
    pub fn route_rotated(
        &self,
        prev: Point2,
        curr: Point2,
        mode: RoutingMode,
        target: RotationTarget,
    ) -> Result<Route, PlacementError> {
        route_rotated(prev, curr, mode, target)
    }
}

fn route_simple(prev: Point2, curr: Point2, mode: RoutingMode) -> Route {
    let offset = curr - prev;
    let axis = Axis::dominant(offset);
    let bend = match mode {
        RoutingMode::StraightDiagonalHybrid => {
            let diag = offset.x.abs().min(offset.y.abs());
            let dir = sign(axis.along(offset));
            axis.compose(axis.along(curr) - diag * dir, axis.across(prev))
        }
        RoutingMode::Orthogonal => axis.compose(axis.along(curr), axis.across(prev)),
    };

    crate::log::debug!(?axis, %mode, bend_x = bend.x, bend_y = bend.y, "route");

    Route::new(vec![bend, curr])
}

/// Two-point route from `prev` to `curr`.
pub fn route_wire(prev: Point2, curr: Point2, mode: RoutingMode) -> Route {
    route_simple(prev, curr, mode)
}

/// Terminated route from `prev` to `curr` with a raw termination length.
pub fn route_wire_terminated(
    prev: Point2,
    curr: Point2,
    mode: RoutingMode,
    termination_length: f64,
) -> Result<Route, PlacementError> {
    Ok(WireRouter::try_new(termination_length)?.route_terminated(prev, curr, mode))
}

/// Rotation-constrained route. Always [`PlacementError::NotImplemented`].
pub fn route_wire_rotated(
    prev: Point2,
    curr: Point2,
    mode: RoutingMode,
    target: RotationTarget,
) -> Result<Route, PlacementError> {
    route_rotated(prev, curr, mode, target)
}

fn route_rotated(
    prev: Point2,
    curr: Point2,
    mode: RoutingMode,
    target: RotationTarget,
) -> Result<Route, PlacementError> {
    crate::log::warn!(
        prev_x = prev.x,
        prev_y = prev.y,
        curr_x = curr.x,
        curr_y = curr.y,
        %mode,
        %target,
        "rotation-constrained routing requested"
    );
    let _ = (prev, curr, mode);
    Err(PlacementError::NotImplemented { target })
}

/// Constrain `curr` to the horizontal or vertical line through `prev`,
/// dropping the smaller offset component. Ties keep the vertical component.
pub fn force_straight_line(prev: Point2, curr: Point2) -> Point2 {
    let offset = curr - prev;
    let straight = match Axis::dominant(offset) {
        Axis::Horizontal => DVec2::new(offset.x, 0.0),
        Axis::Vertical => DVec2::new(0.0, offset.y),
    };
    prev + straight
}
