//! Grid snapping and wire routing for 2D schematic editors.
//!
//! Two groups of pure geometry functions:
//!
//! - [`GridSnapper`] puts points (and dragged elements, via their anchor) on a
//!   uniform grid, optionally allowing half-cell alignment per axis.
//! - [`WireRouter`] turns two endpoints and a [`RoutingMode`] into the bend
//!   points of a wire.
//!
//! ```
//! use glam::dvec2;
//! use gridroute::{CentreSnap, PlacementConfig, RoutingMode};
//!
//! let config = PlacementConfig::try_new(10.0, 2.0)?;
//! let end = config.snapper().snap_point(dvec2(97.0, 41.0), CentreSnap::NONE);
//! let route = config.router().route(dvec2(0.0, 0.0), end, RoutingMode::StraightDiagonalHybrid);
//! assert_eq!(route.to_string(), "(60, 0) -> (100, 40)");
//! # Ok::<(), gridroute::PlacementError>(())
//! ```

mod log;

pub mod config;
pub mod errors;
pub mod route;
pub mod snap;
pub mod types;

pub use config::PlacementConfig;
pub use errors::PlacementError;
pub use route::{
    RotationTarget, Route, RoutingMode, WireRouter, force_straight_line, route_wire,
    route_wire_rotated, route_wire_terminated,
};
pub use snap::{
    GridSnapper, Moveable, snap_moving_element, snap_point, snap_point_force_even, snap_scalar,
    snap_scalar_force_even,
};
pub use types::{Axis, CentreSnap, GridSize, NumericError, Point2, TerminationLength};
