//! Grid snapping.
//!
//! A [`GridSnapper`] maps arbitrary editor coordinates onto a uniform grid.
//! Optionally an axis may also land on the midpoint between two grid lines
//! ("centre snap"), and a forced-even variant keeps results on even multiples
//! of the grid size. Rounding is half away from zero.
//!
//! Moving elements snap through their anchor (see [`Moveable`]) rather than
//! their own position, so a pin lands on the grid even when the element's
//! origin does not.

use glam::DVec2;

use crate::errors::PlacementError;
use crate::types::{CentreSnap, GridSize, Point2};

/// Read-only view of an element being dragged around the canvas.
pub trait Moveable {
    /// The point on the element that should land on the grid.
    fn snap_point(&self) -> Point2;

    /// The element's current position.
    fn position(&self) -> Point2;

    /// The element's position when the drag began.
    fn move_start_position(&self) -> Point2;
}

/// Snaps scalars and points onto a grid of fixed spacing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSnapper {
    grid_size: GridSize,
}

impl GridSnapper {
    pub fn new(grid_size: GridSize) -> Self {
        GridSnapper { grid_size }
    }

    /// Create a snapper from a raw grid size, rejecting anything that is not
    /// finite and strictly positive.
    pub fn try_new(grid_size: f64) -> Result<Self, PlacementError> {
        GridSize::try_new(grid_size)
            .map(GridSnapper::new)
            .map_err(|reason| PlacementError::InvalidGridSize { value: grid_size, reason })
    }

    pub fn grid_size(&self) -> GridSize {
        self.grid_size
    }

    /// Nearest multiple of the grid size.
    pub fn snap_scalar(&self, v: f64) -> f64 {
        self.cells(v) * self.grid_size.raw()
    }

    /// Snap each axis independently. An axis with centre snap enabled may also
    /// land halfway between grid lines.
    pub fn snap_point(&self, p: Point2, centre: CentreSnap) -> Point2 {
        DVec2::new(self.snap_axis(p.x, centre.x), self.snap_axis(p.y, centre.y))
    }

    /// Snap to the grid, then bump an odd cell count up to the next even one.
    pub fn snap_scalar_force_even(&self, v: f64) -> f64 {
        let mut cells = self.cells(v);
        if cells.rem_euclid(2.0) != 0.0 {
            cells += 1.0;
        }
        cells * self.grid_size.raw()
    }

    pub fn snap_point_force_even(&self, p: Point2) -> Point2 {
        DVec2::new(self.snap_scalar_force_even(p.x), self.snap_scalar_force_even(p.y))
    }

    /// New position for `element` after being dragged by `drag_offset` from
    /// where the drag started, chosen so the element's snap point is on the grid.
    pub fn snap_moving_element<M: Moveable + ?Sized>(
        &self,
        element: &M,
        drag_offset: Point2,
        centre: CentreSnap,
    ) -> Point2 {
        let anchor_local = element.snap_point() - element.position();
        self.snap_anchor(element.move_start_position() + drag_offset, anchor_local, centre)
    }

    /// Snap `centre + anchor_local` to the grid and return the matching centre.
    pub fn snap_anchor(&self, centre: Point2, anchor_local: Point2, snap: CentreSnap) -> Point2 {
        let anchor = centre + anchor_local;
        let snapped = self.snap_point(anchor, snap);
        crate::log::debug!(
            anchor_x = anchor.x,
            anchor_y = anchor.y,
            snapped_x = snapped.x,
            snapped_y = snapped.y,
            "snap anchor"
        );
        snapped - anchor_local
    }

    fn snap_axis(&self, v: f64, allow_centre: bool) -> f64 {
        if allow_centre {
            self.snap_scalar(v * 2.0) / 2.0
        } else {
            self.snap_scalar(v)
        }
    }

    /// Whole number of grid cells nearest to `v`.
    #[inline]
    fn cells(&self, v: f64) -> f64 {
        (v / self.grid_size.raw()).round()
    }
}

/// Snap a scalar onto a grid of spacing `grid_size`.
pub fn snap_scalar(v: f64, grid_size: f64) -> Result<f64, PlacementError> {
    Ok(GridSnapper::try_new(grid_size)?.snap_scalar(v))
}

/// Snap a point onto a grid of spacing `grid_size`, with optional per-axis
/// centre snapping.
pub fn snap_point(p: Point2, grid_size: f64, centre: CentreSnap) -> Result<Point2, PlacementError> {
    Ok(GridSnapper::try_new(grid_size)?.snap_point(p, centre))
}

pub fn snap_scalar_force_even(v: f64, grid_size: f64) -> Result<f64, PlacementError> {
    Ok(GridSnapper::try_new(grid_size)?.snap_scalar_force_even(v))
}

pub fn snap_point_force_even(p: Point2, grid_size: f64) -> Result<Point2, PlacementError> {
    Ok(GridSnapper::try_new(grid_size)?.snap_point_force_even(p))
}

/// Snap a dragged element so its anchor lands on the grid. See
/// [`GridSnapper::snap_moving_element`].
pub fn snap_moving_element<M: Moveable + ?Sized>(
    element: &M,
    drag_offset: Point2,
    centre: CentreSnap,
    grid_size: f64,
) -> Result<Point2, PlacementError> {
    Ok(GridSnapper::try_new(grid_size)?.snap_moving_element(element, drag_offset, centre))
}
