//! End-to-end editor interactions through the public API.

use glam::dvec2;
use gridroute::{
    CentreSnap, Moveable, PlacementConfig, PlacementError, Point2, RoutingMode,
    force_straight_line, route_wire, snap_moving_element, snap_point, snap_scalar,
};

struct Pin {
    chip_position: Point2,
    offset: Point2,
    drag_start: Point2,
}

impl Moveable for Pin {
    fn snap_point(&self) -> Point2 {
        self.chip_position + self.offset
    }

    fn position(&self) -> Point2 {
        self.chip_position
    }

    fn move_start_position(&self) -> Point2 {
        self.drag_start
    }
}

#[test]
fn snap_to_grid_rounds_to_nearest_line() {
    assert_eq!(snap_point(dvec2(7.0, 7.0), 10.0, CentreSnap::NONE), Ok(dvec2(10.0, 10.0)));
    assert_eq!(snap_point(dvec2(4.0, 4.0), 10.0, CentreSnap::NONE), Ok(dvec2(0.0, 0.0)));
}

#[test]
fn routes_from_origin() {
    let diagonal = route_wire(dvec2(0.0, 0.0), dvec2(10.0, 4.0), RoutingMode::StraightDiagonalHybrid);
    insta::assert_snapshot!(diagonal, @"(6, 0) -> (10, 4)");

    let orthogonal = route_wire(dvec2(0.0, 0.0), dvec2(10.0, 4.0), RoutingMode::Orthogonal);
    insta::assert_snapshot!(orthogonal, @"(10, 0) -> (10, 4)");
}

#[test]
fn straight_line_drops_minor_axis() {
    assert_eq!(force_straight_line(dvec2(0.0, 0.0), dvec2(5.0, 2.0)), dvec2(5.0, 0.0));
}

#[test]
fn zero_grid_size_is_rejected() {
    let err = snap_scalar(12.0, 0.0).unwrap_err();
    assert!(err.is_invalid_configuration());
    assert!(matches!(err, PlacementError::InvalidGridSize { value, .. } if value == 0.0));
}

#[test]
fn drag_chip_then_wire_to_its_pin() {
    let config = PlacementConfig::try_new(1.0, 0.5).unwrap();
    let pin = Pin {
        chip_position: dvec2(4.0, 4.0),
        offset: dvec2(-1.5, 0.0),
        drag_start: dvec2(4.0, 4.0),
    };

    // The chip origin sits on a half cell so its pin can land on a grid line.
    let new_pos = config
        .snapper()
        .snap_moving_element(&pin, dvec2(3.2, 1.9), CentreSnap::NONE);
    assert_eq!(new_pos, dvec2(7.5, 6.0));
    assert_eq!(new_pos + pin.offset, dvec2(6.0, 6.0));

    let route = config
        .router()
        .route_terminated(dvec2(0.0, 0.0), new_pos + pin.offset, RoutingMode::Orthogonal);
    insta::assert_snapshot!(route, @"(0, 5.5) -> (6, 5.5) -> (6, 6)");
}

#[test]
fn free_function_element_snap_validates_grid() {
    let pin = Pin {
        chip_position: dvec2(0.0, 0.0),
        offset: dvec2(0.0, 0.0),
        drag_start: dvec2(0.0, 0.0),
    };
    assert!(snap_moving_element(&pin, dvec2(1.0, 1.0), CentreSnap::NONE, -1.0).is_err());
    assert_eq!(
        snap_moving_element(&pin, dvec2(1.4, 1.6), CentreSnap::BOTH, 1.0),
        Ok(dvec2(1.5, 1.5))
    );
}
