//! Fixed sample values shared by unit, integration and codec tests.

use gridpoint_core::{Point, Tripoint, POINT_MAX, POINT_MIN, TRIPOINT_MAX, TRIPOINT_MIN};

/// Points covering zero, both signs and both integer extremes.
pub fn sample_points() -> Vec<Point> {
    vec![
        Point::new(0, 0),
        Point::new(1, -1),
        Point::new(-7, 12),
        Point::new(i32::MAX, 0),
        Point::new(0, i32::MIN),
        POINT_MIN,
        POINT_MAX,
    ]
}

/// Tripoints covering zero, both signs and both integer extremes.
pub fn sample_tripoints() -> Vec<Tripoint> {
    vec![
        Tripoint::new(0, 0, 0),
        Tripoint::new(1, 0, 0),
        Tripoint::new(-3, 4, -10),
        Tripoint::new(i32::MIN, i32::MAX, 0),
        Tripoint::new(0, 0, i32::MIN),
        TRIPOINT_MIN,
        TRIPOINT_MAX,
    ]
}
