//! Named sentinel values and unit offsets.
//!
//! Directions use screen orientation: north is `y - 1`, east is `x + 1`.

use crate::point::Point;
use crate::tripoint::Tripoint;

/// Tripoint with every coordinate at `i32::MIN`.
pub const TRIPOINT_MIN: Tripoint = Tripoint::new(i32::MIN, i32::MIN, i32::MIN);
/// The origin.
pub const TRIPOINT_ZERO: Tripoint = Tripoint::new(0, 0, 0);
/// Tripoint with every coordinate at `i32::MAX`.
pub const TRIPOINT_MAX: Tripoint = Tripoint::new(i32::MAX, i32::MAX, i32::MAX);

/// Point with both coordinates at `i32::MIN`.
pub const POINT_MIN: Point = TRIPOINT_MIN.xy();
/// The origin.
pub const POINT_ZERO: Point = TRIPOINT_ZERO.xy();
/// Point with both coordinates at `i32::MAX`.
pub const POINT_MAX: Point = TRIPOINT_MAX.xy();

/// Unit offset north.
pub const POINT_NORTH: Point = Point::new(0, -1);
/// Unit offset north-east.
pub const POINT_NORTH_EAST: Point = Point::new(1, -1);
/// Unit offset east.
pub const POINT_EAST: Point = Point::new(1, 0);
/// Unit offset south-east.
pub const POINT_SOUTH_EAST: Point = Point::new(1, 1);
/// Unit offset south.
pub const POINT_SOUTH: Point = Point::new(0, 1);
/// Unit offset south-west.
pub const POINT_SOUTH_WEST: Point = Point::new(-1, 1);
/// Unit offset west.
pub const POINT_WEST: Point = Point::new(-1, 0);
/// Unit offset north-west.
pub const POINT_NORTH_WEST: Point = Point::new(-1, -1);

/// The four orthogonal offsets, clockwise from north.
pub const FOUR_ADJACENT_OFFSETS: [Point; 4] = [POINT_NORTH, POINT_EAST, POINT_SOUTH, POINT_WEST];

/// The eight same-level neighbour offsets in row-major order
/// (north-west first, south-east last).
pub const EIGHT_HORIZONTAL_NEIGHBORS: [Tripoint; 8] = [
    Tripoint::new(-1, -1, 0),
    Tripoint::new(0, -1, 0),
    Tripoint::new(1, -1, 0),
    Tripoint::new(-1, 0, 0),
    Tripoint::new(1, 0, 0),
    Tripoint::new(-1, 1, 0),
    Tripoint::new(0, 1, 0),
    Tripoint::new(1, 1, 0),
];

/// One level up.
pub const TRIPOINT_ABOVE: Tripoint = Tripoint::new(0, 0, 1);
/// One level down.
pub const TRIPOINT_BELOW: Tripoint = Tripoint::new(0, 0, -1);
