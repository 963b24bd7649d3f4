//! Axis-aligned 2D regions.

use gridpoint_core::{GeomError, Point, POINT_ZERO};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle spanned by two corner points.
///
/// Whether `p_max` is an exclusive or an inclusive corner is up to the
/// caller, who picks [`contains_half_open`](Self::contains_half_open) or
/// [`contains_inclusive`](Self::contains_inclusive) accordingly. The
/// corners are not validated; a rectangle with `p_min > p_max` on some
/// axis simply contains nothing.
///
/// # Examples
///
/// ```
/// use gridpoint_core::Point;
/// use gridpoint_region::Rectangle;
///
/// let r = Rectangle::new(Point::new(0, 0), Point::new(3, 3));
/// assert!(r.contains_half_open(Point::new(2, 2)));
/// assert!(!r.contains_half_open(Point::new(3, 1)));
/// assert!(r.contains_inclusive(Point::new(3, 1)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rectangle {
    /// Minimum corner (always inclusive).
    pub p_min: Point,
    /// Maximum corner (exclusive or inclusive depending on the query).
    pub p_max: Point,
}

/// The degenerate rectangle at the origin.
pub const RECTANGLE_ZERO: Rectangle = Rectangle::new(POINT_ZERO, POINT_ZERO);

impl Rectangle {
    /// Create a rectangle from its corners.
    pub const fn new(p_min: Point, p_max: Point) -> Self {
        Self { p_min, p_max }
    }

    /// `min <= p < max` on both axes.
    pub const fn contains_half_open(&self, p: Point) -> bool {
        p.x >= self.p_min.x && p.x < self.p_max.x && p.y >= self.p_min.y && p.y < self.p_max.y
    }

    /// `min <= p <= max` on both axes.
    pub const fn contains_inclusive(&self, p: Point) -> bool {
        p.x >= self.p_min.x && p.x <= self.p_max.x && p.y >= self.p_min.y && p.y <= self.p_max.y
    }

    /// True if no point is contained under half-open semantics.
    pub const fn is_empty(&self) -> bool {
        self.p_min.x >= self.p_max.x || self.p_min.y >= self.p_max.y
    }
}

/// Clamp `p` into the half-open rectangle `r`, each axis independently.
///
/// Useful for snapping an arbitrary point to the nearest cell on screen or
/// inside a particular submap.
///
/// # Panics
///
/// Panics if `r` is empty on either axis. See [`try_clamp_half_open`].
pub fn clamp_half_open(p: Point, r: &Rectangle) -> Point {
    match try_clamp_half_open(p, r) {
        Ok(clamped) => clamped,
        Err(e) => panic!("clamp_half_open: {e}"),
    }
}

/// Non-panicking [`clamp_half_open`].
///
/// Returns `Err(GeomError::EmptyRegion)` naming the first empty axis.
pub fn try_clamp_half_open(p: Point, r: &Rectangle) -> Result<Point, GeomError> {
    let x = clamp_axis("x", p.x, r.p_min.x, r.p_max.x)?;
    let y = clamp_axis("y", p.y, r.p_min.y, r.p_max.y)?;
    Ok(Point::new(x, y))
}

fn clamp_axis(axis: &'static str, v: i32, min: i32, max: i32) -> Result<i32, GeomError> {
    if min >= max {
        return Err(GeomError::EmptyRegion { axis, min, max });
    }
    Ok(v.clamp(min, max - 1))
}
