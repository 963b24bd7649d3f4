//! The two-dimensional [`Point`] value type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::coords::CoordsVisitor;
use crate::error::GeomError;
use crate::hash::HASH_MULTIPLIER;

/// An integer coordinate pair on a 2D grid.
///
/// Points are plain values: equality is exact field equality and the
/// ordering is lexicographic by `x`, then `y`. Arithmetic is component-wise
/// and follows native `i32` semantics (division truncates toward zero).
///
/// # Examples
///
/// ```
/// use gridpoint_core::Point;
///
/// let p = Point::new(3, 4) + Point::new(1, -1);
/// assert_eq!(p, Point::new(4, 3));
/// assert_eq!(Point::new(-3, 7) / 2, Point::new(-1, 3));
/// assert_eq!(p.to_string(), "(4, 3)");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate; grows southward.
    pub y: i32,
}

impl Point {
    /// Create a point from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise absolute value.
    pub const fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Rotate clockwise by `turns` quarter turns inside a `dim`-sized
    /// rectangle anchored at the origin.
    ///
    /// A point inside `[0, dim.x) x [0, dim.y)` maps to the corresponding
    /// cell of the rotated rectangle. `turns == 4` is the identity.
    ///
    /// # Panics
    ///
    /// Panics if `turns` is outside `[0, 4]`, in every build profile. Use
    /// [`try_rotate`](Self::try_rotate) to handle the error instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridpoint_core::Point;
    ///
    /// let dim = Point::new(5, 5);
    /// assert_eq!(Point::new(1, 2).rotate(1, dim), Point::new(2, 1));
    /// assert_eq!(Point::new(1, 2).rotate(2, dim), Point::new(3, 2));
    /// ```
    pub fn rotate(self, turns: i32, dim: Point) -> Point {
        assert!(
            (0..=4).contains(&turns),
            "rotation turns must be in [0, 4], got {turns}"
        );
        self.rotate_in_range(turns, dim)
    }

    /// [`rotate`](Self::rotate) with the default `1 x 1` dimensions.
    pub fn rotate_about_origin(self, turns: i32) -> Point {
        self.rotate(turns, Point::new(1, 1))
    }

    /// Non-panicking [`rotate`](Self::rotate).
    ///
    /// Returns `Err(GeomError::InvalidTurns)` if `turns` is outside `[0, 4]`.
    pub fn try_rotate(self, turns: i32, dim: Point) -> Result<Point, GeomError> {
        if !(0..=4).contains(&turns) {
            return Err(GeomError::InvalidTurns { turns });
        }
        Ok(self.rotate_in_range(turns, dim))
    }

    fn rotate_in_range(self, turns: i32, dim: Point) -> Point {
        match turns {
            1 => Point::new(dim.y - self.y - 1, self.x),
            2 => Point::new(dim.x - self.x - 1, dim.y - self.y - 1),
            3 => Point::new(self.y, dim.x - self.x - 1),
            _ => self,
        }
    }

    /// Order-sensitive hash: `y * A + x` in wrapping `u64` arithmetic,
    /// with each coordinate sign-extended first.
    ///
    /// Stable across builds and processes, so it may be used as a
    /// persistent key. `Point::new(0, 0)` hashes to `0`.
    pub const fn stable_hash(self) -> u64 {
        (self.y as i64 as u64)
            .wrapping_mul(HASH_MULTIPLIER)
            .wrapping_add(self.x as i64 as u64)
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.stable_hash());
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

// ── Arithmetic ──────────────────────────────────────────────────

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<i32> for Point {
    type Output = Point;

    fn mul(self, rhs: i32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl MulAssign<i32> for Point {
    fn mul_assign(&mut self, rhs: i32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<i32> for Point {
    type Output = Point;

    fn div(self, rhs: i32) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

// ── Serde ───────────────────────────────────────────────────────

/// Serializes as a two-element array `[x, y]`.
impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.x, self.y].serialize(serializer)
    }
}

/// Accepts either `[x, y]` or `{"x": .., "y": ..}`.
impl<'de> Deserialize<'de> for Point {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [x, y] = deserializer.deserialize_any(CoordsVisitor::<2>)?;
        Ok(Point::new(x, y))
    }
}
