//! The three-dimensional [`Tripoint`] value type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::coords::CoordsVisitor;
use crate::hash::HASH_MULTIPLIER;
use crate::point::Point;

/// An integer coordinate triple: a [`Point`] plus a vertical level `z`.
///
/// Ordering is lexicographic by `x`, `y`, `z`. Adding or subtracting a
/// [`Point`] shifts the horizontal position and leaves `z` untouched.
///
/// # Examples
///
/// ```
/// use gridpoint_core::{Point, Tripoint};
///
/// let t = Tripoint::new(1, 2, -1) + Point::new(10, 10);
/// assert_eq!(t, Tripoint::new(11, 12, -1));
/// assert_eq!(t.xy(), Point::new(11, 12));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tripoint {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical (screen) coordinate; grows southward.
    pub y: i32,
    /// Level; grows upward.
    pub z: i32,
}

impl Tripoint {
    /// Create a tripoint from its coordinates.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Lift a [`Point`] onto level `z`.
    pub const fn from_point(p: Point, z: i32) -> Self {
        Self::new(p.x, p.y, z)
    }

    /// Horizontal projection, dropping `z`.
    pub const fn xy(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Component-wise absolute value.
    pub const fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Order-sensitive hash: `(z * A + y) * A + x` in wrapping `u64`
    /// arithmetic, coordinates sign-extended first.
    pub const fn stable_hash(self) -> u64 {
        (self.z as i64 as u64)
            .wrapping_mul(HASH_MULTIPLIER)
            .wrapping_add(self.y as i64 as u64)
            .wrapping_mul(HASH_MULTIPLIER)
            .wrapping_add(self.x as i64 as u64)
    }
}

impl Hash for Tripoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.stable_hash());
    }
}

impl fmt::Display for Tripoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<(i32, i32, i32)> for Tripoint {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Tripoint> for (i32, i32, i32) {
    fn from(t: Tripoint) -> Self {
        (t.x, t.y, t.z)
    }
}

// ── Arithmetic ──────────────────────────────────────────────────

impl Add for Tripoint {
    type Output = Tripoint;

    fn add(self, rhs: Tripoint) -> Tripoint {
        Tripoint::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Tripoint {
    fn add_assign(&mut self, rhs: Tripoint) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Tripoint {
    type Output = Tripoint;

    fn sub(self, rhs: Tripoint) -> Tripoint {
        Tripoint::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Tripoint {
    fn sub_assign(&mut self, rhs: Tripoint) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Neg for Tripoint {
    type Output = Tripoint;

    fn neg(self) -> Tripoint {
        Tripoint::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<i32> for Tripoint {
    type Output = Tripoint;

    fn mul(self, rhs: i32) -> Tripoint {
        Tripoint::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl MulAssign<i32> for Tripoint {
    fn mul_assign(&mut self, rhs: i32) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl Div<i32> for Tripoint {
    type Output = Tripoint;

    fn div(self, rhs: i32) -> Tripoint {
        Tripoint::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

// Mixed arithmetic with Point: z passes through.

impl Add<Point> for Tripoint {
    type Output = Tripoint;

    fn add(self, rhs: Point) -> Tripoint {
        Tripoint::new(self.x + rhs.x, self.y + rhs.y, self.z)
    }
}

impl AddAssign<Point> for Tripoint {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Point> for Tripoint {
    type Output = Tripoint;

    fn sub(self, rhs: Point) -> Tripoint {
        Tripoint::new(self.x - rhs.x, self.y - rhs.y, self.z)
    }
}

impl SubAssign<Point> for Tripoint {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

// ── Serde ───────────────────────────────────────────────────────

/// Serializes as a three-element array `[x, y, z]`.
impl Serialize for Tripoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.x, self.y, self.z].serialize(serializer)
    }
}

/// Accepts either `[x, y, z]` or `{"x": .., "y": .., "z": ..}`.
impl<'de> Deserialize<'de> for Tripoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [x, y, z] = deserializer.deserialize_any(CoordsVisitor::<3>)?;
        Ok(Tripoint::new(x, y, z))
    }
}
