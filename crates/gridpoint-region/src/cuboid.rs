//! Axis-aligned 3D regions.

use gridpoint_core::{Tripoint, TRIPOINT_ZERO};
use serde::{Deserialize, Serialize};

use crate::rectangle::Rectangle;

/// An axis-aligned box spanned by two corner tripoints.
///
/// The 3D counterpart of [`Rectangle`], with the same two containment
/// queries. Corners are not validated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cuboid {
    /// Minimum corner (always inclusive).
    pub p_min: Tripoint,
    /// Maximum corner (exclusive or inclusive depending on the query).
    pub p_max: Tripoint,
}

/// The degenerate cuboid at the origin.
pub const CUBOID_ZERO: Cuboid = Cuboid::new(TRIPOINT_ZERO, TRIPOINT_ZERO);

impl Cuboid {
    /// Create a cuboid from its corners.
    pub const fn new(p_min: Tripoint, p_max: Tripoint) -> Self {
        Self { p_min, p_max }
    }

    /// Extrude a rectangle between levels `z_min` and `z_max`.
    pub const fn from_rectangle(r: Rectangle, z_min: i32, z_max: i32) -> Self {
        Self::new(
            Tripoint::from_point(r.p_min, z_min),
            Tripoint::from_point(r.p_max, z_max),
        )
    }

    /// `min <= p < max` on all three axes.
    pub const fn contains_half_open(&self, p: Tripoint) -> bool {
        p.x >= self.p_min.x
            && p.x < self.p_max.x
            && p.y >= self.p_min.y
            && p.y < self.p_max.y
            && p.z >= self.p_min.z
            && p.z < self.p_max.z
    }

    /// `min <= p <= max` on all three axes.
    pub const fn contains_inclusive(&self, p: Tripoint) -> bool {
        p.x >= self.p_min.x
            && p.x <= self.p_max.x
            && p.y >= self.p_min.y
            && p.y <= self.p_max.y
            && p.z >= self.p_min.z
            && p.z <= self.p_max.z
    }

    /// True if no point is contained under half-open semantics.
    pub const fn is_empty(&self) -> bool {
        self.p_min.x >= self.p_max.x || self.p_min.y >= self.p_max.y || self.p_min.z >= self.p_max.z
    }

    /// Inset both corners by `amount` per axis, in place.
    ///
    /// No bounds check: shrinking past zero size leaves `p_min` beyond
    /// `p_max`, which every containment query then treats as empty.
    pub fn shrink(&mut self, amount: Tripoint) {
        self.p_min += amount;
        self.p_max -= amount;
    }

    /// Copying form of [`shrink`](Self::shrink).
    #[must_use]
    pub fn shrunk(mut self, amount: Tripoint) -> Self {
        self.shrink(amount);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpoint_core::Point;
    use gridpoint_test_utils::{arb_small_tripoint, arb_tri_corners};
    use proptest::prelude::*;

    fn t(x: i32, y: i32, z: i32) -> Tripoint {
        Tripoint::new(x, y, z)
    }

    #[test]
    fn containment_per_axis() {
        let b = Cuboid::new(t(0, 0, -1), t(2, 2, 1));
        assert!(b.contains_half_open(t(1, 1, 0)));
        assert!(b.contains_half_open(t(0, 0, -1)));
        assert!(!b.contains_half_open(t(1, 1, 1)));
        assert!(b.contains_inclusive(t(1, 1, 1)));
        assert!(b.contains_inclusive(t(2, 2, 1)));
        assert!(!b.contains_inclusive(t(2, 2, 2)));
        assert!(!b.contains_inclusive(t(0, 0, -2)));
    }

    #[test]
    fn shrink_insets_both_corners() {
        let mut b = Cuboid::new(t(0, 0, 0), t(4, 4, 4));
        b.shrink(t(1, 1, 0));
        assert_eq!(b, Cuboid::new(t(1, 1, 0), t(3, 3, 4)));
    }

    #[test]
    fn shrunk_leaves_original() {
        let b = Cuboid::new(t(0, 0, 0), t(4, 4, 4));
        let inner = b.shrunk(t(1, 1, 1));
        assert_eq!(inner, Cuboid::new(t(1, 1, 1), t(3, 3, 3)));
        assert_eq!(b, Cuboid::new(t(0, 0, 0), t(4, 4, 4)));
    }

    #[test]
    fn shrink_past_degenerate_is_empty() {
        let b = Cuboid::new(t(0, 0, 0), t(2, 2, 2)).shrunk(t(2, 0, 0));
        assert_eq!(b, Cuboid::new(t(2, 0, 0), t(0, 2, 2)));
        assert!(b.is_empty());
        for x in -3..4 {
            assert!(!b.contains_half_open(t(x, 1, 1)));
            assert!(!b.contains_inclusive(t(x, 1, 1)));
        }
    }

    #[test]
    fn negative_shrink_grows() {
        let b = Cuboid::new(t(0, 0, 0), t(1, 1, 1)).shrunk(t(-1, -1, 0));
        assert_eq!(b, Cuboid::new(t(-1, -1, 0), t(2, 2, 1)));
    }

    #[test]
    fn from_rectangle_extrudes() {
        let r = Rectangle::new(Point::new(1, 2), Point::new(3, 4));
        let b = Cuboid::from_rectangle(r, -1, 1);
        assert_eq!(b, Cuboid::new(t(1, 2, -1), t(3, 4, 1)));
        assert!(b.contains_half_open(t(2, 3, 0)));
        assert!(!b.contains_half_open(t(2, 3, 1)));
    }

    #[test]
    fn zero_cuboid() {
        assert_eq!(Cuboid::default(), CUBOID_ZERO);
        assert!(CUBOID_ZERO.is_empty());
        assert!(CUBOID_ZERO.contains_inclusive(TRIPOINT_ZERO));
    }

    #[test]
    fn serde_shape() {
        let b = Cuboid::new(t(0, 0, 0), t(4, 4, 4));
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, r#"{"p_min":[0,0,0],"p_max":[4,4,4]}"#);
        let obj: Cuboid =
            serde_json::from_str(r#"{"p_max":{"x":4,"y":4,"z":4},"p_min":[0,0,0]}"#).unwrap();
        assert_eq!(obj, b);
    }

    proptest! {
        #[test]
        fn shrunk_is_subset(
            (lo, hi) in arb_tri_corners(),
            q in arb_small_tripoint(),
            m in 0i32..4,
        ) {
            let outer = Cuboid::new(lo, hi);
            let inner = outer.shrunk(Tripoint::new(m, m, m));
            if inner.contains_half_open(q) {
                prop_assert!(outer.contains_half_open(q));
            }
            if inner.contains_inclusive(q) {
                prop_assert!(outer.contains_inclusive(q));
            }
        }

        #[test]
        fn empty_means_no_half_open_member(
            (lo, hi) in arb_tri_corners(),
            q in arb_small_tripoint(),
        ) {
            let b = Cuboid::new(lo, hi);
            if b.is_empty() {
                prop_assert!(!b.contains_half_open(q));
            }
        }
    }
}
