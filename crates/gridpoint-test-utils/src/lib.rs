//! Test utilities and proptest strategies for gridpoint development.
//!
//! Strategies come in two flavours: `arb_*` over the full `i32` range for
//! codec and hashing tests, and `arb_small_*` bounded so that arithmetic
//! on a handful of values cannot overflow.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use gridpoint_core::{Point, Tripoint};
use proptest::prelude::*;

/// Bound for `arb_small_*` coordinates: sums and small products of a few
/// such values stay well inside `i32`.
pub const SMALL: i32 = 1 << 16;

pub fn arb_point() -> impl Strategy<Value = Point> {
    (any::<i32>(), any::<i32>()).prop_map(|(x, y)| Point::new(x, y))
}

pub fn arb_tripoint() -> impl Strategy<Value = Tripoint> {
    (any::<i32>(), any::<i32>(), any::<i32>()).prop_map(|(x, y, z)| Tripoint::new(x, y, z))
}

pub fn arb_small_point() -> impl Strategy<Value = Point> {
    (-SMALL..SMALL, -SMALL..SMALL).prop_map(|(x, y)| Point::new(x, y))
}

pub fn arb_small_tripoint() -> impl Strategy<Value = Tripoint> {
    (-SMALL..SMALL, -SMALL..SMALL, -SMALL..SMALL).prop_map(|(x, y, z)| Tripoint::new(x, y, z))
}

/// Coordinates biased toward the `i32` boundaries and zero.
pub fn arb_edge_i32() -> impl Strategy<Value = i32> {
    prop_oneof![
        Just(i32::MIN),
        Just(i32::MIN + 1),
        Just(-1),
        Just(0),
        Just(1),
        Just(i32::MAX - 1),
        Just(i32::MAX),
        any::<i32>(),
    ]
}

pub fn arb_edge_tripoint() -> impl Strategy<Value = Tripoint> {
    (arb_edge_i32(), arb_edge_i32(), arb_edge_i32()).prop_map(|(x, y, z)| Tripoint::new(x, y, z))
}

/// Ordered corner pair `(min, max)` with `min <= max` per axis; may be
/// degenerate on either axis.
pub fn arb_corners() -> impl Strategy<Value = (Point, Point)> {
    (arb_small_point(), 0i32..64, 0i32..64)
        .prop_map(|(min, w, h)| (min, Point::new(min.x + w, min.y + h)))
}

/// 3D counterpart of [`arb_corners`].
pub fn arb_tri_corners() -> impl Strategy<Value = (Tripoint, Tripoint)> {
    (arb_small_tripoint(), 0i32..32, 0i32..32, 0i32..32).prop_map(|(min, w, h, d)| {
        (min, Tripoint::new(min.x + w, min.y + h, min.z + d))
    })
}
