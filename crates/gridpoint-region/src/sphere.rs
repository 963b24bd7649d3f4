//! Spheres: a center plus an integer radius.

use gridpoint_core::{Tripoint, TRIPOINT_ZERO};
use serde::{Deserialize, Serialize};

/// A center tripoint and a radius.
///
/// A plain value holder; inside/outside tests belong to whoever owns the
/// distance metric.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sphere {
    /// Center of the sphere.
    pub center: Tripoint,
    /// Radius in grid units.
    pub radius: i32,
}

impl Sphere {
    /// A unit sphere (radius 1) around `center`.
    pub const fn new(center: Tripoint) -> Self {
        Self::with_radius(center, 1)
    }

    /// A sphere around `center` with the given radius.
    pub const fn with_radius(center: Tripoint, radius: i32) -> Self {
        Self { center, radius }
    }
}

/// Radius 0 at the origin.
impl Default for Sphere {
    fn default() -> Self {
        Self::with_radius(TRIPOINT_ZERO, 0)
    }
}
