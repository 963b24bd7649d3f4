//! Spatial regions over gridpoint coordinates.
//!
//! - [`Rectangle`]: 2D axis-aligned region with half-open and inclusive
//!   containment, plus [`clamp_half_open`]
//! - [`Cuboid`]: the 3D counterpart, with in-place [`Cuboid::shrink`]
//! - [`Sphere`]: a center and a radius
//!
//! Region corners are never validated. An inverted region is legal and
//! contains nothing.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cuboid;
pub mod rectangle;
pub mod sphere;

pub use cuboid::{Cuboid, CUBOID_ZERO};
pub use rectangle::{clamp_half_open, try_clamp_half_open, Rectangle, RECTANGLE_ZERO};
pub use sphere::Sphere;
