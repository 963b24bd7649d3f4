//! Core value types for integer grid coordinates.
//!
//! This is the leaf crate of the gridpoint workspace. It defines the
//! [`Point`] and [`Tripoint`] value types, their arithmetic, ordering and
//! stable hashing, the named direction and sentinel constants, and
//! [`GeomError`] for the few operations with preconditions.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod consts;
mod coords;
pub mod error;
pub mod hash;
pub mod point;
pub mod tripoint;

pub use consts::*;
pub use error::GeomError;
pub use hash::{
    BuildGridHasher, BuildStableHasher, GridHasher, PointIndexMap, PointMap, PointSet,
    StableHasher, TripointIndexSet, TripointMap, TripointSet, HASH_MULTIPLIER,
};
pub use point::Point;
pub use tripoint::Tripoint;
