//! gridpoint: integer grid coordinates and regions for turn-based simulations.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! gridpoint sub-crates. For most users, adding `gridpoint` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridpoint::prelude::*;
//!
//! // Walk one step east from the origin, then lift onto level 1.
//! let here = POINT_ZERO + POINT_EAST;
//! let up = Tripoint::from_point(here, 0) + TRIPOINT_ABOVE;
//! assert_eq!(up, Tripoint::new(1, 0, 1));
//!
//! // A 3x3 tile range: half-open excludes the far edge.
//! let tiles = Rectangle::new(Point::new(0, 0), Point::new(3, 3));
//! assert!(tiles.contains_half_open(Point::new(2, 2)));
//! assert!(!tiles.contains_half_open(Point::new(3, 1)));
//! assert!(tiles.contains_inclusive(Point::new(3, 1)));
//!
//! // Rotate a cell of a 5x5 chunk a quarter turn clockwise.
//! assert_eq!(Point::new(1, 2).rotate(1, Point::new(5, 5)), Point::new(2, 1));
//!
//! // Stable hashing for hash containers.
//! let mut seen = TripointSet::default();
//! seen.insert(up);
//! assert_eq!(Tripoint::new(1, 0, 0).stable_hash(), 1);
//!
//! // Structured records round-trip exactly.
//! let text = gridpoint::serial::to_string(&up, &RecordConfig::default()).unwrap();
//! assert_eq!(text, "[1,0,1]");
//! let back: Tripoint = gridpoint::serial::from_str(&text).unwrap();
//! assert_eq!(back, up);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridpoint-core` | `Point`, `Tripoint`, constants, stable hashing, `GeomError` |
//! | [`region`] | `gridpoint-region` | `Rectangle`, `Cuboid`, `Sphere`, clamping |
//! | [`serial`] | `gridpoint-serial` | JSON records, binary codec, tripoint streams |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types, constants and hashing (`gridpoint-core`).
///
/// Contains [`types::Point`], [`types::Tripoint`], the direction and
/// sentinel constants, [`types::StableHasher`] and [`types::GridHasher`]
/// with the container aliases,
/// and [`types::GeomError`].
pub use gridpoint_core as types;

/// Spatial regions (`gridpoint-region`).
///
/// [`region::Rectangle`] and [`region::Cuboid`] with half-open and
/// inclusive containment, and [`region::Sphere`].
pub use gridpoint_region as region;

/// Serialization (`gridpoint-serial`).
///
/// JSON records through [`serial::Record`], fixed-width binary through
/// [`serial::codec`], and framed streams via [`serial::TripointWriter`] and
/// [`serial::TripointReader`].
pub use gridpoint_serial as serial;

/// Common imports for typical gridpoint usage.
///
/// ```rust
/// use gridpoint::prelude::*;
/// ```
pub mod prelude {
    // Value types
    pub use gridpoint_core::{Point, Tripoint};

    // Constants
    pub use gridpoint_core::consts::*;

    // Hash containers
    pub use gridpoint_core::{PointMap, PointSet, TripointMap, TripointSet};

    // Regions
    pub use gridpoint_region::{
        clamp_half_open, Cuboid, Rectangle, Sphere, CUBOID_ZERO, RECTANGLE_ZERO,
    };

    // Errors
    pub use gridpoint_core::GeomError;
    pub use gridpoint_serial::SerialError;

    // Serialization
    pub use gridpoint_serial::{Record, RecordConfig, RecordLayout};
}
