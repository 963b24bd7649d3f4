//! Stable hashing and hash-container aliases for grid coordinates.
//!
//! [`Point`] and [`Tripoint`] implement [`Hash`](std::hash::Hash) by writing
//! their [`stable_hash`](Point::stable_hash) as a single `u64`. Under any
//! hasher that makes equal values hash equal.
//!
//! [`StableHasher`] finishes to exactly the stable value. That value is
//! small for every point on the `y = 0` row (and `y = z = 0` for
//! tripoints), so its top bits, which hashbrown uses as the control byte,
//! are all equal there. The container aliases therefore use
//! [`GridHasher`], which applies a bijective finalizer on top.

use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasherDefault, Hasher};

use indexmap::{IndexMap, IndexSet};

use crate::point::Point;
use crate::tripoint::Tripoint;

/// Odd multiplicative constant used to fold coordinates together.
pub const HASH_MULTIPLIER: u64 = 2862933555777941757;

/// Pass-through hasher that folds each written word into its state as
/// `state * HASH_MULTIPLIER + word`.
///
/// Starting from zero, a single `write_u64(v)` finishes to `v` unchanged,
/// which is how [`Point`] and [`Tripoint`] hash. Composite keys fold in
/// field order. Byte slices fold one byte at a time.
#[derive(Clone, Copy, Debug, Default)]
pub struct StableHasher {
    state: u64,
}

impl StableHasher {
    #[inline]
    fn fold(&mut self, word: u64) {
        self.state = self.state.wrapping_mul(HASH_MULTIPLIER).wrapping_add(word);
    }
}

impl Hasher for StableHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.fold(b as u64);
        }
    }

    #[inline]
    fn write_u64(&mut self, v: u64) {
        self.fold(v);
    }

    #[inline]
    fn write_i32(&mut self, v: i32) {
        self.fold(v as i64 as u64);
    }
}

/// [`BuildHasher`](std::hash::BuildHasher) producing [`StableHasher`]s.
pub type BuildStableHasher = BuildHasherDefault<StableHasher>;

/// Deterministic container hasher: the [`StableHasher`] fold followed by a
/// multiply and rotate, so that both the high and the low bits of the
/// result depend on every coordinate.
///
/// The finalizer is a bijection on `u64`, so two keys collide under
/// `GridHasher` exactly when their stable hashes collide.
#[derive(Clone, Copy, Debug, Default)]
pub struct GridHasher {
    inner: StableHasher,
}

impl Hasher for GridHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.inner
            .finish()
            .wrapping_mul(HASH_MULTIPLIER)
            .rotate_left(26)
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.inner.write(bytes);
    }

    #[inline]
    fn write_u64(&mut self, v: u64) {
        self.inner.write_u64(v);
    }

    #[inline]
    fn write_i32(&mut self, v: i32) {
        self.inner.write_i32(v);
    }
}

/// [`BuildHasher`](std::hash::BuildHasher) producing [`GridHasher`]s.
pub type BuildGridHasher = BuildHasherDefault<GridHasher>;

/// `HashMap` keyed by [`Point`].
pub type PointMap<V> = HashMap<Point, V, BuildGridHasher>;
/// `HashSet` of [`Point`].
pub type PointSet = HashSet<Point, BuildGridHasher>;
/// `HashMap` keyed by [`Tripoint`].
pub type TripointMap<V> = HashMap<Tripoint, V, BuildGridHasher>;
/// `HashSet` of [`Tripoint`].
pub type TripointSet = HashSet<Tripoint, BuildGridHasher>;
/// Insertion-ordered map keyed by [`Point`].
pub type PointIndexMap<V> = IndexMap<Point, V, BuildGridHasher>;
/// Insertion-ordered set of [`Tripoint`].
pub type TripointIndexSet = IndexSet<Tripoint, BuildGridHasher>;
