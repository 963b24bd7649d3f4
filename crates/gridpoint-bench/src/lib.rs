//! Benchmark inputs for the gridpoint value types.
//!
//! - [`scattered_points`]: deterministic, well-spread points on a square
//! - [`scattered_tripoints`]: the same, spread over several levels
//! - [`probe_region`]: a rectangle covering the middle half of that square

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridpoint_core::{Point, Tripoint};
use gridpoint_region::Rectangle;

/// `count` points in `[0, side) x [0, side)`.
///
/// Uses fixed multiplicative sequences so every run sees the same
/// coordinates.
pub fn scattered_points(count: usize, side: i32) -> Vec<Point> {
    let side = side.max(1) as u64;
    (0..count as u64)
        .map(|i| {
            let x = (i.wrapping_mul(6364136223846793007) >> 33) % side;
            let y = (i.wrapping_mul(1442695040888963407) >> 33) % side;
            Point::new(x as i32, y as i32)
        })
        .collect()
}

/// `count` tripoints over `side x side` cells and `levels` z-levels
/// centred on zero.
pub fn scattered_tripoints(count: usize, side: i32, levels: i32) -> Vec<Tripoint> {
    let levels = levels.max(1);
    scattered_points(count, side)
        .into_iter()
        .enumerate()
        .map(|(i, p)| Tripoint::from_point(p, (i as i32 % levels) - levels / 2))
        .collect()
}

/// Half-open rectangle over the middle half of a `side x side` square.
pub fn probe_region(side: i32) -> Rectangle {
    Rectangle::new(
        Point::new(side / 4, side / 4),
        Point::new(3 * side / 4, 3 * side / 4),
    )
}
