//! Compact binary encode/decode for points, tripoints and regions.
//!
//! All integers are little-endian `i32`. A point is 8 bytes `x, y`, a
//! tripoint 12 bytes `x, y, z`. Regions are their corners in order
//! (`p_min` then `p_max`); a sphere is `center` then `radius`. There is no
//! framing at this level; see [`crate::stream`] for a self-describing
//! container.

use std::io::{Read, Write};

use gridpoint_core::{Point, Tripoint};
use gridpoint_region::{Cuboid, Rectangle, Sphere};

use crate::error::SerialError;

/// Encoded size of a [`Point`] in bytes.
pub const POINT_LEN: usize = 8;
/// Encoded size of a [`Tripoint`] in bytes.
pub const TRIPOINT_LEN: usize = 12;

// ── Primitives ──────────────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), SerialError> {
    w.write_all(&[v])?;
    Ok(())
}

/// Write a little-endian i32.
pub fn write_i32_le(w: &mut dyn Write, v: i32) -> Result<(), SerialError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Read a single byte.
pub fn read_u8(r: &mut dyn Read) -> Result<u8, SerialError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Read a little-endian i32.
pub fn read_i32_le(r: &mut dyn Read) -> Result<i32, SerialError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

// ── Fixed-size keys ─────────────────────────────────────────────

/// The 8-byte encoding of a point, usable directly as a byte key.
pub fn point_key(p: Point) -> [u8; POINT_LEN] {
    let mut out = [0u8; POINT_LEN];
    out[..4].copy_from_slice(&p.x.to_le_bytes());
    out[4..].copy_from_slice(&p.y.to_le_bytes());
    out
}

/// Inverse of [`point_key`].
pub fn point_from_key(key: [u8; POINT_LEN]) -> Point {
    let [x0, x1, x2, x3, y0, y1, y2, y3] = key;
    Point::new(
        i32::from_le_bytes([x0, x1, x2, x3]),
        i32::from_le_bytes([y0, y1, y2, y3]),
    )
}

/// The 12-byte encoding of a tripoint, usable directly as a byte key.
pub fn tripoint_key(t: Tripoint) -> [u8; TRIPOINT_LEN] {
    let mut out = [0u8; TRIPOINT_LEN];
    out[..4].copy_from_slice(&t.x.to_le_bytes());
    out[4..8].copy_from_slice(&t.y.to_le_bytes());
    out[8..].copy_from_slice(&t.z.to_le_bytes());
    out
}

/// Inverse of [`tripoint_key`].
pub fn tripoint_from_key(key: [u8; TRIPOINT_LEN]) -> Tripoint {
    let [x0, x1, x2, x3, y0, y1, y2, y3, z0, z1, z2, z3] = key;
    Tripoint::new(
        i32::from_le_bytes([x0, x1, x2, x3]),
        i32::from_le_bytes([y0, y1, y2, y3]),
        i32::from_le_bytes([z0, z1, z2, z3]),
    )
}

// ── Value encode/decode ─────────────────────────────────────────

/// Encode a point (8 bytes).
pub fn encode_point(w: &mut dyn Write, p: Point) -> Result<(), SerialError> {
    w.write_all(&point_key(p))?;
    log::trace!("encoded point {p}");
    Ok(())
}

/// Decode a point (8 bytes).
pub fn decode_point(r: &mut dyn Read) -> Result<Point, SerialError> {
    let mut buf = [0u8; POINT_LEN];
    r.read_exact(&mut buf)?;
    Ok(point_from_key(buf))
}

/// Encode a tripoint (12 bytes).
pub fn encode_tripoint(w: &mut dyn Write, t: Tripoint) -> Result<(), SerialError> {
    w.write_all(&tripoint_key(t))?;
    log::trace!("encoded tripoint {t}");
    Ok(())
}

/// Decode a tripoint (12 bytes).
pub fn decode_tripoint(r: &mut dyn Read) -> Result<Tripoint, SerialError> {
    let mut buf = [0u8; TRIPOINT_LEN];
    r.read_exact(&mut buf)?;
    Ok(tripoint_from_key(buf))
}

/// Decode a tripoint, or `None` on a clean end of stream.
///
/// A stream that ends partway through the 12 bytes is an error, not EOF.
pub fn decode_tripoint_opt(r: &mut dyn Read) -> Result<Option<Tripoint>, SerialError> {
    let mut buf = [0u8; TRIPOINT_LEN];
    let mut filled = 0;
    while filled < TRIPOINT_LEN {
        match r.read(&mut buf[filled..]) {
            Ok(0) => {
                if filled == 0 {
                    return Ok(None);
                }
                log::debug!("truncated tripoint: got {filled} of {TRIPOINT_LEN} bytes");
                return Err(SerialError::Malformed {
                    detail: format!("truncated tripoint: got {filled} of {TRIPOINT_LEN} bytes"),
                });
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(SerialError::Io(e)),
        }
    }
    Ok(Some(tripoint_from_key(buf)))
}

/// Encode a rectangle (16 bytes).
pub fn encode_rectangle(w: &mut dyn Write, r: &Rectangle) -> Result<(), SerialError> {
    encode_point(w, r.p_min)?;
    encode_point(w, r.p_max)
}

/// Decode a rectangle (16 bytes).
pub fn decode_rectangle(r: &mut dyn Read) -> Result<Rectangle, SerialError> {
    let p_min = decode_point(r)?;
    let p_max = decode_point(r)?;
    Ok(Rectangle::new(p_min, p_max))
}

/// Encode a cuboid (24 bytes).
pub fn encode_cuboid(w: &mut dyn Write, b: &Cuboid) -> Result<(), SerialError> {
    encode_tripoint(w, b.p_min)?;
    encode_tripoint(w, b.p_max)
}

/// Decode a cuboid (24 bytes).
pub fn decode_cuboid(r: &mut dyn Read) -> Result<Cuboid, SerialError> {
    let p_min = decode_tripoint(r)?;
    let p_max = decode_tripoint(r)?;
    Ok(Cuboid::new(p_min, p_max))
}

/// Encode a sphere (16 bytes).
pub fn encode_sphere(w: &mut dyn Write, s: &Sphere) -> Result<(), SerialError> {
    encode_tripoint(w, s.center)?;
    write_i32_le(w, s.radius)
}

/// Decode a sphere (16 bytes).
pub fn decode_sphere(r: &mut dyn Read) -> Result<Sphere, SerialError> {
    let center = decode_tripoint(r)?;
    let radius = read_i32_le(r)?;
    Ok(Sphere::with_radius(center, radius))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpoint_test_utils::fixtures::{sample_points, sample_tripoints};
    use gridpoint_test_utils::{arb_point, arb_tripoint};
    use proptest::prelude::*;

    // ── Primitive round-trips ───────────────────────────────────

    proptest! {
        #[test]
        fn roundtrip_i32(v in any::<i32>()) {
            let mut buf = Vec::new();
            write_i32_le(&mut buf, v).unwrap();
            let got = read_i32_le(&mut buf.as_slice()).unwrap();
            prop_assert_eq!(v, got);
        }

        #[test]
        fn point_key_roundtrip(p in arb_point()) {
            prop_assert_eq!(point_from_key(point_key(p)), p);
        }

        #[test]
        fn tripoint_stream_roundtrip(t in arb_tripoint()) {
            let mut buf = Vec::new();
            encode_tripoint(&mut buf, t).unwrap();
            prop_assert_eq!(buf.len(), TRIPOINT_LEN);
            let got = decode_tripoint(&mut buf.as_slice()).unwrap();
            prop_assert_eq!(got, t);
        }
    }

    // ── Layout ──────────────────────────────────────────────────

    #[test]
    fn point_layout_is_little_endian_x_then_y() {
        assert_eq!(
            point_key(Point::new(1, -1)),
            [1, 0, 0, 0, 0xff, 0xff, 0xff, 0xff]
        );
    }

    #[test]
    fn tripoint_layout_is_x_y_z() {
        let key = tripoint_key(Tripoint::new(0x0102_0304, 0, i32::MIN));
        assert_eq!(key, [4, 3, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0x80]);
    }

    #[test]
    fn fixtures_roundtrip() {
        let mut buf = Vec::new();
        for p in sample_points() {
            encode_point(&mut buf, p).unwrap();
        }
        for t in sample_tripoints() {
            encode_tripoint(&mut buf, t).unwrap();
        }
        let mut r = buf.as_slice();
        for p in sample_points() {
            assert_eq!(decode_point(&mut r).unwrap(), p);
        }
        for t in sample_tripoints() {
            assert_eq!(decode_tripoint(&mut r).unwrap(), t);
        }
        assert!(r.is_empty());
    }

    #[test]
    fn regions_roundtrip() {
        let rect = Rectangle::new(Point::new(-1, -2), Point::new(3, 4));
        let cuboid = Cuboid::new(Tripoint::new(0, 0, -10), Tripoint::new(i32::MAX, 1, 10));
        let sphere = Sphere::with_radius(Tripoint::new(5, 5, 0), 12);

        let mut buf = Vec::new();
        encode_rectangle(&mut buf, &rect).unwrap();
        encode_cuboid(&mut buf, &cuboid).unwrap();
        encode_sphere(&mut buf, &sphere).unwrap();
        assert_eq!(buf.len(), 16 + 24 + 16);

        let mut r = buf.as_slice();
        assert_eq!(decode_rectangle(&mut r).unwrap(), rect);
        assert_eq!(decode_cuboid(&mut r).unwrap(), cuboid);
        assert_eq!(decode_sphere(&mut r).unwrap(), sphere);
    }

    // ── EOF handling ────────────────────────────────────────────

    #[test]
    fn clean_eof_returns_none() {
        let empty: &[u8] = &[];
        assert!(decode_tripoint_opt(&mut &*empty).unwrap().is_none());
    }

    #[test]
    fn partial_tripoint_is_error_not_eof() {
        let data = [1u8, 0, 0, 0, 2];
        let result = decode_tripoint_opt(&mut data.as_slice());
        assert!(matches!(result, Err(SerialError::Malformed { .. })));
    }

    #[test]
    fn truncated_point_is_io_error() {
        let data = [1u8, 0, 0];
        assert!(matches!(
            decode_point(&mut data.as_slice()),
            Err(SerialError::Io(_))
        ));
    }
}
