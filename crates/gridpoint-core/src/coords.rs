//! Shared serde visitor for fixed-arity coordinate records.

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

/// Field names in axis order; a record of arity `N` uses the first `N`.
static AXES: [&str; 3] = ["x", "y", "z"];

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "lowercase")]
enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Reads `N` integers from either an array `[x, y, ..]` or an object with
/// named axis fields. Wrong arity, unknown or duplicate fields, and values
/// that do not fit in `i32` are all rejected.
pub(crate) struct CoordsVisitor<const N: usize>;

impl<'de, const N: usize> Visitor<'de> for CoordsVisitor<N> {
    type Value = [i32; N];

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "an array of {N} integers or an object with fields {}",
            AXES[..N].join(", ")
        )
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut out = [0i32; N];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(N + 1, &self));
        }
        Ok(out)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut found: [Option<i32>; N] = [None; N];
        while let Some(axis) = map.next_key::<Axis>()? {
            let i = axis.index();
            if i >= N {
                return Err(de::Error::unknown_field(AXES[i], &AXES[..N]));
            }
            if found[i].is_some() {
                return Err(de::Error::duplicate_field(AXES[i]));
            }
            found[i] = Some(map.next_value()?);
        }
        let mut out = [0i32; N];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = found[i].ok_or_else(|| de::Error::missing_field(AXES[i]))?;
        }
        Ok(out)
    }
}
