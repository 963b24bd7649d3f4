//! Structured (JSON) records for gridpoint values.
//!
//! Writing is governed by [`RecordConfig`]: points go out either as arrays
//! (`[x, y, z]`, the default) or as objects with named axis fields.
//! Regions are always objects (`{"p_min": .., "p_max": ..}`), spheres
//! `{"center": .., "radius": ..}`.
//!
//! Reading goes through the types' own `serde::Deserialize` impls, so it
//! accepts both point shapes regardless of configuration and rejects
//! exactly what they reject. Text errors carry a line and column.

use gridpoint_core::{Point, Tripoint};
use gridpoint_region::{Cuboid, Rectangle, Sphere};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::SerialError;

/// Field names in axis order.
const AXES: [&str; 3] = ["x", "y", "z"];

/// How points and tripoints are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecordLayout {
    /// `[x, y]` / `[x, y, z]`.
    #[default]
    Array,
    /// `{"x": .., "y": ..}` / `{"x": .., "y": .., "z": ..}`.
    Object,
}

/// Output settings for [`to_string`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecordConfig {
    /// Shape used for points and tripoints.
    pub layout: RecordLayout,
    /// Indent the rendered JSON.
    pub pretty: bool,
}

/// A value that can be written as a JSON record in either layout and
/// read back through its `Deserialize` impl.
pub trait Record: DeserializeOwned {
    /// Render as a JSON value.
    fn to_record(&self, layout: RecordLayout) -> Value;
}

/// Render `value` as a JSON value.
pub fn serialize<T: Record>(value: &T, layout: RecordLayout) -> Value {
    value.to_record(layout)
}

/// Parse a `T` from a JSON value.
///
/// A [`Value`] has already collapsed repeated object keys; use
/// [`from_str`] on the original text to have them rejected.
pub fn deserialize<T: Record>(value: &Value) -> Result<T, SerialError> {
    Deserialize::deserialize(value).map_err(rejected)
}

/// Render `value` as JSON text.
pub fn to_string<T: Record>(value: &T, config: &RecordConfig) -> Result<String, SerialError> {
    let record = value.to_record(config.layout);
    let text = if config.pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    log::trace!("rendered record {text}");
    Ok(text)
}

/// Parse a `T` from JSON text.
pub fn from_str<T: Record>(text: &str) -> Result<T, SerialError> {
    serde_json::from_str(text).map_err(rejected)
}

fn rejected(e: serde_json::Error) -> SerialError {
    log::debug!("rejected record: {e}");
    SerialError::Json(e)
}

// ── Writers ─────────────────────────────────────────────────────

fn write_coords(coords: &[i32], layout: RecordLayout) -> Value {
    match layout {
        RecordLayout::Array => Value::Array(coords.iter().map(|&c| Value::from(c)).collect()),
        RecordLayout::Object => Value::Object(
            AXES.iter()
                .zip(coords)
                .map(|(&axis, &c)| (axis.to_string(), Value::from(c)))
                .collect(),
        ),
    }
}

fn write_corners<T: Record>(p_min: &T, p_max: &T, layout: RecordLayout) -> Value {
    let mut map = Map::new();
    map.insert("p_min".to_string(), p_min.to_record(layout));
    map.insert("p_max".to_string(), p_max.to_record(layout));
    Value::Object(map)
}

impl Record for Point {
    fn to_record(&self, layout: RecordLayout) -> Value {
        write_coords(&[self.x, self.y], layout)
    }
}

impl Record for Tripoint {
    fn to_record(&self, layout: RecordLayout) -> Value {
        write_coords(&[self.x, self.y, self.z], layout)
    }
}

impl Record for Rectangle {
    fn to_record(&self, layout: RecordLayout) -> Value {
        write_corners(&self.p_min, &self.p_max, layout)
    }
}

impl Record for Cuboid {
    fn to_record(&self, layout: RecordLayout) -> Value {
        write_corners(&self.p_min, &self.p_max, layout)
    }
}

impl Record for Sphere {
    fn to_record(&self, layout: RecordLayout) -> Value {
        let mut map = Map::new();
        map.insert("center".to_string(), self.center.to_record(layout));
        map.insert("radius".to_string(), Value::from(self.radius));
        Value::Object(map)
    }
}
