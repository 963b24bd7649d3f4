//! Serialization for gridpoint value types.
//!
//! Two encodings are provided:
//!
//! - [`record`]: structured JSON records via `serde_json`, written as
//!   arrays or named-field objects ([`RecordLayout`]) and read back from
//!   either through the types' `serde` impls
//! - [`codec`]: fixed-width little-endian binary, suitable for stable
//!   byte keys; [`stream`] frames a sequence of tripoints with a header
//!
//! All decoding failures are reported as [`SerialError`] and logged at
//! `debug` level through the `log` facade.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod record;
pub mod stream;

pub use codec::{point_key, tripoint_key};
pub use error::SerialError;
pub use record::{deserialize, from_str, serialize, to_string, Record, RecordConfig, RecordLayout};
pub use stream::{TripointReader, TripointWriter};
