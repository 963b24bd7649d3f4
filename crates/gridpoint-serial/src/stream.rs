//! Framed tripoint streams.
//!
//! ```text
//! [MAGIC "GRPT"] [VERSION u8] [Tripoint 1] [Tripoint 2] ... [Tripoint N]
//! ```
//!
//! The stream ends at a clean EOF between tripoints. An EOF inside a
//! tripoint is reported as [`SerialError::Malformed`].

use std::io::{Read, Write};

use gridpoint_core::Tripoint;

use crate::codec::{decode_tripoint_opt, encode_tripoint, read_u8, write_u8};
use crate::error::SerialError;

/// Magic bytes at the start of every tripoint stream.
pub const MAGIC: [u8; 4] = *b"GRPT";

/// Current stream format version.
pub const FORMAT_VERSION: u8 = 1;

/// Writes tripoints to any `Write` sink after a header.
pub struct TripointWriter<W: Write> {
    writer: W,
    written: u64,
}

impl<W: Write> TripointWriter<W> {
    /// Write the stream header and return a writer positioned after it.
    pub fn new(mut writer: W) -> Result<Self, SerialError> {
        writer.write_all(&MAGIC)?;
        write_u8(&mut writer, FORMAT_VERSION)?;
        Ok(Self { writer, written: 0 })
    }

    /// Append one tripoint.
    pub fn write(&mut self, t: Tripoint) -> Result<(), SerialError> {
        encode_tripoint(&mut self.writer, t)?;
        self.written += 1;
        Ok(())
    }

    /// Number of tripoints written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flush and return the underlying sink.
    pub fn finish(mut self) -> Result<W, SerialError> {
        self.writer.flush()?;
        log::debug!("tripoint stream finished after {} values", self.written);
        Ok(self.writer)
    }
}

/// Reads tripoints from any `Read` source, validating the header on open.
///
/// Generic over `R: Read` so tests can use `&[u8]` and production code
/// can use `BufReader<File>`.
pub struct TripointReader<R: Read> {
    reader: R,
    read: u64,
}

impl<R: Read> TripointReader<R> {
    /// Open a stream, reading and validating the header.
    pub fn open(mut reader: R) -> Result<Self, SerialError> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if magic != MAGIC {
            log::debug!("rejected tripoint stream: bad magic {magic:?}");
            return Err(SerialError::InvalidMagic);
        }
        let version = read_u8(&mut reader)?;
        if version != FORMAT_VERSION {
            log::debug!("rejected tripoint stream: version {version}");
            return Err(SerialError::UnsupportedVersion { found: version });
        }
        Ok(Self { reader, read: 0 })
    }

    /// Read the next tripoint, or `None` if the stream is exhausted.
    pub fn next_tripoint(&mut self) -> Result<Option<Tripoint>, SerialError> {
        let t = decode_tripoint_opt(&mut self.reader)?;
        if t.is_some() {
            self.read += 1;
        }
        Ok(t)
    }

    /// Number of tripoints read so far.
    pub fn read_count(&self) -> u64 {
        self.read
    }
}

impl<R: Read> Iterator for TripointReader<R> {
    type Item = Result<Tripoint, SerialError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_tripoint().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpoint_test_utils::fixtures::sample_tripoints;

    #[test]
    fn roundtrip_fixtures() {
        let mut w = TripointWriter::new(Vec::new()).unwrap();
        for t in sample_tripoints() {
            w.write(t).unwrap();
        }
        assert_eq!(w.written(), sample_tripoints().len() as u64);
        let bytes = w.finish().unwrap();
        assert_eq!(bytes.len(), 5 + 12 * sample_tripoints().len());

        let reader = TripointReader::open(bytes.as_slice()).unwrap();
        let got: Vec<Tripoint> = reader.collect::<Result<_, _>>().unwrap();
        assert_eq!(got, sample_tripoints());
    }

    #[test]
    fn empty_stream_has_no_values() {
        let bytes = TripointWriter::new(Vec::new()).unwrap().finish().unwrap();
        let mut reader = TripointReader::open(bytes.as_slice()).unwrap();
        assert!(reader.next_tripoint().unwrap().is_none());
        assert_eq!(reader.read_count(), 0);
    }

    #[test]
    fn bad_magic_rejected() {
        let data = b"XRPT\x01";
        assert!(matches!(
            TripointReader::open(data.as_slice()),
            Err(SerialError::InvalidMagic)
        ));
    }

    #[test]
    fn bad_version_rejected() {
        let mut data = MAGIC.to_vec();
        data.push(99);
        assert!(matches!(
            TripointReader::open(data.as_slice()),
            Err(SerialError::UnsupportedVersion { found: 99 })
        ));
    }

    #[test]
    fn truncated_value_surfaces_error_then_stops_counting() {
        let mut w = TripointWriter::new(Vec::new()).unwrap();
        w.write(Tripoint::new(1, 2, 3)).unwrap();
        let mut bytes = w.finish().unwrap();
        bytes.extend_from_slice(&[0, 0, 0]);

        let mut reader = TripointReader::open(bytes.as_slice()).unwrap();
        assert_eq!(reader.next_tripoint().unwrap(), Some(Tripoint::new(1, 2, 3)));
        assert!(matches!(
            reader.next_tripoint(),
            Err(SerialError::Malformed { .. })
        ));
        assert_eq!(reader.read_count(), 1);
    }
}
