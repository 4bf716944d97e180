//! SW4 image header decoding.

use alloc::borrow::Cow;
use alloc::string::String;

use crate::cursor::ByteCursor;
use crate::endian::{read_f64_le, read_i32_le};
use crate::error::{Error, Result};
use crate::layout::{header_offsets as off, CREATION_TIME_LEN, HEADER_SIZE};

/// The fixed-size header record, with codes left unresolved.
///
/// Codes are turned into semantic values by the lookup tables in
/// [`crate::tables`]; an unrecognized code is only an error at that point.
#[derive(Debug, Clone, PartialEq)]
pub struct RawHeader {
    /// Precision code (sample width in bytes).
    pub precision: i32,
    /// Number of patch records that follow the header.
    pub number_of_patches: i32,
    /// Simulated time of the snapshot, in seconds.
    pub time: f64,
    /// Plane code.
    pub plane: i32,
    /// Position of the slice along the plane's axis.
    pub coordinate: f64,
    /// Mode code.
    pub mode: i32,
    /// Grid information flag written by the simulator.
    pub grid_info: i32,
    /// Creation time as stored, NUL/space padded.
    pub creation_time: [u8; CREATION_TIME_LEN],
}

impl RawHeader {
    /// The creation time text with trailing padding removed.
    pub fn creation_time(&self) -> Cow<'_, str> {
        let end = self
            .creation_time
            .iter()
            .rposition(|&b| b != 0 && !b.is_ascii_whitespace())
            .map(|i| i + 1)
            .unwrap_or(0);
        String::from_utf8_lossy(&self.creation_time[..end])
    }

    /// The declared patch count, rejecting negative values.
    pub fn patch_count(&self) -> Result<usize> {
        usize::try_from(self.number_of_patches).map_err(|_| Error::MalformedHeader {
            reason: "negative patch count",
            needed: HEADER_SIZE,
            available: HEADER_SIZE,
        })
    }
}

/// Read the header record at the cursor and advance past it.
pub fn parse_header(cursor: &mut ByteCursor<'_>) -> Result<RawHeader> {
    let available = cursor.remaining();
    let buf = cursor.take(HEADER_SIZE).ok_or(Error::MalformedHeader {
        reason: "data shorter than header",
        needed: HEADER_SIZE,
        available,
    })?;

    let mut creation_time = [0u8; CREATION_TIME_LEN];
    creation_time.copy_from_slice(&buf[off::CREATION_TIME..]);

    Ok(RawHeader {
        precision: read_i32_le(&buf[off::PRECISION..]),
        number_of_patches: read_i32_le(&buf[off::NUMBER_OF_PATCHES..]),
        time: read_f64_le(&buf[off::TIME..]),
        plane: read_i32_le(&buf[off::PLANE..]),
        coordinate: read_f64_le(&buf[off::COORDINATE..]),
        mode: read_i32_le(&buf[off::MODE..]),
        grid_info: read_i32_le(&buf[off::GRID_INFO..]),
        creation_time,
    })
}
