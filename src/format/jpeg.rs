//! JPEG container handling: locating the APP1 segment that carries EXIF.
//!
//! # Layout
//!
//! ```text
//! FF D8                  SOI (start of image)
//! ...
//! FF E1 LL LL <payload>  APP1; LL LL is a big-endian length that counts
//!                        itself but not the two marker bytes
//! ```
//!
//! The EXIF block is the APP1 payload with the two length bytes removed:
//! `Exif\0\0`, then the TIFF header, the IFD and its value region.
//!
//! The locator does a plain byte scan for `FF E1` and does not skip over
//! other segments by their lengths, so an `FF E1` pair embedded in an
//! earlier segment's data is taken as the APP1 marker. Real-world encoders
//! write APP1 directly after SOI (or after APP0), where this never matters.

use tracing::debug;

use crate::error::ExifError;
use crate::io::read_u16_be;

// =============================================================================
// JPEG Markers
// =============================================================================

/// Start Of Image marker
pub const SOI: [u8; 2] = [0xFF, 0xD8];

/// Application segment 1 (EXIF) marker
pub const APP1: [u8; 2] = [0xFF, 0xE1];

/// Size of a marker plus its length field.
pub const MARKER_HEADER_SIZE: usize = 4;

/// Size of the big-endian length field at the start of a segment payload.
const LENGTH_FIELD_SIZE: usize = 2;

// =============================================================================
// Segment
// =============================================================================

/// Location of the APP1 segment within the raw image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Offset of the 0xFF byte of the APP1 marker
    pub marker_start: usize,

    /// Offset of the payload, which begins with the length field
    pub start: usize,

    /// Declared payload length, including the two length bytes
    pub length: u16,
}

impl Segment {
    /// End of the declared payload (exclusive).
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.length as usize
    }
}

// =============================================================================
// Locating APP1
// =============================================================================

/// Check if data starts with the JPEG SOI marker.
#[inline]
pub fn is_jpeg(data: &[u8]) -> bool {
    data.len() >= 2 && data[0..2] == SOI
}

/// Find the first APP1 segment in a JPEG byte stream.
///
/// # Errors
/// - `NotAJpeg` if the data does not start with SOI
/// - `App1NotFound` if no `FF E1` pair follows
/// - `SegmentTooShort` if the marker is not followed by a full length field
pub fn locate_app1(data: &[u8]) -> Result<Segment, ExifError> {
    if !is_jpeg(data) {
        return Err(ExifError::NotAJpeg);
    }

    // windows(2) never yields a pair for a trailing 0xFF
    let marker_start = data[SOI.len()..]
        .windows(2)
        .position(|pair| pair == APP1)
        .map(|pos| pos + SOI.len())
        .ok_or(ExifError::App1NotFound)?;

    let start = marker_start + APP1.len();
    let header = data
        .get(marker_start..marker_start + MARKER_HEADER_SIZE)
        .ok_or(ExifError::SegmentTooShort {
            declared: LENGTH_FIELD_SIZE,
            available: data.len() - start,
        })?;
    let length = segment_length(header).ok_or(ExifError::SegmentTooShort {
        declared: LENGTH_FIELD_SIZE,
        available: data.len() - start,
    })?;

    debug!(marker_start, length, "Found APP1 segment");

    Ok(Segment {
        marker_start,
        start,
        length,
    })
}

/// Read the declared segment length from a marker header.
///
/// The length is the big-endian u16 in the last two bytes of the header.
/// Returns `None` if fewer than two bytes are given.
pub fn segment_length(marker_header: &[u8]) -> Option<u16> {
    let tail = marker_header.len().checked_sub(LENGTH_FIELD_SIZE)?;
    read_u16_be(&marker_header[tail..])
}

/// Slice the EXIF block out of the APP1 segment.
///
/// Takes `segment.length` bytes from the payload start and drops the
/// leading length field.
///
/// # Errors
/// - `InvalidSegmentLength` if the declared length is below 2
/// - `SegmentTooShort` if the data ends before the declared length
pub fn extract_exif_block<'a>(data: &'a [u8], segment: &Segment) -> Result<&'a [u8], ExifError> {
    let declared = segment.length as usize;
    if declared < LENGTH_FIELD_SIZE {
        return Err(ExifError::InvalidSegmentLength(segment.length));
    }

    let available = data.len().saturating_sub(segment.start);
    if available < declared {
        return Err(ExifError::SegmentTooShort {
            declared,
            available,
        });
    }

    Ok(&data[segment.start + LENGTH_FIELD_SIZE..segment.end()])
}

// =============================================================================
// Tests
// =============================================================================
