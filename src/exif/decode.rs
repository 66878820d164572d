//! End-to-end decoding: raw JPEG bytes in, [`ExifRecord`] out.
//!
//! Structural problems (not a JPEG, no APP1, bad TIFF header) abort the
//! decode with an [`ExifError`]. Problems confined to one IFD entry only
//! drop that entry; they are logged at debug level and decoding continues.

use std::path::Path;

use tracing::{debug, info};

use super::fields::ExifField;
use super::record::ExifRecord;
use crate::error::{ExifError, ParseError, SkipReason};
use crate::format::jpeg::{extract_exif_block, locate_app1};
use crate::format::tiff::{Ifd, IfdEntry, TiffHeader, ValueReader};
use crate::io::read_image_file;

/// Decode the EXIF metadata of a JPEG image held in memory.
///
/// Decoding has no side effects beyond logging, so the same input always
/// yields the same record.
pub fn decode_exif(data: &[u8]) -> Result<ExifRecord, ExifError> {
    let segment = locate_app1(data)?;
    let block = extract_exif_block(data, &segment)?;
    decode_exif_block(block)
}

/// Decode an EXIF block (`Exif\0\0` + TIFF header + IFD + value region).
pub fn decode_exif_block(block: &[u8]) -> Result<ExifRecord, ExifError> {
    let header = TiffHeader::parse(block)?;
    let ifd = Ifd::parse(block, &header)?;
    let reader = ValueReader::new(block, &header);

    let mut record = ExifRecord::new();
    for entry in &ifd.entries {
        match decode_entry(&reader, entry) {
            Ok((field, value)) => record.set(field, value),
            Err(reason) => debug!(
                index = entry.index,
                tag = %format_args!("0x{:04X}", entry.tag),
                %reason,
                "Skipping IFD entry"
            ),
        }
    }

    debug!(
        entries = ifd.entry_count,
        decoded = record.len(),
        "Decoded EXIF block"
    );

    Ok(record)
}

/// Resolve one entry to its field and rendered value.
pub fn decode_entry(
    reader: &ValueReader<'_>,
    entry: &IfdEntry,
) -> Result<(ExifField, String), SkipReason> {
    let bytes = reader.read_bytes(entry)?;
    let field = ExifField::from_tag(entry.tag).ok_or(SkipReason::UnknownTag)?;
    let value = reader.decode(entry, bytes)?;
    Ok((field, value))
}

/// Read a JPEG file and decode its EXIF metadata.
pub fn parse_image_file(path: &Path) -> Result<ExifRecord, ParseError> {
    info!("Processing image: {}", path.display());

    let data = read_image_file(path)?;
    let record = decode_exif(&data)?;
    Ok(record)
}

// =============================================================================
// Tests
// =============================================================================
