//! IFD entry value resolution and decoding.
//!
//! Values of up to four bytes are stored inline in the entry. Larger values
//! live elsewhere in the EXIF block, at an offset relative to the TIFF
//! header. Both cases are resolved to a byte slice, which is then rendered
//! as text according to the entry's data format:
//!
//! | Format | Rendering |
//! |--------|-----------|
//! | ASCII | text with trailing NULs removed |
//! | SHORT, LONG | first component as a decimal integer |
//! | RATIONAL | first numerator/denominator quotient as a float, in exponent form outside 1e-4..1e6 |
//! | anything else | not rendered |

use super::ifd::IfdEntry;
use super::parser::{ByteOrder, TiffHeader};
use super::tags::FieldType;
use crate::error::SkipReason;

// =============================================================================
// ValueReader
// =============================================================================

/// Reads entry values out of an EXIF block.
///
/// Combines the block with the parsed header so offsets are resolved
/// against `tiff_base` and multi-byte values honor the declared byte order.
pub struct ValueReader<'a> {
    block: &'a [u8],
    header: &'a TiffHeader,
}

impl<'a> ValueReader<'a> {
    /// Create a new ValueReader.
    pub fn new(block: &'a [u8], header: &'a TiffHeader) -> Self {
        Self { block, header }
    }

    /// Get the byte order from the header.
    #[inline]
    pub fn byte_order(&self) -> ByteOrder {
        self.header.byte_order
    }

    /// Resolve the raw bytes of an entry's value.
    ///
    /// For inline values, returns the leading bytes of the value/offset
    /// field. For offset values, slices the EXIF block.
    pub fn read_bytes<'e>(&self, entry: &'e IfdEntry) -> Result<&'e [u8], SkipReason>
    where
        'a: 'e,
    {
        let size = entry.value_byte_size()?;

        if entry.is_inline() {
            return Ok(&entry.value_offset_bytes[..size as usize]);
        }

        let start = self.header.absolute(entry.value_offset(self.byte_order()));
        let end = start + size;
        if end > self.block.len() as u64 {
            return Err(SkipReason::ValueOutOfBounds);
        }

        // end fits in the block, so both bounds fit in usize
        let block: &'a [u8] = self.block;
        Ok(&block[start as usize..end as usize])
    }

    /// Render value bytes as text according to the entry's format.
    ///
    /// Fails with `UndecodableValue` when nothing would be rendered: an
    /// unrendered format, too few bytes, a zero denominator, or empty text.
    pub fn decode(&self, entry: &IfdEntry, bytes: &[u8]) -> Result<String, SkipReason> {
        let field_type = entry
            .field_type
            .ok_or(SkipReason::UnsupportedFormat(entry.field_type_raw))?;
        let byte_order = self.byte_order();

        let value = match field_type {
            FieldType::Ascii => Some(decode_ascii(bytes)),
            FieldType::Short => byte_order.read_u16(bytes).map(|v| v.to_string()),
            FieldType::Long => byte_order.read_u32(bytes).map(|v| v.to_string()),
            FieldType::Rational => decode_rational(bytes, byte_order),
            _ => None,
        };

        value
            .filter(|v| !v.is_empty())
            .ok_or(SkipReason::UndecodableValue)
    }

    /// Resolve and decode an entry's value in one step.
    pub fn read_string(&self, entry: &IfdEntry) -> Result<String, SkipReason> {
        let bytes = self.read_bytes(entry)?;
        self.decode(entry, bytes)
    }
}

/// Text up to the end of the value, with trailing NULs stripped.
fn decode_ascii(bytes: &[u8]) -> String {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |pos| pos + 1);
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

/// Quotient of the first rational, `None` if the denominator is zero.
fn decode_rational(bytes: &[u8], byte_order: ByteOrder) -> Option<String> {
    let numerator = byte_order.read_u32(bytes)?;
    let denominator = byte_order.read_u32(bytes.get(4..)?)?;
    if denominator == 0 {
        return None;
    }
    Some(format_float(numerator as f64 / denominator as f64))
}

/// Shortest round-trip rendering of a float, in exponent form when the
/// decimal exponent is below -4 or at least 6 (`6.25e-05`, `6e+06`).
fn format_float(value: f64) -> String {
    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if (-4..6).contains(&exponent) {
        return value.to_string();
    }

    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
}

// =============================================================================
// Tests
// =============================================================================
