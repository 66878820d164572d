//! Image File Directory walking.
//!
//! # IFD Structure
//! ```text
//! Bytes 0-1:  Entry count N
//! Then N entries of 12 bytes each:
//!   Bytes 0-1:  Tag ID
//!   Bytes 2-3:  Data format
//!   Bytes 4-7:  Component count
//!   Bytes 8-11: Value (if it fits in 4 bytes) or offset to the value
//! ```
//!
//! Only the first IFD is walked. The trailing next-IFD offset and any
//! SubIFD pointers are not followed.

use tracing::debug;

use crate::error::{ExifError, SkipReason};

use super::parser::{ByteOrder, TiffHeader, IFD_COUNT_SIZE};
use super::tags::FieldType;

/// Size of a single IFD entry in bytes.
pub const IFD_ENTRY_SIZE: usize = 12;

// =============================================================================
// IfdEntry
// =============================================================================

/// A single raw IFD entry.
///
/// The value/offset field is kept as raw bytes; whether it holds the value
/// itself or an offset depends on the format and count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IfdEntry {
    /// Position of this entry within its IFD
    pub index: u16,

    /// Tag ID
    pub tag: u16,

    /// Data format as stored in the file
    pub field_type_raw: u16,

    /// Decoded data format, `None` if the code is unknown
    pub field_type: Option<FieldType>,

    /// Number of components
    pub count: u32,

    /// Raw value/offset field
    pub value_offset_bytes: [u8; 4],
}

impl IfdEntry {
    /// Parse an entry from exactly `IFD_ENTRY_SIZE` bytes.
    fn parse(index: u16, bytes: &[u8; IFD_ENTRY_SIZE], byte_order: ByteOrder) -> Option<Self> {
        let field_type_raw = byte_order.read_u16(&bytes[2..4])?;

        Some(IfdEntry {
            index,
            tag: byte_order.read_u16(&bytes[0..2])?,
            field_type_raw,
            field_type: FieldType::from_u16(field_type_raw),
            count: byte_order.read_u32(&bytes[4..8])?,
            value_offset_bytes: [bytes[8], bytes[9], bytes[10], bytes[11]],
        })
    }

    /// Total size of the value in bytes.
    ///
    /// Fails with `UnsupportedFormat` if the data format is unknown.
    #[inline]
    pub fn value_byte_size(&self) -> Result<u64, SkipReason> {
        self.field_type
            .map(|field_type| field_type.value_size(self.count))
            .ok_or(SkipReason::UnsupportedFormat(self.field_type_raw))
    }

    /// Whether the value is stored inline in the value/offset field.
    #[inline]
    pub fn is_inline(&self) -> bool {
        self.value_byte_size()
            .map(|size| size <= FieldType::INLINE_THRESHOLD as u64)
            .unwrap_or(false)
    }

    /// Interpret the value/offset field as a TIFF-relative offset.
    #[inline]
    pub fn value_offset(&self, byte_order: ByteOrder) -> u32 {
        match byte_order {
            ByteOrder::LittleEndian => u32::from_le_bytes(self.value_offset_bytes),
            ByteOrder::BigEndian => u32::from_be_bytes(self.value_offset_bytes),
        }
    }
}

// =============================================================================
// Ifd
// =============================================================================

/// The entries of the first IFD, in directory order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ifd {
    /// Declared number of entries
    pub entry_count: u16,

    /// Entries that lie within the EXIF block
    pub entries: Vec<IfdEntry>,

    /// Indices of declared entries that run past the end of the block
    pub out_of_bounds: Vec<u16>,
}

impl Ifd {
    /// Walk the IFD that the header points to.
    ///
    /// Entries that would extend past the end of the block are recorded in
    /// `out_of_bounds` and skipped; the walk itself never fails once the
    /// entry count is readable, which `TiffHeader::parse` already checked.
    pub fn parse(block: &[u8], header: &TiffHeader) -> Result<Self, ExifError> {
        let out_of_bounds_err = || ExifError::IfdOffsetOutOfBounds {
            offset: header.first_ifd_offset,
            block_len: block.len(),
        };

        let ifd_start = usize::try_from(header.ifd_position()).map_err(|_| out_of_bounds_err())?;
        let ifd_data = block.get(ifd_start..).ok_or_else(out_of_bounds_err)?;
        let entry_count = header
            .byte_order
            .read_u16(ifd_data)
            .ok_or_else(out_of_bounds_err)?;

        let capacity = (entry_count as usize).min(ifd_data.len() / IFD_ENTRY_SIZE);
        let mut entries = Vec::with_capacity(capacity);
        let mut out_of_bounds = Vec::new();

        for index in 0..entry_count {
            let entry_start = IFD_COUNT_SIZE + index as usize * IFD_ENTRY_SIZE;
            let entry = ifd_data
                .get(entry_start..entry_start + IFD_ENTRY_SIZE)
                .and_then(|bytes| <&[u8; IFD_ENTRY_SIZE]>::try_from(bytes).ok())
                .and_then(|bytes| IfdEntry::parse(index, bytes, header.byte_order));

            match entry {
                Some(entry) => entries.push(entry),
                None => {
                    debug!(index, reason = %SkipReason::EntryOutOfBounds, "Skipping IFD entry");
                    out_of_bounds.push(index);
                }
            }
        }

        Ok(Ifd {
            entry_count,
            entries,
            out_of_bounds,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
