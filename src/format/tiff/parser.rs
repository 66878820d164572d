//! EXIF identifier and TIFF header parsing.
//!
//! # EXIF Block Structure
//! ```text
//! Bytes 0-5:   "Exif\0\0"
//! Bytes 6-7:   Byte order (0x4949 = little-endian "II", 0x4D4D = big-endian "MM")
//! Bytes 8-9:   Magic number (42 = 0x002A)
//! Bytes 10-13: Offset to the first IFD, relative to byte 6
//! ```
//!
//! Every offset inside the TIFF structure is relative to the start of the
//! TIFF header (`tiff_base`), not to the start of the EXIF block or file.

use tracing::debug;

use crate::error::ExifError;
use crate::io::{read_u16_be, read_u16_le, read_u32_be, read_u32_le};

// =============================================================================
// Constants
// =============================================================================

/// Identifier that opens every EXIF APP1 payload.
pub const EXIF_IDENTIFIER: &[u8; 6] = b"Exif\0\0";

/// Magic bytes indicating little-endian byte order ("II" for Intel)
const BYTE_ORDER_LITTLE_ENDIAN: u16 = 0x4949;

/// Magic bytes indicating big-endian byte order ("MM" for Motorola)
const BYTE_ORDER_BIG_ENDIAN: u16 = 0x4D4D;

/// TIFF magic number
pub const TIFF_MAGIC: u16 = 42;

/// Size of the TIFF header in bytes
pub const TIFF_HEADER_SIZE: usize = 8;

/// Size of the entry count at the start of an IFD
pub const IFD_COUNT_SIZE: usize = 2;

// =============================================================================
// ByteOrder
// =============================================================================

/// Byte order (endianness) declared by the TIFF header.
///
/// All multi-byte values in the TIFF structure are read with this order.
/// Reads return `None` when the slice is too short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian ("II" = Intel)
    LittleEndian,
    /// Big-endian ("MM" = Motorola)
    BigEndian,
}

impl ByteOrder {
    /// Read a u16 from a byte slice using this byte order.
    #[inline]
    pub fn read_u16(self, bytes: &[u8]) -> Option<u16> {
        match self {
            ByteOrder::LittleEndian => read_u16_le(bytes),
            ByteOrder::BigEndian => read_u16_be(bytes),
        }
    }

    /// Read a u32 from a byte slice using this byte order.
    #[inline]
    pub fn read_u32(self, bytes: &[u8]) -> Option<u32> {
        match self {
            ByteOrder::LittleEndian => read_u32_le(bytes),
            ByteOrder::BigEndian => read_u32_be(bytes),
        }
    }

    /// Detect the byte order from the two marker bytes.
    pub fn from_marker(marker: [u8; 2]) -> Result<Self, ExifError> {
        // Read as little-endian because we're matching byte patterns
        match u16::from_le_bytes(marker) {
            BYTE_ORDER_LITTLE_ENDIAN => Ok(ByteOrder::LittleEndian),
            BYTE_ORDER_BIG_ENDIAN => Ok(ByteOrder::BigEndian),
            other => Err(ExifError::UnknownByteOrder(other)),
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "little-endian",
            ByteOrder::BigEndian => "big-endian",
        }
    }
}

// =============================================================================
// TiffHeader
// =============================================================================

/// Parsed TIFF header of an EXIF block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiffHeader {
    /// Byte order for all multi-byte values in the block
    pub byte_order: ByteOrder,

    /// Magic number (always 42 once parsed)
    pub magic: u16,

    /// Offset to the first IFD, relative to `tiff_base`
    pub first_ifd_offset: u32,

    /// Position of the TIFF header within the EXIF block
    pub tiff_base: usize,
}

impl TiffHeader {
    /// Parse the EXIF identifier and TIFF header at the start of an EXIF block.
    ///
    /// # Errors
    /// - `BlockTooSmall` if the block cannot hold identifier + header
    /// - `InvalidExifHeader` if the block does not start with `Exif\0\0`
    /// - `UnknownByteOrder` if the byte order bytes are not II or MM
    /// - `InvalidMagicNumber` if the magic number is not 42
    /// - `IfdOffsetOutOfBounds` if the first IFD's entry count lies outside the block
    pub fn parse(block: &[u8]) -> Result<Self, ExifError> {
        let tiff_base = EXIF_IDENTIFIER.len();
        let required = tiff_base + TIFF_HEADER_SIZE;
        if block.len() < required {
            return Err(ExifError::BlockTooSmall {
                required,
                actual: block.len(),
            });
        }

        if &block[..tiff_base] != EXIF_IDENTIFIER {
            return Err(ExifError::InvalidExifHeader);
        }

        let header = &block[tiff_base..required];
        let byte_order = ByteOrder::from_marker([header[0], header[1]])?;

        // Length was checked above, so these reads cannot come up short
        let magic = byte_order
            .read_u16(&header[2..4])
            .ok_or(ExifError::InvalidExifHeader)?;
        if magic != TIFF_MAGIC {
            return Err(ExifError::InvalidMagicNumber(magic));
        }

        let first_ifd_offset = byte_order
            .read_u32(&header[4..8])
            .ok_or(ExifError::InvalidExifHeader)?;

        let parsed = TiffHeader {
            byte_order,
            magic,
            first_ifd_offset,
            tiff_base,
        };

        let ifd_end = parsed.ifd_position() + IFD_COUNT_SIZE as u64;
        if ifd_end > block.len() as u64 {
            return Err(ExifError::IfdOffsetOutOfBounds {
                offset: first_ifd_offset,
                block_len: block.len(),
            });
        }

        debug!(
            byte_order = byte_order.name(),
            first_ifd_offset, "Parsed TIFF header"
        );

        Ok(parsed)
    }

    /// Absolute position of the first IFD within the EXIF block.
    #[inline]
    pub fn ifd_position(&self) -> u64 {
        self.absolute(self.first_ifd_offset)
    }

    /// Convert a TIFF-relative offset to a position within the EXIF block.
    #[inline]
    pub fn absolute(&self, offset: u32) -> u64 {
        self.tiff_base as u64 + offset as u64
    }
}

// =============================================================================
// Tests
// =============================================================================
