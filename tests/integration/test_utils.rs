//! Test utilities for integration tests.
//!
//! Provides a builder that assembles synthetic EXIF blocks and wraps them
//! in minimal JPEG streams, in either byte order.

// =============================================================================
// Byte Order
// =============================================================================

/// Byte order of the generated TIFF structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrderType {
    LittleEndian,
    BigEndian,
}

impl ByteOrderType {
    pub fn marker(self) -> [u8; 2] {
        match self {
            ByteOrderType::LittleEndian => *b"II",
            ByteOrderType::BigEndian => *b"MM",
        }
    }

    pub fn u16(self, value: u16) -> [u8; 2] {
        match self {
            ByteOrderType::LittleEndian => value.to_le_bytes(),
            ByteOrderType::BigEndian => value.to_be_bytes(),
        }
    }

    pub fn u32(self, value: u32) -> [u8; 4] {
        match self {
            ByteOrderType::LittleEndian => value.to_le_bytes(),
            ByteOrderType::BigEndian => value.to_be_bytes(),
        }
    }
}

// =============================================================================
// ExifBuilder
// =============================================================================

enum EntryValue {
    /// Value bytes, placed inline or in the value region as needed
    Data(Vec<u8>),
    /// Explicit offset with no backing data
    Offset(u32),
}

struct Entry {
    tag: u16,
    format: u16,
    count: u32,
    value: EntryValue,
}

/// Builds an EXIF block with a single IFD.
///
/// Layout (offsets relative to the TIFF header):
/// ```text
/// 0:        TIFF header
/// 8:        IFD entry count
/// 10:       entries, 12 bytes each
/// 10+12n:   next IFD offset (0)
/// 14+12n:   value region
/// ```
pub struct ExifBuilder {
    order: ByteOrderType,
    entries: Vec<Entry>,
    declared_count: Option<u16>,
}

impl ExifBuilder {
    pub fn new(order: ByteOrderType) -> Self {
        Self {
            order,
            entries: Vec::new(),
            declared_count: None,
        }
    }

    /// NUL-terminated ASCII value.
    pub fn ascii(self, tag: u16, text: &str) -> Self {
        let mut data = text.as_bytes().to_vec();
        data.push(0);
        let count = data.len() as u32;
        self.raw(tag, 2, count, data)
    }

    pub fn short(self, tag: u16, value: u16) -> Self {
        let data = self.order.u16(value).to_vec();
        self.raw(tag, 3, 1, data)
    }

    pub fn long(self, tag: u16, value: u32) -> Self {
        let data = self.order.u32(value).to_vec();
        self.raw(tag, 4, 1, data)
    }

    pub fn rational(self, tag: u16, numerator: u32, denominator: u32) -> Self {
        let mut data = self.order.u32(numerator).to_vec();
        data.extend_from_slice(&self.order.u32(denominator));
        self.raw(tag, 5, 1, data)
    }

    /// Entry with arbitrary format and already-encoded value bytes.
    pub fn raw(mut self, tag: u16, format: u16, count: u32, data: Vec<u8>) -> Self {
        self.entries.push(Entry {
            tag,
            format,
            count,
            value: EntryValue::Data(data),
        });
        self
    }

    /// Entry whose value/offset field holds `offset`, with nothing behind it.
    pub fn raw_offset(mut self, tag: u16, format: u16, count: u32, offset: u32) -> Self {
        self.entries.push(Entry {
            tag,
            format,
            count,
            value: EntryValue::Offset(offset),
        });
        self
    }

    /// Override the entry count written at the start of the IFD.
    pub fn declare_count(mut self, count: u16) -> Self {
        self.declared_count = Some(count);
        self
    }

    /// TIFF header + IFD + value region.
    pub fn build_tiff(&self) -> Vec<u8> {
        let order = self.order;
        let value_region_start = 14 + 12 * self.entries.len();

        let mut tiff = Vec::new();
        tiff.extend_from_slice(&order.marker());
        tiff.extend_from_slice(&order.u16(42));
        tiff.extend_from_slice(&order.u32(8));

        let count = self.declared_count.unwrap_or(self.entries.len() as u16);
        tiff.extend_from_slice(&order.u16(count));

        let mut values = Vec::new();
        for entry in &self.entries {
            tiff.extend_from_slice(&order.u16(entry.tag));
            tiff.extend_from_slice(&order.u16(entry.format));
            tiff.extend_from_slice(&order.u32(entry.count));

            match &entry.value {
                EntryValue::Data(data) if data.len() <= 4 => {
                    let mut inline = [0u8; 4];
                    inline[..data.len()].copy_from_slice(data);
                    tiff.extend_from_slice(&inline);
                }
                EntryValue::Data(data) => {
                    let offset = (value_region_start + values.len()) as u32;
                    tiff.extend_from_slice(&order.u32(offset));
                    values.extend_from_slice(data);
                }
                EntryValue::Offset(offset) => {
                    tiff.extend_from_slice(&order.u32(*offset));
                }
            }
        }

        tiff.extend_from_slice(&[0, 0, 0, 0]);
        tiff.extend_from_slice(&values);
        tiff
    }

    /// `Exif\0\0` + TIFF structure.
    pub fn build_block(&self) -> Vec<u8> {
        let mut block = b"Exif\0\0".to_vec();
        block.extend_from_slice(&self.build_tiff());
        block
    }

    /// Complete JPEG stream carrying the block in APP1.
    pub fn build_jpeg(&self) -> Vec<u8> {
        jpeg_with_app1(&self.build_block())
    }
}

// =============================================================================
// JPEG Helpers
// =============================================================================

/// A JFIF APP0 segment.
pub const APP0_JFIF: [u8; 18] = [
    0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01, 0x01, 0x00, 0x00, 0x01, 0x00,
    0x01, 0x00, 0x00,
];

/// Position of the EXIF block within `jpeg_with_app1` output.
pub const EXIF_BLOCK_OFFSET: usize = 2 + APP0_JFIF.len() + 4;

/// SOI + APP0 + APP1(payload) + a stand-in for the scan + EOI.
pub fn jpeg_with_app1(payload: &[u8]) -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8];
    data.extend_from_slice(&APP0_JFIF);
    data.extend_from_slice(&app1_segment(payload));
    data.extend_from_slice(&[0xFF, 0xDA, 0x00, 0x02, 0x12, 0x34, 0x56]);
    data.extend_from_slice(&[0xFF, 0xD9]);
    data
}

/// APP1 marker, length field and payload.
pub fn app1_segment(payload: &[u8]) -> Vec<u8> {
    let mut segment = vec![0xFF, 0xE1];
    segment.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
    segment.extend_from_slice(payload);
    segment
}

/// SOI + APP0 + scan + EOI, with no APP1 anywhere.
pub fn jpeg_without_app1() -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8];
    data.extend_from_slice(&APP0_JFIF);
    data.extend_from_slice(&[0xFF, 0xDA, 0x00, 0x02, 0x12, 0x34]);
    data.extend_from_slice(&[0xFF, 0xD9]);
    data
}
