//! TIFF structure embedded in an EXIF block.
//!
//! # Key Concepts
//!
//! - **Byte order**: the TIFF header declares its endianness (II = little-endian,
//!   MM = big-endian). All multi-byte values must be read respecting this order.
//!
//! - **TIFF base**: offsets stored in the header and in IFD entries are relative
//!   to the start of the TIFF header, which sits six bytes into the EXIF block
//!   (after `Exif\0\0`).
//!
//! - **IFD (Image File Directory)**: a counted list of 12-byte entries, each
//!   naming a tag, a data format and a component count.
//!
//! - **Inline vs offset values**: values of up to four bytes are stored inline
//!   in the entry, larger values are stored at an offset pointed to by the entry.

mod ifd;
mod parser;
mod tags;
mod values;

pub use ifd::{Ifd, IfdEntry, IFD_ENTRY_SIZE};
pub use parser::{ByteOrder, TiffHeader, EXIF_IDENTIFIER, TIFF_HEADER_SIZE, TIFF_MAGIC};
pub use tags::FieldType;
pub use values::ValueReader;
