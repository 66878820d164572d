//! # EXIF Parser
//!
//! Extracts camera metadata (EXIF tags) from the APP1 segment of a JPEG file
//! and exposes it as a flat set of named, human-readable values.
//!
//! ## Decoding Pipeline
//!
//! ```text
//! JPEG bytes -> APP1 segment -> EXIF block -> TIFF header -> IFD entries -> ExifRecord
//! ```
//!
//! Only the first IFD is read. SubIFDs (Exif, GPS), thumbnails and maker
//! notes are not followed. Malformed entries are skipped rather than failing
//! the whole decode; only structural errors are reported.
//!
//! ## Modules
//!
//! - [`mod@format`] - JPEG segment location and TIFF/IFD parsing
//! - [`exif`] - Tag table, output record and the decode pipeline
//! - [`io`] - Endian helpers and file collaborators
//! - [`config`] - CLI configuration
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```rust,no_run
//! use exif_parser::{decode_exif, ExifField};
//!
//! let data = std::fs::read("photo.jpg").unwrap();
//! let record = decode_exif(&data).unwrap();
//!
//! if let Some(make) = record.get(ExifField::Make) {
//!     println!("Camera: {}", make);
//! }
//! println!("{}", record.to_json(true).unwrap());
//! ```

pub mod config;
pub mod error;
pub mod exif;
pub mod format;
pub mod io;

// Re-export commonly used types
pub use config::Config;
pub use error::{ExifError, IoError, ParseError, SkipReason};
pub use exif::{
    decode_entry, decode_exif, decode_exif_block, parse_image_file, ExifField, ExifRecord,
    FieldInfo, FIELD_COUNT,
};
pub use format::jpeg::{extract_exif_block, is_jpeg, locate_app1, segment_length, Segment};
pub use format::tiff::{
    ByteOrder, FieldType, Ifd, IfdEntry, TiffHeader, ValueReader, EXIF_IDENTIFIER,
    IFD_ENTRY_SIZE, TIFF_HEADER_SIZE, TIFF_MAGIC,
};
pub use io::{read_image_file, write_output_file};
