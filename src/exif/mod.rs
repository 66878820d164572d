//! EXIF decoding: the tag table, the output record and the pipeline that
//! fills it.
//!
//! - [`decode_exif`] - decode raw JPEG bytes
//! - [`decode_exif_block`] - decode an already extracted EXIF block
//! - [`parse_image_file`] - read a file and decode it

mod decode;
mod fields;
mod record;

pub use decode::{decode_entry, decode_exif, decode_exif_block, parse_image_file};
pub use fields::{ExifField, FieldInfo, FIELD_COUNT};
pub use record::ExifRecord;
