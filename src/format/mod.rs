//! Binary container formats: the JPEG segment stream and the TIFF
//! structure carried inside its APP1 segment.

pub mod jpeg;
pub mod tiff;

pub use jpeg::{extract_exif_block, is_jpeg, locate_app1, segment_length, Segment};
