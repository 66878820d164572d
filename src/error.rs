use thiserror::Error;

/// Structural errors that abort decoding of a JPEG file's EXIF data.
///
/// Problems with individual IFD entries never show up here; those are
/// skipped (see [`SkipReason`]) and decoding carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExifError {
    /// Input does not start with the JPEG start-of-image marker (FFD8)
    #[error("Not a JPEG file: missing start-of-image marker")]
    NotAJpeg,

    /// No APP1 marker (FFE1) was found in the input
    #[error("APP1 marker not found in image")]
    App1NotFound,

    /// Fewer bytes remain than the APP1 length field declares
    #[error("Invalid segment length: expected at least {declared} bytes, got {available}")]
    SegmentTooShort { declared: usize, available: usize },

    /// Declared APP1 length is smaller than the length field itself
    #[error("Invalid APP1 length field: {0} (must be at least 2)")]
    InvalidSegmentLength(u16),

    /// EXIF block cannot hold the identifier and TIFF header
    #[error("EXIF block too small: need at least {required} bytes, got {actual}")]
    BlockTooSmall { required: usize, actual: usize },

    /// EXIF block does not start with "Exif\0\0"
    #[error("Invalid EXIF header")]
    InvalidExifHeader,

    /// TIFF byte order marker is neither II nor MM
    #[error("Unknown byte order: expected 0x4949 (II) or 0x4D4D (MM), got 0x{0:04X}")]
    UnknownByteOrder(u16),

    /// TIFF magic number is not 42
    #[error("Invalid TIFF magic number: got {0}")]
    InvalidMagicNumber(u16),

    /// First IFD (plus its entry count) lies outside the EXIF block
    #[error("IFD offset out of bounds: offset {offset}, block length {block_len}")]
    IfdOffsetOutOfBounds { offset: u32, block_len: usize },
}

/// I/O errors raised by the file collaborators around the decoder.
#[derive(Debug, Clone, Error)]
pub enum IoError {
    /// Reading the input image failed
    #[error("Error reading {path}: {message}")]
    Read { path: String, message: String },

    /// Writing the output file failed
    #[error("Error writing {path}: {message}")]
    Write { path: String, message: String },
}

/// Errors from parsing an image file end to end.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// I/O error while reading the file
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// EXIF decoding error
    #[error("EXIF error: {0}")]
    Exif(#[from] ExifError),
}

/// Why a single IFD entry was left out of the decoded record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The 12-byte entry runs past the end of the EXIF block
    EntryOutOfBounds,

    /// Data format is not one of the ten known TIFF types
    UnsupportedFormat(u16),

    /// Offset-indirected value runs past the end of the EXIF block
    ValueOutOfBounds,

    /// Value decoded to nothing (zero denominator, unrendered format, empty text)
    UndecodableValue,

    /// Tag ID has no known field name
    UnknownTag,
}

impl SkipReason {
    /// Short description used in log lines.
    pub const fn describe(self) -> &'static str {
        match self {
            SkipReason::EntryOutOfBounds => "entry out of bounds",
            SkipReason::UnsupportedFormat(_) => "unsupported data format",
            SkipReason::ValueOutOfBounds => "value offset out of bounds",
            SkipReason::UndecodableValue => "value not decodable",
            SkipReason::UnknownTag => "unknown tag",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::UnsupportedFormat(format) => {
                write!(f, "{} ({})", self.describe(), format)
            }
            _ => f.write_str(self.describe()),
        }
    }
}
