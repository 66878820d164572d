//! Command-line configuration for the `exif-parser` binary.
//!
//! Options can be given as flags or through environment variables:
//!
//! - `EXIF_IMAGE` - JPEG file to read (required)
//! - `EXIF_OUTPUT` - Where the JSON result is written (default: output.json)
//!
//! # Example
//!
//! ```ignore
//! use exif_parser::config::Config;
//!
//! let config = Config::parse();
//! config.validate()?;
//! println!("Reading {}", config.image.display());
//! ```

use std::path::PathBuf;

use clap::Parser;

// =============================================================================
// Default Values
// =============================================================================

/// Default output file.
pub const DEFAULT_OUTPUT: &str = "output.json";

// =============================================================================
// CLI Arguments
// =============================================================================

/// EXIF Parser - read camera metadata from a JPEG file.
///
/// Decodes the EXIF tags in the image's APP1 segment, prints them as JSON
/// and writes the same JSON to the output file.
#[derive(Parser, Debug, Clone)]
#[command(name = "exif-parser")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Path to the JPEG image to process.
    #[arg(short, long, env = "EXIF_IMAGE")]
    pub image: PathBuf,

    /// Path to the file where the result is stored.
    #[arg(short, long, default_value = DEFAULT_OUTPUT, env = "EXIF_OUTPUT")]
    pub output: PathBuf,

    /// Emit single-line JSON instead of indented output.
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// Print the result without writing the output file.
    #[arg(long, default_value_t = false)]
    pub no_write: bool,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !self.image.exists() {
            return Err(format!(
                "Image file not found: {}. Set --image or EXIF_IMAGE",
                self.image.display()
            ));
        }
        if !self.image.is_file() {
            return Err(format!("Not a file: {}", self.image.display()));
        }

        if self.writes_output() && self.output.as_os_str().is_empty() {
            return Err("Output path is empty. Set --output or pass --no-write".to_string());
        }

        Ok(())
    }

    /// Whether the result is written to `output`.
    #[inline]
    pub fn writes_output(&self) -> bool {
        !self.no_write
    }

    /// Whether JSON output is indented.
    #[inline]
    pub fn pretty(&self) -> bool {
        !self.compact
    }
}

// =============================================================================
// Tests
// =============================================================================
