//! The decoded output record.

use serde::ser::{Error as _, Serialize, SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;

use super::fields::{ExifField, FIELD_COUNT};

/// Indentation of pretty-printed JSON output.
const PRETTY_INDENT: &[u8] = b" ";

// =============================================================================
// ExifRecord
// =============================================================================

/// Decoded EXIF values keyed by field.
///
/// A field is either absent or holds the text rendering of its value.
/// Setting a field that already has a value replaces it, so when a tag ID
/// repeats in the directory the later entry wins.
///
/// Serializes as a map of `key -> value` in [`ExifField`] declaration order,
/// leaving absent fields out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExifRecord {
    values: [Option<String>; FIELD_COUNT],
}

impl Default for ExifRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl ExifRecord {
    /// Create a record with every field absent.
    pub fn new() -> Self {
        Self {
            values: std::array::from_fn(|_| None),
        }
    }

    /// Get a field's value, if present.
    pub fn get(&self, field: ExifField) -> Option<&str> {
        self.values[field as usize].as_deref()
    }

    /// Set a field's value, replacing any previous one.
    pub fn set(&mut self, field: ExifField, value: impl Into<String>) {
        self.values[field as usize] = Some(value.into());
    }

    /// Number of present fields.
    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Whether every field is absent.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Present fields and their values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ExifField, &str)> + '_ {
        ExifField::ALL
            .into_iter()
            .zip(self.values.iter())
            .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
    }

    /// Render the record as JSON.
    ///
    /// `pretty` selects output with one key per line, indented by a single
    /// space, over a single line.
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if !pretty {
            return serde_json::to_string(self);
        }

        let mut out = Vec::new();
        let formatter = PrettyFormatter::with_indent(PRETTY_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut serializer)?;
        String::from_utf8(out).map_err(serde_json::Error::custom)
    }
}

// =============================================================================
// Serialization
// =============================================================================

impl Serialize for ExifRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.key(), value)?;
        }
        map.end()
    }
}

// =============================================================================
// Tests
// =============================================================================
