//! A JSON document recovered from one entry of a config folder.

use std::fmt;

use serde_json::Value;

/// A successfully parsed file.
///
/// Documents have no identity beyond their position in the loader's output;
/// `name` is the directory entry they came from and is kept for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    /// File name of the entry, without the folder prefix.
    pub name: String,
    /// The decoded JSON value.
    pub value: Value,
}

impl ParsedDocument {
    /// Pair a decoded value with the entry name it came from.
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Consume self and return the JSON value.
    pub fn into_value(self) -> Value {
        self.value
    }
}

/// Formats as compact JSON, the same text `serde_json` produces for the value.
impl fmt::Display for ParsedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
