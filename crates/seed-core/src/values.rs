//! Column values produced by the generator.

use serde::Serialize;
use std::fmt;

/// A single column value ready to be bound as a statement parameter.
///
/// The seeded schema only needs integers and text; timestamps are rendered
/// to text by the builders before they get here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum SeedValue {
    /// Signed integer (ids, years).
    Int(i64),

    /// UTF-8 text.
    Text(String),
}

impl SeedValue {
    /// Try to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Text(_) => None,
        }
    }

    /// Try to get this value as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Int(_) => None,
        }
    }
}

impl From<i64> for SeedValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for SeedValue {
    fn from(value: u64) -> Self {
        // Generated ids never come near i64::MAX.
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<u8> for SeedValue {
    fn from(value: u8) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<String> for SeedValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for SeedValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for SeedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}
