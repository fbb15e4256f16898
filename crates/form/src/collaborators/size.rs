//! Human-readable file size descriptors.

use std::fmt;

use serde::Deserialize;

use crate::error::SizeParseError;

/// A size limit as written in options: a byte count or a descriptor such
/// as `"2MB"` or `"512 kb"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SizeLimit {
    Bytes(u64),
    Descriptor(String),
}

impl fmt::Display for SizeLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(n) => write!(f, "{n} bytes"),
            Self::Descriptor(s) => f.write_str(s),
        }
    }
}

impl From<u64> for SizeLimit {
    fn from(bytes: u64) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&str> for SizeLimit {
    fn from(descriptor: &str) -> Self {
        Self::Descriptor(descriptor.to_owned())
    }
}

impl From<String> for SizeLimit {
    fn from(descriptor: String) -> Self {
        Self::Descriptor(descriptor)
    }
}

/// Turns a [`SizeLimit`] into a byte count.
pub trait SizeParser: Send + Sync {
    fn parse(&self, limit: &SizeLimit) -> Result<u64, SizeParseError>;
}

/// Binary-unit parser: `b`, `k`/`kb`/`kib`, `m`/`mb`/`mib`, `g`/`gb`/`gib`,
/// `t`/`tb`/`tib`, `p`/`pb`/`pib`, case-insensitive, all powers of 1024.
/// A bare number is a byte count; fractions are truncated after scaling.
#[derive(Debug, Default, Clone, Copy)]
pub struct HumanSizeParser;

impl SizeParser for HumanSizeParser {
    fn parse(&self, limit: &SizeLimit) -> Result<u64, SizeParseError> {
        match limit {
            SizeLimit::Bytes(n) => Ok(*n),
            SizeLimit::Descriptor(raw) => parse_descriptor(raw),
        }
    }
}

fn parse_descriptor(raw: &str) -> Result<u64, SizeParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(SizeParseError::Empty);
    }

    let split = raw
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(raw.len());
    let (number, unit) = raw.split_at(split);

    let number: f64 = number
        .parse()
        .map_err(|_| SizeParseError::InvalidNumber(raw.to_owned()))?;

    let exponent = match unit.trim().to_ascii_lowercase().as_str() {
        "" | "b" => 0,
        "k" | "kb" | "kib" => 1,
        "m" | "mb" | "mib" => 2,
        "g" | "gb" | "gib" => 3,
        "t" | "tb" | "tib" => 4,
        "p" | "pb" | "pib" => 5,
        other => return Err(SizeParseError::UnknownUnit(other.to_owned())),
    };

    Ok((number * 1024f64.powi(exponent)).floor() as u64)
}
