//! Byte count conversion with decimal (not binary) thresholds.

use std::fmt;

pub const BYTES_PER_MB: f64 = 1_000_000.0;
pub const BYTES_PER_GB: f64 = 1_000_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    MB,
    GB,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::MB => "MB",
            Unit::GB => "GB",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A byte count resolved to a unit and rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertedValue {
    pub value: f64,
    pub unit: Unit,
}

impl fmt::Display for ConvertedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.value, self.unit)
    }
}

/// Round half away from zero to two fractional digits
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert a raw byte count into MB or GB.
///
/// Anything strictly above one gigabyte is reported in GB; everything else,
/// including exactly 1 GB and sub-megabyte counts, is divided by one megabyte.
pub fn convert_bytes(bytes: u64) -> ConvertedValue {
    let bytes = bytes as f64;
    if bytes > BYTES_PER_GB {
        ConvertedValue {
            value: round2(bytes / BYTES_PER_GB),
            unit: Unit::GB,
        }
    } else {
        ConvertedValue {
            value: round2(bytes / BYTES_PER_MB),
            unit: Unit::MB,
        }
    }
}
