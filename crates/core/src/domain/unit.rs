// Time Unit Domain Model

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::constants::{DAY, HOUR, MINUTE, SECOND};
use super::error::DomainError;

/// Timestamp: signed milliseconds since 1970-01-01T00:00:00Z (negative = before epoch)
pub type Timestamp = i64;

/// Granularity supported by boundary, validation, arithmetic and comparison operations
///
/// Each unit has a fixed length in milliseconds. `Day` is a UTC calendar day;
/// local-day boundaries are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Second,
    Minute,
    #[default]
    Hour,
    Day,
}

impl Unit {
    /// All units, finest first
    pub const ALL: [Unit; 4] = [Unit::Second, Unit::Minute, Unit::Hour, Unit::Day];

    /// Length of this unit in milliseconds
    pub const fn factor(self) -> i64 {
        match self {
            Unit::Second => SECOND,
            Unit::Minute => MINUTE,
            Unit::Hour => HOUR,
            Unit::Day => DAY,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "second" | "s" => Ok(Unit::Second),
            "minute" | "m" => Ok(Unit::Minute),
            "hour" | "h" => Ok(Unit::Hour),
            "day" | "d" => Ok(Unit::Day),
            _ => Err(DomainError::UnknownUnit(s.to_string())),
        }
    }
}
