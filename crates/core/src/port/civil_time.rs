// Civil Time Port
// reason: keeps calendar/timezone database concerns out of the arithmetic core

use thiserror::Error;

use crate::domain::{CivilTime, Timestamp};

/// Failures reported by a civil-time converter
///
/// The core passes these through unchanged; it never guesses a substitute
/// instant for a local time the converter could not resolve.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Local time {local} does not exist in {timezone}")]
    NonexistentLocalTime { local: String, timezone: String },

    #[error("Local time {local} is ambiguous in {timezone}")]
    AmbiguousLocalTime { local: String, timezone: String },

    #[error("Invalid civil fields: {0}")]
    InvalidFields(String),

    #[error("Timestamp out of representable range: {0}")]
    OutOfRange(Timestamp),

    #[error("Sub-millisecond precision rejected: {0} ns")]
    SubMillisecond(u32),
}

pub type Result<T> = std::result::Result<T, ConversionError>;

/// Civil time converter interface (decompose / compose)
///
/// Implementations must honour the offset active at each instant, so that
/// daylight-saving transitions are reflected in both directions.
#[cfg_attr(test, mockall::automock)]
pub trait CivilTimeConverter: Send + Sync {
    /// Split an absolute instant into calendar fields in `timezone`
    ///
    /// # Arguments
    /// * `ts` - Milliseconds since epoch
    /// * `timezone` - Target timezone identifier
    ///
    /// # Returns
    /// CivilTime with `utc_offset_seconds` set to the offset active at `ts`
    fn decompose(&self, ts: Timestamp, timezone: &str) -> Result<CivilTime>;

    /// Interpret calendar fields in their timezone and return the instant
    ///
    /// Fields are expected at millisecond precision; sub-millisecond policy is
    /// applied by the caller before this is invoked.
    fn compose(&self, civil: &CivilTime) -> Result<Timestamp>;
}
