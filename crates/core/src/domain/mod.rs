// Domain Layer - Units, constants and civil-time values

pub mod civil;
pub mod constants;
pub mod error;
pub mod unit;

// Re-exports
pub use civil::{CivilTime, TimezoneId};
pub use constants::{DAY, HOUR, MINUTE, SECOND};
pub use error::DomainError;
pub use unit::{Timestamp, Unit};
