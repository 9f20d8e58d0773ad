// Millis Core - Millisecond timestamp arithmetic & civil-time port
// NO date/time library dependencies: calendar work lives behind `port::CivilTimeConverter`

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use application::*;
pub use domain::{CivilTime, DomainError, Timestamp, TimezoneId, Unit, DAY, HOUR, MINUTE, SECOND};
pub use error::{AppError, Result};
pub use port::{CivilTimeConverter, ConversionError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
