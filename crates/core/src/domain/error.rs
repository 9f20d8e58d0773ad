// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid factor: {0} (must be a positive number of milliseconds)")]
    InvalidFactor(i64),

    #[error("Invalid multiplier: {0} (must be finite)")]
    InvalidMultiplier(f64),

    #[error("Timestamp overflow in {operation} (input {timestamp})")]
    Overflow {
        operation: &'static str,
        timestamp: i64,
    },

    #[error("Unknown time unit: {0}")]
    UnknownUnit(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
