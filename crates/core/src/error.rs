// Central Error Type for the Library

use thiserror::Error;

/// Library-level error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Conversion error: {0}")]
    Conversion(#[from] crate::port::ConversionError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
