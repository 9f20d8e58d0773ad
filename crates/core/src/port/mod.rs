// Port Layer - Interfaces for external collaborators

pub mod civil_time;

// Re-exports
pub use civil_time::{CivilTimeConverter, ConversionError};

#[cfg(test)]
pub use civil_time::MockCivilTimeConverter;
