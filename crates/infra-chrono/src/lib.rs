// Millis Infrastructure - chrono adapters
// Implements: CivilTimeConverter

pub mod chrono_converter;
pub mod zone;

pub use chrono_converter::ChronoCivilTime;
pub use zone::Zone;
