// Conversion configuration

use serde::{Deserialize, Serialize};

use crate::domain::TimezoneId;
use crate::error::{AppError, Result};

/// Default timezone for `ConversionService::from_milliseconds_default`
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// What to do with civil fields finer than one millisecond
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubMillisecondPolicy {
    /// Drop the sub-millisecond nanoseconds (rounds toward the earlier instant)
    #[default]
    Truncate,
    /// Fail with `ConversionError::SubMillisecond`
    Reject,
}

/// Conversion settings
///
/// Every field has a default, so a partial document deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    pub sub_millisecond: SubMillisecondPolicy,
    pub default_timezone: TimezoneId,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            sub_millisecond: SubMillisecondPolicy::default(),
            default_timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

impl ConversionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.default_timezone.trim().is_empty() {
            return Err(AppError::Config(
                "default_timezone cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
