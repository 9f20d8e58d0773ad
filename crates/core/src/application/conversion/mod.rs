// Conversion Service - civil time <-> milliseconds via the CivilTimeConverter port

pub mod config;


pub use config::{ConversionConfig, SubMillisecondPolicy, DEFAULT_TIMEZONE};

use crate::domain::{CivilTime, Timestamp};
use crate::error::Result;
use crate::port::{CivilTimeConverter, ConversionError};
use std::sync::Arc;
use tracing::debug;

/// Convert civil fields to milliseconds since epoch
///
/// Sub-millisecond nanoseconds are handled by `policy` before the converter
/// sees the value; converter errors are returned unchanged.
pub fn to_milliseconds(
    converter: &dyn CivilTimeConverter,
    civil: &CivilTime,
    policy: SubMillisecondPolicy,
) -> Result<Timestamp> {
    let extra_nanos = civil.sub_millisecond_nanos();

    let ts = if extra_nanos == 0 {
        converter.compose(civil)?
    } else {
        match policy {
            SubMillisecondPolicy::Truncate => {
                debug!(
                    civil = %civil,
                    dropped_nanos = extra_nanos,
                    "Truncating sub-millisecond precision"
                );
                converter.compose(&civil.truncated_to_millisecond())?
            }
            SubMillisecondPolicy::Reject => {
                return Err(ConversionError::SubMillisecond(extra_nanos).into());
            }
        }
    };

    debug!(civil = %civil, ts, "Composed civil time");
    Ok(ts)
}

/// Convert milliseconds since epoch to civil fields in `timezone`
pub fn from_milliseconds(
    converter: &dyn CivilTimeConverter,
    ts: Timestamp,
    timezone: &str,
) -> Result<CivilTime> {
    let civil = converter.decompose(ts, timezone)?;
    debug!(ts, timezone, civil = %civil, "Decomposed timestamp");
    Ok(civil)
}

/// Conversion Service
///
/// Holds the injected converter and the configured policies.
pub struct ConversionService {
    converter: Arc<dyn CivilTimeConverter>,
    config: ConversionConfig,
}

impl ConversionService {
    /// Create a service, validating `config`
    pub fn new(converter: Arc<dyn CivilTimeConverter>, config: ConversionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { converter, config })
    }

    /// Create a service with `ConversionConfig::default()`
    pub fn with_defaults(converter: Arc<dyn CivilTimeConverter>) -> Self {
        Self {
            converter,
            config: ConversionConfig::default(),
        }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn to_milliseconds(&self, civil: &CivilTime) -> Result<Timestamp> {
        to_milliseconds(self.converter.as_ref(), civil, self.config.sub_millisecond)
    }

    pub fn from_milliseconds(&self, ts: Timestamp, timezone: &str) -> Result<CivilTime> {
        from_milliseconds(self.converter.as_ref(), ts, timezone)
    }

    /// `from_milliseconds` in the configured default timezone
    pub fn from_milliseconds_default(&self, ts: Timestamp) -> Result<CivilTime> {
        self.from_milliseconds(ts, &self.config.default_timezone)
    }
}
