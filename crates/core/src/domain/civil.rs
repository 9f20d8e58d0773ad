// Civil Time Domain Model
//
// Calendar fields of an instant as seen in a particular timezone. Produced and
// consumed only at the conversion boundary; arithmetic never looks inside it.

use serde::{Deserialize, Serialize};

use super::constants::NANOS_PER_MILLISECOND;

/// Timezone identifier (IANA name such as `America/New_York`, or a fixed offset like `+05:30`)
pub type TimezoneId = String;

/// Calendar date-time anchored to a timezone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub nanosecond: u32,

    /// Offset from UTC active at this instant, in seconds east of Greenwich.
    ///
    /// Always set by decomposition. When composing, `None` lets the converter
    /// resolve the offset itself; `Some` picks a side of a fall-back overlap.
    pub utc_offset_seconds: Option<i32>,

    pub timezone: TimezoneId,
}

impl CivilTime {
    /// Create a civil time at whole-second precision with an unresolved offset
    pub fn new(
        timezone: impl Into<String>,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            nanosecond: 0,
            utc_offset_seconds: None,
            timezone: timezone.into(),
        }
    }

    pub fn with_millisecond(mut self, millisecond: u32) -> Self {
        self.nanosecond = millisecond * NANOS_PER_MILLISECOND;
        self
    }

    pub fn with_nanosecond(mut self, nanosecond: u32) -> Self {
        self.nanosecond = nanosecond;
        self
    }

    pub fn with_utc_offset(mut self, seconds: i32) -> Self {
        self.utc_offset_seconds = Some(seconds);
        self
    }

    /// Millisecond-of-second field
    pub fn millisecond(&self) -> u32 {
        self.nanosecond / NANOS_PER_MILLISECOND
    }

    /// Nanoseconds below millisecond precision
    pub fn sub_millisecond_nanos(&self) -> u32 {
        self.nanosecond % NANOS_PER_MILLISECOND
    }

    /// Copy with sub-millisecond precision dropped
    pub fn truncated_to_millisecond(&self) -> Self {
        Self {
            nanosecond: self.nanosecond - self.sub_millisecond_nanos(),
            ..self.clone()
        }
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.millisecond()
        )?;
        if let Some(offset) = self.utc_offset_seconds {
            let sign = if offset < 0 { '-' } else { '+' };
            let abs = offset.unsigned_abs();
            write!(f, "{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)?;
        }
        write!(f, "[{}]", self.timezone)
    }
}
