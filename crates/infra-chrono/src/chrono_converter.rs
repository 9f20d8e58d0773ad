// CivilTimeConverter implementation (chrono + chrono-tz)
use chrono::{DateTime, Datelike, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone, Timelike, Utc};
use tracing::{debug, warn};

use millis_core::domain::{CivilTime, Timestamp};
use millis_core::port::civil_time::{CivilTimeConverter, ConversionError, Result};

use crate::zone::Zone;

/// Civil-time converter backed by chrono and the bundled IANA database
///
/// Stateless; share one instance behind `Arc<dyn CivilTimeConverter>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoCivilTime;

impl ChronoCivilTime {
    pub fn new() -> Self {
        Self
    }
}

impl CivilTimeConverter for ChronoCivilTime {
    fn decompose(&self, ts: Timestamp, timezone: &str) -> Result<CivilTime> {
        let zone = Zone::parse(timezone)?;
        let utc = DateTime::<Utc>::from_timestamp_millis(ts).ok_or(ConversionError::OutOfRange(ts))?;

        let civil = match zone {
            Zone::Named(tz) => to_civil(utc.with_timezone(&tz), timezone),
            Zone::Fixed(offset) => to_civil(utc.with_timezone(&offset), timezone),
        };
        Ok(civil)
    }

    fn compose(&self, civil: &CivilTime) -> Result<Timestamp> {
        let zone = Zone::parse(&civil.timezone)?;
        let naive = to_naive(civil)?;

        let ts = match zone {
            Zone::Named(tz) => resolve(tz.from_local_datetime(&naive), civil)?.timestamp_millis(),
            Zone::Fixed(offset) => {
                resolve(offset.from_local_datetime(&naive), civil)?.timestamp_millis()
            }
        };

        debug!(civil = %civil, ts, "Resolved local time");
        Ok(ts)
    }
}

fn to_civil<Z: TimeZone>(dt: DateTime<Z>, timezone: &str) -> CivilTime {
    CivilTime {
        year: dt.year(),
        month: dt.month(),
        day: dt.day(),
        hour: dt.hour(),
        minute: dt.minute(),
        second: dt.second(),
        nanosecond: dt.nanosecond(),
        utc_offset_seconds: Some(dt.offset().fix().local_minus_utc()),
        timezone: timezone.to_string(),
    }
}

fn to_naive(civil: &CivilTime) -> Result<NaiveDateTime> {
    let date = NaiveDate::from_ymd_opt(civil.year, civil.month, civil.day).ok_or_else(|| {
        ConversionError::InvalidFields(format!(
            "no such date {:04}-{:02}-{:02}",
            civil.year, civil.month, civil.day
        ))
    })?;

    if civil.second > 59 || civil.nanosecond > 999_999_999 {
        return Err(ConversionError::InvalidFields(format!(
            "second {} / nanosecond {} out of range",
            civil.second, civil.nanosecond
        )));
    }

    date.and_hms_nano_opt(civil.hour, civil.minute, civil.second, civil.nanosecond)
        .ok_or_else(|| {
            ConversionError::InvalidFields(format!(
                "no such time {:02}:{:02}:{:02}",
                civil.hour, civil.minute, civil.second
            ))
        })
}

fn offset_of<Z: TimeZone>(dt: &DateTime<Z>) -> i32 {
    dt.offset().fix().local_minus_utc()
}

/// Pick the instant for a local time, using the carried offset for overlaps
fn resolve<Z: TimeZone>(result: LocalResult<DateTime<Z>>, civil: &CivilTime) -> Result<DateTime<Z>> {
    let local = || civil.to_string();

    match result {
        LocalResult::Single(dt) => match civil.utc_offset_seconds {
            Some(expected) if expected != offset_of(&dt) => {
                Err(ConversionError::InvalidFields(format!(
                    "offset {}s does not apply to {} (zone offset is {}s)",
                    expected,
                    local(),
                    offset_of(&dt)
                )))
            }
            _ => Ok(dt),
        },
        LocalResult::Ambiguous(earlier, later) => match civil.utc_offset_seconds {
            Some(expected) if expected == offset_of(&earlier) => Ok(earlier),
            Some(expected) if expected == offset_of(&later) => Ok(later),
            _ => {
                warn!(
                    civil = %civil,
                    earlier_offset = offset_of(&earlier),
                    later_offset = offset_of(&later),
                    "Ambiguous local time without a matching offset"
                );
                Err(ConversionError::AmbiguousLocalTime {
                    local: local(),
                    timezone: civil.timezone.clone(),
                })
            }
        },
        LocalResult::None => Err(ConversionError::NonexistentLocalTime {
            local: local(),
            timezone: civil.timezone.clone(),
        }),
    }
}
