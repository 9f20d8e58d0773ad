// Timezone identifier parsing
// reason: chrono-tz for the IANA database, chrono FixedOffset for "+HH:MM" identifiers

use chrono::FixedOffset;
use chrono_tz::Tz;

use millis_core::port::civil_time::{ConversionError, Result};

/// A resolved timezone identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// IANA zone; offset varies with DST rules
    Named(Tz),
    /// Constant offset from UTC
    Fixed(FixedOffset),
}

impl Zone {
    /// Parse `UTC`, `Z`, an IANA name, or a fixed offset (`+05:30`, `-0800`, `+09`)
    pub fn parse(id: &str) -> Result<Self> {
        let trimmed = id.trim();

        if trimmed.eq_ignore_ascii_case("z") {
            return Ok(Zone::Named(Tz::UTC));
        }

        if trimmed.starts_with('+') || trimmed.starts_with('-') {
            return parse_fixed(trimmed)
                .map(Zone::Fixed)
                .ok_or_else(|| ConversionError::UnknownTimezone(id.to_string()));
        }

        trimmed
            .parse::<Tz>()
            .map(Zone::Named)
            .map_err(|_| ConversionError::UnknownTimezone(id.to_string()))
    }
}

fn parse_fixed(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = s.split_at(1);
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?),
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }

    let seconds = hours * 3600 + minutes * 60;
    let seconds = if sign == "-" { -seconds } else { seconds };
    FixedOffset::east_opt(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iana() {
        assert_eq!(Zone::parse("UTC").unwrap(), Zone::Named(Tz::UTC));
        assert_eq!(
            Zone::parse("America/New_York").unwrap(),
            Zone::Named(Tz::America__New_York)
        );
        assert_eq!(Zone::parse("z").unwrap(), Zone::Named(Tz::UTC));
    }

    #[test]
    fn test_parse_fixed_offsets() {
        let ist = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        assert_eq!(Zone::parse("+05:30").unwrap(), Zone::Fixed(ist));
        assert_eq!(Zone::parse("+0530").unwrap(), Zone::Fixed(ist));

        let pst = FixedOffset::west_opt(8 * 3600).unwrap();
        assert_eq!(Zone::parse("-08:00").unwrap(), Zone::Fixed(pst));
        assert_eq!(Zone::parse("-08").unwrap(), Zone::Fixed(pst));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for id in ["Mars/Olympus", "", "+5", "+24:00", "+05:60", "+ab:cd", "+05:30:00"] {
            assert_eq!(
                Zone::parse(id),
                Err(ConversionError::UnknownTimezone(id.to_string())),
                "{id:?}"
            );
        }
    }
}
