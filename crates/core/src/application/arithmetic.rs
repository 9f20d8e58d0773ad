//! Arithmetic - shift a timestamp by a (possibly fractional) number of units
//!
//! Rounding policy: the offset `n * factor` is rounded half away from zero to
//! whole milliseconds (`f64::round`). Because that rounding is symmetric,
//! `increment(t, u, n) == decrement(t, u, -n)` for every `n`.
//!
//! Results are plain offsets; they are not re-aligned to a boundary, so
//! `increment_hour(ts, 0.5)` lands half an hour later, wherever that is.

use super::overflow;
use crate::domain::error::Result;
use crate::domain::{DomainError, Timestamp, Unit};

/// 2^63 as f64. Offsets at or beyond this magnitude do not fit in i64.
const OFFSET_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Rounded millisecond offset of `n` units
fn offset(ts: Timestamp, unit: Unit, n: f64, operation: &'static str) -> Result<i64> {
    if !n.is_finite() {
        return Err(DomainError::InvalidMultiplier(n));
    }

    let scaled = (n * unit.factor() as f64).round();
    if scaled.abs() >= OFFSET_LIMIT {
        return Err(overflow(operation, ts));
    }

    Ok(scaled as i64)
}

/// Add `n` units to `ts`
///
/// # Errors
/// * `InvalidMultiplier` if `n` is NaN or infinite
/// * `Overflow` if the offset or the result does not fit in i64
///
/// # Example
/// ```
/// use millis_core::{increment, Unit, HOUR};
///
/// assert_eq!(increment(0, Unit::Hour, 0.5).unwrap(), HOUR / 2);
/// ```
pub fn increment(ts: Timestamp, unit: Unit, n: f64) -> Result<Timestamp> {
    let delta = offset(ts, unit, n, "increment")?;
    ts.checked_add(delta)
        .ok_or_else(|| overflow("increment", ts))
}

/// Subtract `n` units from `ts`
pub fn decrement(ts: Timestamp, unit: Unit, n: f64) -> Result<Timestamp> {
    let delta = offset(ts, unit, n, "decrement")?;
    ts.checked_sub(delta)
        .ok_or_else(|| overflow("decrement", ts))
}

pub fn increment_second(ts: Timestamp, n: f64) -> Result<Timestamp> {
    increment(ts, Unit::Second, n)
}

pub fn decrement_second(ts: Timestamp, n: f64) -> Result<Timestamp> {
    decrement(ts, Unit::Second, n)
}

pub fn increment_minute(ts: Timestamp, n: f64) -> Result<Timestamp> {
    increment(ts, Unit::Minute, n)
}

pub fn decrement_minute(ts: Timestamp, n: f64) -> Result<Timestamp> {
    decrement(ts, Unit::Minute, n)
}

pub fn increment_hour(ts: Timestamp, n: f64) -> Result<Timestamp> {
    increment(ts, Unit::Hour, n)
}

pub fn decrement_hour(ts: Timestamp, n: f64) -> Result<Timestamp> {
    decrement(ts, Unit::Hour, n)
}

/// Add `n` UTC days (86,400,000 ms each)
pub fn increment_day(ts: Timestamp, n: f64) -> Result<Timestamp> {
    increment(ts, Unit::Day, n)
}

/// Subtract `n` UTC days (86,400,000 ms each)
pub fn decrement_day(ts: Timestamp, n: f64) -> Result<Timestamp> {
    decrement(ts, Unit::Day, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DAY, HOUR};

    #[test]
    fn test_increment_whole_units() {
        assert_eq!(increment_second(1_704_110_455_000, 5.0).unwrap(), 1_704_110_460_000);
        assert_eq!(increment_minute(1_704_110_400_000, 30.0).unwrap(), 1_704_112_200_000);
        assert_eq!(increment_hour(1_704_110_400_000, 2.0).unwrap(), 1_704_117_600_000);
        assert_eq!(increment_day(1_704_067_200_000, 1.0).unwrap(), 1_704_153_600_000);
    }

    #[test]
    fn test_decrement_whole_units() {
        assert_eq!(decrement_second(1_704_110_455_000, 5.0).unwrap(), 1_704_110_450_000);
        assert_eq!(decrement_minute(1_704_110_400_000, 10.0).unwrap(), 1_704_109_800_000);
        assert_eq!(decrement_hour(1_704_110_400_000, 3.0).unwrap(), 1_704_099_600_000);
        assert_eq!(decrement_day(1_704_067_200_000, 1.0).unwrap(), 1_703_980_800_000);
    }

    #[test]
    fn test_fractional_multipliers() {
        let ts = 1_704_110_400_000;
        assert_eq!(increment_second(ts, 0.5).unwrap(), ts + 500);
        assert_eq!(increment_second(ts, 1.5).unwrap(), ts + 1500);
        assert_eq!(decrement_hour(ts, 0.25).unwrap(), ts - HOUR / 4);
        // not re-floored
        assert_eq!(increment_hour(ts, 0.5).unwrap(), ts + 1_800_000);
        // 0.1 is inexact in f64; the offset still comes out as 100 ms
        assert_eq!(increment_second(ts, 0.1).unwrap(), ts + 100);
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        // 0.0625 s = 62.5 ms, exact in binary
        assert_eq!(increment_second(0, 0.0625).unwrap(), 63);
        assert_eq!(increment_second(0, -0.0625).unwrap(), -63);
        assert_eq!(decrement_second(0, 0.0625).unwrap(), -63);
        assert_eq!(decrement_second(0, -0.0625).unwrap(), 63);
        // 0.1875 s = 187.5 ms
        assert_eq!(increment_second(1000, 0.1875).unwrap(), 1188);
        // 0.0004 s = 0.4 ms
        assert_eq!(increment_second(0, 0.0004).unwrap(), 0);
    }

    #[test]
    fn test_negative_timestamps() {
        assert_eq!(decrement_day(-3_600_000, 1.0).unwrap(), -90_000_000);
        assert_eq!(increment_day(-86_400_000, 1.0).unwrap(), 0);
        assert_eq!(decrement_second(500, 1.0).unwrap(), -500);
        assert_eq!(decrement_day(43_200_000, 1.0).unwrap(), -43_200_000);
    }

    #[test]
    fn test_far_dates() {
        // Year 2100 and 1900
        let ts = 4_102_444_800_000;
        assert_eq!(increment_day(ts, 1.0).unwrap(), ts + DAY);
        let ts = -2_208_988_800_000;
        assert_eq!(decrement_day(ts, 1.0).unwrap(), ts - DAY);
    }

    #[test]
    fn test_symmetry() {
        for n in [0.0, 1.0, -1.0, 0.5, -0.5, 0.0005, 2.75, -1e6] {
            for unit in Unit::ALL {
                assert_eq!(
                    increment(-12_345, unit, n).unwrap(),
                    decrement(-12_345, unit, -n).unwrap(),
                    "n = {n}, unit = {unit}"
                );
            }
        }
    }

    #[test]
    fn test_non_finite_multiplier_rejected() {
        assert!(matches!(
            increment_hour(0, f64::NAN),
            Err(DomainError::InvalidMultiplier(n)) if n.is_nan()
        ));
        assert_eq!(
            decrement_day(0, f64::INFINITY),
            Err(DomainError::InvalidMultiplier(f64::INFINITY))
        );
    }

    #[test]
    fn test_overflow_reported() {
        assert!(matches!(
            increment_second(i64::MAX, 1.0),
            Err(DomainError::Overflow { operation: "increment", .. })
        ));
        assert!(matches!(
            decrement_second(i64::MIN, 1.0),
            Err(DomainError::Overflow { operation: "decrement", .. })
        ));
        // offset alone exceeds i64
        assert!(matches!(
            increment_day(0, 1e12),
            Err(DomainError::Overflow { .. })
        ));
    }
}
