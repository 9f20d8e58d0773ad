//! Floor / Ceil - align a timestamp to a multiple of a factor
//!
//! Works for pre-epoch timestamps: `floor(-1, SECOND)` is `-1000`, not `0`.

use super::overflow;
use crate::domain::error::Result;
use crate::domain::{DomainError, Timestamp, Unit};

fn check_factor(factor: i64) -> Result<i64> {
    if factor <= 0 {
        return Err(DomainError::InvalidFactor(factor));
    }
    Ok(factor)
}

/// Round down to the largest multiple of `factor` that is `<= ts`
///
/// # Arguments
/// * `ts` - Timestamp in milliseconds
/// * `factor` - Positive modulus in milliseconds (e.g. `HOUR`)
///
/// # Errors
/// * `InvalidFactor` if `factor <= 0`
/// * `Overflow` if the multiple is below `i64::MIN`
///
/// # Example
/// ```
/// use millis_core::{floor, DAY, MINUTE};
///
/// assert_eq!(floor(1_704_110_455_000, DAY).unwrap(), 1_704_067_200_000);
/// assert_eq!(floor(-50_000, MINUTE).unwrap(), -60_000);
/// ```
pub fn floor(ts: Timestamp, factor: i64) -> Result<Timestamp> {
    let factor = check_factor(factor)?;
    ts.checked_sub(ts.rem_euclid(factor))
        .ok_or_else(|| overflow("floor", ts))
}

/// Round up to the smallest multiple of `factor` that is `>= ts`
///
/// # Errors
/// * `InvalidFactor` if `factor <= 0`
/// * `Overflow` if the multiple is above `i64::MAX`
///
/// # Example
/// ```
/// use millis_core::{ceil, HOUR, MINUTE};
///
/// assert_eq!(ceil(1_704_110_455_000, HOUR).unwrap(), 1_704_114_000_000);
/// assert_eq!(ceil(-50_000, MINUTE).unwrap(), 0);
/// ```
pub fn ceil(ts: Timestamp, factor: i64) -> Result<Timestamp> {
    let factor = check_factor(factor)?;
    match ts.rem_euclid(factor) {
        0 => Ok(ts),
        rem => ts
            .checked_add(factor - rem)
            .ok_or_else(|| overflow("ceil", ts)),
    }
}

/// `floor` with a unit's factor
pub fn floor_to(ts: Timestamp, unit: Unit) -> Result<Timestamp> {
    floor(ts, unit.factor())
}

/// `ceil` with a unit's factor
pub fn ceil_to(ts: Timestamp, unit: Unit) -> Result<Timestamp> {
    ceil(ts, unit.factor())
}
