//! Boundary navigation - previous / next unit start
//!
//! Day boundaries are UTC midnights. Local calendar days are out of scope:
//! convert to civil time when a timezone-aware day is needed.

use super::overflow;
use super::rounding::floor_to;
use crate::domain::error::Result;
use crate::domain::{Timestamp, Unit};

/// Start of the `unit` boundary strictly before `ts`
///
/// Computed as `floor(ts - 1)`, which covers aligned and unaligned inputs
/// without a branch: an aligned `ts` steps back a full unit, an unaligned one
/// lands on the start of its own bucket.
pub fn last(ts: Timestamp, unit: Unit) -> Result<Timestamp> {
    let before = ts.checked_sub(1).ok_or_else(|| overflow("last", ts))?;
    floor_to(before, unit)
}

/// Start of the `unit` boundary strictly after `ts`
pub fn next(ts: Timestamp, unit: Unit) -> Result<Timestamp> {
    floor_to(ts, unit)?
        .checked_add(unit.factor())
        .ok_or_else(|| overflow("next", ts))
}

pub fn last_second(ts: Timestamp) -> Result<Timestamp> {
    last(ts, Unit::Second)
}

pub fn next_second(ts: Timestamp) -> Result<Timestamp> {
    next(ts, Unit::Second)
}

pub fn last_minute(ts: Timestamp) -> Result<Timestamp> {
    last(ts, Unit::Minute)
}

pub fn next_minute(ts: Timestamp) -> Result<Timestamp> {
    next(ts, Unit::Minute)
}

pub fn last_hour(ts: Timestamp) -> Result<Timestamp> {
    last(ts, Unit::Hour)
}

pub fn next_hour(ts: Timestamp) -> Result<Timestamp> {
    next(ts, Unit::Hour)
}

/// Previous UTC midnight strictly before `ts`
pub fn last_day(ts: Timestamp) -> Result<Timestamp> {
    last(ts, Unit::Day)
}

/// Next UTC midnight strictly after `ts`
pub fn next_day(ts: Timestamp) -> Result<Timestamp> {
    next(ts, Unit::Day)
}
