// Validation - is a timestamp exactly on a unit boundary

use crate::domain::{Timestamp, Unit};

/// True if `ts` has no remainder below `unit` (floored modulo, so pre-epoch
/// boundaries count too)
pub fn is_aligned(ts: Timestamp, unit: Unit) -> bool {
    ts.rem_euclid(unit.factor()) == 0
}

/// No millisecond component
pub fn is_valid_second(ts: Timestamp) -> bool {
    is_aligned(ts, Unit::Second)
}

pub fn is_valid_minute(ts: Timestamp) -> bool {
    is_aligned(ts, Unit::Minute)
}

pub fn is_valid_hour(ts: Timestamp) -> bool {
    is_aligned(ts, Unit::Hour)
}

/// Exactly midnight UTC
pub fn is_valid_day(ts: Timestamp) -> bool {
    is_aligned(ts, Unit::Day)
}
