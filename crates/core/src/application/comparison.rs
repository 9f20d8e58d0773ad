// Comparison - do two timestamps share an aligned bucket

use crate::domain::{Timestamp, Unit};

/// True if `ts1` and `ts2` fall in the same `unit` bucket
///
/// Equivalent to `floor_to(ts1, unit) == floor_to(ts2, unit)`, but compares
/// floored quotients so it cannot overflow at the ends of the i64 range.
pub fn is_same(ts1: Timestamp, ts2: Timestamp, unit: Unit) -> bool {
    let factor = unit.factor();
    ts1.div_euclid(factor) == ts2.div_euclid(factor)
}

pub fn is_same_second(ts1: Timestamp, ts2: Timestamp) -> bool {
    is_same(ts1, ts2, Unit::Second)
}

pub fn is_same_minute(ts1: Timestamp, ts2: Timestamp) -> bool {
    is_same(ts1, ts2, Unit::Minute)
}

pub fn is_same_hour(ts1: Timestamp, ts2: Timestamp) -> bool {
    is_same(ts1, ts2, Unit::Hour)
}

/// Same UTC calendar day
pub fn is_same_day(ts1: Timestamp, ts2: Timestamp) -> bool {
    is_same(ts1, ts2, Unit::Day)
}
