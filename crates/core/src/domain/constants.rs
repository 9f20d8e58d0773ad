// Time unit constants (no magic values)

/// Milliseconds in one second (1,000)
pub const SECOND: i64 = 1_000;

/// Milliseconds in one minute (60,000)
pub const MINUTE: i64 = 60 * SECOND;

/// Milliseconds in one hour (3,600,000)
pub const HOUR: i64 = 60 * MINUTE;

/// Milliseconds in one UTC day (86,400,000)
///
/// POSIX time ignores leap seconds, so every day is exactly this long.
pub const DAY: i64 = 24 * HOUR;

/// Nanoseconds in one millisecond, used when splitting civil sub-second fields
pub const NANOS_PER_MILLISECOND: u32 = 1_000_000;
