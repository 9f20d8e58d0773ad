// Application Layer - Millisecond arithmetic and conversion use cases
//
// Every factor-based calculation uses floored division (`div_euclid` /
// `rem_euclid` with a positive divisor) so negative timestamps round toward
// negative infinity instead of toward zero.

pub mod arithmetic;
pub mod boundary;
pub mod comparison;
pub mod conversion;
pub mod rounding;
pub mod validation;


pub use arithmetic::*;
pub use boundary::*;
pub use comparison::*;
pub use conversion::{ConversionConfig, ConversionService, SubMillisecondPolicy};
pub use rounding::{ceil, ceil_to, floor, floor_to};
pub use validation::*;

use crate::domain::{DomainError, Timestamp};
use tracing::debug;

/// Build an overflow error for `operation` and record it
pub(crate) fn overflow(operation: &'static str, timestamp: Timestamp) -> DomainError {
    debug!(operation, timestamp, "Timestamp arithmetic overflowed i64");
    DomainError::Overflow {
        operation,
        timestamp,
    }
}
