// Error types for date arithmetic

use thiserror::Error;

use crate::models::unit::DateUnit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateError {
    /// The requested calendar component cannot be used for arithmetic.
    #[error("calendar component '{0}' is not supported for date arithmetic")]
    UnsupportedUnit(DateUnit),

    /// The computed date falls outside the representable range.
    #[error("resulting date is out of the representable range")]
    OutOfRange,
}
