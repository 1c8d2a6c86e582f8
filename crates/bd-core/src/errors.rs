//! Error types for bizday.
//!
//! A single `thiserror`-derived enum is shared by every crate in the
//! workspace.  The [`ensure!`](crate::ensure) macro builds the
//! `Precondition` variant from a formatted message.

use thiserror::Error;

/// The top-level error type used throughout bizday.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated by a caller-supplied argument.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date construction or day arithmetic left the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// A range query was given a start that lies after its end.
    #[error("invalid range: start {start} is after end {end}")]
    InvalidRange {
        /// The offending start of the range.
        start: String,
        /// The offending end of the range.
        end: String,
    },

    /// A directional search skipped too many consecutive non-business days.
    ///
    /// Raised instead of looping forever when the weekend set and holiday
    /// set together leave no business day within reach.
    #[error("no business day found within {steps} consecutive calendar days")]
    ImpossibleSchedule {
        /// The number of consecutive non-business days that were skipped.
        steps: u32,
    },
}

/// Shorthand `Result` type used throughout bizday.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bd_core::{ensure, errors::Error};
/// fn positive(n: i32) -> bd_core::errors::Result<i32> {
///     ensure!(n > 0, "n must be positive, got {n}");
///     Ok(n)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
