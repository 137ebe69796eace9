pub mod lagrange;
pub mod prelude;
pub mod rational;

use num_bigint::BigInt;
use thiserror::Error;

// Re-exported so the `rat!` macro can name `BigInt` from any caller.
#[doc(hidden)]
pub use num_bigint;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Errors produced by the exact-arithmetic routines.
///
/// Every failure here signals malformed input (a zero denominator, two
/// interpolation points with the same abscissa); there is no fallback to
/// approximate arithmetic.
#[non_exhaustive]
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum MathError {
    #[error("denominator is zero")]
    DivisionByZero,
    #[error("duplicate abscissa {0}: interpolation points must have distinct x coordinates")]
    DuplicateAbscissa(BigInt),
}
