use thiserror::Error;

/// Result type specialized for share-recovery operations.
pub type Result<T, E = RecoverError> = std::result::Result<T, E>;

/// Errors that can arise while reconstructing a shared secret.
///
/// All of these indicate malformed input rather than transient
/// conditions; every one aborts the reconstruction with no partial
/// output.
#[non_exhaustive]
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum RecoverError {
    #[error("invalid threshold configuration: threshold {threshold} not in 1..={shares}")]
    InvalidThreshold { threshold: usize, shares: usize },
    #[error("declared share count {declared} does not match the {provided} shares provided")]
    CountMismatch { declared: usize, provided: usize },
    #[error("invalid digit {digit:?} for base {base}")]
    InvalidDigit { digit: char, base: u32 },
    #[error("unsupported base {0}: expected a base in 2..=36")]
    UnsupportedBase(u32),
    #[error("share index {0:?} is not a decimal integer")]
    InvalidShareIndex(String),
    #[error("malformed testcase document: {0}")]
    MalformedDocument(String),
    #[error(transparent)]
    Math(#[from] math::MathError),
}
