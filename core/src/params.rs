use crate::error::{RecoverError, Result};

/// Threshold-scheme parameters: `n` shares in total, any `k` of which are
/// interpolated per reconstruction trial.
///
/// `k` need not equal the hidden polynomial's degree plus one when shares
/// are noisy; the solver only assumes the true polynomial has degree at
/// most `k − 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    shares: usize,
    threshold: usize,
}

impl Params {
    /// Validate and build a parameter set. Fails with
    /// [`RecoverError::InvalidThreshold`] unless `1 <= k <= n`.
    pub fn new(shares: usize, threshold: usize) -> Result<Self> {
        if !validate_threshold_config(threshold, shares) {
            return Err(RecoverError::InvalidThreshold { threshold, shares });
        }
        Ok(Self { shares, threshold })
    }

    /// Total number of shares (`n`).
    pub fn shares(&self) -> usize {
        self.shares
    }

    /// Number of points per interpolation trial (`k`).
    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

/// A configuration is usable when at least one share exists and the
/// threshold selects a nonempty subset of them.
pub(crate) fn validate_threshold_config(threshold: usize, shares: usize) -> bool {
    (1..=shares).contains(&threshold)
}
