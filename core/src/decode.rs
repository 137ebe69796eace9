//! Base-N decoding of share values.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{RecoverError, Result};

/// Parse `text` as a non-negative integer written in `base`.
///
/// Accepts bases in `2..=36` with the digit alphabet `0-9` then `a-z`,
/// case-insensitively. Surrounding ASCII whitespace is trimmed; anything
/// else outside the base's alphabet fails with
/// [`RecoverError::InvalidDigit`]. There is no sign handling: share
/// values are non-negative by contract. An empty (post-trim) string
/// decodes to zero.
pub fn parse_in_base(text: &str, base: u32) -> Result<BigUint> {
    if !(2..=36).contains(&base) {
        return Err(RecoverError::UnsupportedBase(base));
    }

    let mut value = BigUint::zero();
    for ch in text.trim().chars() {
        let digit = ch
            .to_digit(base)
            .ok_or(RecoverError::InvalidDigit { digit: ch, base })?;
        value = value * base + digit;
    }
    Ok(value)
}
