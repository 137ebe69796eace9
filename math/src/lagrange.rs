//! Exact evaluation of interpolating polynomials via the Lagrange basis.
//!
//! Given `m` points with distinct abscissas there is a unique polynomial
//! of degree at most `m - 1` through them; this module evaluates that
//! polynomial at an arbitrary coordinate without ever materializing its
//! coefficients. All arithmetic stays in `BigInt`/[`Rational`], so the
//! result is exact. This is the one numerically sensitive routine in the
//! reconstruction engine and the reason it runs on rationals instead of
//! floating point.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::{rational::Rational, MathError, Result};

/// Evaluate the unique degree-(m−1) polynomial through
/// `{(xs[i], ys[i])}` at `at`:
///
/// ```text
/// f(at) = Σ_i  y_i · Π_{j≠i} (at − x_j) / (x_i − x_j)
/// ```
///
/// `xs` and `ys` must have equal length (caller invariant). Fails with
/// [`MathError::DuplicateAbscissa`] when two points share an `x`
/// coordinate, which would make a basis denominator zero.
pub fn evaluate(xs: &[BigInt], ys: &[BigInt], at: &BigInt) -> Result<Rational> {
    debug_assert_eq!(xs.len(), ys.len());
    for (i, xi) in xs.iter().enumerate() {
        if xs[i + 1..].contains(xi) {
            return Err(MathError::DuplicateAbscissa(xi.clone()));
        }
    }

    let mut total = Rational::zero();
    for (i, (xi, yi)) in xs.iter().zip(ys).enumerate() {
        // The basis numerator and denominator are integer products; the
        // single division happens when the assembled term is normalized.
        let mut num = BigInt::one();
        let mut den = BigInt::one();
        for (j, xj) in xs.iter().enumerate() {
            if i == j {
                continue;
            }
            num *= at - xj;
            den *= xi - xj;
        }
        total = total + Rational::new(yi * num, den)?;
    }
    Ok(total)
}
