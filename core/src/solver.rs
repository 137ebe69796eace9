//! Exhaustive reconstruction of the best-supported secret.
//!
//! Every k-subset of the shares is interpolated exactly and scored
//! against all n shares; the globally best-supported candidate wins. The
//! search is deliberately brute force rather than heuristic — n and k are
//! puzzle-scale, and the correctness goal is the *global* optimum, at
//! O(C(n,k) · n · k) rational operations.

use math::{lagrange, rational::Rational};
use num_bigint::BigInt;
use num_traits::Zero;
use serde::Serialize;

use crate::{
    combinations::Combinations,
    error::{RecoverError, Result},
    params::Params,
    share::{Point, ShareSet},
};

/// Final output of one reconstruction run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// The best-supported secret: a base-10 integer string, or `"p/q"` in
    /// lowest terms when the winning interpolation does not land on an
    /// integer.
    pub secret: String,
    /// Indices (`x`, as decimal strings) of the shares that disagree with
    /// the winning candidate, in ascending `x` order. Empty when every
    /// share is consistent.
    pub wrong: Vec<String>,
}

/// One scored subset: the secret it implies plus per-share agreement.
/// Transient; only the best candidate survives the scan.
#[derive(Clone, Debug)]
struct Candidate {
    secret: Rational,
    ok_flags: Vec<bool>,
    agreeing: usize,
}

/// Interpolate `subset` and test every share against its polynomial.
fn score_subset(subset: &[&Point], points: &[Point]) -> Result<Candidate> {
    let xs: Vec<BigInt> = subset.iter().map(|p| p.x.clone()).collect();
    let ys: Vec<BigInt> = subset.iter().map(|p| p.y.clone()).collect();
    let secret = lagrange::evaluate(&xs, &ys, &BigInt::zero())?;

    let mut ok_flags = Vec::with_capacity(points.len());
    for point in points {
        let value = lagrange::evaluate(&xs, &ys, &point.x)?;
        // Exact cross-multiplied comparison; no division, no rounding.
        ok_flags.push(value.eq_integer(&point.y));
    }
    let agreeing = ok_flags.iter().filter(|&&ok| ok).count();

    Ok(Candidate {
        secret,
        ok_flags,
        agreeing,
    })
}

/// Total-order comparison between a freshly scored candidate and the best
/// seen so far: more agreeing shares wins; on a tie an integral secret
/// beats a fractional one; any remaining tie keeps the
/// earlier-enumerated candidate. The integer preference is a documented
/// policy choice (legitimate reconstructions are assumed to yield whole
/// secrets), not a mathematical necessity.
fn ranks_higher(candidate: &Candidate, best: &Candidate) -> bool {
    let key = |c: &Candidate| (c.agreeing, c.secret.is_integer());
    key(candidate) > key(best)
}

/// Reconstruct the secret from `shares` under `params`.
///
/// Fails with [`RecoverError::CountMismatch`] before any interpolation
/// when the share count disagrees with `params`; duplicate share indices
/// surface as [`math::MathError::DuplicateAbscissa`] from the evaluator.
/// All failures abort the run — no partial output.
pub fn solve(params: Params, shares: &ShareSet) -> Result<Outcome> {
    if shares.len() != params.shares() {
        return Err(RecoverError::CountMismatch {
            declared: params.shares(),
            provided: shares.len(),
        });
    }

    let points = shares.points();
    let mut best: Option<Candidate> = None;
    for subset in Combinations::new(points, params.threshold()) {
        let candidate = score_subset(&subset, points)?;
        if best
            .as_ref()
            .map_or(true, |b| ranks_higher(&candidate, b))
        {
            best = Some(candidate);
        }
    }
    // `Params` guarantees 1 <= k <= n, so at least one subset was scored.
    let best = best.expect("threshold parameters admit at least one subset");

    let mut wrong = Vec::new();
    for (point, ok) in points.iter().zip(&best.ok_flags) {
        if !ok {
            wrong.push(point.x.to_string());
        }
    }

    Ok(Outcome {
        secret: best.secret.to_string(),
        wrong,
    })
}
