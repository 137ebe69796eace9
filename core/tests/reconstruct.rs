use num_bigint::BigInt;
use recover_core::{
    recover, solve, Outcome, Params, RawShare, RecoverError, Result, ShareSet,
};
use serde_json::json;

const MIXED_BASE_TESTCASE: &str = r#"{
    "keys": { "n": 3, "k": 2 },
    "1": { "base": "10", "value": "4" },
    "2": { "base": "10", "value": "7" },
    "3": { "base": "16", "value": "c" }
}"#;

fn share(x: i64, value: &str, base: u32) -> RawShare {
    RawShare {
        index: BigInt::from(x),
        value: value.to_owned(),
        base,
    }
}

fn solve_shares(n: usize, k: usize, raw: Vec<RawShare>) -> Result<Outcome> {
    let params = Params::new(n, k)?;
    let shares = ShareSet::decode(raw)?;
    solve(params, &shares)
}

#[test]
fn tampered_share_is_flagged_end_to_end() {
    let outcome = recover(MIXED_BASE_TESTCASE).unwrap();
    assert_eq!(outcome.secret, "1");
    assert_eq!(outcome.wrong, ["3"]);
}

#[test]
fn outcome_serializes_to_the_output_record() {
    let outcome = recover(MIXED_BASE_TESTCASE).unwrap();
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({ "secret": "1", "wrong": ["3"] })
    );
}

#[test]
fn consistent_line_with_fractional_intercept() {
    // y = (2x + 7) / 3 through x = 1, 4, 7: every pair agrees on the
    // exact intercept 7/3 even though it is not an integer.
    let outcome = solve_shares(
        3,
        2,
        vec![share(1, "3", 10), share(4, "5", 10), share(7, "7", 10)],
    )
    .unwrap();
    assert_eq!(outcome.secret, "7/3");
    assert!(outcome.wrong.is_empty());
}

#[test]
fn quadratic_with_a_single_outlier() {
    // f(x) = 2x^2 - 3x + 5 sampled at x = 1..=5; the share at x = 2 is
    // corrupted (8 instead of 7).
    let outcome = solve_shares(
        5,
        3,
        vec![
            share(1, "4", 10),
            share(2, "8", 10),
            share(3, "14", 10),
            share(4, "25", 10),
            share(5, "40", 10),
        ],
    )
    .unwrap();
    assert_eq!(outcome.secret, "5");
    assert_eq!(outcome.wrong, ["2"]);
}

#[test]
fn later_integer_tie_breaks_an_earlier_fractional_best_only() {
    // Every 2-subset of these four shares agrees with exactly its own two
    // points. The first few candidates in enumeration order imply
    // fractional secrets; the subset {(3,2), (4,3)} is the first with an
    // integral secret (-1) and wins the tie. Two later subsets also imply
    // integral secrets (-3 and -5) but never displace the incumbent:
    // first-encountered-in-enumeration-order wins full ties.
    let outcome = solve_shares(
        4,
        2,
        vec![
            share(1, "1", 10),
            share(3, "2", 10),
            share(4, "3", 10),
            share(6, "7", 10),
        ],
    )
    .unwrap();
    assert_eq!(outcome.secret, "-1");
    assert_eq!(outcome.wrong, ["1", "6"]);
}

#[test]
fn count_mismatch_fails_with_no_partial_output() {
    let err = solve_shares(
        4,
        2,
        vec![share(1, "4", 10), share(2, "7", 10), share(3, "10", 10)],
    )
    .unwrap_err();
    assert_eq!(
        err,
        RecoverError::CountMismatch {
            declared: 4,
            provided: 3
        }
    );
}

#[test]
fn duplicate_share_index_aborts_the_run() {
    let err = solve_shares(
        3,
        2,
        vec![share(1, "4", 10), share(2, "7", 10), share(2, "9", 10)],
    )
    .unwrap_err();
    assert_eq!(
        err,
        RecoverError::Math(math::MathError::DuplicateAbscissa(BigInt::from(2)))
    );
}

#[test]
fn large_magnitude_values_survive_exactly() {
    // A line with a secret far beyond machine precision; y values are
    // computed in BigInt and fed through base-36 encoding.
    let secret: BigInt = "98765432109876543210987654321".parse().unwrap();
    let slope: BigInt = "1234567890123456789".parse().unwrap();
    let raw: Vec<RawShare> = (1i64..=3)
        .map(|x| RawShare {
            index: BigInt::from(x),
            value: (&secret + &slope * x).to_str_radix(36),
            base: 36,
        })
        .collect();

    let outcome = solve_shares(3, 2, raw).unwrap();
    assert_eq!(outcome.secret, secret.to_string());
    assert!(outcome.wrong.is_empty());
}

#[test]
fn single_share_with_threshold_one_is_its_own_secret() {
    let outcome = solve_shares(1, 1, vec![share(5, "ff", 16)]).unwrap();
    assert_eq!(outcome.secret, "255");
    assert!(outcome.wrong.is_empty());
}

#[test]
fn numeric_json_fields_are_accepted_end_to_end() {
    let text = r#"{
        "keys": { "n": 3, "k": 2 },
        "1": { "base": 10, "value": 4 },
        "2": { "base": 10, "value": 7 },
        "3": { "base": 10, "value": 10 }
    }"#;
    let outcome = recover(text).unwrap();
    assert_eq!(outcome.secret, "1");
    assert!(outcome.wrong.is_empty());
}
