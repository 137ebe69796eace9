//! The JSON testcase surface.
//!
//! A testcase document carries the threshold parameters under `"keys"`
//! and one record per share, keyed by the share's decimal index:
//!
//! ```json
//! {
//!     "keys": { "n": 3, "k": 2 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "10", "value": "7" },
//!     "3": { "base": "16", "value": "c" }
//! }
//! ```
//!
//! `base` and `value` appear in the wild both as JSON strings and as
//! numbers; both spellings are accepted.

use std::collections::BTreeMap;

use num_bigint::BigInt;
use serde::{Deserialize, Deserializer};

use crate::{
    error::{RecoverError, Result},
    params::Params,
    share::{RawShare, ShareSet},
    solver::{self, Outcome},
};

/// Declared scheme parameters of a testcase.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Keys {
    pub n: usize,
    pub k: usize,
}

/// One encoded share record.
#[derive(Clone, Debug, Deserialize)]
pub struct ShareRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub value: String,
    #[serde(deserialize_with = "lenient_u32")]
    pub base: u32,
}

/// A full testcase document.
#[derive(Clone, Debug, Deserialize)]
pub struct Testcase {
    pub keys: Keys,
    #[serde(flatten)]
    pub shares: BTreeMap<String, ShareRecord>,
}

impl Testcase {
    /// Parse a testcase from its JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|err| RecoverError::MalformedDocument(err.to_string()))
    }

    /// Split the document into validated parameters and decoded shares.
    ///
    /// Fails with [`RecoverError::InvalidShareIndex`] when a share key is
    /// not a decimal integer; decoding failures propagate from
    /// [`ShareSet::decode`].
    pub fn resolve(self) -> Result<(Params, ShareSet)> {
        let params = Params::new(self.keys.n, self.keys.k)?;
        let raw = self
            .shares
            .into_iter()
            .map(|(key, record)| {
                let index: BigInt = key
                    .trim()
                    .parse()
                    .map_err(|_| RecoverError::InvalidShareIndex(key.clone()))?;
                Ok(RawShare {
                    index,
                    value: record.value,
                    base: record.base,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok((params, ShareSet::decode(raw)?))
    }
}

/// End to end: parse a JSON testcase, decode its shares, reconstruct the
/// secret, and name the outlier shares.
pub fn recover(json: &str) -> Result<Outcome> {
    let (params, shares) = Testcase::from_json_str(json)?.resolve()?;
    solver::solve(params, &shares)
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

fn lenient_u32<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(number) => Ok(number),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod input_tests {
    use super::*;

    const STRINGLY_TYPED: &str = r#"{
        "keys": { "n": 2, "k": 2 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "16", "value": "c" }
    }"#;

    const NUMERIC_FIELDS: &str = r#"{
        "keys": { "n": 2, "k": 2 },
        "1": { "base": 10, "value": 4 },
        "2": { "base": 16, "value": "c" }
    }"#;

    #[test]
    fn accepts_string_and_numeric_spellings() {
        for text in [STRINGLY_TYPED, NUMERIC_FIELDS] {
            let (params, shares) = Testcase::from_json_str(text)
                .unwrap()
                .resolve()
                .unwrap();
            assert_eq!(params.shares(), 2);
            assert_eq!(params.threshold(), 2);
            assert_eq!(shares.points()[0].y, BigInt::from(4));
            assert_eq!(shares.points()[1].y, BigInt::from(12));
        }
    }

    #[test]
    fn share_keys_sort_numerically_not_lexicographically() {
        let text = r#"{
            "keys": { "n": 3, "k": 2 },
            "10": { "base": "10", "value": "1" },
            "2": { "base": "10", "value": "2" },
            "1": { "base": "10", "value": "3" }
        }"#;
        let (_, shares) = Testcase::from_json_str(text).unwrap().resolve().unwrap();
        let xs: Vec<i64> = shares
            .points()
            .iter()
            .map(|p| i64::try_from(&p.x).unwrap())
            .collect();
        assert_eq!(xs, [1, 2, 10]);
    }

    #[test]
    fn non_numeric_share_key_is_rejected() {
        let text = r#"{
            "keys": { "n": 1, "k": 1 },
            "first": { "base": "10", "value": "4" }
        }"#;
        let err = Testcase::from_json_str(text).unwrap().resolve().unwrap_err();
        assert_eq!(err, RecoverError::InvalidShareIndex("first".to_owned()));
    }

    #[test]
    fn malformed_json_is_reported_with_context() {
        let err = Testcase::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, RecoverError::MalformedDocument(_)));
    }

    #[test]
    fn invalid_threshold_in_keys_is_rejected() {
        let text = r#"{
            "keys": { "n": 2, "k": 3 },
            "1": { "base": "10", "value": "4" },
            "2": { "base": "10", "value": "7" }
        }"#;
        let err = Testcase::from_json_str(text).unwrap().resolve().unwrap_err();
        assert_eq!(
            err,
            RecoverError::InvalidThreshold {
                threshold: 3,
                shares: 2
            }
        );
    }
}
