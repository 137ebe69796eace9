use num_bigint::BigInt;

use crate::{decode, error::Result};

/// A single decoded share: a point `(x, y)` on the hidden polynomial.
/// `x` is the share index (unique per input, not necessarily contiguous),
/// `y` the decoded share value. Created once from input, read-only
/// afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

/// An undecoded share as handed over by the input layer: the share index
/// plus its value written in some numeric base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawShare {
    pub index: BigInt,
    pub value: String,
    pub base: u32,
}

/// The full ordered collection of decoded shares, sorted by ascending
/// `x`. Immutable for the duration of one reconstruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareSet(Vec<Point>);

impl ShareSet {
    /// Decode every raw share via [`decode::parse_in_base`] and sort the
    /// resulting points by ascending `x`.
    pub fn decode<I>(raw: I) -> Result<Self>
    where
        I: IntoIterator<Item = RawShare>,
    {
        let mut points = raw
            .into_iter()
            .map(|share| {
                let y = decode::parse_in_base(&share.value, share.base)?;
                Ok(Point {
                    x: share.index,
                    y: BigInt::from(y),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        points.sort_by(|a, b| a.x.cmp(&b.x));
        Ok(Self(points))
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
