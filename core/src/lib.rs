//! Reconstruction of a threshold-shared secret from shares that may have
//! been tampered with.
//!
//! The secret is the constant term of a hidden degree-(k−1) polynomial;
//! each share is a point on it. Given `n` shares of which some may be
//! corrupted, the solver interpolates every k-element subset exactly (no
//! floating point anywhere), scores each candidate secret by how many of
//! the `n` shares its polynomial passes through, and reports the
//! best-supported secret together with the indices of the disagreeing
//! shares.

pub mod combinations;
pub mod decode;
pub mod error;
pub mod input;
pub mod params;
pub mod share;
pub mod solver;

pub use error::{RecoverError, Result};
pub use input::{recover, Testcase};
pub use params::Params;
pub use share::{Point, RawShare, ShareSet};
pub use solver::{solve, Outcome};
