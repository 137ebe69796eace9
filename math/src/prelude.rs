pub use crate::rat;
pub use crate::{lagrange, rational::Rational, MathError, Result};
