use std::fmt;
use std::ops::Add;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Sub;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;
use num_traits::Signed;
use num_traits::Zero;

use crate::{MathError, Result};

/// An exact rational number: `num / den` with `den > 0`, stored in lowest
/// terms.
///
/// Every constructor normalizes the sign onto the numerator and divides
/// both parts by their greatest common divisor, so two rationals are equal
/// iff they denote the same fraction. Values are immutable; arithmetic
/// returns fresh, re-normalized results. Nothing here ever rounds.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Rational {
    num: BigInt,
    den: BigInt,
}

/// Simplifies constructing [Rational]s.
///
/// With one argument the value is taken as an integer; with two arguments
/// they are numerator and denominator. The two-argument form panics on a
/// zero denominator, so it is meant for literals and tests; fallible code
/// paths should call [`Rational::new`].
///
/// # Examples
///
/// ```
/// use math::prelude::*;
/// let a = rat!(6, 4);
/// let b = rat!(3, 2);
/// assert_eq!(a, b);
/// assert_eq!(rat!(5), rat!(10, 2));
/// ```
#[macro_export]
macro_rules! rat {
    ($num:expr) => {
        $crate::rational::Rational::from($num)
    };
    ($num:expr, $den:expr) => {
        $crate::rational::Rational::new(
            $crate::num_bigint::BigInt::from($num),
            $crate::num_bigint::BigInt::from($den),
        )
        .expect("rat! requires a nonzero denominator")
    };
}

impl Rational {
    /// Construct `num / den`, normalizing sign and reducing to lowest
    /// terms. Fails with [`MathError::DivisionByZero`] when `den` is zero.
    pub fn new(num: impl Into<BigInt>, den: impl Into<BigInt>) -> Result<Self> {
        let num = num.into();
        let den = den.into();
        if den.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        if den.is_negative() {
            Ok(Self::reduced(-num, -den))
        } else {
            Ok(Self::reduced(num, den))
        }
    }

    /// Build from parts already known to satisfy `den > 0`, reducing by
    /// the gcd. Callers uphold the sign invariant.
    fn reduced(num: BigInt, den: BigInt) -> Self {
        debug_assert!(den.is_positive());
        let g = num.gcd(&den);
        if g.is_one() {
            Self { num, den }
        } else {
            Self {
                num: num / &g,
                den: den / g,
            }
        }
    }

    pub fn numer(&self) -> &BigInt {
        &self.num
    }

    /// Always positive.
    pub fn denom(&self) -> &BigInt {
        &self.den
    }

    /// Whether this rational denotes a whole number (denominator is 1).
    /// Exact by construction; there is no tolerance involved.
    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// Exact comparison against an integer by cross-multiplication,
    /// avoiding any division: `num / den == value` iff
    /// `num == value * den`.
    pub fn eq_integer(&self, value: &BigInt) -> bool {
        self.num == value * &self.den
    }

    /// Division, failing with [`MathError::DivisionByZero`] when the
    /// divisor is zero.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
        if divisor.num.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        let num = &self.num * &divisor.den;
        let den = &self.den * &divisor.num;
        if den.is_negative() {
            Ok(Self::reduced(-num, -den))
        } else {
            Ok(Self::reduced(num, den))
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl From<BigInt> for Rational {
    fn from(num: BigInt) -> Self {
        Self {
            num,
            den: BigInt::one(),
        }
    }
}

impl From<&BigInt> for Rational {
    fn from(num: &BigInt) -> Self {
        Self::from(num.clone())
    }
}

macro_rules! impl_from_int_for_rational {
    ($($t:ident),+ $(,)?) => {$(
        impl From<$t> for Rational {
            fn from(value: $t) -> Self {
                Self::from(BigInt::from(value))
            }
        }
    )+};
}

impl_from_int_for_rational!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

macro_rules! impl_binop_for_rational {
    ($imp:ident, $method:ident, |$lhs:ident, $rhs:ident| $body:expr) => {
        impl<'a, 'b> $imp<&'b Rational> for &'a Rational {
            type Output = Rational;

            fn $method(self, rhs: &'b Rational) -> Rational {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl $imp<Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                $imp::$method(&self, &rhs)
            }
        }

        impl<'a> $imp<&'a Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &'a Rational) -> Rational {
                $imp::$method(&self, rhs)
            }
        }

        impl<'a> $imp<Rational> for &'a Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                $imp::$method(self, &rhs)
            }
        }
    };
}

impl_binop_for_rational!(Add, add, |lhs, rhs| Rational::reduced(
    &lhs.num * &rhs.den + &rhs.num * &lhs.den,
    &lhs.den * &rhs.den,
));

impl_binop_for_rational!(Sub, sub, |lhs, rhs| Rational::reduced(
    &lhs.num * &rhs.den - &rhs.num * &lhs.den,
    &lhs.den * &rhs.den,
));

impl_binop_for_rational!(Mul, mul, |lhs, rhs| Rational::reduced(
    &lhs.num * &rhs.num,
    &lhs.den * &rhs.den,
));

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        -self.clone()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from(0)
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from(1)
    }

    fn is_one(&self) -> bool {
        self.num.is_one() && self.den.is_one()
    }
}
