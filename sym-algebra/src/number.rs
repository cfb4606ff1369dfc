//! Numeric literals: exact rationals and floating-point values.
//!
//! A [`Number`] is either [`Number::Exact`], an arbitrary-precision rational that is always kept
//! in lowest terms with a positive denominator, or [`Number::Inexact`], a double-precision
//! float.
//!
//! Arithmetic mixing the two produces an [`Number::Inexact`] value (contagion). Equality is value
//! equality within each variant only: `Exact(0)` and `Inexact(0.0)` are both recognized by
//! [`Number::is_zero`], but they are **not** equal to each other.

use crate::error::{DivisionByZero, Error};
use crate::primitive::rational;
use rug::{ops::Pow, Integer, Rational};
use std::{cmp::Ordering, fmt, ops::{Add, Mul, Neg, Sub}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A numeric literal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    /// An exact rational number, such as `2` or `-3/4`.
    Exact(Rational),

    /// A floating-point number, such as `0.5`.
    Inexact(f64),
}

/// [`Eq`] is implemented manually to allow storing [`Number::Inexact`]s. A `NaN` given to
/// [`Number::Inexact`] is never equal to itself. The simplifier does not fold numbers into
/// non-finite floats; see [`Number::is_finite`].
impl Eq for Number {}

/// Largest result, in bits of numerator or denominator, that [`Number::checked_pow`] computes
/// exactly.
const MAX_EXACT_POW_BITS: u64 = 1 << 20;

impl Number {
    /// Creates an exact integer.
    pub fn int(n: i64) -> Self {
        Self::Exact(rational(n))
    }

    /// Returns true if the number is zero, whether exact or inexact.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Exact(n) => n.cmp0() == Ordering::Equal,
            Self::Inexact(n) => *n == 0.0,
        }
    }

    /// Returns true if the number is exactly one (`Exact(1)`).
    ///
    /// `Inexact(1.0)` is not included; removing it from a product would change the type of the
    /// result.
    pub fn is_one(&self) -> bool {
        matches!(self, Self::Exact(n) if *n == 1)
    }

    /// Returns true if the number is strictly negative.
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Exact(n) => n.cmp0() == Ordering::Less,
            Self::Inexact(n) => *n < 0.0,
        }
    }

    /// Returns true if the number is strictly positive.
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && !self.is_negative()
    }

    /// Returns true if the number is exact, or a float that is neither infinite nor `NaN`.
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Exact(_) => true,
            Self::Inexact(n) => n.is_finite(),
        }
    }

    /// Returns true if the number is an [`Number::Exact`] integer.
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Exact(n) if *n.denom() == 1)
    }

    /// If the number is an [`Number::Exact`] integer, returns it.
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Self::Exact(n) if *n.denom() == 1 => Some(n.numer()),
            _ => None,
        }
    }

    /// If the number has an integer value that fits in an [`i32`], returns it. This includes
    /// [`Number::Inexact`] values with no fractional part.
    pub fn to_i32(&self) -> Option<i32> {
        match self {
            Self::Exact(n) if *n.denom() == 1 => n.numer().to_i32(),
            Self::Exact(_) => None,
            Self::Inexact(n) => {
                if n.fract() == 0.0 && *n >= f64::from(i32::MIN) && *n <= f64::from(i32::MAX) {
                    Some(*n as i32)
                } else {
                    None
                }
            },
        }
    }

    /// Converts the number to the nearest [`f64`].
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Exact(n) => n.to_f64(),
            Self::Inexact(n) => *n,
        }
    }

    /// Compares the value of two numbers, across variants.
    ///
    /// Exact numbers are compared exactly; if either side is inexact, both are compared as
    /// [`f64`]s.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Exact(lhs), Self::Exact(rhs)) => Some(lhs.cmp(rhs)),
            (lhs, rhs) => lhs.to_f64().partial_cmp(&rhs.to_f64()),
        }
    }

    /// Divides two numbers, returning [`DivisionByZero`] if the divisor is zero, exact or not.
    pub fn checked_div(self, rhs: Self) -> Result<Self, Error> {
        if rhs.is_zero() {
            return Err(DivisionByZero.into());
        }

        Ok(match (self, rhs) {
            (Self::Exact(lhs), Self::Exact(rhs)) => Self::Exact(lhs / rhs),
            (lhs, rhs) => Self::Inexact(lhs.to_f64() / rhs.to_f64()),
        })
    }

    /// Raises the number to the given power.
    ///
    /// Only integer-valued exponents (that fit in an [`i32`]) are resolved; `Ok(None)` is
    /// returned otherwise, and the caller should keep the power unevaluated. `Ok(None)` is also
    /// returned if the exact result would be too large to store, or the inexact result is not
    /// finite. Raising zero to a negative power returns [`DivisionByZero`].
    pub fn checked_pow(&self, exponent: &Self) -> Result<Option<Self>, Error> {
        let Some(exp) = exponent.to_i32() else {
            return Ok(None);
        };

        if self.is_zero() && exp < 0 {
            return Err(DivisionByZero.into());
        }

        let value = match (self, exponent) {
            (Self::Exact(base), Self::Exact(_)) => {
                // 0, 1 and -1 stay small under any power
                let bits = base.numer().significant_bits().max(base.denom().significant_bits());
                if bits > 1 && u64::from(bits) * u64::from(exp.unsigned_abs()) > MAX_EXACT_POW_BITS {
                    return Ok(None);
                }
                Self::Exact(base.clone().pow(exp))
            },
            (base, _) => Self::Inexact(base.to_f64().powi(exp)),
        };

        Ok(value.is_finite().then_some(value))
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::Exact(rational(n))
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::int(n)
    }
}

impl From<Rational> for Number {
    fn from(n: Rational) -> Self {
        Self::Exact(n)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Self::Inexact(n)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) if *n.denom() == 1 => write!(f, "{}", n.numer()),
            Self::Exact(n) => write!(f, "{}/{}", n.numer(), n.denom()),
            // `{:?}` keeps the decimal point on whole floats, so `2.0` is not confused with `2`
            Self::Inexact(n) => write!(f, "{:?}", n),
        }
    }
}

impl Add for Number {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Exact(lhs), Self::Exact(rhs)) => Self::Exact(lhs + rhs),
            (lhs, rhs) => Self::Inexact(lhs.to_f64() + rhs.to_f64()),
        }
    }
}

impl Sub for Number {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl Mul for Number {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Exact(lhs), Self::Exact(rhs)) => Self::Exact(lhs * rhs),
            (lhs, rhs) => Self::Inexact(lhs.to_f64() * rhs.to_f64()),
        }
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Exact(n) => Self::Exact(-n),
            Self::Inexact(n) => Self::Inexact(-n),
        }
    }
}
