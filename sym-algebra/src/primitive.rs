//! Functions to construct [`Integer`]s and [`Rational`]s from various types.

use rug::{Integer, Rational};

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates a [`Rational`] with the given value.
pub fn rational<T>(n: T) -> Rational
where
    Rational: From<T>,
{
    Rational::from(n)
}

/// Creates the [`Rational`] `numerator / denominator`, reduced to lowest terms.
///
/// Panics if `denominator` is zero.
pub fn fraction(numerator: i64, denominator: i64) -> Rational {
    Rational::from((numerator, denominator))
}
