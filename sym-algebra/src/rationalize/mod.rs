//! Rewriting expressions as a single fraction.
//!
//! [`rationalize`] turns an expression such as `1/x + 1/y` into the form `numerator /
//! denominator`, here `(y + x) / (x*y)`. Sums are combined one term at a time by cross
//! multiplication (see [`combine`]); products and powers are rationalized factor by factor, and
//! equations side by side. Leaves and function applications are already rational, and are
//! returned as-is.
//!
//! The result of every power, product and sum is passed through a [`Simplifier`], which cleans up
//! the trivial factors introduced by cross multiplication. [`rationalize`] uses the built-in
//! [`simplify`]; use [`rationalize_with`] to supply another one.
//!
//! Only the base of a power is rationalized, not its exponent.
//!
//! ```
//! use sym_algebra::{expr::Expr, rationalize::{denominator, rationalize}};
//!
//! let x = Expr::symbol("x");
//! let y = Expr::symbol("y");
//! let expr = Expr::int(1) / x.clone() + Expr::int(1) / y.clone();
//!
//! let rational = rationalize(&expr).unwrap();
//! assert_eq!(denominator(&rational), x * y);
//! ```

mod fraction;

pub use fraction::{denominator, numerator};

use crate::error::Error;
use crate::expr::Expr;
use crate::simplify::{simplify, Simplifier};
use log::{debug, trace};

/// Combines two expressions into one fraction, using the common-denominator rule:
///
/// `m/r + n/s = (m*s + n*r) / (r*s)`
///
/// If neither expression has a denominator, this is just `u + v`. The new numerators `m*s` and
/// `n*r` are combined the same way, in case they still have denominators of their own.
///
/// No simplification is done.
pub fn combine(u: Expr, v: Expr) -> Expr {
    let (m, r) = (numerator(&u), denominator(&u));
    let (n, s) = (numerator(&v), denominator(&v));

    if r.is_one() && s.is_one() {
        return u + v;
    }

    trace!("combining `{}` / `{}` with `{}` / `{}`", m, r, n, s);
    combine(m * s.clone(), n * r.clone()) / (r * s)
}

fn inner_rationalize<S>(expr: &Expr, simplifier: &S) -> Result<Expr, Error>
where
    S: Simplifier + ?Sized,
{
    match expr {
        Expr::Equation(lhs, rhs, relation) => Ok(Expr::equation(
            inner_rationalize(lhs, simplifier)?,
            inner_rationalize(rhs, simplifier)?,
            *relation,
        )),
        Expr::Exp(base, exp) => {
            let base = inner_rationalize(base, simplifier)?;
            simplifier.simplify(&base.pow((**exp).clone()))
        },
        Expr::Mul(factors) if !factors.is_empty() => {
            let factors = factors.iter()
                .map(|factor| inner_rationalize(factor, simplifier))
                .collect::<Result<Vec<_>, _>>()?;
            simplifier.simplify(&Expr::Mul(factors))
        },
        Expr::Add(terms) => {
            let Some((first, rest)) = terms.split_first() else {
                return Ok(expr.clone());
            };

            // `expr - first` is exactly the sum of the other terms
            let g = inner_rationalize(first, simplifier)?;
            let r = inner_rationalize(&Expr::Add(rest.to_vec()).downgrade(), simplifier)?;
            simplifier.simplify(&combine(g, r))
        },
        Expr::Mul(_) | Expr::Primary(_) => Ok(expr.clone()),
    }
}

/// Rewrites the expression as a single fraction, simplifying with the given [`Simplifier`].
///
/// Fails only if the simplifier does, such as when a denominator simplifies to zero.
pub fn rationalize_with<S>(expr: &Expr, simplifier: &S) -> Result<Expr, Error>
where
    S: Simplifier + ?Sized,
{
    debug!("rationalizing `{}`", expr);
    let rational = inner_rationalize(expr, simplifier)?;
    debug!("rationalized to `{}`", rational);
    Ok(rational)
}

/// Rewrites the expression as a single fraction, simplifying with [`simplify`].
///
/// Returns [`DivisionByZero`](crate::error::DivisionByZero) if a denominator simplifies to zero.
pub fn rationalize(expr: &Expr) -> Result<Expr, Error> {
    rationalize_with(expr, &simplify)
}

#[cfg(test)]
mod tests {
    use crate::error::DivisionByZero;
    use crate::expr::{Func, Relation};
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use super::*;

    fn sym(name: &str) -> Expr {
        Expr::symbol(name)
    }

    #[test]
    fn leaves_unchanged() {
        for expr in [
            Expr::int(2),
            Expr::rational(-3, 4),
            Expr::float(0.5),
            sym("x"),
            Expr::call(Func::Sin, vec![sym("x").recip() + sym("y")]),
        ] {
            assert_eq!(rationalize(&expr).unwrap(), expr);
        }
    }

    #[test]
    fn combine_without_denominators() {
        let combined = combine(sym("a"), sym("b"));
        assert_eq!(combined, sym("a") + sym("b"));
    }

    #[test]
    fn combine_two_fractions() {
        // a/b + c/d = (a*d + c*b) / (b*d)
        let combined = combine(sym("a") / sym("b"), sym("c") / sym("d"));
        assert_eq!(numerator(&combined), Expr::Add(vec![
            Expr::Mul(vec![sym("a"), sym("d")]),
            Expr::Mul(vec![sym("c"), sym("b")]),
        ]));
        assert_eq!(denominator(&combined), Expr::Mul(vec![sym("b"), sym("d")]));
    }

    #[test]
    fn sum_of_reciprocals() {
        let expr = Expr::int(1) / sym("x") + Expr::int(1) / sym("y");
        let rational = rationalize(&expr).unwrap();
        assert_eq!(rational, Expr::Mul(vec![
            sym("y") + sym("x"),
            sym("x").recip(),
            sym("y").recip(),
        ]));
        assert_eq!(numerator(&rational), sym("y") + sym("x"));
        assert_eq!(denominator(&rational), sym("x") * sym("y"));
    }

    #[test]
    fn power_base_only() {
        // the exponent is not rationalized
        let exponent = sym("a").recip() + sym("b");
        let expr = (sym("x") + Expr::int(0)).pow(exponent.clone());
        assert_eq!(rationalize(&expr).unwrap(), sym("x").pow(exponent));
    }

    #[test]
    fn reciprocal_of_fraction() {
        // (1/x + 1/y)^-1 = x*y / (y + x)
        let expr = (sym("x").recip() + sym("y").recip()).pow(-1);
        let rational = rationalize(&expr).unwrap();
        assert_eq!(rational, Expr::Mul(vec![
            (sym("y") + sym("x")).pow(-1),
            sym("x"),
            sym("y"),
        ]));
        assert_eq!(denominator(&rational), sym("y") + sym("x"));
    }

    #[test]
    fn zero_factor_keeps_division_by_zero() {
        let expr = Expr::int(0) * (Expr::int(1) / (sym("x") - sym("x")));
        let err = rationalize(&expr).unwrap_err();
        assert!(err.is::<DivisionByZero>());
    }

    #[test]
    fn equation_sides() {
        let expr = Expr::equation(
            sym("x").recip() + sym("x").recip(),
            Expr::int(1) * sym("y"),
            Relation::Less,
        );
        assert_eq!(rationalize(&expr).unwrap(), Expr::equation(
            Expr::int(2) * sym("x").recip(),
            sym("y"),
            Relation::Less,
        ));
    }

    #[test]
    fn empty_nodes_unchanged() {
        assert_eq!(rationalize(&Expr::Add(Vec::new())).unwrap(), Expr::Add(Vec::new()));
        assert_eq!(rationalize(&Expr::Mul(Vec::new())).unwrap(), Expr::Mul(Vec::new()));
    }

    #[test]
    fn zero_denominator() {
        let expr = Expr::int(1) / (sym("x") - sym("x"));
        let err = rationalize(&expr).unwrap_err();
        assert!(err.is::<DivisionByZero>());
    }

    #[test]
    fn custom_simplifier() {
        let calls = Cell::new(0);
        let counting = |expr: &Expr| -> Result<Expr, Error> {
            calls.set(calls.get() + 1);
            Ok(expr.clone())
        };

        let expr = sym("a") / sym("b") + sym("c");
        let rational = rationalize_with(&expr, &counting).unwrap();

        // one call each for the power `b^-1`, the product `a/b` and the combined sum; the leaf `c`
        // is returned as-is
        assert_eq!(calls.get(), 3);
        assert_eq!(denominator(&rational), sym("b"));
    }
}
