//! Splitting an expression into a numerator and a denominator.
//!
//! A factor belongs to the denominator when it is a power with a negative numeric exponent, such
//! as `x^-1` or `(y+1)^-0.5`. Everything else belongs to the numerator. The split is purely
//! structural: only the top-level factors of a product are inspected, and no simplification is
//! done, so `numerator(u) / denominator(u)` has the value of `u` without being identical to it.

use crate::expr::Expr;
use crate::number::Number;

/// Helper struct to build a product of expressions. Exact `1` factors are dropped, and nested
/// products are flattened, so an empty product is built as `1`.
#[derive(Default)]
struct FactorBuilder(Vec<Expr>);

impl From<FactorBuilder> for Expr {
    fn from(value: FactorBuilder) -> Self {
        Expr::Mul(value.0).downgrade()
    }
}

impl FactorBuilder {
    fn mult(&mut self, e: Expr) {
        match e {
            Expr::Mul(factors) => factors.into_iter().for_each(|factor| self.mult(factor)),
            e if e.is_one() => (),
            e => self.0.push(e),
        }
    }
}

/// If the expression is a power with a negative numeric exponent, returns the base and the
/// exponent.
fn negative_power(expr: &Expr) -> Option<(&Expr, &Number)> {
    match expr {
        Expr::Exp(base, exp) => {
            let exp = exp.as_number().filter(|exp| exp.is_negative())?;
            Some((&**base, exp))
        },
        _ => None,
    }
}

/// Returns `base^exp`, or just `base` if `exp` is exactly one.
fn raise(base: &Expr, exp: Number) -> Expr {
    if exp.is_one() {
        base.clone()
    } else {
        base.clone().pow(exp)
    }
}

/// Returns the numerator of the expression.
///
/// - `b^e` with a negative number `e` -> `1`
/// - a product -> the product of the numerators of its factors
/// - anything else -> the expression itself
pub fn numerator(expr: &Expr) -> Expr {
    match expr {
        Expr::Exp(..) if negative_power(expr).is_some() => Expr::int(1),
        Expr::Mul(factors) => {
            let mut product = FactorBuilder::default();
            for factor in factors {
                product.mult(numerator(factor));
            }
            product.into()
        },
        _ => expr.clone(),
    }
}

/// Returns the denominator of the expression.
///
/// - `b^e` with a negative number `e` -> `b^-e`, or `b` if `e` is `-1`
/// - a product -> the product of the denominators of its factors
/// - anything else -> `1`
pub fn denominator(expr: &Expr) -> Expr {
    if let Some((base, exp)) = negative_power(expr) {
        return raise(base, -exp.clone());
    }

    match expr {
        Expr::Mul(factors) => {
            let mut product = FactorBuilder::default();
            for factor in factors {
                product.mult(denominator(factor));
            }
            product.into()
        },
        _ => Expr::int(1),
    }
}
