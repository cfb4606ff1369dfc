//! Simplification rules for power expressions.

use crate::error::{DivisionByZero, Error};
use crate::expr::Expr;
use crate::number::Number;
use crate::simplify::{rules::do_power, step::Step};
use crate::step_collector::StepCollector;

/// `a^0 = 1`
///
/// `0^0` is defined as `1` by this rule, though it may be undefined in other mathematical
/// contexts.
pub fn power_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |_, rhs| {
        if rhs.is_exact_zero() {
            Some(Expr::int(1))
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `0^a = 0`, if `a` is a positive number.
///
/// `0^0` is handled by the [`power_zero`] rule. Negative powers of zero are left for
/// [`power_numbers`] to report.
pub fn power_zero_left(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        if lhs.is_exact_zero() && rhs.as_number().is_some_and(Number::is_positive) {
            Some(Expr::int(0))
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerZeroLeft);
    Some(opt)
}

/// `1^a = 1`
pub fn power_one_left(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, _| {
        if lhs.is_one() {
            Some(Expr::int(1))
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerOneLeft);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        if rhs.is_one() {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// `(a^b)^n = a^(b*n)`, if `n` is an exact integer.
///
/// For other outer exponents the identity does not hold in general (e.g. `((-1)^2)^(1/2) = 1`).
pub fn power_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        rhs.as_exact_i32()?;
        match lhs {
            Expr::Exp(base, exponent) => Some((**base).clone().pow((**exponent).clone() * rhs.clone())),
            _ => None,
        }
    })?;

    step_collector.push(Step::PowerPower);
    Some(opt)
}

/// `(a*b)^n = a^n*b^n`, if `n` is an exact integer.
pub fn distribute_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        rhs.as_exact_i32()?;
        match lhs {
            Expr::Mul(factors) => Some(Expr::Mul(
                factors.iter()
                    .map(|factor| factor.clone().pow(rhs.clone()))
                    .collect(),
            )),
            _ => None,
        }
    })?;

    step_collector.push(Step::DistributePower);
    Some(opt)
}

/// Folds a number raised to an integer power.
///
/// `2^3 = 8`
/// `(1/2)^-1 = 2`
/// `0^-1` is an error
///
/// Powers with other exponents, such as `2^(1/2)`, are left as-is.
pub fn power_numbers(
    expr: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Option<Expr>, Error> {
    let Expr::Exp(lhs, rhs) = expr else {
        return Ok(None);
    };
    let (Some(base), Some(exponent)) = (lhs.as_number(), rhs.as_number()) else {
        return Ok(None);
    };

    let Some(value) = base.checked_pow(exponent)? else {
        return Ok(None);
    };

    step_collector.push(Step::PowerNumbers);
    Ok(Some(Expr::from(value)))
}

/// Returns [`DivisionByZero`] if any part of the expression is zero raised to a negative integer
/// power, such as `0^-1`.
///
/// Rules see a node before its children, so `0*0^-1` would otherwise become `0` through
/// [`multiply_zero`](super::multiply::multiply_zero) before [`power_numbers`] reaches the power.
pub fn check_zero_divisors(expr: &Expr) -> Result<(), Error> {
    let divides_by_zero = expr.post_order_iter().any(|sub| match sub {
        Expr::Exp(lhs, rhs) => {
            lhs.as_number().is_some_and(Number::is_zero)
                && rhs.as_number().and_then(Number::to_i32).is_some_and(|exp| exp < 0)
        },
        _ => false,
    });

    if divides_by_zero {
        Err(DivisionByZero.into())
    } else {
        Ok(())
    }
}

/// Applies all power rules.
///
/// All power rules will reduce the complexity of the expression.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    let opt = power_zero(expr, step_collector)
        .or_else(|| power_zero_left(expr, step_collector))
        .or_else(|| power_one_left(expr, step_collector))
        .or_else(|| power_one(expr, step_collector))
        .or_else(|| power_power(expr, step_collector))
        .or_else(|| distribute_power(expr, step_collector));

    match opt {
        Some(expr) => Ok(Some(expr)),
        None => power_numbers(expr, step_collector),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn power_of_power() {
        let x = Expr::symbol("x");
        let expr = x.clone().pow(Expr::rational(1, 2)).pow(-2);
        assert_eq!(power_power(&expr, &mut ()), Some(x.pow(Expr::int(-1))));
    }

    #[test]
    fn power_of_power_non_integer() {
        let x = Expr::symbol("x");
        let expr = x.pow(2).pow(Expr::rational(1, 2));
        assert_eq!(power_power(&expr, &mut ()), None);
    }

    #[test]
    fn zero_left_needs_positive_exponent() {
        assert_eq!(power_zero_left(&Expr::int(0).pow(Expr::symbol("a")), &mut ()), None);
        assert_eq!(power_zero_left(&Expr::int(0).pow(3), &mut ()), Some(Expr::int(0)));
    }

    #[test]
    fn fold_numbers() {
        let mut steps = Vec::new();
        let expr = Expr::rational(2, 3).pow(-2);
        assert_eq!(all(&expr, &mut steps).unwrap(), Some(Expr::rational(9, 4)));
        assert_eq!(steps, vec![Step::PowerNumbers]);
    }

    #[test]
    fn huge_power_unevaluated() {
        let expr = Expr::int(2).pow(i32::MAX);
        assert_eq!(power_numbers(&expr, &mut ()).unwrap(), None);
    }

    #[test]
    fn nested_zero_divisor() {
        let x = Expr::symbol("x");
        let expr = Expr::Mul(vec![
            Expr::int(0),
            x.clone() + Expr::int(0).pow(-1),
        ]);
        assert!(check_zero_divisors(&expr).unwrap_err().is::<DivisionByZero>());
        assert!(check_zero_divisors(&Expr::int(0).pow(Expr::rational(-1, 2))).is_ok());
        assert!(check_zero_divisors(&x.pow(-1)).is_ok());
    }

    #[test]
    fn zero_to_negative_power() {
        let err = all(&Expr::int(0).pow(-2), &mut ()).unwrap_err();
        assert!(err.is::<DivisionByZero>());
    }
}
