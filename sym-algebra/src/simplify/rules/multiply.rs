//! Simplification rules for expressions involving multiplication, including combining like
//! factors.

use crate::expr::Expr;
use crate::number::Number;
use crate::simplify::{rules::{do_multiply, flatten}, step::Step};
use crate::step_collector::StepCollector;

/// `a*(b*c) = a*b*c`
pub fn flatten_product(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        let factors = flatten(factors, |factor| match factor {
            Expr::Mul(inner) => Some(inner.as_slice()),
            _ => None,
        })?;
        Some(Expr::Mul(factors).downgrade())
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::FlattenProduct);
    Some(opt)
}

/// Multiplies all numeric factors together, and moves the product to the front.
///
/// `2*a*3 = 6*a`
///
/// Products that overflow to a non-finite float are left unfolded.
pub fn multiply_numbers(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        if factors.iter().filter(|factor| factor.is_number()).count() < 2 {
            return None;
        }

        let mut product = Number::int(1);
        let mut new_factors = vec![Expr::int(1)];
        for factor in factors {
            match factor.as_number() {
                Some(num) => product = product * num.clone(),
                None => new_factors.push(factor.clone()),
            }
        }
        if !product.is_finite() {
            return None;
        }
        new_factors[0] = Expr::from(product);

        Some(Expr::Mul(new_factors).downgrade())
    })?;

    step_collector.push(Step::MultiplyNumbers);
    Some(opt)
}

/// `0*a = 0`
/// `a*0 = 0`
///
/// The zero factor is kept as-is, so `0.0*a = 0.0`.
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        factors.iter()
            .find(|factor| factor.as_number().is_some_and(Number::is_zero))
            .cloned()
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        let new_factors = factors.iter()
            .filter(|factor| !factor.is_one())
            .cloned()
            .collect::<Vec<_>>();

        if new_factors.len() == factors.len() {
            None
        } else {
            Some(Expr::Mul(new_factors).downgrade())
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// Utility function to extract the base and exponent of an expression. If the expression is not
/// [`Expr::Exp`], the exponent is `1`.
///
/// - `a^b` -> `(a, b)`
/// - `a` -> `(a, 1)`
fn get_exp(expr: &Expr) -> (Expr, Expr) {
    match expr {
        Expr::Exp(lhs, rhs) => (*lhs.clone(), *rhs.clone()),
        expr => (expr.clone(), Expr::int(1)),
    }
}

/// Combines like factors.
///
/// `a*a = a^2`
/// `a^b*a^c = a^(b+c)`
/// `a*a^-1 = a^0`
/// etc.
pub fn combine_like_factors(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        let mut new_factors = factors.to_vec();
        let mut current_factor_idx = 0;

        // this is O(n^2) worst case, due to scanning the whole vec for each factor
        while current_factor_idx < new_factors.len() {
            let (current_factor, mut current_factor_exp) = get_exp(&new_factors[current_factor_idx]);
            let mut merged = false;

            // look at every factor after `current_factor`
            let mut next_factor_idx = current_factor_idx + 1;
            while next_factor_idx < new_factors.len() {
                let (next_factor, next_factor_exp) = get_exp(&new_factors[next_factor_idx]);

                // bases must be strictly equal
                // if they are, apply a^b*a^c = a^(b+c)
                if current_factor == next_factor {
                    current_factor_exp += next_factor_exp;
                    new_factors.swap_remove(next_factor_idx);
                    merged = true;
                } else {
                    next_factor_idx += 1;
                }
            }

            // after all combining, update the current factor
            if merged {
                new_factors[current_factor_idx] = if current_factor_exp.is_one() {
                    current_factor
                } else {
                    current_factor.pow(current_factor_exp)
                };
            }

            current_factor_idx += 1;
        }

        if new_factors.len() == factors.len() {
            None
        } else {
            Some(Expr::Mul(new_factors).downgrade())
        }
    })?;

    step_collector.push(Step::CombineLikeFactors);
    Some(opt)
}

/// Applies all multiplication rules.
///
/// All multiplication rules will reduce the complexity of the expression.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    flatten_product(expr, step_collector)
        .or_else(|| multiply_numbers(expr, step_collector))
        .or_else(|| multiply_zero(expr, step_collector))
        .or_else(|| multiply_one(expr, step_collector))
        .or_else(|| combine_like_factors(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn numbers_to_front() {
        let x = Expr::symbol("x");
        let expr = Expr::Mul(vec![Expr::int(2), x.clone(), Expr::rational(3, 4)]);
        assert_eq!(multiply_numbers(&expr, &mut ()), Some(Expr::Mul(vec![
            Expr::rational(3, 2),
            x,
        ])));
    }

    #[test]
    fn overflowing_product_unfolded() {
        let expr = Expr::Mul(vec![Expr::float(1e300), Expr::symbol("x"), Expr::float(1e300)]);
        assert_eq!(multiply_numbers(&expr, &mut ()), None);
    }

    #[test]
    fn inexact_zero_factor() {
        let expr = Expr::Mul(vec![Expr::symbol("x"), Expr::float(0.0)]);
        let mut steps = Vec::new();
        assert_eq!(all(&expr, &mut steps), Some(Expr::float(0.0)));
        assert_eq!(steps, vec![Step::MultiplyZero]);
    }

    #[test]
    fn single_factor_untouched() {
        let expr = Expr::Mul(vec![Expr::symbol("x"), Expr::symbol("y").pow(-1)]);
        assert_eq!(all(&expr, &mut ()), None);
    }
}
