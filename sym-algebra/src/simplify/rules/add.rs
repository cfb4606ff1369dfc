//! Simplification rules for expressions involving addition, including combining like terms.

use crate::expr::{Expr, Primary};
use crate::number::Number;
use crate::simplify::{rules::{do_add, flatten}, step::Step};
use crate::step_collector::StepCollector;

/// `a+(b+c) = a+b+c`
pub fn flatten_sum(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |terms| {
        let terms = flatten(terms, |term| match term {
            Expr::Add(inner) => Some(inner.as_slice()),
            _ => None,
        })?;
        Some(Expr::Add(terms).downgrade())
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::FlattenSum);
    Some(opt)
}

/// `0+a = a`
/// `a+0 = a`
///
/// Only exact zeroes are removed; `0.0` is kept so the sum stays inexact.
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |terms| {
        let new_terms = terms.iter()
            .filter(|term| !term.is_exact_zero())
            .cloned()
            .collect::<Vec<_>>();

        if new_terms.len() == terms.len() {
            None
        } else {
            Some(Expr::Add(new_terms).downgrade())
        }
    })?;

    step_collector.push(Step::AddZero);
    Some(opt)
}

/// Utility function to extract the numeric coefficient and the remaining factors of a term. If
/// the term is not [`Expr::Mul`], the coefficient is 1.
///
/// - `5` -> `(5, 1)`
/// - `3*a` -> `(3, a)`
/// - `1/4*a*b` -> `(1/4, a*b)`
/// - `a` -> `(1, a)`
fn get_coeff(expr: &Expr) -> (Number, Expr) {
    match expr {
        Expr::Primary(Primary::Number(num)) => (num.clone(), Expr::int(1)),
        Expr::Mul(factors) => {
            let mut coeff = None::<Number>;
            let mut rest = Vec::with_capacity(factors.len());
            for factor in factors {
                match factor.as_number() {
                    Some(num) => {
                        coeff = Some(match coeff {
                            Some(coeff) => coeff * num.clone(),
                            None => num.clone(),
                        });
                    },
                    None => rest.push(factor.clone()),
                }
            }

            (coeff.unwrap_or_else(|| Number::int(1)), Expr::Mul(rest).downgrade())
        },
        _ => (Number::int(1), expr.clone()),
    }
}

/// Combines like terms.
///
/// `a+a = 2a`
/// `a+a+a = 3a`
/// `2a+3a = 5a`
/// `1+2 = 3`
/// `a-a = 0`
/// etc.
///
/// Terms whose coefficients would sum to a non-finite float are kept apart.
pub fn combine_like_terms(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |terms| {
        let mut new_terms = terms.to_vec();
        let mut current_term_idx = 0;
        let mut combined = false;

        // this is O(n^2) worst case, due to scanning the whole vec for each term
        while current_term_idx < new_terms.len() {
            let (mut current_term_coeff, current_term_factors) = get_coeff(&new_terms[current_term_idx]);
            let mut merged = false;

            // look at every term after `current_term`
            let mut next_term_idx = current_term_idx + 1;
            while next_term_idx < new_terms.len() {
                let (next_term_coeff, next_term_factors) = get_coeff(&new_terms[next_term_idx]);

                // factors must be strictly equal
                if current_term_factors == next_term_factors {
                    // if so, apply a*n + a*m = (n+m)*a
                    let sum = current_term_coeff.clone() + next_term_coeff;
                    if sum.is_finite() {
                        current_term_coeff = sum;
                        new_terms.swap_remove(next_term_idx);
                        merged = true;
                        continue;
                    }
                }
                next_term_idx += 1;
            }

            if !merged {
                current_term_idx += 1;
                continue;
            }

            combined = true;
            if current_term_coeff.is_zero() && matches!(current_term_coeff, Number::Exact(_)) {
                new_terms.swap_remove(current_term_idx);
            } else {
                new_terms[current_term_idx] = if current_term_factors.is_one() {
                    Expr::from(current_term_coeff)
                } else if current_term_coeff.is_one() {
                    current_term_factors
                } else {
                    Expr::from(current_term_coeff) * current_term_factors
                };
                current_term_idx += 1;
            }
        }

        if combined {
            Some(Expr::Add(new_terms).downgrade())
        } else {
            None
        }
    })?;

    step_collector.push(Step::CombineLikeTerms);
    Some(opt)
}

/// Applies all addition rules.
///
/// All addition rules will reduce the complexity of the expression.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    flatten_sum(expr, step_collector)
        .or_else(|| add_zero(expr, step_collector))
        .or_else(|| combine_like_terms(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn coefficients() {
        let x = Expr::symbol("x");
        assert_eq!(get_coeff(&Expr::int(5)), (Number::int(5), Expr::int(1)));
        assert_eq!(
            get_coeff(&Expr::Mul(vec![x.clone(), Expr::int(2), Expr::int(3)])),
            (Number::int(6), x.clone()),
        );
        assert_eq!(get_coeff(&x), (Number::int(1), x));
    }

    #[test]
    fn flatten_nested_sum() {
        let expr = Expr::Add(vec![
            Expr::symbol("a"),
            Expr::Add(vec![Expr::symbol("b"), Expr::symbol("c")]),
        ]);
        let mut steps = Vec::new();
        assert_eq!(all(&expr, &mut steps), Some(Expr::Add(vec![
            Expr::symbol("a"),
            Expr::symbol("b"),
            Expr::symbol("c"),
        ])));
        assert_eq!(steps, vec![Step::FlattenSum]);
    }

    #[test]
    fn overflowing_sum_kept_apart() {
        let x = Expr::symbol("x");
        let expr = Expr::Add(vec![
            Expr::float(1e308) * x.clone(),
            Expr::float(1e308) * x.clone(),
        ]);
        assert_eq!(combine_like_terms(&expr, &mut ()), None);

        // the first and third terms still cancel
        let expr = Expr::Add(vec![Expr::float(1e308), Expr::float(1e308), Expr::float(-1e308)]);
        assert_eq!(combine_like_terms(&expr, &mut ()), Some(Expr::Add(vec![
            Expr::float(0.0),
            Expr::float(1e308),
        ])));
    }

    #[test]
    fn inexact_zero_kept() {
        let expr = Expr::Add(vec![Expr::symbol("x"), Expr::float(0.0)]);
        assert_eq!(add_zero(&expr, &mut ()), None);
    }
}
