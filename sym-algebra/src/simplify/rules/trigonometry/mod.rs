//! Simplification rules for trigonometric functions.
//!
//! Arguments are recognized when they are an exact rational multiple of the symbol `pi`: `0`,
//! `pi`, or `c*pi`. Angles are always in radians here; the trigonometric mode of an evaluation
//! context only affects numeric evaluation.

mod table;

use crate::expr::{Expr, Func, Primary};
use crate::number::Number;
use crate::simplify::{rules::do_call, step::Step};
use crate::step_collector::StepCollector;
use rug::Rational;
use std::collections::HashMap;

/// If the argument is `c*pi` for an exact rational `c`, returns `c`. The argument `0` is `0*pi`.
fn pi_multiple(arg: &Expr) -> Option<Rational> {
    let is_pi = |expr: &Expr| expr.as_symbol() == Some("pi");
    let exact = |expr: &Expr| match expr.as_number()? {
        Number::Exact(n) => Some(n.clone()),
        Number::Inexact(_) => None,
    };

    match arg {
        Expr::Primary(Primary::Number(_)) if arg.is_exact_zero() => Some(Rational::new()),
        Expr::Primary(_) if is_pi(arg) => Some(Rational::from(1)),
        Expr::Mul(factors) if factors.len() == 2 => {
            if is_pi(&factors[1]) {
                exact(&factors[0])
            } else if is_pi(&factors[0]) {
                exact(&factors[1])
            } else {
                None
            }
        },
        _ => None,
    }
}

/// Normalize the argument and look it up in the provided table.
fn simplify_trig(arg: &Expr, table: &HashMap<Rational, table::TrigOut>) -> Option<Expr> {
    // example: compute sin(pi/6)
    // compute normalized turn: (pi/6) / (2pi) = 1/12
    let turn = pi_multiple(arg)? / 2u32;

    // the turn can be outside the range 0 to 1; wrap it around
    let turn = turn.clone() - turn.floor();

    table.get(&turn).map(table::TrigOut::to_expr)
}

/// `sin(x)`
pub fn sin(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_call(expr, Func::Sin, |args| {
        simplify_trig(args.first()?, &table::SIN_TABLE)
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::Sin);
    Some(opt)
}

/// `cos(x)`
pub fn cos(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_call(expr, Func::Cos, |args| {
        simplify_trig(args.first()?, &table::COS_TABLE)
    })?;

    step_collector.push(Step::Cos);
    Some(opt)
}

/// `tan(x)`
pub fn tan(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_call(expr, Func::Tan, |args| {
        simplify_trig(args.first()?, &table::TAN_TABLE)
    })?;

    step_collector.push(Step::Tan);
    Some(opt)
}

/// Applies all trigonometric rules.
///
/// All trigonometric rules will reduce the complexity of the expression.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    sin(expr, step_collector)
        .or_else(|| cos(expr, step_collector))
        .or_else(|| tan(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use crate::simplify::simplify;
    use pretty_assertions::assert_eq;
    use super::*;

    fn pi() -> Expr {
        Expr::symbol("pi")
    }

    #[test]
    fn sin_pi_over_six() {
        let expr = Expr::call(Func::Sin, vec![Expr::rational(1, 6) * pi()]);
        assert_eq!(simplify(&expr).unwrap(), Expr::rational(1, 2));
    }

    #[test]
    fn cos_negative_angle() {
        // cos(-2pi/3) = cos(4pi/3) = -1/2
        let expr = Expr::call(Func::Cos, vec![Expr::rational(-2, 3) * pi()]);
        assert_eq!(simplify(&expr).unwrap(), Expr::rational(-1, 2));
    }

    #[test]
    fn sin_of_pi_and_zero() {
        assert_eq!(simplify(&Expr::call(Func::Sin, vec![pi()])).unwrap(), Expr::int(0));
        assert_eq!(simplify(&Expr::call(Func::Cos, vec![Expr::int(0)])).unwrap(), Expr::int(1));
    }

    #[test]
    fn sin_three_quarter_turn_negated() {
        // sin(5pi/4) = -sqrt(2)/2
        let expr = Expr::call(Func::Sin, vec![Expr::rational(5, 4) * pi()]);
        assert_eq!(simplify(&expr).unwrap(), Expr::Mul(vec![
            Expr::rational(-1, 2),
            Expr::int(2).pow(Expr::rational(1, 2)),
        ]));
    }

    #[test]
    fn tan_undefined_left_alone() {
        let expr = Expr::call(Func::Tan, vec![Expr::rational(1, 2) * pi()]);
        assert_eq!(simplify(&expr).unwrap(), expr);
    }

    #[test]
    fn unknown_angles_left_alone() {
        let expr = Expr::call(Func::Sin, vec![Expr::symbol("x")]);
        assert_eq!(simplify(&expr).unwrap(), expr);

        let expr = Expr::call(Func::Sin, vec![Expr::float(0.5) * pi()]);
        assert_eq!(simplify(&expr).unwrap(), expr);
    }
}
