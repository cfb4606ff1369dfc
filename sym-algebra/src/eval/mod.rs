//! Numeric evaluation of expressions.
//!
//! Symbols are looked up in a [`Ctxt`]. Sums, products, and integer powers of exact numbers stay
//! exact; everything else (non-integer powers, function applications) is computed with `f64`s, and
//! infects the rest of the computation (see [`Number`]).

mod ctxt;
mod value;

pub use ctxt::{Ctxt, TrigMode};
pub use value::Value;

use crate::error::{ArgumentCount, DivisionByZero, Error, OutOfDomain, UndefinedSymbol};
use crate::expr::{Expr, Func, Primary};
use crate::number::Number;

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<Value, Error>;

    /// Evaluate the expression to produce a value, using the default context.
    fn eval_default(&self) -> Result<Value, Error> {
        self.eval(&Default::default())
    }
}

/// Returns the number if it is finite, or an [`OutOfDomain`] error naming `func` otherwise.
fn finite(num: Number, func: &'static str) -> Result<Number, Error> {
    match num {
        Number::Inexact(n) if !n.is_finite() => Err(OutOfDomain {
            func,
            reason: "the result is not a finite number".to_string(),
        }.into()),
        num => Ok(num),
    }
}

/// Evaluates the expression, requiring the result to be a number.
fn eval_number(expr: &Expr, ctxt: &Ctxt) -> Result<Number, Error> {
    expr.eval(ctxt)?.into_number()
}

/// Raises `base` to the power `exp`. Integer powers are computed exactly if both are exact.
fn eval_power(base: Number, exp: Number) -> Result<Number, Error> {
    if let Some(value) = base.checked_pow(&exp)? {
        return finite(value, "^");
    }

    let (base, exp) = (base.to_f64(), exp.to_f64());
    if base == 0.0 && exp < 0.0 {
        return Err(DivisionByZero.into());
    }
    if base < 0.0 {
        return Err(OutOfDomain {
            func: "^",
            reason: format!("cannot raise the negative number {} to the non-integer power {}", base, exp),
        }.into());
    }

    finite(Number::Inexact(base.powf(exp)), "^")
}

/// Applies a function to its evaluated arguments.
fn eval_call(func: Func, args: &[Number], ctxt: &Ctxt) -> Result<Number, Error> {
    if args.len() != func.arity() {
        return Err(ArgumentCount {
            func: func.name(),
            expected: func.arity(),
            given: args.len(),
        }.into());
    }

    let degrees = ctxt.trig_mode == TrigMode::Degrees;
    let input = |n: &Number| if degrees { n.to_f64().to_radians() } else { n.to_f64() };
    let output = |n: f64| if degrees { n.to_degrees() } else { n };
    let unit_range = |n: &Number| {
        let n = n.to_f64();
        if (-1.0..=1.0).contains(&n) {
            Ok(n)
        } else {
            Err(Error::from(OutOfDomain {
                func: func.name(),
                reason: format!("the argument must be between -1 and 1, but it was {}", n),
            }))
        }
    };

    let result = match func {
        Func::Sin => input(&args[0]).sin(),
        Func::Cos => input(&args[0]).cos(),
        Func::Tan => input(&args[0]).tan(),
        Func::Asin => output(unit_range(&args[0])?.asin()),
        Func::Acos => output(unit_range(&args[0])?.acos()),
        Func::Atan => output(args[0].to_f64().atan()),
        Func::Atan2 => output(args[0].to_f64().atan2(args[1].to_f64())),
    };

    finite(Number::Inexact(result), func.name())
}

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<Value, Error> {
        match self {
            Expr::Primary(Primary::Number(num)) => Ok(num.clone().into()),
            Expr::Primary(Primary::Symbol(name)) => ctxt.get_var(name)
                .map(Value::from)
                .ok_or_else(|| UndefinedSymbol {
                    name: name.clone(),
                    suggestions: ctxt.get_similar_vars(name)
                        .into_iter()
                        .map(String::from)
                        .collect(),
                }.into()),
            Expr::Primary(Primary::Call(func, args)) => {
                let args = args.iter()
                    .map(|arg| eval_number(arg, ctxt))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(eval_call(*func, &args, ctxt)?.into())
            },
            Expr::Add(terms) => {
                let mut sum = Number::int(0);
                for term in terms {
                    sum = sum + eval_number(term, ctxt)?;
                }
                Ok(finite(sum, "+")?.into())
            },
            Expr::Mul(factors) => {
                let mut product = Number::int(1);
                for factor in factors {
                    product = product * eval_number(factor, ctxt)?;
                }
                Ok(finite(product, "*")?.into())
            },
            Expr::Exp(base, exp) => {
                let base = eval_number(base, ctxt)?;
                let exp = eval_number(exp, ctxt)?;
                Ok(eval_power(base, exp)?.into())
            },
            Expr::Equation(lhs, rhs, relation) => {
                let lhs = eval_number(lhs, ctxt)?;
                let rhs = eval_number(rhs, ctxt)?;
                let holds = lhs.compare(&rhs)
                    .map(|ordering| relation.holds(ordering))
                    .unwrap_or(false);
                Ok(holds.into())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use crate::error::TypeMismatch;
    use crate::expr::Relation;
    use crate::primitive::fraction;
    use pretty_assertions::assert_eq;
    use super::*;

    fn sym(name: &str) -> Expr {
        Expr::symbol(name)
    }

    fn inexact(value: Value) -> f64 {
        match value {
            Value::Number(Number::Inexact(n)) => n,
            other => panic!("expected an inexact number, got {:?}", other),
        }
    }

    #[test]
    fn exact_arithmetic() {
        let mut ctxt = Ctxt::new();
        ctxt.add_var("x", 2);
        ctxt.add_var("y", 3);

        // 1/x + 1/y
        let expr = Expr::int(1) / sym("x") + Expr::int(1) / sym("y");
        assert_eq!(expr.eval(&ctxt).unwrap(), Value::Number(Number::Exact(fraction(5, 6))));
    }

    #[test]
    fn contagion() {
        let mut ctxt = Ctxt::new();
        ctxt.add_var("x", 0.5);
        let expr = sym("x") + Expr::rational(1, 4);
        assert_eq!(expr.eval(&ctxt).unwrap(), Value::Number(Number::Inexact(0.75)));
    }

    #[test]
    fn fractional_power() {
        let expr = Expr::int(2).pow(Expr::rational(1, 2));
        assert_float_relative_eq!(inexact(expr.eval_default().unwrap()), std::f64::consts::SQRT_2);
    }

    #[test]
    fn trig_modes() {
        let mut ctxt = Ctxt::default();
        let expr = Expr::call(Func::Sin, vec![Expr::int(90)]);
        ctxt.trig_mode = TrigMode::Degrees;
        assert_float_relative_eq!(inexact(expr.eval(&ctxt).unwrap()), 1.0);

        let expr = Expr::call(Func::Atan2, vec![Expr::int(1), Expr::int(1)]);
        assert_float_relative_eq!(inexact(expr.eval(&ctxt).unwrap()), 45.0);

        ctxt.trig_mode = TrigMode::Radians;
        let expr = Expr::call(Func::Cos, vec![sym("pi")]);
        assert_float_relative_eq!(inexact(expr.eval(&ctxt).unwrap()), -1.0);
    }

    #[test]
    fn equations() {
        let mut ctxt = Ctxt::new();
        ctxt.add_var("x", 2);
        let expr = Expr::equation(sym("x").pow(2), Expr::int(4), Relation::Eq);
        assert_eq!(expr.eval(&ctxt).unwrap(), Value::Boolean(true));

        let expr = Expr::equation(sym("x"), Expr::float(2.5), Relation::GreaterEq);
        assert_eq!(expr.eval(&ctxt).unwrap(), Value::Boolean(false));
    }

    #[test]
    fn undefined_symbol() {
        let mut ctxt = Ctxt::new();
        ctxt.add_var("x1", 1);
        let err = sym("x").eval(&ctxt).unwrap_err();
        let kind = err.downcast_ref::<UndefinedSymbol>().unwrap();
        assert_eq!(kind.name, "x");
        assert_eq!(kind.suggestions, vec!["x1".to_string()]);
    }

    #[test]
    fn division_by_zero() {
        let err = (Expr::int(1) / Expr::int(0)).eval_default().unwrap_err();
        assert!(err.is::<DivisionByZero>());

        let err = Expr::float(0.0).pow(Expr::rational(-1, 2)).eval_default().unwrap_err();
        assert!(err.is::<DivisionByZero>());
    }

    #[test]
    fn out_of_domain() {
        let err = Expr::call(Func::Asin, vec![Expr::int(2)]).eval_default().unwrap_err();
        assert!(err.is::<OutOfDomain>());

        let err = Expr::int(-8).pow(Expr::rational(1, 3)).eval_default().unwrap_err();
        assert!(err.is::<OutOfDomain>());
    }

    #[test]
    fn argument_count() {
        let err = Expr::call(Func::Atan2, vec![Expr::int(1)]).eval_default().unwrap_err();
        assert_eq!(err.downcast_ref::<ArgumentCount>(), Some(&ArgumentCount {
            func: "atan2",
            expected: 2,
            given: 1,
        }));
    }

    #[test]
    fn equation_in_sum() {
        let equation = Expr::equation(Expr::int(1), Expr::int(1), Relation::Eq);
        let err = (equation + Expr::int(1)).eval_default().unwrap_err();
        assert!(err.is::<TypeMismatch>());
    }
}
