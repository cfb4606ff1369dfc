use assert_float_eq::{
    afe_abs,
    afe_relative_error_msg,
    afe_is_relative_eq,
    assert_float_relative_eq,
};
use pretty_assertions::assert_eq;
use sym_algebra::error::DivisionByZero;
use sym_algebra::expr::{Func, Relation};
use sym_algebra::primitive::fraction;
use sym_algebra::rationalize::{denominator, numerator};
use sym_algebra::{rationalize, Ctxt, Eval, Expr, Number, Value};

fn sym(name: &str) -> Expr {
    Expr::symbol(name)
}

fn one() -> Expr {
    Expr::int(1)
}

/// Builds a context binding each name to an exact integer.
fn bind(bindings: &[(&str, i32)]) -> Ctxt {
    let mut ctxt = Ctxt::new();
    for (name, value) in bindings {
        ctxt.add_var(name, *value);
    }
    ctxt
}

fn exact(numerator: i64, denominator: i64) -> Value {
    Value::Number(Number::Exact(fraction(numerator, denominator)))
}

/// Expressions with the bindings they are checked at.
fn cases() -> Vec<(Expr, Ctxt)> {
    vec![
        (one() / sym("x") + one() / sym("y"), bind(&[("x", 2), ("y", 3)])),
        (
            sym("a") / sym("b") + sym("c") / sym("d") + sym("e") / sym("f"),
            bind(&[("a", 1), ("b", 2), ("c", 1), ("d", 3), ("e", 1), ("f", 6)]),
        ),
        ((sym("x") + one()).pow(-1) + sym("x"), bind(&[("x", 2)])),
        (one() / (one() + one() / sym("x")), bind(&[("x", 5)])),
        (
            Expr::int(3) * sym("x").pow(-2) - sym("y") / (sym("x") + sym("y")) + Expr::rational(1, 2),
            bind(&[("x", 4), ("y", -3)]),
        ),
        (
            (sym("x").recip() + sym("y")).pow(2) * sym("y").recip(),
            bind(&[("x", 3), ("y", 7)]),
        ),
        ((one() / sym("x") + one() / sym("y")).pow(-1), bind(&[("x", 2), ("y", 3)])),
    ]
}

#[test]
fn sum_of_two_reciprocals() {
    let expr = one() / sym("x") + one() / sym("y");
    let rational = rationalize(&expr).unwrap();
    let ctxt = bind(&[("x", 2), ("y", 3)]);

    assert_eq!(expr.eval(&ctxt).unwrap(), exact(5, 6));
    assert_eq!(rational.eval(&ctxt).unwrap(), exact(5, 6));
    assert_eq!(numerator(&rational), sym("x") + sym("y"));
    assert_eq!(denominator(&rational), sym("x") * sym("y"));
}

#[test]
fn integer_unchanged() {
    assert_eq!(rationalize(&Expr::int(2)).unwrap(), Expr::int(2));
}

#[test]
fn three_fractions_sum_to_one() {
    let expr = sym("a") / sym("b") + sym("c") / sym("d") + sym("e") / sym("f");
    let rational = rationalize(&expr).unwrap();
    let ctxt = bind(&[("a", 1), ("b", 2), ("c", 1), ("d", 3), ("e", 1), ("f", 6)]);

    assert_eq!(rational.eval(&ctxt).unwrap(), Value::Number(Number::int(1)));
    assert_eq!(
        denominator(&rational),
        Expr::Mul(vec![sym("b"), sym("d"), sym("f")]),
    );
}

#[test]
fn reciprocal_plus_symbol() {
    // (x+1)^-1 + x = (1 + x(x+1)) / (x+1)
    let expr = (sym("x") + one()).pow(-1) + sym("x");
    let rational = rationalize(&expr).unwrap();
    let ctxt = bind(&[("x", 2)]);

    assert_eq!(expr.eval(&ctxt).unwrap(), exact(7, 3));
    assert_eq!(rational.eval(&ctxt).unwrap(), exact(7, 3));
    assert_eq!(numerator(&rational).eval(&ctxt).unwrap(), exact(7, 1));
    assert_eq!(denominator(&rational), sym("x") + one());
}

#[test]
fn zero_denominator() {
    let expr = one() / (sym("x") - sym("x"));
    let err = rationalize(&expr).unwrap_err();
    assert!(err.is::<DivisionByZero>());
}

#[test]
fn preserves_value() {
    for (expr, ctxt) in cases() {
        let rational = rationalize(&expr).unwrap();
        assert_eq!(rational.eval(&ctxt).unwrap(), expr.eval(&ctxt).unwrap(), "{}", expr);
    }
}

#[test]
fn numerator_over_denominator() {
    for (expr, ctxt) in cases() {
        for u in [expr.clone(), rationalize(&expr).unwrap()] {
            let split = numerator(&u) / denominator(&u);
            assert_eq!(split.eval(&ctxt).unwrap(), u.eval(&ctxt).unwrap(), "{}", u);
        }
    }
}

#[test]
fn idempotent() {
    for (expr, _) in cases() {
        let once = rationalize(&expr).unwrap();
        let twice = rationalize(&once).unwrap();
        assert_eq!(twice, once);
    }
}

#[test]
fn denominator_is_fully_extracted() {
    for (expr, _) in cases() {
        let rational = rationalize(&expr).unwrap();
        let denom = denominator(&rational);
        assert_eq!(denominator(&rationalize(&rational).unwrap()), denom);
        assert_eq!(denominator(&denom), one(), "{}", expr);
    }
}

#[test]
fn reciprocal_of_sum_of_reciprocals() {
    let expr = (one() / sym("x") + one() / sym("y")).pow(-1);
    let rational = rationalize(&expr).unwrap();
    let ctxt = bind(&[("x", 2), ("y", 3)]);

    assert_eq!(rational.eval(&ctxt).unwrap(), exact(6, 5));
    assert_eq!(numerator(&rational), sym("x") * sym("y"));
    assert_eq!(denominator(&rational), sym("x") + sym("y"));
}

#[test]
fn zero_factor_keeps_division_by_zero() {
    let expr = Expr::int(0) * (one() / (sym("x") - sym("x")));
    let err = rationalize(&expr).unwrap_err();
    assert!(err.is::<DivisionByZero>());
}

#[test]
fn equation_sides() {
    let expr = Expr::equation(
        one() / sym("x") + one() / sym("y"),
        sym("z").recip() + one(),
        Relation::Less,
    );
    let Expr::Equation(lhs, rhs, relation) = rationalize(&expr).unwrap() else {
        panic!("expected an equation");
    };

    assert_eq!(relation, Relation::Less);
    assert_eq!(denominator(&lhs), sym("x") * sym("y"));
    assert_eq!(denominator(&rhs), sym("z"));

    // 5/6 < 5/4
    let ctxt = bind(&[("x", 2), ("y", 3), ("z", 4)]);
    assert_eq!(Expr::equation(*lhs, *rhs, relation).eval(&ctxt).unwrap(), Value::Boolean(true));
}

#[test]
fn function_applications() {
    let expr = Expr::call(Func::Sin, vec![one() / sym("x") + one()]) / sym("y") + one();
    let rational = rationalize(&expr).unwrap();

    assert_eq!(denominator(&rational), sym("y"));

    let ctxt = bind(&[("x", 2), ("y", 3)]);
    let Value::Number(expected) = expr.eval(&ctxt).unwrap() else {
        panic!("expected a number");
    };
    let Value::Number(actual) = rational.eval(&ctxt).unwrap() else {
        panic!("expected a number");
    };
    assert_float_relative_eq!(actual.to_f64(), expected.to_f64());
}

#[test]
fn floats_are_contagious() {
    let expr = Expr::float(0.5) / sym("x") + one() / sym("y");
    let rational = rationalize(&expr).unwrap();
    let ctxt = bind(&[("x", 2), ("y", 4)]);

    let Value::Number(Number::Inexact(value)) = rational.eval(&ctxt).unwrap() else {
        panic!("expected an inexact number");
    };
    assert_float_relative_eq!(value, 0.5);
}
