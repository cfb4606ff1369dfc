//! Implementation of many simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply. Rules that fold numeric powers can fail, and return a [`Result`] instead.

pub mod add;
pub mod multiply;
pub mod power;
pub mod trigonometry;

use crate::error::Error;
use crate::expr::{Expr, Func, Primary};
use crate::step_collector::StepCollector;
use super::step::Step;

/// If the expression is an application of the given function, calls the given transformation
/// function with the arguments.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_call(
    expr: &Expr,
    target: Func,
    f: impl Copy + Fn(&[Expr]) -> Option<Expr>,
) -> Option<Expr> {
    match expr {
        Expr::Primary(Primary::Call(func, args)) if *func == target => f(args),
        _ => None,
    }
}

/// If the expression is an add expression, calls the given transformation function with the terms.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_add(expr: &Expr, f: impl Copy + Fn(&[Expr]) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Add(terms) = expr {
        f(terms)
    } else {
        None
    }
}

/// If the expression is a multiplication expression, calls the given transformation function with
/// the factors.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_multiply(expr: &Expr, f: impl Copy + Fn(&[Expr]) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Mul(factors) = expr {
        f(factors)
    } else {
        None
    }
}

/// If the expression is a power expression, calls the given transformation function with the left
/// and right-hand-side of the power.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_power(expr: &Expr, f: impl Copy + Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Exp(lhs, rhs) = expr {
        f(lhs, rhs)
    } else {
        None
    }
}

/// Splices the children of nested nodes into one list, using `nested` to pick out the children
/// of a nested node.
///
/// Returns `None` if no child is nested.
pub(crate) fn flatten(
    children: &[Expr],
    nested: impl Fn(&Expr) -> Option<&[Expr]>,
) -> Option<Vec<Expr>> {
    if !children.iter().any(|child| nested(child).is_some()) {
        return None;
    }

    let mut flat = Vec::with_capacity(children.len());
    for child in children {
        match nested(child) {
            Some(grandchildren) => flat.extend(grandchildren.iter().cloned()),
            None => flat.push(child.clone()),
        }
    }
    Some(flat)
}

/// Applies all rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    if let Some(expr) = add::all(expr, step_collector)
        .or_else(|| multiply::all(expr, step_collector)) {
        return Ok(Some(expr));
    }

    if let Some(expr) = power::all(expr, step_collector)? {
        return Ok(Some(expr));
    }

    Ok(trigonometry::all(expr, step_collector))
}
