//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which attempts to reduce the complexity of an
//! expression. It does this by repeatedly applying rewriting rules to the expression in multiple
//! passes, until no more rules apply.
//!
//! Each rule is a function that accepts an expression and returns [`Option<Expr>`]; if the rule is
//! applicable to the expression, the rule is applied and the result is returned. The rules are
//! defined in [`rules`], and cover flattening, combining like terms / factors, folding numbers,
//! basic power rules, and exact values of trigonometric functions. Products are never distributed
//! over sums, so a fraction built by the [rationalizer](crate::rationalize) keeps its shape.
//!
//! Folding numeric powers can divide by zero (`0^-1`), so simplification returns a [`Result`].
//!
//! Complexity is an informal, arbitrary metric that is used to determine whether one expression is
//! simpler than another. The default complexity heuristic used is [`default_complexity`] (click
//! for more information). However, this can be overridden by providing a custom complexity
//! function to the [`simplify_with`] function.

pub mod rules;
pub mod step;

use crate::error::Error;
use crate::expr::{Expr, Primary};
use crate::number::Number;
use crate::step_collector::StepCollector;
use log::trace;
use step::Step;

/// Something that can simplify an expression, without changing its value.
///
/// The [rationalizer](crate::rationalize::rationalize_with) is generic over this trait. It is
/// implemented for every function with the signature of [`simplify`], including [`simplify`]
/// itself.
pub trait Simplifier {
    /// Simplifies the given expression.
    fn simplify(&self, expr: &Expr) -> Result<Expr, Error>;
}

impl<F> Simplifier for F
where
    F: Fn(&Expr) -> Result<Expr, Error>,
{
    fn simplify(&self, expr: &Expr) -> Result<Expr, Error> {
        self(expr)
    }
}

/// The default complexity heuristic function.
///
/// This function computes complexity using these simple rules:
///
/// - `complexity(number) = bits(numerator) + bits(denominator)`, or `1` for floats
/// - `complexity(symbol) = length(symbol)`
/// - `complexity(call) = length(name) + length(args)`
/// - `complexity(add) = 3 + sum(complexity(terms))`
/// - `complexity(mul) = 2 + sum(complexity(factors))`
/// - `complexity(exp) = 1 + complexity(lhs) + complexity(rhs)`
/// - `complexity(equation) = 1 + complexity(lhs) + complexity(rhs)`
pub fn default_complexity(expr: &Expr) -> usize {
    let mut complexity = 0;
    let mut stack = vec![expr];
    while let Some(expr) = stack.pop() {
        complexity += match expr {
            Expr::Primary(primary) => match primary {
                Primary::Number(Number::Exact(n)) => {
                    n.numer().significant_bits() as usize + n.denom().significant_bits() as usize
                },
                Primary::Number(Number::Inexact(_)) => 1,
                Primary::Symbol(sym) => sym.len(),
                Primary::Call(func, args) => {
                    stack.extend(args.iter());
                    func.name().len() + args.len()
                },
            },
            Expr::Add(terms) => {
                stack.extend(terms.iter());
                3
            },
            Expr::Mul(factors) => {
                stack.extend(factors.iter());
                2
            },
            Expr::Exp(lhs, rhs) | Expr::Equation(lhs, rhs, _) => {
                stack.push(lhs);
                stack.push(rhs);
                1
            },
        };
    }
    complexity
}

/// Simplifies each child in place, returning true if any of them changed.
fn simplify_children<F>(
    children: &mut [Expr],
    complexity: F,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<bool, Error>
where
    F: Copy + Fn(&Expr) -> usize,
{
    let mut changed = false;
    for child in children.iter_mut() {
        let (new_child, child_changed) = inner_simplify_with(child, complexity, step_collector)?;
        *child = new_child;
        // use |= instead of = to not reset to false if already true
        changed |= child_changed;
    }
    Ok(changed)
}

/// Base implementation of the simplification algorithm.
fn inner_simplify_with<F>(
    expr: &Expr,
    complexity: F,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<(Expr, bool), Error>
where
    F: Copy + Fn(&Expr) -> usize,
{
    let mut expr = expr.clone();
    let mut changed_at_least_once = false;

    loop {
        let current_complexity = complexity(&expr);
        let mut changed_in_this_pass = false;

        // try to simplify this expression using all rules
        if let Some(new_expr) = rules::all(&expr, step_collector)? {
            expr = new_expr;
            changed_in_this_pass = true;
        }

        // then begin recursing into the expression's children
        match expr {
            Expr::Primary(Primary::Call(_, ref mut args)) => {
                changed_in_this_pass |= simplify_children(args, complexity, step_collector)?;
            },
            Expr::Primary(_) => (),
            Expr::Add(ref mut children) | Expr::Mul(ref mut children) => {
                changed_in_this_pass |= simplify_children(children, complexity, step_collector)?;
            },
            Expr::Exp(ref mut lhs, ref mut rhs) | Expr::Equation(ref mut lhs, ref mut rhs, _) => {
                let (new_lhs, lhs_changed) = inner_simplify_with(lhs, complexity, step_collector)?;
                let (new_rhs, rhs_changed) = inner_simplify_with(rhs, complexity, step_collector)?;
                **lhs = new_lhs;
                **rhs = new_rhs;
                changed_in_this_pass |= lhs_changed || rhs_changed;
            },
        }

        if !changed_in_this_pass {
            break;
        }

        changed_at_least_once = true;
        trace!(
            "simplify pass: `{}` (complexity {} -> {})",
            expr,
            current_complexity,
            complexity(&expr),
        );
    }

    Ok((expr, changed_at_least_once))
}

/// Checks the expression for literal division by zero, then simplifies it.
fn simplify_root<F>(
    expr: &Expr,
    complexity: F,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error>
where
    F: Copy + Fn(&Expr) -> usize,
{
    rules::power::check_zero_divisors(expr)?;
    inner_simplify_with(expr, complexity, step_collector).map(|(expr, _)| expr)
}

/// Simplify the given expression, using the default complexity heuristic function.
pub fn simplify(expr: &Expr) -> Result<Expr, Error> {
    simplify_root(expr, default_complexity, &mut ())
}

/// Simplify the given expression, using the given complexity heuristic function.
///
/// The complexity heuristic function should return a number that represents the complexity of the
/// given expression. The lower the number, the simpler the expression.
pub fn simplify_with<F>(expr: &Expr, complexity: F) -> Result<Expr, Error>
where
    F: Copy + Fn(&Expr) -> usize,
{
    simplify_root(expr, complexity, &mut ())
}

/// Simplify the given expression, using the default complexity heuristic function. The steps taken
/// by the simplifier will also be collected and returned. This is useful for debugging, and also
/// for displaying the steps taken to the user.
pub fn simplify_with_steps(expr: &Expr) -> Result<(Expr, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let expr = simplify_root(expr, default_complexity, &mut steps)?;
    Ok((expr, steps))
}
