//! A representation of mathematical expressions that is easy to manipulate algebraically.
//!
//! An [`Expr`] is an immutable tree. Sums and products are stored **flattened**: the expression
//! `x + (y + z)` is a single [`Expr::Add`] node with _three_ children, `x`, `y`, and `z`. This
//! makes it easy to combine "like terms" and "like factors", since they all live at the same level
//! of the tree.
//!
//! The arithmetic operators (`+`, `-`, `*`, `/`, and [`Expr::pow`]) always build a new tree and
//! never fail. Beyond flattening and folding two numeric literals together, they do no
//! simplification; that is the job of [`simplify`](crate::simplify::simplify).
//!
//! # Strict equality
//!
//! Deciding whether two expressions are _mathematically_ equal is hard: `x^2 + 2x + 1` and
//! `(x + 1)^2` are equal, but that is not obvious without expanding or factoring first. Instead,
//! the [`PartialEq`] and [`Eq`] implementations for [`Expr`] implement **strict equality**. Two
//! expressions are strictly equal if:
//!
//! - They are the same kind of expression (i.e. both [`Expr::Primary`], both [`Expr::Add`], etc.).
//! - If both are [`Expr::Primary`], both have equal values. Numbers compare with [`Number`]'s
//!   equality, so `2` and `2.0` are **not** strictly equal.
//! - If both are [`Expr::Add`] or [`Expr::Mul`], their terms / factors are strictly equal in any
//!   order, counting repeats.
//! - If both are [`Expr::Exp`] or [`Expr::Equation`], their operands are strictly equal in order.
//!
//! Strict equality never reports false positives: strictly equal expressions are always
//! mathematically equal. It is also cheap, and does not depend on simplification, so it can be
//! used **by** the simplifier to decide which terms / factors can be combined.

mod iter;

use crate::number::Number;
use crate::primitive::{fraction, rational};
use iter::ExprIter;
use rug::Rational;
use std::{cmp::Ordering, fmt, ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A built-in function that can be applied to arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,

    /// Two-argument arctangent, `atan2(y, x)`.
    Atan2,
}

impl Func {
    /// The name of the function.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Atan2 => "atan2",
        }
    }

    /// The number of arguments the function takes.
    pub fn arity(self) -> usize {
        match self {
            Self::Atan2 => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The relation between the two sides of an [`Expr::Equation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Relation {
    Eq,
    NotEq,
    Less,
    LessEq,
    Greater,
    GreaterEq,
}

impl Relation {
    /// The symbol used to print the relation.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Less => "<",
            Self::LessEq => "<=",
            Self::Greater => ">",
            Self::GreaterEq => ">=",
        }
    }

    /// Returns true if the relation holds for two values that compare with the given ordering.
    pub fn holds(self, ordering: Ordering) -> bool {
        match self {
            Self::Eq => ordering == Ordering::Equal,
            Self::NotEq => ordering != Ordering::Equal,
            Self::Less => ordering == Ordering::Less,
            Self::LessEq => ordering != Ordering::Greater,
            Self::Greater => ordering == Ordering::Greater,
            Self::GreaterEq => ordering != Ordering::Less,
        }
    }
}

/// A single term / factor: a number, a symbol, or a function application.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Primary {
    /// A numeric literal, such as `2`, `-3/4`, or `0.5`.
    Number(Number),

    /// A symbol, such as `x` or `velocity`. Symbols are identified by name.
    Symbol(String),

    /// A function application, such as `sin(x)` or `atan2(y, x)`.
    Call(Func, Vec<Expr>),
}

/// A mathematical expression.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A single term or factor.
    Primary(Primary),

    /// Multiple terms added together.
    Add(Vec<Expr>),

    /// Multiple factors multiplied together.
    Mul(Vec<Expr>),

    /// An expression raised to a power.
    Exp(Box<Expr>, Box<Expr>),

    /// Two expressions related by a [`Relation`], such as `x + 1 = y`.
    Equation(Box<Expr>, Box<Expr>, Relation),
}

/// Binding strength of each kind of node, used to decide where parentheses are needed when
/// printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Equation,
    Add,
    Mul,
    Exp,
    Primary,
}

impl Expr {
    /// Creates an exact integer.
    pub fn int(n: i64) -> Self {
        Self::Primary(Primary::Number(Number::int(n)))
    }

    /// Creates the exact fraction `numerator / denominator`, in lowest terms.
    ///
    /// Panics if `denominator` is zero.
    pub fn rational(numerator: i64, denominator: i64) -> Self {
        Self::Primary(Primary::Number(Number::Exact(fraction(numerator, denominator))))
    }

    /// Creates a floating-point number.
    pub fn float(n: f64) -> Self {
        Self::Primary(Primary::Number(Number::Inexact(n)))
    }

    /// Creates a symbol with the given name.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Primary(Primary::Symbol(name.into()))
    }

    /// Creates an application of the given function.
    pub fn call(func: Func, args: Vec<Expr>) -> Self {
        Self::Primary(Primary::Call(func, args))
    }

    /// Creates an equation (or inequation) between two expressions.
    pub fn equation(lhs: Expr, rhs: Expr, relation: Relation) -> Self {
        Self::Equation(Box::new(lhs), Box::new(rhs), relation)
    }

    /// Raises this expression to the given power. No simplification is done.
    pub fn pow(self, exponent: impl Into<Expr>) -> Self {
        Self::Exp(Box::new(self), Box::new(exponent.into()))
    }

    /// Returns `1 / self`, represented as `self^-1`. No simplification is done.
    pub fn recip(self) -> Self {
        self.pow(Self::int(-1))
    }

    fn precedence(&self) -> Precedence {
        match self {
            // `-2` and `1/2` print with an operator, so they bind like the operator does
            Self::Primary(Primary::Number(Number::Exact(n))) if *n.denom() != 1 => Precedence::Mul,
            Self::Primary(Primary::Number(num)) if num.is_negative() => Precedence::Mul,
            Self::Primary(_) => Precedence::Primary,
            Self::Add(_) => Precedence::Add,
            Self::Mul(_) => Precedence::Mul,
            Self::Exp(..) => Precedence::Exp,
            Self::Equation(..) => Precedence::Equation,
        }
    }

    /// Returns the ordering of this expression's precedence relative to another's.
    ///
    /// This is used to determine if parentheses are needed around a child expression when
    /// printing.
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        self.precedence().cmp(&other.precedence())
    }

    /// If the expression is a [`Primary::Number`], returns a reference to the contained number.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Primary(Primary::Number(num)) => Some(num),
            _ => None,
        }
    }

    /// If the expression is a [`Primary::Number`], returns the contained number.
    pub fn into_number(self) -> Option<Number> {
        match self {
            Self::Primary(Primary::Number(num)) => Some(num),
            _ => None,
        }
    }

    /// Returns true if the expression is a [`Primary::Number`].
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Primary(Primary::Number(_)))
    }

    /// Returns true if the expression is the exact integer 0.
    pub fn is_exact_zero(&self) -> bool {
        matches!(self, Self::Primary(Primary::Number(num @ Number::Exact(_))) if num.is_zero())
    }

    /// Returns true if the expression is the exact integer 1.
    pub fn is_one(&self) -> bool {
        self.as_number().is_some_and(Number::is_one)
    }

    /// If the expression is a [`Primary::Number`] that is an exact integer, returns it as an
    /// [`i32`].
    pub fn as_exact_i32(&self) -> Option<i32> {
        self.as_number()
            .filter(|num| num.is_integer())
            .and_then(Number::to_i32)
    }

    /// If the expression is a [`Primary::Symbol`], returns a reference to its name.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Primary(Primary::Symbol(sym)) => Some(sym),
            _ => None,
        }
    }

    /// Trivially downgrades the expression into a simpler form.
    ///
    /// Some operations may result in an [`Expr::Add`] with zero / one term, or an [`Expr::Mul`]
    /// with zero / one factor. This function checks for these cases and simplifies the expression
    /// into the single term / factor, or the exact integer 0 or 1.
    pub fn downgrade(self) -> Self {
        match self {
            Self::Add(mut terms) => {
                if terms.is_empty() {
                    Self::int(0)
                } else if terms.len() == 1 {
                    terms.remove(0)
                } else {
                    Self::Add(terms)
                }
            },
            Self::Mul(mut factors) => {
                if factors.is_empty() {
                    Self::int(1)
                } else if factors.len() == 1 {
                    factors.remove(0)
                } else {
                    Self::Mul(factors)
                }
            },
            _ => self,
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the names of the distinct symbols in the expression, in order of first appearance.
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols = Vec::new();
        for sym in self.post_order_iter().filter_map(Expr::as_symbol) {
            if !symbols.contains(&sym) {
                symbols.push(sym);
            }
        }
        symbols
    }
}

impl fmt::Display for Primary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(num) => write!(f, "{}", num),
            Self::Symbol(sym) => write!(f, "{}", sym),
            Self::Call(func, args) => {
                write!(f, "{}(", func)?;
                let mut iter = args.iter();
                if let Some(arg) = iter.next() {
                    write!(f, "{}", arg)?;
                    for arg in iter {
                        write!(f, ", {}", arg)?;
                    }
                }
                write!(f, ")")
            },
        }
    }
}

/// Writes `expr`, wrapped in parentheses if `wrap` is true.
fn write_child(f: &mut fmt::Formatter<'_>, expr: &Expr, wrap: bool) -> fmt::Result {
    if wrap {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary(primary) => write!(f, "{}", primary),
            Self::Add(terms) => {
                let mut iter = terms.iter();
                if let Some(term) = iter.next() {
                    write_child(f, term, term.cmp_precedence(self) != Ordering::Greater)?;
                    for term in iter {
                        write!(f, " + ")?;
                        write_child(f, term, term.cmp_precedence(self) != Ordering::Greater)?;
                    }
                }
                Ok(())
            },
            Self::Mul(factors) => {
                let mut iter = factors.iter();
                if let Some(factor) = iter.next() {
                    write_child(f, factor, factor.cmp_precedence(self) == Ordering::Less)?;
                    for factor in iter {
                        write!(f, " * ")?;
                        write_child(f, factor, factor.cmp_precedence(self) != Ordering::Greater)?;
                    }
                }
                Ok(())
            },
            Self::Exp(base, exp) => {
                write_child(f, base, base.cmp_precedence(self) != Ordering::Greater)?;
                write!(f, "^")?;
                write_child(f, exp, exp.cmp_precedence(self) == Ordering::Less)
            },
            Self::Equation(lhs, rhs, relation) => {
                write!(f, "{} {} {}", lhs, relation.symbol(), rhs)
            },
        }
    }
}

/// Returns true if both lists hold strictly equal expressions with the same multiplicities, in
/// any order.
fn same_multiset(lhs: &[Expr], rhs: &[Expr]) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }

    let mut used = vec![false; rhs.len()];
    lhs.iter().all(|lhs| {
        let found = rhs.iter()
            .zip(used.iter_mut())
            .find(|(rhs, used)| !**used && lhs == *rhs);
        match found {
            Some((_, used)) => {
                *used = true;
                true
            },
            None => false,
        }
    })
}

/// Checks if two expressions are **strictly** equal.
///
/// For more information about strict equality, see the [module-level documentation](self).
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Primary(lhs), Self::Primary(rhs)) => lhs == rhs,
            (Self::Add(lhs), Self::Add(rhs)) | (Self::Mul(lhs), Self::Mul(rhs)) => {
                same_multiset(lhs, rhs)
            },
            (Self::Exp(lhs_base, lhs_exp), Self::Exp(rhs_base, rhs_exp)) => {
                lhs_base == rhs_base && lhs_exp == rhs_exp
            },
            (Self::Equation(lhs_a, lhs_b, lhs_rel), Self::Equation(rhs_a, rhs_b, rhs_rel)) => {
                lhs_rel == rhs_rel && lhs_a == rhs_a && lhs_b == rhs_b
            },
            _ => false,
        }
    }
}

impl Eq for Expr {}

impl From<Number> for Expr {
    fn from(num: Number) -> Self {
        Self::Primary(Primary::Number(num))
    }
}

impl From<Rational> for Expr {
    fn from(num: Rational) -> Self {
        Self::Primary(Primary::Number(Number::Exact(num)))
    }
}

impl From<i32> for Expr {
    fn from(n: i32) -> Self {
        Self::from(rational(n))
    }
}

impl From<f64> for Expr {
    fn from(n: f64) -> Self {
        Self::float(n)
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Self::symbol(name)
    }
}

/// Adds two [`Expr`]s together. No simplification is done, except that two numbers are added
/// (applying contagion), and [`Expr::Add`] operands are combined into one list of terms
/// (flattening). The order of the terms is preserved.
impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Primary(Primary::Number(lhs)), Self::Primary(Primary::Number(rhs))) => {
                Self::Primary(Primary::Number(lhs + rhs))
            },
            (Self::Add(mut terms), Self::Add(rhs_terms)) => {
                terms.extend(rhs_terms);
                Self::Add(terms)
            },
            (Self::Add(mut terms), other) => {
                terms.push(other);
                Self::Add(terms)
            },
            (other, Self::Add(mut terms)) => {
                terms.insert(0, other);
                Self::Add(terms)
            },
            (lhs, rhs) => Self::Add(vec![lhs, rhs]),
        }
    }
}

/// Adds two [`Expr`]s together. The behavior is the same as [`Add`], except we can reuse the
/// allocated memory of `self` if possible.
impl AddAssign for Expr {
    fn add_assign(&mut self, rhs: Self) {
        match (self, rhs) {
            (Self::Add(terms), Self::Add(rhs_terms)) => terms.extend(rhs_terms),
            (Self::Add(terms), other) => terms.push(other),
            (lhs, rhs) => {
                // an empty `Add` does not allocate
                let owned = std::mem::replace(lhs, Self::Add(Vec::new()));
                *lhs = owned + rhs;
            },
        }
    }
}

/// Subtracts two [`Expr`]s, as `self + -rhs`.
impl Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

/// Multiplies two [`Expr`]s together. No simplification is done, except that two numbers are
/// multiplied (applying contagion), and [`Expr::Mul`] operands are combined into one list of
/// factors (flattening). The order of the factors is preserved.
impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Primary(Primary::Number(lhs)), Self::Primary(Primary::Number(rhs))) => {
                Self::Primary(Primary::Number(lhs * rhs))
            },
            (Self::Mul(mut factors), Self::Mul(rhs_factors)) => {
                factors.extend(rhs_factors);
                Self::Mul(factors)
            },
            (Self::Mul(mut factors), other) => {
                factors.push(other);
                Self::Mul(factors)
            },
            (other, Self::Mul(mut factors)) => {
                factors.insert(0, other);
                Self::Mul(factors)
            },
            (lhs, rhs) => Self::Mul(vec![lhs, rhs]),
        }
    }
}

impl MulAssign for Expr {
    fn mul_assign(&mut self, rhs: Self) {
        match (self, rhs) {
            (Self::Mul(factors), Self::Mul(rhs_factors)) => factors.extend(rhs_factors),
            (Self::Mul(factors), other) => factors.push(other),
            (lhs, rhs) => {
                let owned = std::mem::replace(lhs, Self::Mul(Vec::new()));
                *lhs = owned * rhs;
            },
        }
    }
}

/// Divides two [`Expr`]s, as `self * rhs^-1`. This never fails: a zero divisor is only detected
/// when the result is simplified or evaluated.
impl Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self * rhs.recip()
    }
}

/// Multiplies this expression by -1. No simplification is done, except for the case where the
/// expression is a number, in which case the number is negated.
impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Primary(Primary::Number(num)) => Self::Primary(Primary::Number(-num)),
            expr => Self::int(-1) * expr,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::symbol("x")
    }

    fn y() -> Expr {
        Expr::symbol("y")
    }

    #[test]
    fn strict_equality() {
        let a = Expr::int(2) * (x() + (y() - Expr::int(5)));
        let b = Expr::int(2) * (y() - Expr::int(5) + x());
        assert_eq!(a, b);
    }

    #[test]
    fn strict_equality_2() {
        // these are NOT strictly equal (but are semantically equal)
        let a = Expr::int(2) * (x() + y());
        let b = Expr::int(2) * x() + Expr::int(2) * y();
        assert_ne!(a, b);
    }

    #[test]
    fn strict_equality_counts_repeats() {
        let a = Expr::Add(vec![x(), x(), y()]);
        let b = Expr::Add(vec![x(), y(), y()]);
        assert_ne!(a, b);
        assert_eq!(a, Expr::Add(vec![y(), x(), x()]));
    }

    #[test]
    fn exact_and_inexact_differ() {
        assert_ne!(Expr::int(0), Expr::float(0.0));
        assert_ne!(x().pow(2), x().pow(2.0));
    }

    #[test]
    fn flatten_sum() {
        let expr = x() + (y() + Expr::symbol("z"));
        assert_eq!(expr, Expr::Add(vec![
            x(),
            y(),
            Expr::symbol("z"),
        ]));
    }

    #[test]
    fn flatten_product() {
        let expr = (x() * y()) * (Expr::symbol("z") * x());
        assert_eq!(expr, Expr::Mul(vec![
            x(),
            y(),
            Expr::symbol("z"),
            x(),
        ]));
    }

    #[test]
    fn fold_numbers() {
        assert_eq!(Expr::int(2) + Expr::rational(1, 2), Expr::rational(5, 2));
        assert_eq!(Expr::int(2) * Expr::float(1.5), Expr::float(3.0));
        assert_eq!(-Expr::rational(1, 3), Expr::rational(-1, 3));
    }

    #[test]
    fn subtraction_and_division() {
        let expr = x() - y() / x();
        assert_eq!(expr, Expr::Add(vec![
            x(),
            Expr::Mul(vec![
                Expr::int(-1),
                y(),
                Expr::Exp(Box::new(x()), Box::new(Expr::int(-1))),
            ]),
        ]));
    }

    #[test]
    fn assign_operators() {
        let mut sum = x();
        sum += y();
        sum += Expr::int(1);
        assert_eq!(sum, Expr::Add(vec![x(), y(), Expr::int(1)]));

        let mut product = Expr::int(3);
        product *= Expr::int(4);
        assert_eq!(product, Expr::int(12));
    }

    #[test]
    fn downgrade() {
        assert_eq!(Expr::Add(Vec::new()).downgrade(), Expr::int(0));
        assert_eq!(Expr::Mul(Vec::new()).downgrade(), Expr::int(1));
        assert_eq!(Expr::Mul(vec![x()]).downgrade(), x());
    }

    #[test]
    fn symbols_in_order() {
        let expr = Expr::equation(
            y() / x() + Expr::call(Func::Sin, vec![Expr::symbol("theta")]),
            x() * Expr::symbol("t"),
            Relation::Eq,
        );
        assert_eq!(expr.symbols(), vec!["y", "x", "theta", "t"]);
    }

    #[test]
    fn fmt_expr() {
        let expr = (x() + Expr::int(1)).recip() + x();
        assert_eq!(expr.to_string(), "(x + 1)^(-1) + x");
    }

    #[test]
    fn fmt_expr_2() {
        let expr = Expr::equation(
            Expr::rational(1, 2) * x() * (y() + Expr::int(2)),
            Expr::call(Func::Atan2, vec![y(), x().pow(Expr::rational(1, 2))]),
            Relation::LessEq,
        );
        assert_eq!(expr.to_string(), "1/2 * x * (y + 2) <= atan2(y, x^(1/2))");
    }

    #[test]
    fn fmt_nested_powers() {
        let expr = x().pow(2).pow(y());
        assert_eq!(expr.to_string(), "(x^2)^y");
    }
}
