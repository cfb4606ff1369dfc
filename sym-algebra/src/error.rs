//! Kinds of errors that can occur while simplifying, rationalizing, or evaluating expressions.

use ariadne::Fmt;
use sym_attrs::ErrorKind;
use sym_error::EXPR;

pub use sym_error::Error;

/// A numeric literal was divided by zero, or zero was raised to a negative power.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this denominator"],
    help = "the denominator of this expression simplifies to zero",
)]
pub struct DivisionByZero;

/// A symbol had no value bound to it during evaluation.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not defined", name),
    labels = ["this symbol"],
    help = if suggestions.is_empty() {
        format!("bind a value to it with: {}", format!("ctxt.add_var({:?}, <value>)", name).fg(EXPR))
    } else if suggestions.len() == 1 {
        format!("did you mean `{}`?", (&*suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these? {}",
            suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    },
)]
pub struct UndefinedSymbol {
    /// The name of the symbol.
    pub name: String,

    /// Bound names that are spelled similarly.
    pub suggestions: Vec<String>,
}

/// A function was applied to the wrong number of arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!(
        "`{}` takes {} argument{}, but {} {} given",
        func,
        expected,
        if *expected == 1 { "" } else { "s" },
        given,
        if *given == 1 { "was" } else { "were" },
    ),
    labels = ["this function application"],
)]
pub struct ArgumentCount {
    /// The name of the function.
    pub func: &'static str,

    /// The number of arguments the function takes.
    pub expected: usize,

    /// The number of arguments it was given.
    pub given: usize,
}

/// A function argument was outside the function's real domain, or the result was not finite.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot evaluate `{}` here", func),
    labels = ["this function application"],
    help = reason,
)]
pub struct OutOfDomain {
    /// The name of the function, or operator.
    pub func: &'static str,

    /// Why the value could not be computed.
    pub reason: String,
}

/// A value of the wrong type was used, such as the truth value of an equation inside a sum.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expected a {}, found a {}", expected, found),
    labels = ["this expression"],
)]
pub struct TypeMismatch {
    /// The type that was required.
    pub expected: &'static str,

    /// The type that was found.
    pub found: &'static str,
}
