//! Symbolic algebra on a small expression tree, centered on rewriting expressions as a single
//! fraction.
//!
//! - [`expr`] defines the [`Expr`] tree and its arithmetic operators. Division is multiplication by
//!   a power with exponent `-1`, so fractions are never a separate node.
//! - [`simplify`] applies algebraic rewrite rules until the expression stops shrinking.
//! - [`rationalize`] combines sums by cross multiplication to produce one numerator over one
//!   denominator, and extracts those parts.
//! - [`eval`] evaluates expressions numerically, for checking that rewrites preserve values.
//!
//! ```
//! use sym_algebra::{rationalize, Ctxt, Eval, Expr};
//!
//! // 1 / (1 + 1/x)
//! let x = Expr::symbol("x");
//! let expr = Expr::int(1) / (Expr::int(1) + Expr::int(1) / x.clone());
//! let rational = rationalize(&expr).unwrap();
//!
//! let mut ctxt = Ctxt::new();
//! ctxt.add_var("x", 3);
//! assert_eq!(expr.eval(&ctxt).unwrap(), rational.eval(&ctxt).unwrap());
//! ```

pub mod error;
pub mod eval;
pub mod expr;
pub mod number;
pub mod primitive;
pub mod rationalize;
pub mod simplify;
pub mod step_collector;

pub use error::Error;
pub use eval::{Ctxt, Eval, Value};
pub use expr::Expr;
pub use number::Number;
pub use rationalize::rationalize;
pub use simplify::simplify;
