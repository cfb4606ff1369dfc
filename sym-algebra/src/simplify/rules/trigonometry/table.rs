//! Lookup tables of trigonometric functions at well-known angles.
//!
//! Input angles are pre-divided by `2pi`: the key of each entry is a normalized angle (a "turn")
//! from 0 (inclusive) to 1 (exclusive). For example, the key `1/12` stands for `pi/6 rad`.

use crate::expr::Expr;
use crate::primitive::fraction;
use once_cell::sync::Lazy;
use rug::Rational;
use std::collections::HashMap;

/// The number zero, wrapped in an [`Expr`].
static ZERO: Lazy<Expr> = Lazy::new(|| Expr::int(0));

/// The number one, wrapped in an [`Expr`].
static ONE: Lazy<Expr> = Lazy::new(|| Expr::int(1));

/// The number 1/2, wrapped in an [`Expr`].
static ONE_HALF: Lazy<Expr> = Lazy::new(|| Expr::rational(1, 2));

/// sqrt(2)/2
static SQRT_TWO_HALF: Lazy<Expr> = Lazy::new(|| {
    Expr::rational(1, 2) * Expr::int(2).pow(Expr::rational(1, 2))
});

/// sqrt(3)/2
static SQRT_THREE_HALF: Lazy<Expr> = Lazy::new(|| {
    Expr::rational(1, 2) * Expr::int(3).pow(Expr::rational(1, 2))
});

/// sqrt(3)/3
static SQRT_THREE_THIRD: Lazy<Expr> = Lazy::new(|| {
    Expr::rational(1, 3) * Expr::int(3).pow(Expr::rational(1, 2))
});

/// sqrt(3)
static SQRT_THREE: Lazy<Expr> = Lazy::new(|| Expr::int(3).pow(Expr::rational(1, 2)));

/// The output of the trigonometric functions for certain angles, and whether to negate the output.
pub struct TrigOut {
    /// The output of the trigonometric function.
    pub output: &'static Expr,

    /// Whether to negate the output.
    pub neg: bool,
}

impl TrigOut {
    /// The output, negated if needed.
    pub fn to_expr(&self) -> Expr {
        if self.neg {
            -self.output.clone()
        } else {
            self.output.clone()
        }
    }
}

impl From<&'static Expr> for TrigOut {
    fn from(output: &'static Expr) -> Self {
        Self {
            output,
            neg: false,
        }
    }
}

/// Builds a negated [`TrigOut`].
fn neg(output: &'static Expr) -> TrigOut {
    TrigOut { output, neg: true }
}

/// Builds the key of a table entry, the turn `numerator / denominator`.
fn turn(numerator: i64, denominator: i64) -> Rational {
    fraction(numerator, denominator)
}

pub static SIN_TABLE: Lazy<HashMap<Rational, TrigOut>> = Lazy::new(|| HashMap::from([
    // sin(0) = 0
    (turn(0, 1), TrigOut::from(&*ZERO)),

    // sin(1/12 = pi/6 rad = 30 deg) = 1/2
    (turn(1, 12), TrigOut::from(&*ONE_HALF)),

    // sin(1/8 = pi/4 rad = 45 deg) = sqrt(2)/2
    (turn(1, 8), TrigOut::from(&*SQRT_TWO_HALF)),

    // sin(1/6 = pi/3 rad = 60 deg) = sqrt(3)/2
    (turn(1, 6), TrigOut::from(&*SQRT_THREE_HALF)),

    // sin(1/4 = pi/2 rad = 90 deg) = 1
    (turn(1, 4), TrigOut::from(&*ONE)),

    // sin(1/3 = 2pi/3 rad = 120 deg) = sqrt(3)/2
    (turn(1, 3), TrigOut::from(&*SQRT_THREE_HALF)),

    // sin(3/8 = 3pi/4 rad = 135 deg) = sqrt(2)/2
    (turn(3, 8), TrigOut::from(&*SQRT_TWO_HALF)),

    // sin(5/12 = 5pi/6 rad = 150 deg) = 1/2
    (turn(5, 12), TrigOut::from(&*ONE_HALF)),

    // sin(1/2 = pi rad = 180 deg) = 0
    (turn(1, 2), TrigOut::from(&*ZERO)),

    // lower half
    (turn(7, 12), neg(&ONE_HALF)),
    (turn(5, 8), neg(&SQRT_TWO_HALF)),
    (turn(2, 3), neg(&SQRT_THREE_HALF)),
    (turn(3, 4), neg(&ONE)),
    (turn(5, 6), neg(&SQRT_THREE_HALF)),
    (turn(7, 8), neg(&SQRT_TWO_HALF)),
    (turn(11, 12), neg(&ONE_HALF)),
]));

pub static COS_TABLE: Lazy<HashMap<Rational, TrigOut>> = Lazy::new(|| HashMap::from([
    // cos(0) = 1
    (turn(0, 1), TrigOut::from(&*ONE)),

    // cos(1/12 = pi/6 rad = 30 deg) = sqrt(3)/2
    (turn(1, 12), TrigOut::from(&*SQRT_THREE_HALF)),

    // cos(1/8 = pi/4 rad = 45 deg) = sqrt(2)/2
    (turn(1, 8), TrigOut::from(&*SQRT_TWO_HALF)),

    // cos(1/6 = pi/3 rad = 60 deg) = 1/2
    (turn(1, 6), TrigOut::from(&*ONE_HALF)),

    // cos(1/4 = pi/2 rad = 90 deg) = 0
    (turn(1, 4), TrigOut::from(&*ZERO)),

    // cos(1/3 = 2pi/3 rad = 120 deg) = -1/2
    (turn(1, 3), neg(&ONE_HALF)),

    // cos(3/8 = 3pi/4 rad = 135 deg) = -sqrt(2)/2
    (turn(3, 8), neg(&SQRT_TWO_HALF)),

    // cos(5/12 = 5pi/6 rad = 150 deg) = -sqrt(3)/2
    (turn(5, 12), neg(&SQRT_THREE_HALF)),

    // cos(1/2 = pi rad = 180 deg) = -1
    (turn(1, 2), neg(&ONE)),

    // lower half
    (turn(7, 12), neg(&SQRT_THREE_HALF)),
    (turn(5, 8), neg(&SQRT_TWO_HALF)),
    (turn(2, 3), neg(&ONE_HALF)),
    (turn(3, 4), TrigOut::from(&*ZERO)),
    (turn(5, 6), TrigOut::from(&*ONE_HALF)),
    (turn(7, 8), TrigOut::from(&*SQRT_TWO_HALF)),
    (turn(11, 12), TrigOut::from(&*SQRT_THREE_HALF)),
]));

/// `tan` is undefined at `1/4` and `3/4` (90 and 270 deg); those angles are not in the table.
pub static TAN_TABLE: Lazy<HashMap<Rational, TrigOut>> = Lazy::new(|| HashMap::from([
    // tan(0) = 0
    (turn(0, 1), TrigOut::from(&*ZERO)),

    // tan(1/12 = pi/6 rad = 30 deg) = sqrt(3)/3
    (turn(1, 12), TrigOut::from(&*SQRT_THREE_THIRD)),

    // tan(1/8 = pi/4 rad = 45 deg) = 1
    (turn(1, 8), TrigOut::from(&*ONE)),

    // tan(1/6 = pi/3 rad = 60 deg) = sqrt(3)
    (turn(1, 6), TrigOut::from(&*SQRT_THREE)),

    // tan(1/3 = 2pi/3 rad = 120 deg) = -sqrt(3)
    (turn(1, 3), neg(&SQRT_THREE)),

    // tan(3/8 = 3pi/4 rad = 135 deg) = -1
    (turn(3, 8), neg(&ONE)),

    // tan(5/12 = 5pi/6 rad = 150 deg) = -sqrt(3)/3
    (turn(5, 12), neg(&SQRT_THREE_THIRD)),

    // tan(1/2 = pi rad = 180 deg) = 0
    (turn(1, 2), TrigOut::from(&*ZERO)),

    // lower half repeats with a period of pi
    (turn(7, 12), TrigOut::from(&*SQRT_THREE_THIRD)),
    (turn(5, 8), TrigOut::from(&*ONE)),
    (turn(2, 3), TrigOut::from(&*SQRT_THREE)),
    (turn(5, 6), neg(&SQRT_THREE)),
    (turn(7, 8), neg(&ONE)),
    (turn(11, 12), neg(&SQRT_THREE_THIRD)),
]));
