use crate::error::{Error, TypeMismatch};
use crate::number::Number;
use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of evaluating an expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// A number, exact or inexact.
    Number(Number),

    /// The truth value of an equation.
    Boolean(bool),
}

impl Value {
    /// Returns the typename of this value.
    pub fn typename(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
        }
    }

    /// If the value is a number, returns a reference to it.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(num) => Some(num),
            Value::Boolean(_) => None,
        }
    }

    /// Returns the value as a number, or a [`TypeMismatch`] error if it is not one.
    pub fn into_number(self) -> Result<Number, Error> {
        match self {
            Value::Number(num) => Ok(num),
            other => Err(TypeMismatch {
                expected: "number",
                found: other.typename(),
            }.into()),
        }
    }
}

impl From<Number> for Value {
    fn from(num: Number) -> Self {
        Value::Number(num)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(num) => write!(f, "{}", num),
            Value::Boolean(b) => write!(f, "{}", b),
        }
    }
}
