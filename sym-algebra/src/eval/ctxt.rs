use crate::number::Number;
use levenshtein::levenshtein;
use std::{collections::HashMap, f64::consts};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// The trigonometric mode of a context. This will affect the evaluation of input to trigonometric
/// functions, and output from trigonometric functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
#[repr(u8)]
pub enum TrigMode {
    /// Use radians.
    #[default]
    Radians,

    /// Use degrees.
    Degrees,
}

impl std::fmt::Display for TrigMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrigMode::Radians => write!(f, "radians"),
            TrigMode::Degrees => write!(f, "degrees"),
        }
    }
}

/// A context to use when evaluating an expression, containing the values bound to symbols.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, Number>,

    /// The trigonometric mode of the context.
    pub trig_mode: TrigMode,
}

impl Default for Ctxt {
    fn default() -> Self {
        Self {
            vars: HashMap::from([
                ("e".to_string(), Number::Inexact(consts::E)),
                ("phi".to_string(), Number::Inexact(1.618_033_988_749_895)),
                ("pi".to_string(), Number::Inexact(consts::PI)),
                ("tau".to_string(), Number::Inexact(consts::TAU)),
            ]),
            trig_mode: TrigMode::default(),
        }
    }
}

impl Ctxt {
    /// Creates a new empty context.
    ///
    /// The empty context does not contain any constants. Consider using the [`Default`]
    /// implementation instead.
    pub fn new() -> Ctxt {
        Ctxt {
            vars: HashMap::new(),
            ..Default::default()
        }
    }

    /// Add a variable to the context, replacing any previous value.
    pub fn add_var(&mut self, name: &str, value: impl Into<Number>) {
        self.vars.insert(name.to_string(), value.into());
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<Number> {
        self.vars.get(name).cloned()
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<String, Number> {
        &self.vars
    }

    /// Returns all variables in the context with a name similar to the given name, sorted by
    /// name.
    pub fn get_similar_vars(&self, name: &str) -> Vec<&str> {
        let mut similar = self.vars
            .keys()
            .filter(|n| levenshtein(n, name) < 2)
            .map(|n| n.as_str())
            .collect::<Vec<_>>();
        similar.sort_unstable();
        similar
    }
}
