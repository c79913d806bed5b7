//! Formula tree types

use shine_core::Value;

/// Formula expression tree attached to a bubble
#[derive(Debug, Clone, PartialEq)]
pub enum Formula {
    /// String literal
    StringLiteral(String),

    /// Reference to another bubble, by identifier or by name
    Reference(String),

    /// Single-argument call. Multi-argument calls nest (curried form).
    FunctionCall {
        function: Box<Formula>,
        argument: Box<Formula>,
    },

    /// Host-supplied constant, typically a builtin function.
    /// Never produced from records.
    Native(Value),
}

impl Formula {
    pub fn string<S: Into<String>>(value: S) -> Self {
        Formula::StringLiteral(value.into())
    }

    pub fn reference<S: Into<String>>(target: S) -> Self {
        Formula::Reference(target.into())
    }

    pub fn call(function: Formula, argument: Formula) -> Self {
        Formula::FunctionCall {
            function: Box::new(function),
            argument: Box::new(argument),
        }
    }
}

