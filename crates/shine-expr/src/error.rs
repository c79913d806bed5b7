//! Expression evaluation error types

use thiserror::Error;

/// Result type for expression evaluation
pub type EvalResult<T> = std::result::Result<T, EvalError>;

/// Errors that can occur while evaluating expressions
#[derive(Debug, Error)]
pub enum EvalError {
    /// Variable or call target missing from the environment
    #[error("Unbound name: {0}")]
    UnboundName(String),

    /// Call target bound to something that is not a function
    #[error("{name} is not callable (holds {type_name})")]
    NotCallable {
        name: String,
        type_name: &'static str,
    },

    /// An expression that yields no cell was used where a value is needed
    #[error("Assignment to {0} used as a value")]
    NoValue(String),

    /// Failure raised by a cell, a combinator or a native function
    #[error(transparent)]
    Core(#[from] shine_core::Error),
}
