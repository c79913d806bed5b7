//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during formula evaluation
#[derive(Debug, Error)]
pub enum FormulaError {
    /// No bubble matches a reference by identifier or name
    #[error("Reference to non-existent bubble: {0}")]
    UnresolvedReference(String),

    /// The referenced bubble carries no formula
    #[error("Reference to bubble with no formula: {0}")]
    EmptyFormula(String),

    /// The function side of a call did not evaluate to a function
    #[error("Value is not callable: {0}")]
    NotCallable(&'static str),

    /// A reference chain came back to a bubble still being evaluated
    #[error("Circular reference detected involving bubble {0}")]
    CircularReference(String),

    /// Failure raised by a native function
    #[error(transparent)]
    Core(#[from] shine_core::Error),
}
