//! Error types for the shine facade

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Any failure surfaced through the facade
#[derive(Debug, Error)]
pub enum Error {
    /// Cell or native function failure
    #[error(transparent)]
    Core(#[from] shine_core::Error),

    /// Formula evaluation failure
    #[error(transparent)]
    Formula(#[from] shine_bubbles::FormulaError),

    /// Expression evaluation failure
    #[error(transparent)]
    Eval(#[from] shine_expr::EvalError),

    /// Malformed bubble or program JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Unreadable input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Two records share an identifier
    #[error("Duplicate bubble identifier: {0}")]
    DuplicateIdentifier(String),
}
