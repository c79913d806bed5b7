//! Error types for shine-core

use crate::cell::CellId;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by cells, combinators and native functions
#[derive(Debug, Error)]
pub enum Error {
    /// A cell was offered another cell as its content
    #[error("Invalid value: a cell cannot hold another cell")]
    InvalidValue,

    /// A cell was set again while its own change was still propagating
    #[error("Cyclic dependency: cell {0} was set while propagating its own change")]
    CyclicDependency(CellId),

    /// Attempt to call something that is not a function
    #[error("Value is not callable: {0}")]
    NotCallable(&'static str),

    /// Invalid argument passed to a native function
    #[error("Invalid argument: {0}")]
    Argument(String),

    /// Wrong number of arguments passed to a native function
    #[error("Wrong number of arguments for {function}: expected {expected}, got {actual}")]
    ArgumentCount {
        function: String,
        expected: usize,
        actual: usize,
    },
}

impl Error {
    /// Create a new argument error with a message
    pub fn argument<S: Into<String>>(msg: S) -> Self {
        Error::Argument(msg.into())
    }
}
