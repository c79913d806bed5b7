//! # shine
//!
//! A prototype reactive-cell evaluator.
//!
//! Shine provides two strategies for dependency-driven recomputation:
//!
//! - Bubbles: named nodes whose formulas reference one another, evaluated on
//!   demand against a [`Universe`]
//! - Programs: statements whose variables are live [`Cell`]s, so a call
//!   result recomputes whenever one of its inputs is reassigned
//!
//! ## Example
//!
//! ```rust
//! use shine::prelude::*;
//!
//! let mut env = shine::builtins::environment();
//! let program = shine::program_from_json(r#"[
//!     {"type": "assignment", "name": "x", "value": {"type": "literal", "value": 5}},
//!     {"type": "assignment", "name": "y", "value": {"type": "function_call", "name": "add",
//!         "args": [{"type": "literal", "value": 3}, {"type": "variable", "name": "x"}]}},
//!     {"type": "assignment", "name": "x", "value": {"type": "literal", "value": 10}}
//! ]"#).unwrap();
//!
//! program.evaluate(&mut env).unwrap();
//! assert_eq!(env.get("y").unwrap().get(), Value::Int(13));
//! ```

pub mod error;
pub mod loader;
pub mod prelude;

pub use error::{Error, Result};
pub use loader::{load_program, load_universe, program_from_json, universe_from_json};

// Re-export core types
pub use shine_core::{
    combine_dict, combine_list, functions, map, Cell, CellId, Function, Value, WeakCell,
};

// Re-export bubble types
pub use shine_bubbles::{
    evaluate as evaluate_formula, evaluate_all, parse_formula, Bubble, BubbleOutcome,
    BubbleRecord, Evaluation, EvaluationOptions, EvaluationStats, Formula,
    FormulaError, FormulaRecord, FormulaResult, Position, Universe,
};

// Re-export expression types
pub use shine_expr::{
    builtins, evaluate as evaluate_expr, Environment, EvalError, EvalResult, Expr, ExprRecord,
    Program,
};

use std::path::Path;

/// Extension trait for Universe to add file loading and builtins
pub trait UniverseExt: Sized {
    /// Open a bubble file
    fn open<P: AsRef<Path>>(path: P) -> Result<Self>;

    /// Add the builtin function bubbles (`strlen`, `concat`, ...)
    fn with_builtins(self) -> Self;

    /// Evaluate the bubble a reference target resolves to
    fn evaluate_reference(&self, target: &str) -> FormulaResult<Value>;
}

impl UniverseExt for Universe {
    fn open<P: AsRef<Path>>(path: P) -> Result<Universe> {
        load_universe(path)
    }

    fn with_builtins(mut self) -> Self {
        shine_bubbles::builtins::install(&mut self);
        self
    }

    fn evaluate_reference(&self, target: &str) -> FormulaResult<Value> {
        evaluate_formula(&Formula::reference(target), self)
    }
}
