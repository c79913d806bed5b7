//! Prelude module - common imports for shine users
//!
//! ```rust
//! use shine::prelude::*;
//! ```

// Core types
pub use crate::{Cell, Value};

// Bubble types
pub use crate::{Bubble, EvaluationOptions, Formula, Position, Universe};

// Expression types
pub use crate::{Environment, Expr, Program};

// Error types
pub use crate::{Error, EvalError, FormulaError, Result};

// Extension traits
pub use crate::UniverseExt;
