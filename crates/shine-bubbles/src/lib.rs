//! # shine-bubbles
//!
//! Bubbles and the pull-based formula evaluator.
//!
//! This crate provides:
//! - Bubble records and formula trees (record → [`Bubble`])
//! - The [`Universe`] of bubbles references resolve against
//! - Formula evaluation (formula + universe → value)
//! - Universe-wide evaluation with run statistics
//!
//! ## Example
//!
//! ```rust
//! use shine_bubbles::{builtins, evaluate, Bubble, Formula, Position, Universe};
//! use shine_core::Value;
//!
//! let mut universe = Universe::new();
//! builtins::install(&mut universe);
//! universe.insert(Bubble::new("g", "greeting", Position::default(), Some(Formula::string("Hello, world!"))));
//!
//! let formula = Formula::call(Formula::reference("strlen"), Formula::reference("greeting"));
//! assert_eq!(evaluate(&formula, &universe).unwrap(), Value::Int(13));
//! ```

pub mod bubble;
pub mod builtins;
pub mod calculation;
pub mod error;
pub mod evaluator;
pub mod formula;
pub mod record;
pub mod universe;

pub use bubble::{Bubble, Position};
pub use calculation::{evaluate_all, BubbleOutcome, Evaluation, EvaluationOptions, EvaluationStats};
pub use error::{FormulaError, FormulaResult};
pub use evaluator::{evaluate, EvaluationContext};
pub use formula::Formula;
pub use record::{parse_formula, BubbleRecord, FormulaRecord};
pub use universe::Universe;
