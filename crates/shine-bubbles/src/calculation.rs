//! Universe-wide evaluation
//!
//! Evaluates every bubble that carries a formula, in universe order, and
//! reports per-bubble outcomes plus run statistics. Each bubble is evaluated
//! independently; nothing is shared between evaluations.
//!
//! # Example
//!
//! ```rust
//! use shine_bubbles::{evaluate_all, Bubble, EvaluationOptions, Formula, Position, Universe};
//!
//! let universe = Universe::from_bubbles([
//!     Bubble::new("a", "greeting", Position::default(), Some(Formula::string("hi"))),
//!     Bubble::new("b", "echo", Position::default(), Some(Formula::reference("greeting"))),
//! ]);
//!
//! let evaluation = evaluate_all(&universe, &EvaluationOptions::default()).unwrap();
//! assert_eq!(evaluation.stats.evaluated, 2);
//! ```

use crate::error::{FormulaError, FormulaResult};
use crate::evaluator::evaluate;
use crate::universe::Universe;
use shine_core::Value;

/// Options for universe-wide evaluation
#[derive(Debug, Clone, Default)]
pub struct EvaluationOptions {
    /// Abort on the first failing bubble instead of recording the error
    pub stop_on_error: bool,
}

/// Statistics from an evaluation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationStats {
    /// Number of bubbles carrying a formula
    pub formula_count: usize,
    /// Number of bubbles evaluated successfully
    pub evaluated: usize,
    /// Number of bubbles whose evaluation failed
    pub errors: usize,
    /// Number of bubbles whose evaluation ran into a reference cycle
    pub circular_references: usize,
}

/// Outcome of evaluating one bubble
#[derive(Debug)]
pub struct BubbleOutcome {
    pub identifier: String,
    pub name: String,
    pub result: FormulaResult<Value>,
}

/// Result of [`evaluate_all`], outcomes in universe order
#[derive(Debug, Default)]
pub struct Evaluation {
    pub outcomes: Vec<BubbleOutcome>,
    pub stats: EvaluationStats,
}

impl Evaluation {
    /// Outcome for a bubble identifier
    pub fn get(&self, identifier: &str) -> Option<&FormulaResult<Value>> {
        self.outcomes
            .iter()
            .find(|outcome| outcome.identifier == identifier)
            .map(|outcome| &outcome.result)
    }
}

/// Evaluate every bubble with a formula
pub fn evaluate_all(universe: &Universe, options: &EvaluationOptions) -> FormulaResult<Evaluation> {
    let mut evaluation = Evaluation::default();

    for bubble in universe.iter() {
        let Some(formula) = bubble.formula() else {
            continue;
        };
        let identifier = bubble.identifier();
        evaluation.stats.formula_count += 1;

        let result = evaluate(formula, universe);
        match &result {
            Ok(_) => evaluation.stats.evaluated += 1,
            Err(e) => {
                if matches!(e, FormulaError::CircularReference(_)) {
                    evaluation.stats.circular_references += 1;
                }
                tracing::warn!(bubble = %identifier, error = %e, "evaluation failed");
                evaluation.stats.errors += 1;
            }
        }
        let result = match result {
            Err(e) if options.stop_on_error => return Err(e),
            other => other,
        };

        evaluation.outcomes.push(BubbleOutcome {
            identifier: identifier.to_string(),
            name: bubble.name().to_string(),
            result,
        });
    }

    tracing::debug!(
        formulas = evaluation.stats.formula_count,
        errors = evaluation.stats.errors,
        "evaluated universe"
    );
    Ok(evaluation)
}
