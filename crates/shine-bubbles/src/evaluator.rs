//! Formula evaluator
//!
//! Evaluates formula trees against a [`Universe`] by recursive descent.
//! Nothing is cached: every call resolves references afresh.

use crate::error::{FormulaError, FormulaResult};
use crate::formula::Formula;
use crate::universe::Universe;
use shine_core::Value;

/// State for one evaluation
pub struct EvaluationContext<'a> {
    /// Universe used to resolve references
    pub universe: &'a Universe,
    /// Identifiers of bubbles whose formulas are being evaluated
    in_progress: Vec<String>,
}

impl<'a> EvaluationContext<'a> {
    /// Create a new evaluation context
    pub fn new(universe: &'a Universe) -> Self {
        Self {
            universe,
            in_progress: Vec::new(),
        }
    }

    /// Evaluate a formula expression
    pub fn evaluate(&mut self, formula: &Formula) -> FormulaResult<Value> {
        match formula {
            Formula::StringLiteral(value) => Ok(Value::Str(value.clone())),
            Formula::Native(value) => Ok(value.clone()),
            Formula::Reference(target) => self.evaluate_reference(target),
            Formula::FunctionCall { function, argument } => {
                self.evaluate_call(function, argument)
            }
        }
    }

    fn evaluate_reference(&mut self, target: &str) -> FormulaResult<Value> {
        let universe = self.universe;
        let bubble = universe
            .resolve(target)
            .ok_or_else(|| FormulaError::UnresolvedReference(target.to_string()))?;
        let formula = bubble
            .formula()
            .ok_or_else(|| FormulaError::EmptyFormula(target.to_string()))?;

        let identifier = bubble.identifier();
        if self.in_progress.iter().any(|id| id == identifier) {
            return Err(FormulaError::CircularReference(identifier.to_string()));
        }
        tracing::debug!(reference = %target, resolved = %identifier, "resolving reference");

        self.in_progress.push(identifier.to_string());
        let result = self.evaluate(formula);
        self.in_progress.pop();
        result
    }

    fn evaluate_call(&mut self, function: &Formula, argument: &Formula) -> FormulaResult<Value> {
        let function = match self.evaluate(function)? {
            Value::Function(f) => f,
            other => return Err(FormulaError::NotCallable(other.type_name())),
        };
        let argument = self.evaluate(argument)?;
        Ok(function.call(&[argument])?)
    }
}

/// Evaluate a formula against a universe
pub fn evaluate(formula: &Formula, universe: &Universe) -> FormulaResult<Value> {
    EvaluationContext::new(universe).evaluate(formula)
}
