//! Bubbles: identified, named nodes that may carry a formula

use crate::error::{FormulaError, FormulaResult};
use crate::evaluator::evaluate;
use crate::formula::Formula;
use crate::record::{parse_formula, BubbleRecord};
use crate::universe::Universe;
use serde::{Deserialize, Serialize};
use shine_core::Value;

/// Canvas position. Carried along, never read by evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A node of the universe
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    identifier: String,
    name: String,
    position: Position,
    formula: Option<Formula>,
}

impl Bubble {
    pub fn new<I, N>(identifier: I, name: N, position: Position, formula: Option<Formula>) -> Self
    where
        I: Into<String>,
        N: Into<String>,
    {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            position,
            formula,
        }
    }

    /// Build a bubble from its record
    pub fn from_record(record: &BubbleRecord) -> Self {
        Self {
            identifier: record.identifier.clone(),
            name: record.name.clone(),
            position: record.position,
            formula: record.formula.as_ref().map(parse_formula),
        }
    }

    /// Globally unique identifier
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Display name, not necessarily unique
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn formula(&self) -> Option<&Formula> {
        self.formula.as_ref()
    }

    /// Evaluate this bubble's formula against `universe`
    pub fn evaluate(&self, universe: &Universe) -> FormulaResult<Value> {
        let formula = self
            .formula
            .as_ref()
            .ok_or_else(|| FormulaError::EmptyFormula(self.identifier.clone()))?;
        evaluate(formula, universe)
    }
}
