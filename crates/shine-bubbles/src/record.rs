//! Structured input records for bubbles
//!
//! These mirror the JSON shape handed over by the loader:
//!
//! ```json
//! {
//!   "identifier": "b-1",
//!   "position": {"x": 0.0, "y": 10.0},
//!   "name": "greeting",
//!   "formula": {"type": "literal_string", "value": "Hello"}
//! }
//! ```

use crate::bubble::Position;
use crate::formula::Formula;
use serde::{Deserialize, Serialize};

/// Serialized formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormulaRecord {
    LiteralString {
        value: String,
    },
    Reference {
        value: String,
    },
    FunctionCall {
        function: Box<FormulaRecord>,
        argument: Box<FormulaRecord>,
    },
}

/// Serialized bubble
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleRecord {
    #[serde(alias = "uuid")]
    pub identifier: String,
    pub position: Position,
    pub name: String,
    #[serde(default)]
    pub formula: Option<FormulaRecord>,
}

/// Build a formula tree from its record
pub fn parse_formula(record: &FormulaRecord) -> Formula {
    match record {
        FormulaRecord::LiteralString { value } => Formula::StringLiteral(value.clone()),
        FormulaRecord::Reference { value } => Formula::Reference(value.clone()),
        FormulaRecord::FunctionCall { function, argument } => {
            Formula::call(parse_formula(function), parse_formula(argument))
        }
    }
}
