//! Serialized programs
//!
//! A program arrives as a JSON array of statements:
//!
//! ```json
//! [
//!   {"type": "assignment", "name": "x", "value": {"type": "literal", "value": 5}},
//!   {"type": "function_call", "name": "print", "args": [{"type": "variable", "name": "x"}]}
//! ]
//! ```

use crate::ast::{Expr, Program};
use serde::{Deserialize, Serialize};
use shine_core::Value;

/// Literal as it appears in a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralRecord {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl From<&LiteralRecord> for Value {
    fn from(record: &LiteralRecord) -> Self {
        match record {
            LiteralRecord::Bool(b) => Value::Bool(*b),
            LiteralRecord::Int(n) => Value::Int(*n),
            LiteralRecord::Float(n) => Value::Float(*n),
            LiteralRecord::Str(s) => Value::Str(s.clone()),
        }
    }
}

/// Serialized expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExprRecord {
    Literal {
        value: LiteralRecord,
    },
    Variable {
        name: String,
    },
    FunctionCall {
        name: String,
        #[serde(default)]
        args: Vec<ExprRecord>,
    },
    Assignment {
        name: String,
        value: Box<ExprRecord>,
    },
}

impl Expr {
    /// Build an expression from its record
    pub fn from_record(record: &ExprRecord) -> Self {
        match record {
            ExprRecord::Literal { value } => Expr::Literal(value.into()),
            ExprRecord::Variable { name } => Expr::Variable(name.clone()),
            ExprRecord::FunctionCall { name, args } => Expr::FunctionCall {
                name: name.clone(),
                args: args.iter().map(Expr::from_record).collect(),
            },
            ExprRecord::Assignment { name, value } => Expr::Assignment {
                name: name.clone(),
                value: Box::new(Expr::from_record(value)),
            },
        }
    }
}

impl Program {
    /// Build a program from its statement records
    pub fn from_records(records: &[ExprRecord]) -> Self {
        Program::new(records.iter().map(Expr::from_record).collect())
    }
}
