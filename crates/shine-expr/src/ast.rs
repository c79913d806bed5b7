//! Expression Abstract Syntax Tree types

use shine_core::Value;

/// Expression AST
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal value
    Literal(Value),

    /// Reference to a bound cell
    Variable(String),

    /// Call of the function bound to `name`
    FunctionCall { name: String, args: Vec<Expr> },

    /// Bind a new name, or update the cell already bound to it
    Assignment { name: String, value: Box<Expr> },
}

impl Expr {
    pub fn literal(value: impl Into<Value>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn variable<S: Into<String>>(name: S) -> Self {
        Expr::Variable(name.into())
    }

    pub fn call<S: Into<String>>(name: S, args: Vec<Expr>) -> Self {
        Expr::FunctionCall {
            name: name.into(),
            args,
        }
    }

    pub fn assign<S: Into<String>>(name: S, value: Expr) -> Self {
        Expr::Assignment {
            name: name.into(),
            value: Box::new(value),
        }
    }
}

/// Ordered list of statements sharing one environment
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Expr>,
}

impl Program {
    pub fn new(statements: Vec<Expr>) -> Self {
        Self { statements }
    }
}
