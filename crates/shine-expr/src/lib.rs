//! # shine-expr
//!
//! A small expression language whose variables are live cells.
//!
//! This crate provides:
//! - The expression AST and its record form (JSON → [`Program`])
//! - Evaluation over an [`Environment`] of cells (expression → cell)
//! - A builtin environment (`add`, `print`, ...)
//!
//! ## Example
//!
//! ```rust
//! use shine_expr::{builtins, Expr, Program};
//! use shine_core::Value;
//!
//! let mut env = builtins::environment();
//! let program = Program::new(vec![
//!     Expr::assign("x", Expr::literal(5)),
//!     Expr::assign("y", Expr::call("add", vec![Expr::literal(3), Expr::variable("x")])),
//!     Expr::assign("x", Expr::literal(10)),
//! ]);
//! program.evaluate(&mut env).unwrap();
//!
//! assert_eq!(env.get("y").unwrap().get(), Value::Int(13));
//! ```

pub mod ast;
pub mod builtins;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod record;

pub use ast::{Expr, Program};
pub use environment::Environment;
pub use error::{EvalError, EvalResult};
pub use evaluator::evaluate;
pub use record::{ExprRecord, LiteralRecord};
