//! # shine-core
//!
//! The reactive primitive of the shine evaluator.
//!
//! This crate provides:
//! - [`Value`] - dynamic values, including host [`Function`]s
//! - [`Cell`] - a mutable, observable value container
//! - [`combinators`] - derived cells (`map`, `combine_list`, `combine_dict`)
//! - [`functions`] - built-in native functions shared by both evaluators
//!
//! ## Example
//!
//! ```rust
//! use shine_core::{combinators, Cell, Value};
//!
//! let x = Cell::new(5).unwrap();
//! let y = Cell::new(3).unwrap();
//! let pair = combinators::combine_list([x.clone(), y]).unwrap();
//!
//! x.set(10).unwrap();
//! assert_eq!(pair.get(), Value::List(vec![Value::Int(10), Value::Int(3)]));
//! ```

pub mod cell;
pub mod combinators;
pub mod error;
pub mod functions;
pub mod value;

pub use cell::{Cell, CellId, WeakCell};
pub use combinators::{combine_dict, combine_list, map};
pub use error::{Error, Result};
pub use value::{Function, NativeFn, Value};
