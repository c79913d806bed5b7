//! Dynamic values held by cells and produced by formulas

use crate::cell::Cell;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Signature of a host-supplied function
pub type NativeFn = dyn Fn(&[Value]) -> Result<Value>;

/// A named, shareable host function.
///
/// Two `Function`s compare equal only when they share the same closure.
#[derive(Clone)]
pub struct Function {
    name: Rc<str>,
    implementation: Rc<NativeFn>,
}

impl Function {
    /// Wrap a closure as a function value
    pub fn new<S, F>(name: S, implementation: F) -> Self
    where
        S: Into<String>,
        F: Fn(&[Value]) -> Result<Value> + 'static,
    {
        Self {
            name: Rc::from(name.into()),
            implementation: Rc::new(implementation),
        }
    }

    /// The name the function was registered under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply the function to positional arguments
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        (self.implementation)(args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({})", self.name)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.implementation, &other.implementation)
    }
}

/// A dynamic value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Function(Function),
    /// Handle to a reactive cell. Never stored as the content of a cell.
    Cell(Cell),
}

impl Value {
    /// Create a new string value
    pub fn string<S: Into<String>>(s: S) -> Self {
        Value::Str(s.into())
    }

    /// Wrap a closure as a function value
    pub fn function<S, F>(name: S, implementation: F) -> Self
    where
        S: Into<String>,
        F: Fn(&[Value]) -> Result<Value> + 'static,
    {
        Value::Function(Function::new(name, implementation))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// True if a cell handle appears anywhere in this value, including inside
    /// lists and maps
    pub fn contains_cell(&self) -> bool {
        match self {
            Value::Cell(_) => true,
            Value::List(items) => items.iter().any(Value::contains_cell),
            Value::Map(entries) => entries.values().any(Value::contains_cell),
            _ => false,
        }
    }

    /// Try to get the value as an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    /// Try to get the value as a float (integers widen)
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            Value::Bool(b) => Some(f64::from(u8::from(*b))),
            _ => None,
        }
    }

    /// Try to get the value as a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as a function
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Get the function, or fail with [`Error::NotCallable`]
    pub fn to_function(&self) -> Result<&Function> {
        self.as_function()
            .ok_or_else(|| Error::NotCallable(self.type_name()))
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Function(_) => "function",
            Value::Cell(_) => "cell",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (name, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", name, value)?;
                }
                write!(f, "}}")
            }
            Value::Function(func) => write!(f, "<function {}>", func.name()),
            Value::Cell(cell) => write!(f, "<cell {}>", cell.id()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}

impl From<Cell> for Value {
    fn from(cell: Cell) -> Self {
        Value::Cell(cell)
    }
}
