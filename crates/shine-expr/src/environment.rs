//! Name to cell bindings

use crate::error::{EvalError, EvalResult};
use ahash::AHashMap;
use shine_core::Cell;

/// Mutable mapping from names to live cells
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: AHashMap<String, Cell>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell bound to `name`, if any
    pub fn get(&self, name: &str) -> Option<&Cell> {
        self.bindings.get(name)
    }

    /// Cell bound to `name`, or [`EvalError::UnboundName`]
    pub fn lookup(&self, name: &str) -> EvalResult<&Cell> {
        self.get(name)
            .ok_or_else(|| EvalError::UnboundName(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Bind `name` to `cell`, returning the previous binding
    pub fn bind<S: Into<String>>(&mut self, name: S, cell: Cell) -> Option<Cell> {
        self.bindings.insert(name.into(), cell)
    }

    /// Bound names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Cell)> for Environment {
    fn from_iter<I: IntoIterator<Item = (S, Cell)>>(iter: I) -> Self {
        let mut env = Self::new();
        for (name, cell) in iter {
            env.bind(name, cell);
        }
        env
    }
}
