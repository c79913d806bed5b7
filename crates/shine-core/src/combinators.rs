//! Derived-cell constructors
//!
//! Every derived cell recomputes its whole value from all of its sources on
//! any source change. There is no memoization and no diffing, so a diamond
//! shaped graph recomputes its join once per changed path.
//!
//! Each source's subscription owns the derived cell, so a derived cell keeps
//! recomputing for as long as one of its sources is alive. Derived cells
//! only hold weak handles back to their sources.

use crate::cell::{Cell, WeakCell};
use crate::error::Result;
use crate::value::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Derive a cell holding `transform(source.get())`, kept up to date on every
/// change of `source`.
pub fn map<F>(source: &Cell, transform: F) -> Result<Cell>
where
    F: Fn(&Value) -> Result<Value> + 'static,
{
    let derived = Cell::new(transform(&source.get())?)?;

    let target = derived.clone();
    source.subscribe(move |value| target.set(transform(value)?));

    Ok(derived)
}

/// One source of a multi-source derived cell
struct Input {
    source: WeakCell,
    /// Last value seen from `source`, used once the source is gone
    last: RefCell<Value>,
}

/// Sources of a multi-source derived cell, in order
struct Inputs(Vec<Input>);

impl Inputs {
    fn new(sources: &[Cell]) -> Rc<Self> {
        Rc::new(Inputs(
            sources
                .iter()
                .map(|source| Input {
                    source: source.downgrade(),
                    last: RefCell::new(source.get()),
                })
                .collect(),
        ))
    }

    /// Record the value pushed by source `index`, then read every source
    fn update(&self, index: usize, value: &Value) -> Vec<Value> {
        if let Some(input) = self.0.get(index) {
            *input.last.borrow_mut() = value.clone();
        }
        self.0
            .iter()
            .map(|input| match input.source.upgrade() {
                Some(source) => source.get(),
                None => input.last.borrow().clone(),
            })
            .collect()
    }
}

/// Subscribe `recompute` to every source, owning `derived`
fn wire<F>(sources: &[Cell], derived: &Cell, recompute: F)
where
    F: Fn(Vec<Value>) -> Value + 'static,
{
    let inputs = Inputs::new(sources);
    let recompute = Rc::new(recompute);
    for (index, source) in sources.iter().enumerate() {
        let target = derived.clone();
        let inputs = Rc::clone(&inputs);
        let recompute = Rc::clone(&recompute);
        source.subscribe(move |value| target.set((*recompute)(inputs.update(index, value))));
    }
}

/// Derive a cell holding the list of current values of `sources`, in order.
pub fn combine_list<I>(sources: I) -> Result<Cell>
where
    I: IntoIterator<Item = Cell>,
{
    let sources: Vec<Cell> = sources.into_iter().collect();
    let derived = Cell::new(Value::List(sources.iter().map(Cell::get).collect()))?;
    wire(&sources, &derived, Value::List);
    Ok(derived)
}

/// Derive a cell holding a name to value map of the current values of
/// `sources`. A repeated name keeps the last source given for it.
pub fn combine_dict<I, K>(sources: I) -> Result<Cell>
where
    I: IntoIterator<Item = (K, Cell)>,
    K: Into<String>,
{
    let (names, sources): (Vec<String>, Vec<Cell>) = sources
        .into_iter()
        .map(|(name, cell)| (name.into(), cell))
        .unzip();

    let derived = Cell::new(Value::Map(collect_map(
        &names,
        sources.iter().map(Cell::get),
    )))?;
    wire(&sources, &derived, move |values| {
        Value::Map(collect_map(&names, values))
    });

    Ok(derived)
}

fn collect_map<I>(names: &[String], values: I) -> BTreeMap<String, Value>
where
    I: IntoIterator<Item = Value>,
{
    names.iter().cloned().zip(values).collect()
}
