//! Reactive cells
//!
//! A [`Cell`] holds one current value plus an ordered list of subscribers.
//! [`Cell::set`] replaces the value and runs every subscriber synchronously,
//! in registration order, before returning. A subscriber that sets another
//! cell cascades fully before the next subscriber runs.
//!
//! Cells are reference-counted handles. A subscription is owned by the cell
//! it is registered on, so a derived cell lives as long as the longest-lived
//! of its sources, whether or not anyone else still holds it.

use crate::error::{Error, Result};
use crate::value::Value;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

thread_local! {
    static NEXT_CELL_ID: std::cell::Cell<u64> = const { std::cell::Cell::new(1) };
}

/// Cell identifier, unique among the cells of one thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(u64);

impl CellId {
    fn next() -> Self {
        NEXT_CELL_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            CellId(id)
        })
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

type Subscriber = Rc<dyn Fn(&Value) -> Result<()>>;

struct Inner {
    id: CellId,
    value: RefCell<Value>,
    subscribers: RefCell<Vec<Subscriber>>,
    propagating: std::cell::Cell<bool>,
}

/// A mutable, observable value container
#[derive(Clone)]
pub struct Cell {
    inner: Rc<Inner>,
}

/// Non-owning handle to a [`Cell`]
#[derive(Clone)]
pub struct WeakCell {
    inner: Weak<Inner>,
}

impl WeakCell {
    /// Get the cell back if it is still alive
    pub fn upgrade(&self) -> Option<Cell> {
        self.inner.upgrade().map(|inner| Cell { inner })
    }
}

fn check_value(value: &Value) -> Result<()> {
    if value.contains_cell() {
        return Err(Error::InvalidValue);
    }
    Ok(())
}

impl Cell {
    /// Create a cell holding `value`.
    ///
    /// Fails with [`Error::InvalidValue`] if `value` is (or contains) a cell.
    pub fn new(value: impl Into<Value>) -> Result<Self> {
        let value = value.into();
        check_value(&value)?;
        Ok(Self {
            inner: Rc::new(Inner {
                id: CellId::next(),
                value: RefCell::new(value),
                subscribers: RefCell::new(Vec::new()),
                propagating: std::cell::Cell::new(false),
            }),
        })
    }

    pub fn id(&self) -> CellId {
        self.inner.id
    }

    /// Current value
    pub fn get(&self) -> Value {
        self.inner.value.borrow().clone()
    }

    /// Replace the value and notify every subscriber in registration order.
    ///
    /// The first subscriber failure aborts the remaining notifications and is
    /// returned. Setting a cell from inside its own propagation fails with
    /// [`Error::CyclicDependency`].
    pub fn set(&self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        check_value(&value)?;
        if self.inner.propagating.get() {
            return Err(Error::CyclicDependency(self.id()));
        }
        *self.inner.value.borrow_mut() = value.clone();
        self.notify(&value)
    }

    fn notify(&self, value: &Value) -> Result<()> {
        // Subscribers registered during this propagation fire from the next set on
        let subscribers: Vec<Subscriber> = self.inner.subscribers.borrow().clone();
        if subscribers.is_empty() {
            return Ok(());
        }
        tracing::trace!(
            cell = %self.id(),
            subscribers = subscribers.len(),
            "propagating change"
        );

        self.inner.propagating.set(true);
        let result = subscribers.iter().try_for_each(|subscriber| subscriber(value));
        self.inner.propagating.set(false);
        result
    }

    /// Register a callback run with the new value on every [`Cell::set`].
    /// Subscriptions are permanent.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&Value) -> Result<()> + 'static,
    {
        self.inner.subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    /// Derive a cell through `transform`, see [`crate::combinators::map`]
    pub fn map<F>(&self, transform: F) -> Result<Cell>
    where
        F: Fn(&Value) -> Result<Value> + 'static,
    {
        crate::combinators::map(self, transform)
    }

    pub fn downgrade(&self) -> WeakCell {
        WeakCell {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// True if both handles point to the same cell
    pub fn ptr_eq(&self, other: &Cell) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("id", &self.inner.id)
            .field("value", &*self.inner.value.borrow())
            .finish()
    }
}
