//! Typed column storage.
//!
//! A [`ComponentList<T>`] stores every instance of one component type inside
//! one archetype, densely packed: row `i` of the archetype is element `i` of
//! each of its columns. Archetypes hold columns behind the object-safe
//! [`ErasedColumn`] trait so a single archetype can own columns of unrelated
//! types; typed access goes back through [`ErasedColumn::as_any`].
//!
//! ## View invalidation
//!
//! Growing a column may move its buffer. Every view handed out by this module
//! is a borrow of the column, so holding one across an `append`/`remove` is
//! rejected at compile time rather than observed as stale data.

use std::any::Any;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::component::Component;

/// Sizing policy shared by every column of a world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    /// Number of rows reserved when a column is created.
    pub initial_capacity: usize,
    /// Multiplier applied to the capacity when a full column is appended to.
    pub growth_factor: f64,
}

impl ColumnConfig {
    /// Default number of rows reserved up front.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

    /// Default geometric growth factor.
    pub const DEFAULT_GROWTH_FACTOR: f64 = 1.5;

    /// Override the initial capacity.
    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Override the growth factor.
    #[must_use]
    pub fn with_growth_factor(mut self, factor: f64) -> Self {
        self.growth_factor = factor;
        self
    }

    /// Capacity that follows `current` once a column is full.
    ///
    /// Rounds up, and always grows by at least one row so factors `<= 1.0`
    /// (or NaN) cannot stall an append.
    #[must_use]
    pub fn next_capacity(&self, current: usize) -> usize {
        let grown = (current as f64 * self.growth_factor).ceil();
        if grown.is_finite() && grown > current as f64 {
            (grown as usize).max(current + 1)
        } else {
            current + 1
        }
    }
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }
}

/// A dense, growable column of `T` values.
///
/// `len() <= capacity()` always holds. When an append finds the column full,
/// the capacity is raised to [`ColumnConfig::next_capacity`] and the existing
/// values are moved into the new buffer.
pub struct ComponentList<T> {
    items: Vec<T>,
    /// Logical capacity tracked by the growth policy. The backing `Vec` is
    /// always reserved to at least this many elements.
    capacity: usize,
    config: ColumnConfig,
}

impl<T> ComponentList<T> {
    /// Create an empty column sized by `config`.
    #[must_use]
    pub fn new(config: ColumnConfig) -> Self {
        Self {
            items: Vec::with_capacity(config.initial_capacity),
            capacity: config.initial_capacity,
            config,
        }
    }

    /// Number of rows stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the column stores no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of rows the column can hold before it has to grow.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Size in bytes of one element.
    #[must_use]
    pub fn element_size(&self) -> usize {
        std::mem::size_of::<T>()
    }

    fn reserve_row(&mut self) {
        if self.items.len() < self.capacity {
            return;
        }
        let next = self.config.next_capacity(self.capacity);
        self.items.reserve_exact(next - self.items.len());
        self.capacity = next;
    }

    /// Append `value` as a new last row and return its index.
    pub fn push(&mut self, value: T) -> usize {
        self.reserve_row();
        self.items.push(value);
        self.items.len() - 1
    }

    /// Remove `row`, shifting every later row down by one.
    ///
    /// Returns the removed value, or `None` if `row` is out of range.
    pub fn remove(&mut self, row: usize) -> Option<T> {
        if row >= self.items.len() {
            return None;
        }
        Some(self.items.remove(row))
    }

    /// Remove and return the last row.
    pub fn pop_last(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Borrow the value at `row`.
    #[must_use]
    pub fn get(&self, row: usize) -> Option<&T> {
        self.items.get(row)
    }

    /// Mutably borrow the value at `row`.
    #[must_use]
    pub fn get_mut(&mut self, row: usize) -> Option<&mut T> {
        self.items.get_mut(row)
    }

    /// Overwrite the value at `row`, returning the previous one.
    ///
    /// Returns `None` (and drops `value`) if `row` is out of range.
    pub fn set(&mut self, row: usize, value: T) -> Option<T> {
        let slot = self.items.get_mut(row)?;
        Some(std::mem::replace(slot, value))
    }

    /// All rows, in row order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// All rows, mutably, in row order.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }
}

impl<T: Default> ComponentList<T> {
    /// Append a default-initialised row and return its index.
    pub fn append(&mut self) -> usize {
        self.push(T::default())
    }
}

impl<T> fmt::Debug for ComponentList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentList")
            .field("type", &std::any::type_name::<T>())
            .field("len", &self.items.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

/// Object-safe view of a [`ComponentList`] whose element type is erased.
///
/// This is the capability set an archetype needs to keep its columns in
/// lockstep without knowing their types.
pub trait ErasedColumn: fmt::Debug {
    /// Number of rows stored.
    fn len(&self) -> usize;

    /// Returns `true` if the column stores no rows.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of rows the column can hold before it has to grow.
    fn capacity(&self) -> usize;

    /// Size in bytes of one element.
    fn element_size(&self) -> usize;

    /// Name of the stored component type.
    fn type_name(&self) -> &'static str;

    /// Append a default-initialised row and return its index.
    fn append_default(&mut self) -> usize;

    /// Remove `row`, shifting later rows down. Returns `false` if out of range.
    fn remove(&mut self, row: usize) -> bool;

    /// Drop the last row. Returns `false` if the column was empty.
    fn pop_last(&mut self) -> bool;

    /// Borrow the value at `row` as [`Any`].
    fn get_any(&self, row: usize) -> Option<&dyn Any>;

    /// Mutably borrow the value at `row` as [`Any`].
    fn get_any_mut(&mut self, row: usize) -> Option<&mut dyn Any>;

    /// Downcasting hook back to the concrete `ComponentList<T>`.
    fn as_any(&self) -> &dyn Any;

    /// Mutable downcasting hook back to the concrete `ComponentList<T>`.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Component> ErasedColumn for ComponentList<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn element_size(&self) -> usize {
        std::mem::size_of::<T>()
    }

    fn type_name(&self) -> &'static str {
        T::type_name()
    }

    fn append_default(&mut self) -> usize {
        self.append()
    }

    fn remove(&mut self, row: usize) -> bool {
        ComponentList::remove(self, row).is_some()
    }

    fn pop_last(&mut self) -> bool {
        ComponentList::pop_last(self).is_some()
    }

    fn get_any(&self, row: usize) -> Option<&dyn Any> {
        self.items.get(row).map(|value| value as &dyn Any)
    }

    fn get_any_mut(&mut self, row: usize) -> Option<&mut dyn Any> {
        self.items.get_mut(row).map(|value| value as &mut dyn Any)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
