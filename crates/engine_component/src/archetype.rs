//! Archetype definitions and storage.
//!
//! An archetype is a unique combination of component types. Entities sharing
//! the same set of components are grouped into the same archetype, one row per
//! entity, so iteration over a component walks contiguous memory.
//!
//! [`Archetype`] is the storage contract the world talks to. Most entity kinds
//! use [`GenericArchetype`]; a hot entity kind with a fixed layout can supply a
//! hand-written implementation instead.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::column::{ColumnConfig, ComponentList, ErasedColumn};
use crate::component::{Component, ComponentHandle, ComponentType};
use crate::entity::{EntityHandle, EntityTable};

/// Dense identifier of an archetype, assigned in discovery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArchetypeHandle(pub u32);

impl ArchetypeHandle {
    /// Sentinel that never names an archetype.
    pub const INVALID: ArchetypeHandle = ArchetypeHandle(u32::MAX);

    /// Position of this handle in the world's archetype list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns `true` unless this is [`ArchetypeHandle::INVALID`].
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Display for ArchetypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Archetype({})", self.0)
    }
}

/// Storage for every entity with one exact component signature.
///
/// Rows are dense: row `i` belongs to `entities()[i]`, and every component of
/// the signature has exactly `len()` values.
pub trait Archetype: fmt::Debug {
    /// The handle the world assigned to this archetype.
    fn handle(&self) -> ArchetypeHandle;

    /// Component handles stored here, sorted ascending without duplicates.
    fn signature(&self) -> &[ComponentHandle];

    /// Borrow the value of `component` at `row`, if this archetype stores it.
    fn component(&self, row: usize, component: ComponentHandle) -> Option<&dyn Any>;

    /// Mutably borrow the value of `component` at `row`.
    fn component_mut(&mut self, row: usize, component: ComponentHandle) -> Option<&mut dyn Any>;

    /// Append a row for the global `entity` and return its local row.
    fn create_entity_row(&mut self, entity: EntityHandle) -> usize;

    /// Remove `row`, close the gap, and move the records of every later row
    /// down by one in `entities`.
    ///
    /// Returns `false` if `row` is out of range.
    fn remove_entity_row(&mut self, row: usize, entities: &mut EntityTable) -> bool;

    /// Global handles of the stored entities, in row order.
    fn entities(&self) -> &[EntityHandle];

    /// Number of stored entities.
    fn len(&self) -> usize {
        self.entities().len()
    }

    /// Returns `true` if no entity is stored.
    fn is_empty(&self) -> bool {
        self.entities().is_empty()
    }

    /// Returns `true` if `component` is part of the signature.
    fn has_component(&self, component: ComponentHandle) -> bool {
        self.signature().binary_search(&component).is_ok()
    }

    /// Downcasting hook for callers that know the concrete archetype type.
    fn as_any(&self) -> &dyn Any;

    /// Mutable downcasting hook.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Column-per-component archetype used for every signature without a custom
/// implementation.
#[derive(Debug)]
pub struct GenericArchetype {
    handle: ArchetypeHandle,
    /// Sorted component handles.
    signature: Vec<ComponentHandle>,
    /// Same order as `signature`.
    columns: Vec<Box<dyn ErasedColumn>>,
    /// Component handle to position in `columns`.
    column_map: HashMap<ComponentHandle, usize>,
    /// Row to global entity handle.
    entities: Vec<EntityHandle>,
}

impl GenericArchetype {
    /// Build an empty archetype with one column per component type.
    ///
    /// `types` may be in any order; columns follow the sorted signature.
    #[must_use]
    pub fn new(handle: ArchetypeHandle, types: &[&ComponentType], config: ColumnConfig) -> Self {
        let mut types = types.to_vec();
        types.sort_unstable_by_key(|ty| ty.handle);
        types.dedup_by_key(|ty| ty.handle);

        let signature: Vec<ComponentHandle> = types.iter().map(|ty| ty.handle).collect();
        let columns = types.iter().map(|ty| ty.new_column(config)).collect();
        let column_map = signature
            .iter()
            .enumerate()
            .map(|(position, &component)| (component, position))
            .collect();

        Self {
            handle,
            signature,
            columns,
            column_map,
            entities: Vec::with_capacity(1),
        }
    }

    /// Position of `component` among the columns.
    #[must_use]
    pub fn column_index(&self, component: ComponentHandle) -> Option<usize> {
        self.column_map.get(&component).copied()
    }

    /// The type-erased column of `component`.
    #[must_use]
    pub fn erased_column(&self, component: ComponentHandle) -> Option<&dyn ErasedColumn> {
        let index = self.column_index(component)?;
        Some(&*self.columns[index])
    }

    /// All values of `component`, in row order, if it is stored as `T`.
    #[must_use]
    pub fn column<T: Component>(&self, component: ComponentHandle) -> Option<&[T]> {
        let index = self.column_index(component)?;
        self.columns[index]
            .as_any()
            .downcast_ref::<ComponentList<T>>()
            .map(ComponentList::as_slice)
    }

    /// All values of `component`, mutably, if it is stored as `T`.
    #[must_use]
    pub fn column_mut<T: Component>(&mut self, component: ComponentHandle) -> Option<&mut [T]> {
        let index = self.column_index(component)?;
        self.columns[index]
            .as_any_mut()
            .downcast_mut::<ComponentList<T>>()
            .map(ComponentList::as_mut_slice)
    }
}

impl Archetype for GenericArchetype {
    fn handle(&self) -> ArchetypeHandle {
        self.handle
    }

    fn signature(&self) -> &[ComponentHandle] {
        &self.signature
    }

    fn component(&self, row: usize, component: ComponentHandle) -> Option<&dyn Any> {
        let index = self.column_index(component)?;
        self.columns[index].get_any(row)
    }

    fn component_mut(&mut self, row: usize, component: ComponentHandle) -> Option<&mut dyn Any> {
        let index = self.column_index(component)?;
        self.columns[index].get_any_mut(row)
    }

    fn create_entity_row(&mut self, entity: EntityHandle) -> usize {
        let row = self.entities.len();
        self.entities.push(entity);
        for column in &mut self.columns {
            column.append_default();
        }
        row
    }

    fn remove_entity_row(&mut self, row: usize, entities: &mut EntityTable) -> bool {
        if row >= self.entities.len() {
            return false;
        }
        for column in &mut self.columns {
            column.remove(row);
        }
        self.entities.remove(row);
        for &moved in &self.entities[row..] {
            entities.shift_row_down(moved);
        }
        true
    }

    fn entities(&self) -> &[EntityHandle] {
        &self.entities
    }

    fn has_component(&self, component: ComponentHandle) -> bool {
        self.column_map.contains_key(&component)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
