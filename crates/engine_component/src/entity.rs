//! Entity handles and the entity table.
//!
//! An [`EntityHandle`] is a lightweight `u64` identifier with no inherent data.
//! The [`EntityTable`] maps each handle to a [`Record`]: the archetype that
//! stores the entity and the row it occupies there.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::archetype::ArchetypeHandle;

/// Global identity of an entity.
///
/// Handles are dense and assigned sequentially from zero. A removed entity
/// keeps its handle forever; handles are never recycled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityHandle(pub u64);

impl EntityHandle {
    /// Sentinel that never names an entity.
    pub const INVALID: EntityHandle = EntityHandle(u64::MAX);

    /// Create an entity handle from a raw `u64` identifier.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` identifier.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    /// Position of this handle in the entity table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns `true` unless this is [`EntityHandle::INVALID`].
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != u64::MAX
    }
}

impl fmt::Display for EntityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Where an entity's data lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The archetype that stores the entity.
    pub archetype: ArchetypeHandle,
    /// Row of the entity inside that archetype, or [`Record::INVALID_ROW`]
    /// once the entity has been removed.
    pub row: usize,
}

impl Record {
    /// Row sentinel of a removed entity.
    pub const INVALID_ROW: usize = usize::MAX;

    /// Returns `true` while the entity is stored in its archetype.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.row != Self::INVALID_ROW
    }
}

/// Maps every [`EntityHandle`] ever created to its [`Record`].
///
/// One record exists per handle, live or removed. Archetypes patch the rows of
/// their remaining entities through [`EntityTable::shift_row_down`] when a row
/// is removed from the middle of their storage.
#[derive(Debug, Default)]
pub struct EntityTable {
    /// Indexed by `EntityHandle::index()`.
    records: Vec<Record>,
    /// Handles removed so far, in removal order. Kept for bookkeeping only;
    /// they are not handed out again.
    removed: Vec<EntityHandle>,
}

impl EntityTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next handle for an entity stored at `row` of `archetype`.
    pub fn insert(&mut self, archetype: ArchetypeHandle, row: usize) -> EntityHandle {
        let entity = self.next_handle();
        self.records.push(Record { archetype, row });
        entity
    }

    /// The handle the next [`EntityTable::insert`] will return.
    #[must_use]
    pub fn next_handle(&self) -> EntityHandle {
        EntityHandle(self.records.len() as u64)
    }

    /// The record of `entity`, live or removed.
    #[must_use]
    pub fn get(&self, entity: EntityHandle) -> Option<&Record> {
        self.records.get(entity.index())
    }

    /// The record of `entity` if the entity is still stored somewhere.
    #[must_use]
    pub fn live(&self, entity: EntityHandle) -> Option<&Record> {
        self.get(entity).filter(|record| record.is_live())
    }

    /// Returns `true` if `entity` exists and has not been removed.
    #[must_use]
    pub fn is_live(&self, entity: EntityHandle) -> bool {
        self.live(entity).is_some()
    }

    /// Move `entity` to the previous row after a removal closed the gap before it.
    ///
    /// Returns `false` if `entity` is unknown, removed, or already at row 0.
    pub fn shift_row_down(&mut self, entity: EntityHandle) -> bool {
        match self.records.get_mut(entity.index()) {
            Some(record) if record.is_live() && record.row > 0 => {
                record.row -= 1;
                true
            }
            _ => false,
        }
    }

    /// Mark `entity` as removed and remember its handle.
    ///
    /// Returns `false` if `entity` is unknown or was already removed.
    pub fn invalidate(&mut self, entity: EntityHandle) -> bool {
        match self.records.get_mut(entity.index()) {
            Some(record) if record.is_live() => {
                record.row = Record::INVALID_ROW;
                self.removed.push(entity);
                true
            }
            _ => false,
        }
    }

    /// Handles removed so far, in removal order.
    #[must_use]
    pub fn removed(&self) -> &[EntityHandle] {
        &self.removed
    }

    /// Number of handles ever allocated.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no entity has ever been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of entities that have not been removed.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.records.len() - self.removed.len()
    }
}
