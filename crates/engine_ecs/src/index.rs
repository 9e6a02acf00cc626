//! Inverted index from component to the archetypes that store it.
//!
//! Sets are ordered by archetype handle, so walking one yields archetypes in
//! discovery order. Archetypes are never destroyed, so entries are only ever
//! added.

use std::collections::BTreeSet;

use engine_component::{ArchetypeHandle, ComponentHandle};

/// One archetype set per registered component.
#[derive(Debug, Default)]
pub struct ComponentIndex {
    /// Indexed by `ComponentHandle::index()`.
    sets: Vec<BTreeSet<ArchetypeHandle>>,
}

impl ComponentIndex {
    /// Create an index with no component slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty slot for the next registered component.
    pub fn add_component(&mut self) {
        self.sets.push(BTreeSet::new());
    }

    /// Record that `archetype` stores `component`.
    ///
    /// Returns `false` if the pair was already present or the component has
    /// no slot.
    pub fn insert(&mut self, component: ComponentHandle, archetype: ArchetypeHandle) -> bool {
        self.sets
            .get_mut(component.index())
            .is_some_and(|set| set.insert(archetype))
    }

    /// Returns `true` if `archetype` stores `component`.
    #[must_use]
    pub fn contains(&self, component: ComponentHandle, archetype: ArchetypeHandle) -> bool {
        self.sets
            .get(component.index())
            .is_some_and(|set| set.contains(&archetype))
    }

    /// Every archetype storing `component`, in handle order.
    #[must_use]
    pub fn archetypes_with(
        &self,
        component: ComponentHandle,
    ) -> Option<&BTreeSet<ArchetypeHandle>> {
        self.sets.get(component.index())
    }

    /// Number of archetypes storing `component` (zero if unknown).
    #[must_use]
    pub fn cardinality(&self, component: ComponentHandle) -> usize {
        self.sets.get(component.index()).map_or(0, BTreeSet::len)
    }

    /// Number of component slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns `true` if no component slot exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
