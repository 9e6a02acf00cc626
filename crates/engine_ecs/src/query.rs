//! Queries over the world's archetypes.
//!
//! Both query kinds are read-only and produce entity handles:
//!
//! - [`ArchetypeQuery`] matches one exact signature through the archetype
//!   directory.
//! - [`ComponentQuery`] matches every archetype containing all of a list of
//!   components, using the component index.
//!
//! Results are concatenated archetype by archetype, in archetype handle order
//! and then row order. That order is an artefact of storage; it changes as
//! entities are removed and must not be relied upon.

use std::fmt;

use engine_component::{
    ArchetypeHandle, ComponentHandle, ComponentHash, EntityHandle, canonical_signature,
};

use crate::world::World;

/// Something that selects entities from a [`World`].
pub trait Query: fmt::Debug {
    /// Evaluate against the current state of `world`.
    fn apply(&self, world: &World) -> Vec<EntityHandle>;
}

/// Matches the entities of the single archetype with an exact signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypeQuery {
    hash: ComponentHash,
}

impl ArchetypeQuery {
    /// Build a query for the set of `components`, in any order.
    #[must_use]
    pub fn new(components: &[ComponentHandle]) -> Self {
        Self {
            hash: ComponentHash::new(components),
        }
    }

    /// Build a query from a precomputed signature hash.
    #[must_use]
    pub fn from_hash(hash: ComponentHash) -> Self {
        Self { hash }
    }

    /// The signature hash looked up in the directory.
    #[must_use]
    pub fn hash(&self) -> ComponentHash {
        self.hash
    }
}

impl Query for ArchetypeQuery {
    /// A signature with no archetype yet matches nothing.
    fn apply(&self, world: &World) -> Vec<EntityHandle> {
        world
            .directory()
            .get(&self.hash)
            .and_then(|handle| world.archetype(handle))
            .map(|archetype| archetype.entities().to_vec())
            .unwrap_or_default()
    }
}

/// Matches every entity whose archetype contains all of the listed
/// components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentQuery {
    /// Sorted, deduplicated.
    components: Vec<ComponentHandle>,
}

impl ComponentQuery {
    /// Build a query requiring every one of `components`.
    #[must_use]
    pub fn new(components: &[ComponentHandle]) -> Self {
        Self {
            components: canonical_signature(components),
        }
    }

    /// The required components.
    #[must_use]
    pub fn components(&self) -> &[ComponentHandle] {
        &self.components
    }

    /// Archetypes containing all required components, in handle order.
    ///
    /// Walks the smallest index set and checks each candidate against the
    /// others. An empty requirement list or an unregistered component matches
    /// nothing.
    #[must_use]
    pub fn matching_archetypes(&self, world: &World) -> Vec<ArchetypeHandle> {
        let index = world.component_index();
        let Some(&smallest) = self
            .components
            .iter()
            .min_by_key(|&&component| index.cardinality(component))
        else {
            return Vec::new();
        };
        let Some(candidates) = index.archetypes_with(smallest) else {
            return Vec::new();
        };

        candidates
            .iter()
            .copied()
            .filter(|&archetype| {
                self.components
                    .iter()
                    .all(|&component| component == smallest || index.contains(component, archetype))
            })
            .collect()
    }
}

impl Query for ComponentQuery {
    fn apply(&self, world: &World) -> Vec<EntityHandle> {
        let mut entities = Vec::new();
        for handle in self.matching_archetypes(world) {
            if let Some(archetype) = world.archetype(handle) {
                entities.extend_from_slice(archetype.entities());
            }
        }
        entities
    }
}

#[cfg(test)]
mod tests {
    use engine_component::Component;

    use super::*;

    #[derive(Debug, Default)]
    struct A;
    impl Component for A {}

    #[derive(Debug, Default)]
    struct B;
    impl Component for B {}

    #[derive(Debug, Default)]
    struct C;
    impl Component for C {}

    fn world() -> (World, ComponentHandle, ComponentHandle, ComponentHandle) {
        let mut world = World::new();
        let a = world.register_component::<A>();
        let b = world.register_component::<B>();
        let c = world.register_component::<C>();
        (world, a, b, c)
    }

    #[test]
    fn test_archetype_query_exact_signature() {
        let (mut world, a, b, _) = world();
        let ab = world.create_entity(&[a, b]).unwrap();
        let _a_only = world.create_entity(&[a]).unwrap();
        let ba = world.create_entity(&[b, a]).unwrap();

        let result = ArchetypeQuery::new(&[b, a]).apply(&world);
        assert_eq!(result, vec![ab, ba]);
    }

    #[test]
    fn test_archetype_query_unknown_signature_is_empty() {
        let (mut world, a, _, c) = world();
        world.create_entity(&[a]).unwrap();
        assert!(ArchetypeQuery::new(&[a, c]).apply(&world).is_empty());
    }

    #[test]
    fn test_component_query_matches_supersets() {
        let (mut world, a, b, c) = world();
        let e_ab = world.create_entity(&[a, b]).unwrap();
        let e_a = world.create_entity(&[a]).unwrap();
        let e_abc = world.create_entity(&[a, b, c]).unwrap();
        let e_bc = world.create_entity(&[b, c]).unwrap();

        assert_eq!(ComponentQuery::new(&[a, b]).apply(&world), vec![e_ab, e_abc]);
        assert_eq!(ComponentQuery::new(&[c]).apply(&world), vec![e_abc, e_bc]);
        assert_eq!(
            ComponentQuery::new(&[a]).apply(&world),
            vec![e_ab, e_a, e_abc]
        );
    }

    #[test]
    fn test_component_query_empty_list_is_empty() {
        let (mut world, a, _, _) = world();
        world.create_entity(&[a]).unwrap();
        assert!(ComponentQuery::new(&[]).apply(&world).is_empty());
    }

    #[test]
    fn test_component_query_unregistered_component_is_empty() {
        let (mut world, a, _, _) = world();
        world.create_entity(&[a]).unwrap();
        assert!(ComponentQuery::new(&[a, ComponentHandle(42)]).apply(&world).is_empty());
    }

    #[test]
    fn test_matching_archetypes_in_handle_order() {
        let (mut world, a, b, c) = world();
        world.create_entity(&[a, c]).unwrap();
        world.create_entity(&[b]).unwrap();
        world.create_entity(&[c]).unwrap();
        assert_eq!(
            ComponentQuery::new(&[c]).matching_archetypes(&world),
            vec![ArchetypeHandle(0), ArchetypeHandle(2)]
        );
    }
}
