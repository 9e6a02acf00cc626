//! The ECS world: component registry, archetype storage, and entity table.
//!
//! The [`World`] owns every structure of the engine. Nothing is shared between
//! two worlds and there is no internal locking; a world is driven from one
//! thread at a time.
//!
//! ## Lifecycle
//!
//! 1. Register components (and optionally custom archetypes).
//! 2. Create entities. From the first entity on, the schema is frozen.
//! 3. Register systems and call [`World::step`] once per tick.
//!
//! ## Views
//!
//! Component references borrow the world. Creating or removing entities
//! needs `&mut World`, which ends every outstanding borrow, so a reference
//! can never observe a column that has since grown or shifted.

use std::any::type_name;

use engine_component::{
    Archetype, ArchetypeHandle, ColumnConfig, Component, ComponentHandle, ComponentHash,
    ComponentRegistry, ComponentType, EntityHandle, EntityTable, GenericArchetype, Record,
    canonical_signature,
};
use tracing::{debug, trace};

use crate::config::EcsConfig;
use crate::directory::ArchetypeDirectory;
use crate::error::EcsError;
use crate::index::ComponentIndex;
use crate::query::Query;
use crate::system::System;

/// The canonical world state.
#[derive(Debug, Default)]
pub struct World {
    pub(crate) config: EcsConfig,
    pub(crate) registry: ComponentRegistry,
    pub(crate) index: ComponentIndex,
    pub(crate) directory: ArchetypeDirectory,
    /// Indexed by `ArchetypeHandle::index()`.
    pub(crate) archetypes: Vec<Box<dyn Archetype>>,
    pub(crate) entities: EntityTable,
    /// Registration order.
    pub(crate) systems: Vec<System>,
    pub(crate) next_system: u32,
    pub(crate) tick: u64,
}

impl World {
    /// Create an empty world with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty world with `config`.
    #[must_use]
    pub fn with_config(config: EcsConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The configuration this world was created with.
    #[must_use]
    pub fn config(&self) -> &EcsConfig {
        &self.config
    }

    // -- Schema --

    fn ensure_schema_open(&self) -> Result<(), EcsError> {
        if self.entities.is_empty() {
            Ok(())
        } else {
            Err(EcsError::SchemaFrozen {
                entities: self.entities.len(),
            })
        }
    }

    /// Register `T` as a component.
    ///
    /// Registering a type twice returns the handle it already has.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::SchemaFrozen`] once any entity has been created.
    pub fn try_register_component<T: Component>(&mut self) -> Result<ComponentHandle, EcsError> {
        self.ensure_schema_open()?;
        let known = self.registry.len();
        let handle = self.registry.register::<T>();
        if self.registry.len() > known {
            self.index.add_component();
        }
        Ok(handle)
    }

    /// Register `T` as a component.
    ///
    /// # Panics
    ///
    /// Panics once any entity has been created: the schema must be complete
    /// before the world is populated.
    pub fn register_component<T: Component>(&mut self) -> ComponentHandle {
        match self.try_register_component::<T>() {
            Ok(handle) => handle,
            Err(err) => panic!("{err}"),
        }
    }

    /// The handle `T` was registered under.
    #[must_use]
    pub fn component_handle<T: Component>(&self) -> Option<ComponentHandle> {
        self.registry.handle_of::<T>()
    }

    /// The descriptor registered under `component`.
    #[must_use]
    pub fn component_type(&self, component: ComponentHandle) -> Option<&ComponentType> {
        self.registry.get(component)
    }

    /// Number of registered components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.registry.len()
    }

    /// Register a hand-written archetype.
    ///
    /// `factory` receives the handle the archetype will be stored under, the
    /// component registry, and the column policy. The archetype's signature
    /// decides which entities it stores: every later
    /// [`create_entity`](World::create_entity) with that component set lands
    /// in it.
    ///
    /// # Errors
    ///
    /// - [`EcsError::SchemaFrozen`] once any entity has been created.
    /// - [`EcsError::HandleMismatch`] if the archetype reports a handle other
    ///   than the one it was given.
    /// - [`EcsError::UnsortedSignature`] if the signature is not sorted and
    ///   deduplicated.
    /// - [`EcsError::UnknownComponent`] if it names an unregistered component.
    /// - [`EcsError::SignatureTaken`] if the signature already has an
    ///   archetype.
    pub fn try_register_custom_archetype<A, F>(
        &mut self,
        factory: F,
    ) -> Result<ArchetypeHandle, EcsError>
    where
        A: Archetype + 'static,
        F: FnOnce(ArchetypeHandle, &ComponentRegistry, ColumnConfig) -> A,
    {
        self.ensure_schema_open()?;
        let handle = ArchetypeHandle(self.archetypes.len() as u32);
        let archetype = factory(handle, &self.registry, self.config.columns);
        if archetype.handle() != handle {
            return Err(EcsError::HandleMismatch {
                expected: handle,
                reported: archetype.handle(),
            });
        }

        let signature = archetype.signature().to_vec();
        if canonical_signature(&signature) != signature {
            return Err(EcsError::UnsortedSignature(signature));
        }
        self.validate_components(&signature)?;
        let hash = ComponentHash::from_sorted(&signature);
        if self.directory.contains(&hash) {
            return Err(EcsError::SignatureTaken(signature));
        }

        self.insert_archetype(hash, &signature, Box::new(archetype));
        Ok(handle)
    }

    /// Register a hand-written archetype.
    ///
    /// # Panics
    ///
    /// Panics on any error of
    /// [`try_register_custom_archetype`](World::try_register_custom_archetype).
    pub fn register_custom_archetype<A, F>(&mut self, factory: F) -> ArchetypeHandle
    where
        A: Archetype + 'static,
        F: FnOnce(ArchetypeHandle, &ComponentRegistry, ColumnConfig) -> A,
    {
        match self.try_register_custom_archetype(factory) {
            Ok(handle) => handle,
            Err(err) => panic!("{err}"),
        }
    }

    fn validate_components(&self, components: &[ComponentHandle]) -> Result<(), EcsError> {
        match components.iter().find(|&&c| !self.registry.contains(c)) {
            Some(&unknown) => Err(EcsError::UnknownComponent(unknown)),
            None => Ok(()),
        }
    }

    fn insert_archetype(
        &mut self,
        hash: ComponentHash,
        signature: &[ComponentHandle],
        archetype: Box<dyn Archetype>,
    ) {
        let handle = ArchetypeHandle(self.archetypes.len() as u32);
        for &component in signature {
            self.index.insert(component, handle);
        }
        self.directory.insert(hash, handle);
        self.archetypes.push(archetype);
        debug!(%handle, %hash, ?signature, "created archetype");
    }

    // -- Archetypes --

    /// The archetype storing exactly `components`, created on first use.
    ///
    /// The list may be in any order and may repeat handles; the same set
    /// always resolves to the same archetype.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::UnknownComponent`] if a handle is not registered.
    pub fn resolve_archetype(
        &mut self,
        components: &[ComponentHandle],
    ) -> Result<ArchetypeHandle, EcsError> {
        let signature = canonical_signature(components);
        self.validate_components(&signature)?;
        let hash = ComponentHash::from_sorted(&signature);
        if let Some(handle) = self.directory.get(&hash) {
            return Ok(handle);
        }

        let handle = ArchetypeHandle(self.archetypes.len() as u32);
        let types: Vec<&ComponentType> = signature
            .iter()
            .filter_map(|&component| self.registry.get(component))
            .collect();
        let archetype = GenericArchetype::new(handle, &types, self.config.columns);
        self.insert_archetype(hash, &signature, Box::new(archetype));
        Ok(handle)
    }

    /// The archetype stored under `handle`.
    #[must_use]
    pub fn archetype(&self, handle: ArchetypeHandle) -> Option<&dyn Archetype> {
        self.archetypes.get(handle.index()).map(|archetype| &**archetype)
    }

    /// The archetype under `handle`, if it is a [`GenericArchetype`].
    #[must_use]
    pub fn generic_archetype(&self, handle: ArchetypeHandle) -> Option<&GenericArchetype> {
        self.archetype(handle)?.as_any().downcast_ref()
    }

    /// All values of `component` in the generic archetype `archetype`, in
    /// row order.
    #[must_use]
    pub fn column<T: Component>(
        &self,
        archetype: ArchetypeHandle,
        component: ComponentHandle,
    ) -> Option<&[T]> {
        self.generic_archetype(archetype)?.column::<T>(component)
    }

    /// Mutable view over a whole column of the generic archetype `archetype`.
    ///
    /// Only values can change through the slice; rows are added and removed
    /// through [`create_entity`](World::create_entity) and
    /// [`remove_entity`](World::remove_entity) alone.
    #[must_use]
    pub fn column_mut<T: Component>(
        &mut self,
        archetype: ArchetypeHandle,
        component: ComponentHandle,
    ) -> Option<&mut [T]> {
        self.archetypes
            .get_mut(archetype.index())?
            .as_any_mut()
            .downcast_mut::<GenericArchetype>()?
            .column_mut::<T>(component)
    }

    /// All archetypes, in handle order.
    pub fn archetypes(&self) -> impl Iterator<Item = &dyn Archetype> {
        self.archetypes.iter().map(|archetype| &**archetype)
    }

    /// Number of archetypes.
    #[must_use]
    pub fn archetype_count(&self) -> usize {
        self.archetypes.len()
    }

    /// Signature hash to archetype lookup.
    #[must_use]
    pub fn directory(&self) -> &ArchetypeDirectory {
        &self.directory
    }

    /// Component to archetype inverted index.
    #[must_use]
    pub fn component_index(&self) -> &ComponentIndex {
        &self.index
    }

    // -- Entity lifecycle --

    /// Create an entity storing exactly `components`, each default-initialised.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::UnknownComponent`] if a handle is not registered.
    pub fn create_entity(
        &mut self,
        components: &[ComponentHandle],
    ) -> Result<EntityHandle, EcsError> {
        let archetype = self.resolve_archetype(components)?;
        let entity = self.entities.next_handle();
        let row = self.archetypes[archetype.index()].create_entity_row(entity);
        self.entities.insert(archetype, row);
        trace!(%entity, %archetype, row, "created entity");
        Ok(entity)
    }

    /// Remove an entity and its component data.
    ///
    /// Entities stored after it in the same archetype move down one row. The
    /// handle is retired, not reused.
    ///
    /// # Errors
    ///
    /// - [`EcsError::UnknownEntity`] if the handle was never created.
    /// - [`EcsError::EntityRemoved`] if it was already removed.
    /// - [`EcsError::StaleRecord`] if the archetype has no row where the
    ///   entity's record points. The record is left as it was.
    pub fn remove_entity(&mut self, entity: EntityHandle) -> Result<(), EcsError> {
        let record = self.live_record(entity)?;
        let archetype = &mut self.archetypes[record.archetype.index()];
        if !archetype.remove_entity_row(record.row, &mut self.entities) {
            return Err(EcsError::StaleRecord {
                entity,
                row: record.row,
            });
        }
        self.entities.invalidate(entity);
        trace!(%entity, archetype = %record.archetype, row = record.row, "removed entity");
        Ok(())
    }

    fn live_record(&self, entity: EntityHandle) -> Result<Record, EcsError> {
        match self.entities.get(entity) {
            Some(record) if record.is_live() => Ok(*record),
            Some(_) => Err(EcsError::EntityRemoved(entity)),
            None => Err(EcsError::UnknownEntity(entity)),
        }
    }

    /// Where `entity` is stored, live or removed.
    #[must_use]
    pub fn record(&self, entity: EntityHandle) -> Option<&Record> {
        self.entities.get(entity)
    }

    /// The archetype of a live entity.
    #[must_use]
    pub fn archetype_of(&self, entity: EntityHandle) -> Option<ArchetypeHandle> {
        self.entities.live(entity).map(|record| record.archetype)
    }

    /// Returns `true` if `entity` exists and has not been removed.
    #[must_use]
    pub fn contains(&self, entity: EntityHandle) -> bool {
        self.entities.is_live(entity)
    }

    /// Number of live entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.live_count()
    }

    /// Handles of removed entities, in removal order.
    #[must_use]
    pub fn removed_entities(&self) -> &[EntityHandle] {
        self.entities.removed()
    }

    /// The entity table.
    #[must_use]
    pub fn entity_table(&self) -> &EntityTable {
        &self.entities
    }

    // -- Component access --

    /// Returns `true` if the live `entity` stores `component`.
    #[must_use]
    pub fn has_component(&self, entity: EntityHandle, component: ComponentHandle) -> bool {
        self.entities
            .live(entity)
            .is_some_and(|record| self.index.contains(component, record.archetype))
    }

    /// Borrow `entity`'s `component` as `T`.
    ///
    /// Absent if the entity is not live, does not store the component, or the
    /// component is not a `T`.
    #[must_use]
    pub fn get_component<T: Component>(
        &self,
        entity: EntityHandle,
        component: ComponentHandle,
    ) -> Option<&T> {
        let record = self.entities.live(entity)?;
        if !self.index.contains(component, record.archetype) {
            return None;
        }
        self.archetypes[record.archetype.index()]
            .component(record.row, component)?
            .downcast_ref()
    }

    /// Mutably borrow `entity`'s `component` as `T`.
    #[must_use]
    pub fn get_component_mut<T: Component>(
        &mut self,
        entity: EntityHandle,
        component: ComponentHandle,
    ) -> Option<&mut T> {
        let record = *self.entities.live(entity)?;
        if !self.index.contains(component, record.archetype) {
            return None;
        }
        self.archetypes[record.archetype.index()]
            .component_mut(record.row, component)?
            .downcast_mut()
    }

    /// Borrow `entity`'s `component` without consulting the component index.
    ///
    /// # Panics
    ///
    /// Panics if the entity is removed or unknown, or does not store
    /// `component` as a `T`.
    #[must_use]
    pub fn get_component_unchecked<T: Component>(
        &self,
        entity: EntityHandle,
        component: ComponentHandle,
    ) -> &T {
        let value = self.entities.get(entity).and_then(|record| {
            self.archetypes
                .get(record.archetype.index())?
                .component(record.row, component)?
                .downcast_ref()
        });
        match value {
            Some(value) => value,
            None => panic!("{entity} has no {component} of type `{}`", type_name::<T>()),
        }
    }

    /// Mutably borrow `entity`'s `component` without consulting the component
    /// index.
    ///
    /// # Panics
    ///
    /// Same conditions as [`get_component_unchecked`](World::get_component_unchecked).
    #[must_use]
    pub fn get_component_unchecked_mut<T: Component>(
        &mut self,
        entity: EntityHandle,
        component: ComponentHandle,
    ) -> &mut T {
        let value = match self.entities.get(entity).copied() {
            Some(record) => self
                .archetypes
                .get_mut(record.archetype.index())
                .and_then(|archetype| archetype.component_mut(record.row, component))
                .and_then(|value| value.downcast_mut::<T>()),
            None => None,
        };
        match value {
            Some(value) => value,
            None => panic!("{entity} has no {component} of type `{}`", type_name::<T>()),
        }
    }

    /// Overwrite `entity`'s `component` with `value`.
    ///
    /// # Errors
    ///
    /// - [`EcsError::UnknownEntity`] / [`EcsError::EntityRemoved`] for a dead
    ///   handle.
    /// - [`EcsError::UnknownComponent`] for an unregistered component.
    /// - [`EcsError::ComponentTypeMismatch`] if `component` is not a `T`.
    /// - [`EcsError::MissingComponent`] if the entity does not store it.
    pub fn set_component<T: Component>(
        &mut self,
        entity: EntityHandle,
        component: ComponentHandle,
        value: T,
    ) -> Result<(), EcsError> {
        let record = self.live_record(entity)?;
        let ty = self
            .registry
            .get(component)
            .ok_or(EcsError::UnknownComponent(component))?;
        if !ty.is::<T>() {
            return Err(EcsError::ComponentTypeMismatch {
                component,
                registered: ty.name,
                requested: T::type_name(),
            });
        }
        let slot = self.archetypes[record.archetype.index()]
            .component_mut(record.row, component)
            .and_then(|slot| slot.downcast_mut::<T>())
            .ok_or(EcsError::MissingComponent { entity, component })?;
        *slot = value;
        Ok(())
    }

    // -- Queries --

    /// Evaluate `query` against the current state.
    #[must_use]
    pub fn run_query(&self, query: &dyn Query) -> Vec<EntityHandle> {
        query.apply(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, Copy, PartialEq)]
    struct Health {
        hp: u64,
    }

    impl Component for Health {}

    #[derive(Debug, Default, Clone, Copy, PartialEq)]
    struct Pos {
        x: u64,
        y: u64,
    }

    impl Component for Pos {}

    fn world() -> (World, ComponentHandle, ComponentHandle) {
        let mut world = World::new();
        let health = world.register_component::<Health>();
        let pos = world.register_component::<Pos>();
        (world, health, pos)
    }

    #[test]
    fn test_register_component_assigns_index_slot() {
        let (world, health, pos) = world();
        assert_eq!(health, ComponentHandle(0));
        assert_eq!(pos, ComponentHandle(1));
        assert_eq!(world.component_index().len(), 2);
        assert_eq!(world.component_handle::<Pos>(), Some(pos));
    }

    #[test]
    fn test_register_twice_does_not_duplicate_slot() {
        let (mut world, health, _) = world();
        assert_eq!(world.register_component::<Health>(), health);
        assert_eq!(world.component_index().len(), 2);
    }

    #[test]
    fn test_register_after_entity_is_rejected() {
        let (mut world, health, _) = world();
        world.create_entity(&[health]).unwrap();
        assert_eq!(
            world.try_register_component::<Tag>(),
            Err(EcsError::SchemaFrozen { entities: 1 })
        );
    }

    #[derive(Debug, Default)]
    struct Tag;

    impl Component for Tag {}

    #[test]
    #[should_panic(expected = "cannot change the schema")]
    fn test_register_after_entity_panics() {
        let (mut world, health, _) = world();
        world.create_entity(&[health]).unwrap();
        world.register_component::<Tag>();
    }

    #[test]
    fn test_create_entity_unknown_component() {
        let (mut world, health, _) = world();
        assert_eq!(
            world.create_entity(&[health, ComponentHandle(7)]),
            Err(EcsError::UnknownComponent(ComponentHandle(7)))
        );
        assert_eq!(world.entity_count(), 0);
        assert_eq!(world.archetype_count(), 0);
    }

    #[test]
    fn test_permuted_components_share_archetype() {
        let (mut world, health, pos) = world();
        let e1 = world.create_entity(&[health, pos]).unwrap();
        let e2 = world.create_entity(&[pos, health]).unwrap();
        assert_eq!(world.archetype_of(e1), world.archetype_of(e2));
        assert_eq!(world.archetype_count(), 1);
    }

    #[test]
    fn test_entity_without_components() {
        let (mut world, health, _) = world();
        let e = world.create_entity(&[]).unwrap();
        assert!(!world.has_component(e, health));
        assert_eq!(world.archetype(world.archetype_of(e).unwrap()).unwrap().len(), 1);
        world.remove_entity(e).unwrap();
    }

    #[test]
    fn test_set_and_get_component() {
        let (mut world, health, pos) = world();
        let e = world.create_entity(&[health, pos]).unwrap();
        assert_eq!(world.get_component::<Health>(e, health), Some(&Health { hp: 0 }));

        world.set_component(e, health, Health { hp: 10 }).unwrap();
        world.get_component_mut::<Pos>(e, pos).unwrap().x = 3;
        assert_eq!(world.get_component::<Health>(e, health), Some(&Health { hp: 10 }));
        assert_eq!(world.get_component_unchecked::<Pos>(e, pos), &Pos { x: 3, y: 0 });
    }

    #[test]
    fn test_get_component_absent() {
        let (mut world, health, pos) = world();
        let e = world.create_entity(&[health]).unwrap();
        assert!(world.get_component::<Pos>(e, pos).is_none());
        // Wrong Rust type for the handle.
        assert!(world.get_component::<Pos>(e, health).is_none());
        assert!(world.get_component::<Health>(EntityHandle(9), health).is_none());
    }

    #[test]
    fn test_set_component_errors() {
        let (mut world, health, pos) = world();
        let e = world.create_entity(&[health]).unwrap();
        assert_eq!(
            world.set_component(e, pos, Pos::default()),
            Err(EcsError::MissingComponent { entity: e, component: pos })
        );
        assert!(matches!(
            world.set_component(e, health, Pos::default()),
            Err(EcsError::ComponentTypeMismatch { .. })
        ));
        assert_eq!(
            world.set_component(e, ComponentHandle(5), Health::default()),
            Err(EcsError::UnknownComponent(ComponentHandle(5)))
        );
        world.remove_entity(e).unwrap();
        assert_eq!(
            world.set_component(e, health, Health::default()),
            Err(EcsError::EntityRemoved(e))
        );
    }

    #[test]
    #[should_panic(expected = "has no")]
    fn test_unchecked_access_to_missing_component_panics() {
        let (mut world, health, pos) = world();
        let e = world.create_entity(&[health]).unwrap();
        let _ = world.get_component_unchecked::<Pos>(e, pos);
    }

    #[test]
    fn test_remove_entity_errors() {
        let (mut world, health, _) = world();
        let e = world.create_entity(&[health]).unwrap();
        assert_eq!(
            world.remove_entity(EntityHandle(3)),
            Err(EcsError::UnknownEntity(EntityHandle(3)))
        );
        world.remove_entity(e).unwrap();
        assert_eq!(world.remove_entity(e), Err(EcsError::EntityRemoved(e)));
        assert_eq!(world.removed_entities(), &[e]);
        assert!(!world.contains(e));
        assert!(!world.has_component(e, health));
    }

    #[test]
    fn test_removed_handles_are_not_reused() {
        let (mut world, health, _) = world();
        let e0 = world.create_entity(&[health]).unwrap();
        world.remove_entity(e0).unwrap();
        let e1 = world.create_entity(&[health]).unwrap();
        assert_eq!(e1, EntityHandle(1));
        assert_eq!(world.entity_count(), 1);
        assert_eq!(world.record(e0).unwrap().row, Record::INVALID_ROW);
        assert_eq!(world.record(e1).unwrap().row, 0);
    }

    #[test]
    fn test_generic_archetype_columns() {
        let (mut world, health, _) = world();
        for hp in 1..=3 {
            let e = world.create_entity(&[health]).unwrap();
            world.set_component(e, health, Health { hp }).unwrap();
        }
        let handle = world.resolve_archetype(&[health]).unwrap();
        for value in world.column_mut::<Health>(handle, health).unwrap() {
            value.hp *= 2;
        }
        let hps: Vec<u64> = world
            .column::<Health>(handle, health)
            .unwrap()
            .iter()
            .map(|h| h.hp)
            .collect();
        assert_eq!(hps, vec![2, 4, 6]);
        assert!(world.column::<Pos>(handle, health).is_none());
    }

    #[test]
    fn test_column_writes_keep_records_consistent() {
        let (mut world, health, pos) = world();
        let entities: Vec<_> = (0..3)
            .map(|_| world.create_entity(&[health, pos]).unwrap())
            .collect();
        let handle = world.archetype_of(entities[0]).unwrap();

        let column = world.column_mut::<Health>(handle, health).unwrap();
        for (hp, value) in column.iter_mut().enumerate() {
            value.hp = hp as u64;
        }
        world.remove_entity(entities[0]).unwrap();

        assert_eq!(world.entity_count(), 2);
        assert_eq!(world.archetype(handle).unwrap().entities(), &entities[1..]);
        for (row, &entity) in entities[1..].iter().enumerate() {
            assert_eq!(world.record(entity).unwrap().row, row);
            assert_eq!(
                world.get_component::<Health>(entity, health),
                Some(&Health { hp: row as u64 + 1 })
            );
        }
        assert_eq!(world.column::<Pos>(handle, pos).unwrap().len(), 2);
    }

    #[test]
    fn test_columns_follow_config() {
        let config =
            EcsConfig::new().with_columns(ColumnConfig::default().with_initial_capacity(2));
        let mut world = World::with_config(config);
        let health = world.register_component::<Health>();
        for _ in 0..3 {
            world.create_entity(&[health]).unwrap();
        }
        let handle = world.resolve_archetype(&[health]).unwrap();
        let column = world.generic_archetype(handle).unwrap().erased_column(health).unwrap();
        assert_eq!(column.len(), 3);
        assert_eq!(column.capacity(), 3);
    }
}
