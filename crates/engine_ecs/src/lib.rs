//! # engine_ecs
//!
//! The world side of the archetype ECS. Builds on the storage types of
//! [`engine_component`] and adds:
//!
//! - [`World`]: owns the registry, archetypes, entity table and systems.
//! - [`ArchetypeDirectory`]: signature hash to archetype lookup.
//! - [`ComponentIndex`]: component to archetype inverted index.
//! - [`ArchetypeQuery`] / [`ComponentQuery`]: entity selection.
//! - [`System`]: rate-throttled callbacks run by [`World::step`].
//!
//! ```
//! use engine_ecs::{Component, ComponentQuery, World};
//!
//! #[derive(Debug, Default)]
//! struct Health {
//!     hp: u64,
//! }
//!
//! impl Component for Health {}
//!
//! let mut world = World::new();
//! let health = world.register_component::<Health>();
//! let entity = world.create_entity(&[health]).unwrap();
//! world.set_component(entity, health, Health { hp: 10 }).unwrap();
//!
//! assert_eq!(world.run_query(&ComponentQuery::new(&[health])), vec![entity]);
//! ```

pub mod config;
pub mod directory;
pub mod error;
pub mod index;
pub mod query;
pub mod system;
pub mod world;

pub use config::EcsConfig;
pub use directory::ArchetypeDirectory;
pub use error::EcsError;
pub use index::ComponentIndex;
pub use query::{ArchetypeQuery, ComponentQuery, Query};
pub use system::{System, SystemFn, SystemHandle};
pub use world::World;

pub use engine_component::{
    Archetype, ArchetypeHandle, ColumnConfig, Component, ComponentHandle, ComponentHash,
    ComponentList, ComponentRegistry, ComponentType, EntityHandle, EntityTable, ErasedColumn,
    GenericArchetype, Record,
};
