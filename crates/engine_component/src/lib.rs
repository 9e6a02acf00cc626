//! # engine_component
//!
//! The storage half of the ECS. Defines what a component is, how one column
//! of components is laid out, and how columns are grouped into archetypes.
//!
//! This crate provides:
//!
//! - [`Component`] trait: the contract all ECS data must satisfy.
//! - [`ComponentRegistry`]: dense [`ComponentHandle`] assignment per type.
//! - [`ComponentHash`]: content address of a sorted component signature.
//! - [`ComponentList`] / [`ErasedColumn`]: typed, growable column storage.
//! - [`Archetype`] / [`GenericArchetype`]: row storage grouped by signature.
//! - [`EntityTable`]: global entity handle to archetype row mapping.

pub mod archetype;
pub mod column;
pub mod component;
pub mod entity;
pub mod hash;

pub use archetype::{Archetype, ArchetypeHandle, GenericArchetype};
pub use column::{ColumnConfig, ComponentList, ErasedColumn};
pub use component::{Component, ComponentHandle, ComponentRegistry, ComponentType};
pub use entity::{EntityHandle, EntityTable, Record};
pub use hash::{ComponentHash, canonical_signature};
