//! Core [`Component`] trait, handles, and the per-world registry.
//!
//! Every piece of data stored in the ECS must implement [`Component`]. A type
//! becomes usable once it has been registered with a [`ComponentRegistry`],
//! which hands out a dense [`ComponentHandle`] and remembers a
//! [`ComponentType`] descriptor used to build columns for it.
//!
//! ## Handle stability
//!
//! Handles are assigned sequentially from zero in registration order and never
//! change afterwards. The registry is owned by one world; there is no
//! process-wide counter, so two worlds may assign different handles to the same
//! Rust type.

use std::alloc::Layout;
use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::column::{ColumnConfig, ComponentList, ErasedColumn};

/// Dense identifier of a registered component type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentHandle(pub u32);

impl ComponentHandle {
    /// Sentinel that never names a registered component.
    pub const INVALID: ComponentHandle = ComponentHandle(u32::MAX);

    /// Create a handle from its raw index.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Position of this handle in dense per-component tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns `true` unless this is [`ComponentHandle::INVALID`].
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Display for ComponentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Component({})", self.0)
    }
}

/// The core component trait.
///
/// Components are plain data. `Default` provides the value of a freshly
/// created row, before the caller writes real data into it.
///
/// # Examples
///
/// ```rust
/// use engine_component::Component;
///
/// #[derive(Debug, Default)]
/// struct Health {
///     hp: u64,
/// }
///
/// impl Component for Health {
///     fn type_name() -> &'static str { "Health" }
/// }
/// ```
pub trait Component: Default + 'static {
    /// A human-readable name for this component type.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Descriptor of one registered component type.
///
/// Created once at registration and immutable afterwards. The type identity is
/// only used to rebuild typed views over columns and to build new columns; it
/// never changes how the storage behaves.
#[derive(Debug, Clone)]
pub struct ComponentType {
    /// The handle assigned at registration.
    pub handle: ComponentHandle,
    /// Human-readable name (see [`Component::type_name`]).
    pub name: &'static str,
    /// Size and alignment of one instance.
    pub layout: Layout,
    /// Rust type identity of the component.
    pub type_id: TypeId,
    new_column: fn(ColumnConfig) -> Box<dyn ErasedColumn>,
}

impl ComponentType {
    /// Build the descriptor for `T` under `handle`.
    #[must_use]
    pub fn of<T: Component>(handle: ComponentHandle) -> Self {
        Self {
            handle,
            name: T::type_name(),
            layout: Layout::new::<T>(),
            type_id: TypeId::of::<T>(),
            new_column: new_column_for::<T>,
        }
    }

    /// Size in bytes of one instance.
    #[must_use]
    pub fn size(&self) -> usize {
        self.layout.size()
    }

    /// Returns `true` if this descriptor was built for `T`.
    #[must_use]
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Create an empty column able to store this component.
    #[must_use]
    pub fn new_column(&self, config: ColumnConfig) -> Box<dyn ErasedColumn> {
        (self.new_column)(config)
    }
}

fn new_column_for<T: Component>(config: ColumnConfig) -> Box<dyn ErasedColumn> {
    Box::new(ComponentList::<T>::new(config))
}

/// Assigns [`ComponentHandle`]s and stores their [`ComponentType`]s.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    /// Indexed by `ComponentHandle::index()`.
    types: Vec<ComponentType>,
    by_type: HashMap<TypeId, ComponentHandle>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T`, returning its handle.
    ///
    /// Registering a type that is already known returns the existing handle.
    pub fn register<T: Component>(&mut self) -> ComponentHandle {
        if let Some(&handle) = self.by_type.get(&TypeId::of::<T>()) {
            return handle;
        }
        let handle = ComponentHandle(self.types.len() as u32);
        self.types.push(ComponentType::of::<T>(handle));
        self.by_type.insert(TypeId::of::<T>(), handle);
        tracing::debug!(%handle, name = T::type_name(), "registered component");
        handle
    }

    /// The handle of `T`, if registered.
    #[must_use]
    pub fn handle_of<T: 'static>(&self) -> Option<ComponentHandle> {
        self.by_type.get(&TypeId::of::<T>()).copied()
    }

    /// The descriptor registered under `handle`.
    #[must_use]
    pub fn get(&self, handle: ComponentHandle) -> Option<&ComponentType> {
        self.types.get(handle.index())
    }

    /// Returns `true` if `handle` names a registered component.
    #[must_use]
    pub fn contains(&self, handle: ComponentHandle) -> bool {
        handle.index() < self.types.len()
    }

    /// Number of registered components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// All descriptors in handle order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentType> {
        self.types.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Health {
        _hp: u64,
    }

    impl Component for Health {
        fn type_name() -> &'static str {
            "Health"
        }
    }

    #[derive(Debug, Default)]
    struct Pos {
        _x: u64,
        _y: u64,
    }

    impl Component for Pos {}

    #[test]
    fn test_handles_are_sequential() {
        let mut registry = ComponentRegistry::new();
        assert_eq!(registry.register::<Health>(), ComponentHandle(0));
        assert_eq!(registry.register::<Pos>(), ComponentHandle(1));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_register_twice_returns_same_handle() {
        let mut registry = ComponentRegistry::new();
        let first = registry.register::<Health>();
        let second = registry.register::<Health>();
        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_component_type_metadata() {
        let mut registry = ComponentRegistry::new();
        let pos = registry.register::<Pos>();
        let ty = registry.get(pos).unwrap();
        assert_eq!(ty.handle, pos);
        assert_eq!(ty.size(), std::mem::size_of::<Pos>());
        assert!(ty.is::<Pos>());
        assert!(!ty.is::<Health>());
        assert_eq!(registry.handle_of::<Pos>(), Some(pos));
        assert_eq!(registry.handle_of::<u8>(), None);
    }

    #[test]
    fn test_new_column_matches_type() {
        let mut registry = ComponentRegistry::new();
        let health = registry.register::<Health>();
        let column = registry.get(health).unwrap().new_column(ColumnConfig::default());
        assert_eq!(column.type_name(), "Health");
        assert!(column.as_any().is::<ComponentList<Health>>());
        assert!(column.is_empty());
    }

    #[test]
    fn test_invalid_handle() {
        assert!(!ComponentHandle::INVALID.is_valid());
        assert!(ComponentHandle(0).is_valid());
        let registry = ComponentRegistry::new();
        assert!(!registry.contains(ComponentHandle::INVALID));
    }
}
