//! World-level error types.

use engine_component::{ArchetypeHandle, ComponentHandle, EntityHandle};

/// Errors that can occur while registering, creating, or accessing data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EcsError {
    /// The schema (components and custom archetypes) is frozen once any
    /// entity exists.
    #[error("cannot change the schema after {entities} entities were created")]
    SchemaFrozen {
        /// Number of entities created so far.
        entities: usize,
    },

    /// A component handle that was never registered.
    #[error("{0} is not registered")]
    UnknownComponent(ComponentHandle),

    /// An entity handle that was never created.
    #[error("{0} does not exist")]
    UnknownEntity(EntityHandle),

    /// An entity handle that was created and then removed.
    #[error("{0} has been removed")]
    EntityRemoved(EntityHandle),

    /// A component was accessed as a Rust type other than the registered one.
    #[error("{component} is registered as `{registered}`, not `{requested}`")]
    ComponentTypeMismatch {
        /// The component accessed.
        component: ComponentHandle,
        /// Name of the registered type.
        registered: &'static str,
        /// Name of the requested type.
        requested: &'static str,
    },

    /// The entity's archetype does not store the component.
    #[error("{entity} has no {component}")]
    MissingComponent {
        /// The entity accessed.
        entity: EntityHandle,
        /// The component requested.
        component: ComponentHandle,
    },

    /// A custom archetype reported a signature that is not sorted and
    /// deduplicated.
    #[error("archetype signature {0:?} is not sorted and deduplicated")]
    UnsortedSignature(Vec<ComponentHandle>),

    /// A custom archetype was registered for a signature that already has an
    /// archetype.
    #[error("an archetype for signature {0:?} already exists")]
    SignatureTaken(Vec<ComponentHandle>),

    /// A custom archetype does not report the handle it was built with.
    #[error("custom archetype reports {reported}, expected {expected}")]
    HandleMismatch {
        /// The handle passed to the archetype's factory.
        expected: ArchetypeHandle,
        /// The handle the archetype reports.
        reported: ArchetypeHandle,
    },

    /// The archetype refused to remove the row an entity's record points at.
    #[error("{entity} has no row {row} in its archetype")]
    StaleRecord {
        /// The entity being removed.
        entity: EntityHandle,
        /// The row its record points at.
        row: usize,
    },

    /// Systems must run at least once every `rate` ticks.
    #[error("system `{0}` has a rate of zero ticks")]
    ZeroRate(String),
}
