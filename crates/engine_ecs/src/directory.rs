//! Archetype directory: component signature hash to archetype handle.

use std::collections::HashMap;

use engine_component::{ArchetypeHandle, ComponentHash};

/// Content-addressed lookup of archetypes.
///
/// Holds exactly one entry per archetype in the world.
#[derive(Debug, Default)]
pub struct ArchetypeDirectory {
    entries: HashMap<ComponentHash, ArchetypeHandle>,
}

impl ArchetypeDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The archetype whose signature hashes to `hash`.
    #[must_use]
    pub fn get(&self, hash: &ComponentHash) -> Option<ArchetypeHandle> {
        self.entries.get(hash).copied()
    }

    /// Returns `true` if a signature hashing to `hash` has an archetype.
    #[must_use]
    pub fn contains(&self, hash: &ComponentHash) -> bool {
        self.entries.contains_key(hash)
    }

    /// Map `hash` to `archetype`, returning any previous mapping.
    pub fn insert(
        &mut self,
        hash: ComponentHash,
        archetype: ArchetypeHandle,
    ) -> Option<ArchetypeHandle> {
        self.entries.insert(hash, archetype)
    }

    /// Number of archetypes known.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no archetype is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use engine_component::ComponentHandle;

    use super::*;

    #[test]
    fn test_lookup_is_order_independent() {
        let mut directory = ArchetypeDirectory::new();
        let ab = ComponentHash::new(&[ComponentHandle(0), ComponentHandle(1)]);
        let ba = ComponentHash::new(&[ComponentHandle(1), ComponentHandle(0)]);
        assert!(directory.insert(ab, ArchetypeHandle(0)).is_none());
        assert_eq!(directory.get(&ba), Some(ArchetypeHandle(0)));
        assert!(!directory.contains(&ComponentHash::new(&[ComponentHandle(0)])));
        assert_eq!(directory.len(), 1);
    }
}
