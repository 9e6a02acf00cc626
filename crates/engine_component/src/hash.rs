//! Content addressing of component signatures.
//!
//! A [`ComponentHash`] is the SHA-256 digest of a canonical signature: the
//! component handles sorted ascending with duplicates removed, each encoded as
//! a little-endian `u32`. The same set of components therefore always hashes
//! to the same value, whatever order the caller listed them in.
//!
//! Distinct signatures that collide are treated as the same archetype; the
//! digest width makes this an accepted risk rather than a handled case.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::component::ComponentHandle;

/// Sort and deduplicate `handles` into a canonical signature.
#[must_use]
pub fn canonical_signature(handles: &[ComponentHandle]) -> Vec<ComponentHandle> {
    let mut signature = handles.to_vec();
    signature.sort_unstable();
    signature.dedup();
    signature
}

/// 256-bit digest of a canonical component signature.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentHash(pub [u8; 32]);

impl ComponentHash {
    /// Hash an arbitrary list of handles, canonicalising it first.
    #[must_use]
    pub fn new(handles: &[ComponentHandle]) -> Self {
        Self::from_sorted(&canonical_signature(handles))
    }

    /// Hash a list that is already sorted and free of duplicates.
    ///
    /// Passing an unsorted list produces a hash that no other ordering of the
    /// same components will match.
    #[must_use]
    pub fn from_sorted(signature: &[ComponentHandle]) -> Self {
        let mut hasher = Sha256::new();
        for handle in signature {
            hasher.update(handle.0.to_le_bytes());
        }
        Self(hasher.finalize().into())
    }

    /// The raw digest bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for ComponentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentHash({self})")
    }
}

impl fmt::Display for ComponentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short form: first four digest bytes.
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
