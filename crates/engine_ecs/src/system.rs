//! Rate-based systems driven by [`World::step`].
//!
//! A system pairs a query with a callback and a rate. Every step increments
//! the system's elapsed counter; once it reaches the rate, the counter resets,
//! the query is evaluated, and the callback receives the world together with
//! the matched entities. A system with rate `r` therefore fires on steps
//! `r, 2r, 3r, ...`.
//!
//! Systems run in registration order. A system registered from inside a
//! callback joins the list after the current step and first counts on the
//! next one.

use std::fmt;
use std::mem;

use engine_component::EntityHandle;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::EcsError;
use crate::query::Query;
use crate::world::World;

/// Identifier of a registered system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SystemHandle(pub u32);

impl fmt::Display for SystemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "System({})", self.0)
    }
}

/// Callback invoked with the world and the entities the query matched.
pub type SystemFn = Box<dyn FnMut(&mut World, &[EntityHandle])>;

/// A registered system.
pub struct System {
    handle: SystemHandle,
    name: String,
    /// Steps between two firings.
    rate: u32,
    /// Steps since the last firing.
    elapsed: u32,
    /// Number of times the callback ran.
    runs: u64,
    query: Box<dyn Query>,
    callback: SystemFn,
}

impl System {
    /// The system's handle.
    #[must_use]
    pub fn handle(&self) -> SystemHandle {
        self.handle
    }

    /// The name given at registration.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Steps between two firings.
    #[must_use]
    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// Steps counted since the last firing.
    #[must_use]
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// Number of times the callback has run.
    #[must_use]
    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// The query evaluated before each firing.
    #[must_use]
    pub fn query(&self) -> &dyn Query {
        &*self.query
    }

    /// Count one step and fire if the rate is reached.
    ///
    /// Returns `true` if the callback ran.
    pub(crate) fn check(&mut self, world: &mut World) -> bool {
        self.elapsed += 1;
        if self.elapsed < self.rate {
            return false;
        }
        self.elapsed = 0;

        let entities = self.query.apply(world);
        trace!(system = %self.name, matched = entities.len(), "running system");
        (self.callback)(world, &entities);
        self.runs += 1;
        true
    }
}

impl fmt::Debug for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("System")
            .field("handle", &self.handle)
            .field("name", &self.name)
            .field("rate", &self.rate)
            .field("elapsed", &self.elapsed)
            .field("runs", &self.runs)
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}

impl World {
    /// Register a system that fires every `rate` steps.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::ZeroRate`] if `rate` is zero.
    pub fn register_system<Q, F>(
        &mut self,
        name: impl Into<String>,
        rate: u32,
        query: Q,
        callback: F,
    ) -> Result<SystemHandle, EcsError>
    where
        Q: Query + 'static,
        F: FnMut(&mut World, &[EntityHandle]) + 'static,
    {
        let name = name.into();
        if rate == 0 {
            return Err(EcsError::ZeroRate(name));
        }

        let handle = SystemHandle(self.next_system);
        self.next_system += 1;
        debug!(%handle, system = %name, rate, "registered system");
        self.systems.push(System {
            handle,
            name,
            rate,
            elapsed: 0,
            runs: 0,
            query: Box::new(query),
            callback: Box::new(callback),
        });
        Ok(handle)
    }

    /// Advance one tick: count every system once and fire those whose rate
    /// is reached, in registration order.
    ///
    /// Returns the number of systems that fired.
    pub fn step(&mut self) -> usize {
        self.tick += 1;

        // Callbacks need `&mut World`; the list is detached while they run.
        let mut systems = mem::take(&mut self.systems);
        let mut fired = 0;
        for system in &mut systems {
            if system.check(self) {
                fired += 1;
            }
        }
        let registered = mem::replace(&mut self.systems, systems);
        self.systems.extend(registered);

        debug!(tick = self.tick, fired, "step complete");
        fired
    }

    /// Number of completed steps.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Number of registered systems.
    #[must_use]
    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    /// The system registered under `handle`.
    #[must_use]
    pub fn system(&self, handle: SystemHandle) -> Option<&System> {
        self.systems.iter().find(|system| system.handle == handle)
    }

    /// All systems, in registration order.
    pub fn systems(&self) -> impl Iterator<Item = &System> {
        self.systems.iter()
    }
}
