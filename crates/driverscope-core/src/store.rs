//! Per-execution driver storage.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use driverscope_protocols::{DriverLease, FixtureError, ScopeKey};

/// Keyed slot holding at most one live driver per test execution.
///
/// This is a slot abstraction, not a general cache: one entry per scope key,
/// populated during resolution and cleared atomically during teardown. It is
/// safe under concurrent access from different scope keys.
pub struct ScopedStore {
    entries: DashMap<ScopeKey, DriverLease>,
}

impl ScopedStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Record the driver for `scope`.
    ///
    /// A second put for a live scope would silently leak the first driver,
    /// so it is rejected as [`FixtureError::AlreadyActive`] without touching
    /// the stored entry.
    pub fn put(&self, scope: ScopeKey, lease: DriverLease) -> Result<(), FixtureError> {
        match self.entries.entry(scope) {
            Entry::Occupied(occupied) => Err(FixtureError::AlreadyActive(occupied.key().clone())),
            Entry::Vacant(vacant) => {
                vacant.insert(lease);
                Ok(())
            }
        }
    }

    /// Atomically remove and return the driver stored for `scope`.
    ///
    /// A second call with the same key returns `None` and is a correct no-op,
    /// which keeps teardown safe when the host ever double-signals.
    pub fn take(&self, scope: &ScopeKey) -> Option<DriverLease> {
        self.entries.remove(scope).map(|(_, lease)| lease)
    }

    /// Whether a driver is currently stored for `scope`.
    pub fn contains(&self, scope: &ScopeKey) -> bool {
        self.entries.contains_key(scope)
    }

    /// Number of live entries across all scopes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ScopedStore {
    fn default() -> Self {
        Self::new()
    }
}
