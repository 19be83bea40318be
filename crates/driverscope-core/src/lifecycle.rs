//! End-of-test teardown coordination.
//!
//! The host invokes exactly one of the two callbacks per test execution.
//! Whichever fires first takes the stored driver out of the scoped slot and
//! releases it; a redundant later signal finds the slot empty and does
//! nothing. On the failure path the test's own failure is always the one the
//! host ends up propagating.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use driverscope_protocols::{FixtureError, LifecycleCallbacks, ScopeKey, TestFailure};

use crate::store::ScopedStore;

/// Guarantees the driver for a scope is released exactly once.
pub struct LifecycleCoordinator {
    store: Arc<ScopedStore>,
}

impl LifecycleCoordinator {
    pub fn new(store: Arc<ScopedStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LifecycleCallbacks for LifecycleCoordinator {
    async fn on_test_completed(&self, scope: &ScopeKey) -> Result<(), FixtureError> {
        let Some(lease) = self.store.take(scope) else {
            debug!(scope = %scope, "no driver to release");
            return Ok(());
        };

        lease.release().await.map_err(|err| {
            error!(scope = %scope, error = %err, "driver release failed");
            FixtureError::ReleaseFailed(err)
        })?;

        info!(scope = %scope, session = lease.session_id(), "driver released");
        Ok(())
    }

    async fn on_test_failed(&self, scope: &ScopeKey, failure: TestFailure) -> TestFailure {
        if let Some(lease) = self.store.take(scope) {
            match lease.release().await {
                Ok(()) => {
                    info!(scope = %scope, session = lease.session_id(), "driver released after test failure");
                }
                Err(err) => {
                    // Reported here; the test's own failure stays primary.
                    error!(scope = %scope, error = %err, "driver release failed during failure cleanup");
                }
            }
        }
        failure
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
