//! Fixture lifecycle errors and the pass-through test failure wrapper.

use std::error::Error;
use std::fmt;

use thiserror::Error as ThisError;

use super::DriverError;
use crate::types::ScopeKey;

#[derive(Debug, ThisError)]
pub enum FixtureError {
    /// Driver creation failed; the test invocation fails before its body runs.
    #[error("Driver creation failed: {0}")]
    CreationFailed(#[source] DriverError),

    /// A second driver was requested for a scope that already holds one.
    #[error("A driver is already active for scope {0}")]
    AlreadyActive(ScopeKey),

    /// Release failed after the test body had already succeeded.
    #[error("Driver release failed: {0}")]
    ReleaseFailed(#[source] DriverError),

    #[error("Resolver already registered: {0}")]
    AlreadyRegistered(String),
}

/// Opaque wrapper around a failure raised by a test body.
///
/// Never produced by this crate. It is carried through teardown and handed
/// back to the host unchanged; [`TestFailure::into_inner`] returns the exact
/// value the host put in.
pub struct TestFailure(Box<dyn Error + Send + Sync>);

impl TestFailure {
    pub fn new(failure: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self(failure.into())
    }

    /// Recover the original failure value.
    pub fn into_inner(self) -> Box<dyn Error + Send + Sync> {
        self.0
    }

    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref()
    }
}

impl fmt::Display for TestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for TestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl Error for TestFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}
