//! Driver collaborator contract.
//!
//! The browser-automation driver is opaque to the fixture manager: it is
//! created through a [`DriverFactory`] and torn down through
//! [`DriverHandle::release`]. Everything in between (navigation, page
//! interaction) belongs to the host's test code, not to this crate.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::DriverError;
use crate::options::DriverOptions;

/// Creates fresh driver instances, one per call.
///
/// Creation may be slow (seconds). No retries are performed here or by the
/// caller; a failure surfaces once.
#[async_trait]
pub trait DriverFactory: Send + Sync + 'static {
    /// Short name for diagnostics, e.g. `"chrome"`.
    fn driver_name(&self) -> &str;

    /// Create a fresh driver instance with the given options.
    async fn create(&self, options: &DriverOptions) -> Result<Box<dyn DriverHandle>, DriverError>;
}

/// One live driver instance.
#[async_trait]
pub trait DriverHandle: Send + Sync + 'static {
    /// Stable identifier of this live instance, for diagnostics.
    fn session_id(&self) -> &str;

    /// Tear the instance down.
    ///
    /// May be slow (seconds). Failures are reported at the teardown boundary
    /// by the caller and never escape uncaught.
    async fn release(&self) -> Result<(), DriverError>;
}

/// Shared reference to a stored driver handle, injectable as a test parameter.
///
/// The scoped store owns one clone for the duration of the test execution;
/// the test body holds the other and drops it when the body returns.
#[derive(Clone)]
pub struct DriverLease {
    handle: Arc<dyn DriverHandle>,
}

impl DriverLease {
    pub fn new(handle: Arc<dyn DriverHandle>) -> Self {
        Self { handle }
    }

    pub fn session_id(&self) -> &str {
        self.handle.session_id()
    }

    /// The underlying handle.
    pub fn handle(&self) -> &Arc<dyn DriverHandle> {
        &self.handle
    }

    pub async fn release(&self) -> Result<(), DriverError> {
        self.handle.release().await
    }
}

impl fmt::Debug for DriverLease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DriverLease")
            .field("session_id", &self.session_id())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeHandle;

    #[async_trait]
    impl DriverHandle for FakeHandle {
        fn session_id(&self) -> &str {
            "fake-1"
        }

        async fn release(&self) -> Result<(), DriverError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_lease_delegates_to_handle() {
        let lease = DriverLease::new(Arc::new(FakeHandle));
        assert_eq!(lease.session_id(), "fake-1");
        assert!(lease.release().await.is_ok());
    }

    #[test]
    fn test_lease_debug_shows_session() {
        let lease = DriverLease::new(Arc::new(FakeHandle));
        assert!(format!("{:?}", lease).contains("fake-1"));
    }
}
