//! One live Chrome instance.

use std::path::Path;

use async_trait::async_trait;
use tempfile::TempDir;
use tokio::process::Child;
use tokio::sync::Mutex;
use tracing::info;

use driverscope_protocols::{DriverError, DriverHandle};

/// Handle to a launched Chrome process.
///
/// The process is killed on [`release`](DriverHandle::release); the ephemeral
/// profile directory is removed when the handle is dropped.
pub struct ChromeDriverHandle {
    session_id: String,
    port: u16,
    process: Mutex<Option<Child>>,
    profile: TempDir,
}

impl ChromeDriverHandle {
    pub(crate) fn new(child: Child, port: u16, profile: TempDir) -> Self {
        Self {
            session_id: format!("chrome-{}", uuid::Uuid::new_v4()),
            port,
            process: Mutex::new(Some(child)),
            profile,
        }
    }

    /// DevTools endpoint of this instance.
    pub fn devtools_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// The instance's ephemeral profile directory.
    pub fn profile_path(&self) -> &Path {
        self.profile.path()
    }
}

#[async_trait]
impl DriverHandle for ChromeDriverHandle {
    fn session_id(&self) -> &str {
        &self.session_id
    }

    async fn release(&self) -> Result<(), DriverError> {
        let Some(mut child) = self.process.lock().await.take() else {
            return Ok(());
        };

        child
            .kill()
            .await
            .map_err(|e| DriverError::ReleaseFailed(e.to_string()))?;

        info!(session = %self.session_id, "chrome instance terminated");
        Ok(())
    }
}
