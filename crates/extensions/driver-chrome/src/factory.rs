//! Chrome instance factory.
//!
//! Each `create` call launches a fresh Chrome process with its own ephemeral
//! profile and DevTools debugging port, so concurrent test executions never
//! share browser state.

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::atomic::{AtomicU16, Ordering};

use async_trait::async_trait;
use tempfile::TempDir;
use tokio::process::Command;
use tracing::{debug, info};

use driverscope_protocols::{DriverError, DriverFactory, DriverHandle, DriverOptions};

use crate::handle::ChromeDriverHandle;

/// Chrome launch configuration.
#[derive(Debug, Clone)]
pub struct ChromeDriverConfig {
    /// Explicit browser executable; auto-detected when unset.
    pub executable: Option<PathBuf>,
    /// First DevTools port to hand out; each instance gets the next one.
    pub base_port: u16,
    /// Parent directory for ephemeral profiles. Default: the system temp dir.
    pub profile_root: Option<PathBuf>,
    /// Readiness probe attempts, 200ms apart.
    pub ready_attempts: u32,
}

impl Default for ChromeDriverConfig {
    fn default() -> Self {
        Self {
            executable: None,
            base_port: 9222,
            profile_root: None,
            ready_attempts: 30,
        }
    }
}

/// Launches one dedicated Chrome instance per driver creation.
pub struct ChromeDriverFactory {
    config: ChromeDriverConfig,
    next_port: AtomicU16,
}

impl ChromeDriverFactory {
    pub fn new(config: ChromeDriverConfig) -> Self {
        let next_port = AtomicU16::new(config.base_port);
        Self { config, next_port }
    }

    /// Find a Chrome/Chromium executable on this system.
    pub fn find_chrome() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            let paths = [
                "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
                "/Applications/Chromium.app/Contents/MacOS/Chromium",
                "/Applications/Microsoft Edge.app/Contents/MacOS/Microsoft Edge",
            ];
            for path in &paths {
                let p = PathBuf::from(path);
                if p.exists() {
                    return Some(p);
                }
            }
        }

        #[cfg(target_os = "linux")]
        {
            let paths = [
                "/usr/bin/google-chrome",
                "/usr/bin/google-chrome-stable",
                "/usr/bin/chromium",
                "/usr/bin/chromium-browser",
                "/snap/bin/chromium",
            ];
            for path in &paths {
                let p = PathBuf::from(path);
                if p.exists() {
                    return Some(p);
                }
            }
        }

        #[cfg(target_os = "windows")]
        {
            let paths = [
                r"C:\Program Files\Google\Chrome\Application\chrome.exe",
                r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
            ];
            for path in &paths {
                let p = PathBuf::from(path);
                if p.exists() {
                    return Some(p);
                }
            }
        }

        None
    }

    fn allocate_port(&self) -> u16 {
        self.next_port.fetch_add(1, Ordering::SeqCst)
    }

    /// Command-line switches for one instance.
    fn build_args(options: &DriverOptions, port: u16, profile_dir: &std::path::Path) -> Vec<String> {
        let mut args = vec![
            format!("--remote-debugging-port={port}"),
            format!("--user-data-dir={}", profile_dir.display()),
            "--no-first-run".to_string(),
            "--no-default-browser-check".to_string(),
            "--disable-background-networking".to_string(),
            "--disable-sync".to_string(),
        ];
        if options.headless {
            args.push("--headless=new".to_string());
        }
        if let Some((width, height)) = options.window_size {
            args.push(format!("--window-size={width},{height}"));
        }
        args.extend(options.browser_args.iter().cloned());
        args
    }

    async fn is_endpoint_ready(port: u16) -> bool {
        reqwest::get(format!("http://127.0.0.1:{port}/json/version"))
            .await
            .is_ok()
    }

    fn create_profile_dir(&self) -> Result<TempDir, DriverError> {
        let builder_result = match &self.config.profile_root {
            Some(root) => tempfile::Builder::new()
                .prefix("driverscope-profile-")
                .tempdir_in(root),
            None => tempfile::Builder::new()
                .prefix("driverscope-profile-")
                .tempdir(),
        };
        builder_result.map_err(|e| DriverError::LaunchFailed(e.to_string()))
    }
}

impl Default for ChromeDriverFactory {
    fn default() -> Self {
        Self::new(ChromeDriverConfig::default())
    }
}

#[async_trait]
impl DriverFactory for ChromeDriverFactory {
    fn driver_name(&self) -> &str {
        "chrome"
    }

    async fn create(&self, options: &DriverOptions) -> Result<Box<dyn DriverHandle>, DriverError> {
        let executable = self
            .config
            .executable
            .clone()
            .or_else(Self::find_chrome)
            .ok_or(DriverError::BrowserNotFound)?;

        let port = self.allocate_port();
        let profile = self.create_profile_dir()?;
        let args = Self::build_args(options, port, profile.path());

        debug!(port, profile = %profile.path().display(), "launching chrome");

        let child = Command::new(&executable)
            .args(&args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| DriverError::LaunchFailed(e.to_string()))?;

        let mut ready = false;
        for _ in 0..self.config.ready_attempts {
            tokio::time::sleep(std::time::Duration::from_millis(200)).await;
            if Self::is_endpoint_ready(port).await {
                ready = true;
                break;
            }
        }

        let handle = ChromeDriverHandle::new(child, port, profile);
        if !ready {
            let _ = handle.release().await;
            return Err(DriverError::NotReady(format!(
                "no DevTools endpoint on port {port}"
            )));
        }

        info!(session = handle.session_id(), port, "chrome instance started");
        Ok(Box::new(handle))
    }
}
