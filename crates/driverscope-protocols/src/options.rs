//! Driver creation options.

use serde::{Deserialize, Serialize};

/// Options passed to driver creation.
///
/// Resolved once per test execution, from a per-test override or the
/// process-wide default, and never mutated afterwards. The process-wide
/// default runs headless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverOptions {
    /// Run the browser without a visible window.
    pub headless: bool,
    /// Initial window size as (width, height).
    pub window_size: Option<(u32, u32)>,
    /// Extra switches appended to the browser command line.
    pub browser_args: Vec<String>,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            headless: true,
            window_size: None,
            browser_args: Vec::new(),
        }
    }
}

impl DriverOptions {
    /// Options for a visible browser window.
    pub fn headed() -> Self {
        Self {
            headless: false,
            ..Default::default()
        }
    }

    /// Set headless mode.
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set the initial window size.
    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = Some((width, height));
        self
    }

    /// Append an extra browser command-line switch.
    pub fn browser_arg(mut self, arg: impl Into<String>) -> Self {
        self.browser_args.push(arg.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_headless() {
        let options = DriverOptions::default();
        assert!(options.headless);
        assert!(options.window_size.is_none());
        assert!(options.browser_args.is_empty());
    }

    #[test]
    fn test_headed_builder() {
        let options = DriverOptions::headed().window_size(1920, 1080);
        assert!(!options.headless);
        assert_eq!(options.window_size, Some((1920, 1080)));
    }

    #[test]
    fn test_browser_args_accumulate() {
        let options = DriverOptions::default()
            .browser_arg("--lang=en-US")
            .browser_arg("--disable-gpu");
        assert_eq!(options.browser_args.len(), 2);
    }

    #[test]
    fn test_deserialize_missing_fields_use_defaults() {
        let options: DriverOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, DriverOptions::default());

        let options: DriverOptions =
            serde_json::from_str(r#"{"headless": false, "window_size": [800, 600]}"#).unwrap();
        assert!(!options.headless);
        assert_eq!(options.window_size, Some((800, 600)));
    }
}
