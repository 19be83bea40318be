//! Fixture configuration loading.
//!
//! Hosts that prefer declaring option overrides in a config file over builder
//! calls can deserialize a [`FixtureConfig`] from TOML:
//!
//! ```toml
//! [defaults]
//! headless = true
//!
//! [overrides."checkout flow renders"]
//! headless = false
//! window_size = [1920, 1080]
//! ```

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use driverscope_protocols::{DriverOptions, TestId};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid fixture config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Declarative form of the process default plus the per-test override table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureConfig {
    /// Process-wide default creation options.
    #[serde(default)]
    pub defaults: DriverOptions,
    /// Per-test overrides keyed by test id.
    #[serde(default)]
    pub overrides: HashMap<TestId, DriverOptions>,
}

impl FixtureConfig {
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_headless_default() {
        let config = FixtureConfig::from_toml("").unwrap();
        assert!(config.defaults.headless);
        assert!(config.overrides.is_empty());
    }

    #[test]
    fn test_defaults_and_overrides_parse() {
        let config = FixtureConfig::from_toml(
            r#"
            [defaults]
            headless = true
            browser_args = ["--lang=en-US"]

            [overrides."checkout flow renders"]
            headless = false
            window_size = [1920, 1080]
            "#,
        )
        .unwrap();

        assert_eq!(config.defaults.browser_args, vec!["--lang=en-US"]);
        let over = &config.overrides["checkout flow renders"];
        assert!(!over.headless);
        assert_eq!(over.window_size, Some((1920, 1080)));
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let result = FixtureConfig::from_toml("defaults = \"not a table\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
