//! Per-test creation option overrides.

use dashmap::DashMap;

use driverscope_protocols::{DriverOptions, TestId};

/// Table of per-test [`DriverOptions`] overrides plus the process-wide default.
///
/// A test identified by its id either has an entry here or runs with the
/// default options. Lookup is a pure function of the table contents and is
/// evaluated once per resolution, before driver creation.
pub struct OverrideRegistry {
    default: DriverOptions,
    overrides: DashMap<TestId, DriverOptions>,
}

impl OverrideRegistry {
    pub fn new(default: DriverOptions) -> Self {
        Self {
            default,
            overrides: DashMap::new(),
        }
    }

    /// Declare that `test_id` runs with `options` instead of the default.
    ///
    /// Declaring the same test twice replaces the earlier entry.
    pub fn set(&self, test_id: impl Into<TestId>, options: DriverOptions) {
        self.overrides.insert(test_id.into(), options);
    }

    /// Options for `test_id`: its declared override, or the default.
    pub fn options_for(&self, test_id: &str) -> DriverOptions {
        self.overrides
            .get(test_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_else(|| self.default.clone())
    }

    /// The process-wide default options.
    pub fn default_options(&self) -> &DriverOptions {
        &self.default
    }
}

impl Default for OverrideRegistry {
    fn default() -> Self {
        Self::new(DriverOptions::default())
    }
}
