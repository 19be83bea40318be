//! The composed fixture extension.

use std::sync::Arc;

use driverscope_protocols::{
    DriverFactory, DriverOptions, FixtureError, LifecycleCallbacks, ParameterResolver, TestId,
};

use crate::config::FixtureConfig;
use crate::lifecycle::LifecycleCoordinator;
use crate::overrides::OverrideRegistry;
use crate::registry::ResolverRegistry;
use crate::resolver::DriverResolver;
use crate::store::ScopedStore;

/// Browser-driver fixture extension.
///
/// Wires a driver factory, the scoped store, the resolver, the lifecycle
/// coordinator, and the override table together, and hands the host the two
/// pieces it registers with its extension points: a [`ParameterResolver`] and
/// a [`LifecycleCallbacks`].
pub struct WebDriverFixture {
    store: Arc<ScopedStore>,
    overrides: Arc<OverrideRegistry>,
    resolver: Arc<DriverResolver>,
    coordinator: Arc<LifecycleCoordinator>,
}

impl WebDriverFixture {
    /// Fixture with the process-wide defaults (headless).
    pub fn new(factory: Arc<dyn DriverFactory>) -> Self {
        Self::with_options(factory, DriverOptions::default())
    }

    /// Fixture with custom process-wide default options.
    pub fn with_options(factory: Arc<dyn DriverFactory>, defaults: DriverOptions) -> Self {
        let store = Arc::new(ScopedStore::new());
        let overrides = Arc::new(OverrideRegistry::new(defaults));
        let resolver = Arc::new(DriverResolver::new(
            factory,
            store.clone(),
            overrides.clone(),
        ));
        let coordinator = Arc::new(LifecycleCoordinator::new(store.clone()));
        Self {
            store,
            overrides,
            resolver,
            coordinator,
        }
    }

    /// Fixture built from a declarative config: defaults plus override table.
    pub fn from_config(factory: Arc<dyn DriverFactory>, config: FixtureConfig) -> Self {
        let fixture = Self::with_options(factory, config.defaults);
        for (test_id, options) in config.overrides {
            fixture.overrides.set(test_id, options);
        }
        fixture
    }

    /// Declare that `test_id` runs with `options` instead of the default.
    pub fn override_for(&self, test_id: impl Into<TestId>, options: DriverOptions) {
        self.overrides.set(test_id, options);
    }

    /// The resolver to register with the host's parameter extension point.
    pub fn resolver(&self) -> Arc<dyn ParameterResolver> {
        self.resolver.clone()
    }

    /// The callbacks to register with the host's end-of-test extension points.
    pub fn callbacks(&self) -> Arc<dyn LifecycleCallbacks> {
        self.coordinator.clone()
    }

    /// Register this fixture's resolver in `registry`.
    pub fn register(&self, registry: &ResolverRegistry) -> Result<(), FixtureError> {
        registry.register(self.resolver())
    }

    /// Number of drivers currently held across all scopes.
    pub fn active_drivers(&self) -> usize {
        self.store.len()
    }
}
