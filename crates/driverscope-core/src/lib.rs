//! # driverscope Core
//!
//! The fixture lifecycle protocol: per-execution driver creation, scoped
//! storage, injection, and guaranteed exactly-once teardown.
//!
//! A host test harness wires a [`WebDriverFixture`] into its extension
//! points: the fixture's [`DriverResolver`] is consulted before a test body
//! runs and its [`LifecycleCoordinator`] after, on both the success and the
//! failure path. See the crate-level docs of `driverscope` for a walkthrough.

pub mod config;
pub mod extension;
pub mod lifecycle;
pub mod overrides;
pub mod registry;
pub mod resolver;
pub mod store;

pub use config::{ConfigError, FixtureConfig};
pub use extension::WebDriverFixture;
pub use lifecycle::LifecycleCoordinator;
pub use overrides::OverrideRegistry;
pub use registry::ResolverRegistry;
pub use resolver::DriverResolver;
pub use store::ScopedStore;
