//! # driverscope
//!
//! Scoped browser-driver fixtures for Rust test harnesses: each test
//! execution gets a freshly created browser driver, owns it for exactly one
//! test, and the driver is released exactly once whether the body succeeds
//! or fails.
//!
//! A host harness wires a [`WebDriverFixture`] into three extension points:
//! the resolver before the test body, and exactly one of the two lifecycle
//! callbacks after it.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use driverscope::{ChromeDriverFactory, DriverOptions, ScopeKey, WebDriverFixture};
//!
//! let fixture = WebDriverFixture::new(Arc::new(ChromeDriverFactory::default()));
//! fixture.override_for("checkout flow renders", DriverOptions::headed());
//!
//! // Per test execution, driven by the host:
//! let scope = ScopeKey::generate();
//! let driver = fixture.resolver().resolve(&scope, "checkout flow renders").await?;
//! // ... run the test body with `driver` injected ...
//! fixture.callbacks().on_test_completed(&scope).await?;
//! ```
//!
//! The failure path hands the body's error to
//! [`LifecycleCallbacks::on_test_failed`], which releases the driver and
//! returns the error unchanged for the host to propagate.

pub use driverscope_core::{
    ConfigError, DriverResolver, FixtureConfig, LifecycleCoordinator, OverrideRegistry,
    ResolverRegistry, ScopedStore, WebDriverFixture,
};
pub use driverscope_driver_chrome::{ChromeDriverConfig, ChromeDriverFactory, ChromeDriverHandle};
pub use driverscope_protocols::{
    DriverError, DriverFactory, DriverHandle, DriverLease, DriverOptions, FixtureError,
    LifecycleCallbacks, ParameterRequest, ParameterResolver, ScopeKey, TestFailure, TestId,
};
