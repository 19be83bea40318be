//! # driverscope Protocols
//!
//! Core protocol definitions (traits) for the driverscope fixture manager.
//! Contains only interface definitions - no implementations.
//!
//! ## Core Traits
//!
//! - [`DriverFactory`] - Creates fresh browser-driver instances
//! - [`DriverHandle`] - One live driver instance, releasable exactly once
//! - [`ParameterResolver`] - Decides applicability and produces a driver for a test
//! - [`LifecycleCallbacks`] - End-of-test signals that guarantee teardown

pub mod driver;
pub mod error;
pub mod harness;
pub mod options;
pub mod types;

// Re-export core traits
pub use driver::{DriverFactory, DriverHandle, DriverLease};
pub use error::{DriverError, FixtureError, TestFailure};
pub use harness::{LifecycleCallbacks, ParameterRequest, ParameterResolver};
pub use options::DriverOptions;
pub use types::{ScopeKey, TestId};
