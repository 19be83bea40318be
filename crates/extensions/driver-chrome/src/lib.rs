//! # driverscope Chrome driver
//!
//! A concrete driver factory that launches one dedicated Chrome instance per
//! test execution, with an ephemeral profile and its own DevTools debugging
//! port, and terminates it on release.
//!
//! Page interaction over the DevTools endpoint is the host's business; this
//! crate only covers the instance's birth and death.

pub mod factory;
pub mod handle;

pub use factory::{ChromeDriverConfig, ChromeDriverFactory};
pub use handle::ChromeDriverHandle;
