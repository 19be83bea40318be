//! Error types shared across the fixture manager.

mod driver;
mod fixture;

pub use driver::DriverError;
pub use fixture::{FixtureError, TestFailure};
