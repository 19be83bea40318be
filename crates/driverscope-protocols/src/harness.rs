//! Host-facing extension point contracts.
//!
//! A test-execution host binds these traits to its own lifecycle:
//! [`ParameterResolver::supports`] is queried before parameter resolution,
//! [`ParameterResolver::resolve`] produces the injected value, and exactly one
//! of the [`LifecycleCallbacks`] signals fires after the test body.

use std::any::TypeId;

use async_trait::async_trait;

use crate::driver::DriverLease;
use crate::error::{FixtureError, TestFailure};
use crate::types::ScopeKey;

/// Describes the declared type of a parameter a test wants injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterRequest {
    type_id: TypeId,
    type_name: &'static str,
}

impl ParameterRequest {
    /// Request for a parameter of type `T`.
    pub fn of<T: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Human-readable type name, for diagnostics only.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// Decides applicability for a parameter request and produces the driver.
#[async_trait]
pub trait ParameterResolver: Send + Sync {
    /// Unique id among registered resolvers.
    fn resolver_id(&self) -> &str;

    /// Whether this resolver handles the requested parameter type.
    ///
    /// Exact type equality; no subtype matching, no fallback, no side effects.
    fn supports(&self, request: &ParameterRequest) -> bool;

    /// Create a driver for this test execution and record it under `scope`.
    ///
    /// Called before the test body runs, exactly once per execution that
    /// declares the parameter. On failure nothing is recorded, so teardown
    /// later finds nothing to release.
    async fn resolve(
        &self,
        scope: &ScopeKey,
        test_id: &str,
    ) -> Result<DriverLease, FixtureError>;
}

/// End-of-test signals; exactly one fires per scope key that had a resolution.
#[async_trait]
pub trait LifecycleCallbacks: Send + Sync {
    /// Called once after a test body returns normally.
    ///
    /// A release failure here surfaces as the returned error; the test body
    /// already succeeded, so nothing else is left to report.
    async fn on_test_completed(&self, scope: &ScopeKey) -> Result<(), FixtureError>;

    /// Called once after a test body fails.
    ///
    /// Release is attempted unconditionally, then the original failure is
    /// returned unchanged. The host must propagate the returned value.
    async fn on_test_failed(&self, scope: &ScopeKey, failure: TestFailure) -> TestFailure;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_matches_exact_type_only() {
        let request = ParameterRequest::of::<DriverLease>();
        assert_eq!(request.type_id(), TypeId::of::<DriverLease>());
        assert_ne!(request.type_id(), TypeId::of::<String>());
        assert!(request.type_name().contains("DriverLease"));
    }

    #[test]
    fn test_requests_for_same_type_are_equal() {
        assert_eq!(
            ParameterRequest::of::<DriverLease>(),
            ParameterRequest::of::<DriverLease>()
        );
    }
}
