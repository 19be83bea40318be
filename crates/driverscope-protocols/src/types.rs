//! Common identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a single test, used to look up per-test option overrides.
pub type TestId = String;

/// Unique identifier for one test execution, supplied by the host.
///
/// Distinct concurrent test executions never share a key, and a key is used
/// for exactly one create-then-release cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScopeKey(String);

impl ScopeKey {
    /// Create a scope key from a host-supplied execution id.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Mint a fresh unique key, for hosts without their own execution ids.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScopeKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ScopeKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_key_display_roundtrip() {
        let key = ScopeKey::new("worker-3/test-42");
        assert_eq!(key.as_str(), "worker-3/test-42");
        assert_eq!(key.to_string(), "worker-3/test-42");
    }

    #[test]
    fn test_generated_keys_are_unique() {
        let a = ScopeKey::generate();
        let b = ScopeKey::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_str_and_string_agree() {
        assert_eq!(ScopeKey::from("k"), ScopeKey::from("k".to_string()));
    }
}
