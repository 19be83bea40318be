//! Registration point for parameter resolvers.

use std::sync::Arc;

use parking_lot::RwLock;

use driverscope_protocols::{FixtureError, ParameterRequest, ParameterResolver};

/// Registry the host queries to find a resolver for a parameter request.
///
/// Resolvers are matched by asking each registered one in registration order;
/// the first whose `supports` accepts the request wins.
pub struct ResolverRegistry {
    resolvers: RwLock<Vec<Arc<dyn ParameterResolver>>>,
}

impl ResolverRegistry {
    pub fn new() -> Self {
        Self {
            resolvers: RwLock::new(Vec::new()),
        }
    }

    /// Register a resolver.
    ///
    /// Returns an error if a resolver with the same id is already registered.
    pub fn register(&self, resolver: Arc<dyn ParameterResolver>) -> Result<(), FixtureError> {
        let mut resolvers = self.resolvers.write();
        if resolvers
            .iter()
            .any(|r| r.resolver_id() == resolver.resolver_id())
        {
            return Err(FixtureError::AlreadyRegistered(
                resolver.resolver_id().to_string(),
            ));
        }
        resolvers.push(resolver);
        Ok(())
    }

    /// Find the resolver for a parameter request, if any supports it.
    pub fn find(&self, request: &ParameterRequest) -> Option<Arc<dyn ParameterResolver>> {
        self.resolvers
            .read()
            .iter()
            .find(|r| r.supports(request))
            .cloned()
    }

    /// Number of registered resolvers.
    pub fn len(&self) -> usize {
        self.resolvers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.read().is_empty()
    }
}

impl Default for ResolverRegistry {
    fn default() -> Self {
        Self::new()
    }
}
