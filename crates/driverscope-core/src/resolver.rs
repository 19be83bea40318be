//! Parameter resolution: applicability check and driver creation.

use std::any::TypeId;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use driverscope_protocols::{
    DriverFactory, DriverLease, FixtureError, ParameterRequest, ParameterResolver, ScopeKey,
};

use crate::overrides::OverrideRegistry;
use crate::store::ScopedStore;

/// Resolver for test parameters of type [`DriverLease`].
///
/// Applicability is exact type equality. Resolution computes the creation
/// options for the test, creates a driver through the factory, and records it
/// in the scoped store before handing it to the host for injection.
pub struct DriverResolver {
    id: String,
    factory: Arc<dyn DriverFactory>,
    store: Arc<ScopedStore>,
    overrides: Arc<OverrideRegistry>,
}

impl DriverResolver {
    pub fn new(
        factory: Arc<dyn DriverFactory>,
        store: Arc<ScopedStore>,
        overrides: Arc<OverrideRegistry>,
    ) -> Self {
        let id = format!("driver-{}", factory.driver_name());
        Self {
            id,
            factory,
            store,
            overrides,
        }
    }
}

#[async_trait]
impl ParameterResolver for DriverResolver {
    fn resolver_id(&self) -> &str {
        &self.id
    }

    fn supports(&self, request: &ParameterRequest) -> bool {
        request.type_id() == TypeId::of::<DriverLease>()
    }

    async fn resolve(
        &self,
        scope: &ScopeKey,
        test_id: &str,
    ) -> Result<DriverLease, FixtureError> {
        let options = self.overrides.options_for(test_id);
        debug!(scope = %scope, test = test_id, headless = options.headless, "creating driver");

        let handle = self
            .factory
            .create(&options)
            .await
            .map_err(FixtureError::CreationFailed)?;
        let lease = DriverLease::new(Arc::from(handle));

        if let Err(err) = self.store.put(scope.clone(), lease.clone()) {
            // A second resolve for a live scope must not leak the new instance.
            if let Err(release_err) = lease.release().await {
                warn!(scope = %scope, error = %release_err, "failed to release surplus driver");
            }
            return Err(err);
        }

        info!(scope = %scope, session = lease.session_id(), "driver created");
        Ok(lease)
    }
}
