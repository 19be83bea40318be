//! Smoke test for the facade: the whole lifecycle through the public surface.

use std::sync::Arc;

use async_trait::async_trait;

use driverscope::{
    DriverError, DriverFactory, DriverHandle, DriverOptions, LifecycleCallbacks,
    ParameterResolver, ScopeKey, TestFailure, WebDriverFixture,
};

struct InertHandle;

#[async_trait]
impl DriverHandle for InertHandle {
    fn session_id(&self) -> &str {
        "inert"
    }

    async fn release(&self) -> Result<(), DriverError> {
        Ok(())
    }
}

struct InertFactory;

#[async_trait]
impl DriverFactory for InertFactory {
    fn driver_name(&self) -> &str {
        "inert"
    }

    async fn create(&self, _options: &DriverOptions) -> Result<Box<dyn DriverHandle>, DriverError> {
        Ok(Box::new(InertHandle))
    }
}

#[tokio::test]
async fn full_cycle_through_the_facade() {
    let fixture = WebDriverFixture::new(Arc::new(InertFactory));
    let scope = ScopeKey::generate();

    let driver = fixture.resolver().resolve(&scope, "smoke").await.unwrap();
    assert_eq!(driver.session_id(), "inert");
    drop(driver);

    fixture.callbacks().on_test_completed(&scope).await.unwrap();
    assert_eq!(fixture.active_drivers(), 0);

    let returned = fixture
        .callbacks()
        .on_test_failed(&scope, TestFailure::new("late signal"))
        .await;
    assert_eq!(returned.to_string(), "late signal");
}
