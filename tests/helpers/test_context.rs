//! Pre-wired test context
//!
//! Builds a service factory pointed at the mock API server with an
//! already-authenticated session.

use eventflow_client::config::Settings;
use eventflow_client::services::ServiceFactory;
use eventflow_client::state::Session;

use super::api_mock::EventFlowMockServer;

/// Test context holding the mock server and the wired services
pub struct TestContext {
    pub mock: EventFlowMockServer,
    pub services: ServiceFactory,
    pub session: Session,
}

impl TestContext {
    /// Context with a signed-in session
    pub async fn new() -> Self {
        let context = Self::signed_out().await;
        context.session.set_token("test-token");
        context
    }

    /// Context with no stored token
    pub async fn signed_out() -> Self {
        let mock = EventFlowMockServer::start().await;

        let mut settings = Settings::default();
        settings.api.base_url = mock.base_url();

        let session = Session::new();
        let services = ServiceFactory::new(&settings, session.clone())
            .expect("Failed to create service factory");

        Self {
            mock,
            services,
            session,
        }
    }
}
