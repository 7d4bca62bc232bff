//! Dashboard repository implementation

use tracing::debug;

use crate::api::client::ApiClient;
use crate::models::dashboard::{AttendeeDashboard, AttendeeDashboardWire};
use crate::utils::errors::Result;

#[derive(Debug, Clone)]
pub struct DashboardRepository {
    client: ApiClient,
}

impl DashboardRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the attendee dashboard payload
    pub async fn attendee(&self) -> Result<AttendeeDashboard> {
        let wire: AttendeeDashboardWire = self.client.get_json("/dashboard/attendee").await?;
        debug!(count = wire.count, "Fetched attendee dashboard");

        Ok(wire.into())
    }

    /// Hit the role-gated organizer dashboard endpoint.
    ///
    /// The body carries no data today; the call still runs so the
    /// server-side role check applies before stats are derived locally.
    pub async fn organizer(&self) -> Result<()> {
        self.client
            .get_json::<serde_json::Value>("/dashboard/organizer")
            .await?;

        Ok(())
    }

    /// Hit the role-gated admin dashboard endpoint
    pub async fn admin(&self) -> Result<()> {
        self.client
            .get_json::<serde_json::Value>("/dashboard/admin")
            .await?;

        Ok(())
    }
}
