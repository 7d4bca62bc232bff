//! User repository implementation

use tracing::{debug, info};

use crate::api::client::ApiClient;
use crate::models::user::{ProfileUpdate, User, UserProfileWire};
use crate::utils::errors::{EventFlowError, Result};

#[derive(Debug, Clone)]
pub struct UserRepository {
    client: ApiClient,
}

impl UserRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the signed-in user's profile
    pub async fn profile(&self) -> Result<User> {
        let wire: UserProfileWire =
            self.client.get_json("/users/profile").await.map_err(|e| match e {
                EventFlowError::Api { status: 404, .. } => EventFlowError::ProfileNotFound,
                other => other,
            })?;
        debug!(user_id = %wire.id, "Fetched user profile");

        Ok(wire.into())
    }

    /// Update the signed-in user's profile
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User> {
        let wire: UserProfileWire = self.client.put_json("/users/profile", update).await?;
        info!(user_id = %wire.id, "Profile updated");

        Ok(wire.into())
    }
}
