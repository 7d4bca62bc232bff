//! User service implementation
//!
//! This service handles profile reads and updates for the signed-in
//! user.

use tracing::info;

use crate::api::repositories::UserRepository;
use crate::models::user::{ProfileUpdate, User};
use crate::utils::errors::{EventFlowError, Result};

/// User service for profile management
#[derive(Debug, Clone)]
pub struct UserService {
    users: UserRepository,
}

impl UserService {
    /// Create a new UserService instance
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    /// Fetch the signed-in user's profile
    pub async fn profile(&self) -> Result<User> {
        self.users.profile().await
    }

    /// Validate and submit a profile update.
    ///
    /// An invalid update is rejected without a network call.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User> {
        validate_profile_update(update)?;

        let user = self.users.update_profile(update).await?;
        info!(user_id = %user.id, "Profile updated through service");

        Ok(user)
    }
}

/// Pre-submit profile validation
fn validate_profile_update(update: &ProfileUpdate) -> Result<()> {
    if update.first_name.trim().is_empty()
        || update.last_name.trim().is_empty()
        || update.phone.trim().is_empty()
    {
        return Err(EventFlowError::Validation(
            "First name, last name and phone are required.".to_string(),
        ));
    }

    Ok(())
}
