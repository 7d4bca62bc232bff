//! Registration service implementation
//!
//! This service wraps the registration repository for the views. The
//! server decides CONFIRMED vs WAITLISTED; nothing here second-guesses
//! the admission outcome.

use tracing::{debug, info};

use crate::api::repositories::RegistrationRepository;
use crate::models::registration::Registration;
use crate::utils::errors::Result;

/// Registration service for managing event attendance
#[derive(Debug, Clone)]
pub struct RegistrationService {
    registrations: RegistrationRepository,
}

impl RegistrationService {
    /// Create a new RegistrationService instance
    pub fn new(registrations: RegistrationRepository) -> Self {
        Self { registrations }
    }

    /// Register the signed-in user for an event
    pub async fn register_for_event(
        &self,
        event_id: &str,
        notes: Option<String>,
    ) -> Result<Registration> {
        let registration = self
            .registrations
            .register_for_event(event_id, notes)
            .await?;
        info!(
            event_id = event_id,
            status = ?registration.status,
            "Registration recorded with server-assigned status"
        );

        Ok(registration)
    }

    /// Cancel a registration.
    ///
    /// Cancelling an already-cancelled registration is a no-op: no
    /// request is issued and the operation reports success.
    pub async fn cancel(&self, registration: &Registration) -> Result<()> {
        if !registration.is_active() {
            debug!(
                registration_id = %registration.id,
                "Registration already cancelled, skipping request"
            );
            return Ok(());
        }

        self.registrations.cancel(&registration.id).await
    }

    /// List the user's registrations
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<Registration>> {
        self.registrations.list_for_user(user_id).await
    }

    /// List the registrations for one event
    pub async fn list_for_event(&self, event_id: &str) -> Result<Vec<Registration>> {
        self.registrations.list_for_event(event_id).await
    }

    /// List every registration visible to the caller
    pub async fn list_all(&self) -> Result<Vec<Registration>> {
        self.registrations.list_all().await
    }

    /// Record whether the attendee showed up
    pub async fn set_attendance(&self, registration_id: &str, attended: bool) -> Result<()> {
        self.registrations
            .set_attendance(registration_id, attended)
            .await
    }
}
