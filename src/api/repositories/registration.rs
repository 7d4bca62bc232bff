//! Registration repository implementation
//!
//! Capacity is never enforced here: the repository issues the request
//! and trusts the status the server assigns (CONFIRMED vs WAITLISTED).

use tracing::{debug, info};

use crate::api::client::ApiClient;
use crate::models::registration::{AttendanceUpdate, Registration, RegistrationRequest};
use crate::utils::errors::{EventFlowError, Result};

#[derive(Debug, Clone)]
pub struct RegistrationRepository {
    client: ApiClient,
}

impl RegistrationRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Register the signed-in user for an event
    pub async fn register_for_event(
        &self,
        event_id: &str,
        notes: Option<String>,
    ) -> Result<Registration> {
        let request = RegistrationRequest {
            event_id: event_id.to_string(),
            notes,
        };
        let registration: Registration =
            self.client.post_json("/registrations", &request).await?;
        info!(
            event_id = event_id,
            registration_id = %registration.id,
            status = ?registration.status,
            "Registered for event"
        );

        Ok(registration)
    }

    /// Cancel a registration (server transitions it to CANCELLED)
    pub async fn cancel(&self, registration_id: &str) -> Result<()> {
        let path = format!("/registrations/{}", urlencoding::encode(registration_id));
        self.client.delete(&path).await.map_err(|e| match e {
            EventFlowError::Api { status: 404, .. } => EventFlowError::RegistrationNotFound {
                registration_id: registration_id.to_string(),
            },
            other => other,
        })?;
        info!(registration_id = registration_id, "Registration cancelled");

        Ok(())
    }

    /// List all registrations of one user
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<Registration>> {
        let path = format!("/registrations/user/{}", urlencoding::encode(user_id));
        let registrations: Vec<Registration> = self.client.get_json(&path).await?;
        debug!(
            user_id = user_id,
            count = registrations.len(),
            "Fetched user registrations"
        );

        Ok(registrations)
    }

    /// List all registrations for one event
    pub async fn list_for_event(&self, event_id: &str) -> Result<Vec<Registration>> {
        let path = format!("/registrations/event/{}", urlencoding::encode(event_id));
        let registrations: Vec<Registration> = self.client.get_json(&path).await?;
        debug!(
            event_id = event_id,
            count = registrations.len(),
            "Fetched event registrations"
        );

        Ok(registrations)
    }

    /// List every registration visible to the caller
    pub async fn list_all(&self) -> Result<Vec<Registration>> {
        let registrations: Vec<Registration> = self.client.get_json("/registrations").await?;
        debug!(count = registrations.len(), "Fetched all registrations");

        Ok(registrations)
    }

    /// Record whether the attendee showed up
    pub async fn set_attendance(&self, registration_id: &str, attended: bool) -> Result<()> {
        let path = format!(
            "/registrations/{}/attendance",
            urlencoding::encode(registration_id)
        );
        self.client
            .put_discard(&path, &AttendanceUpdate { attended })
            .await
            .map_err(|e| match e {
                EventFlowError::Api { status: 404, .. } => {
                    EventFlowError::RegistrationNotFound {
                        registration_id: registration_id.to_string(),
                    }
                }
                other => other,
            })?;
        info!(
            registration_id = registration_id,
            attended = attended,
            "Attendance updated"
        );

        Ok(())
    }
}
