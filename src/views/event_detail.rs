//! Event detail view
//!
//! Holds the reconciled capacity snapshot for one event and dispatches
//! register/cancel actions. Every successful mutation re-runs the full
//! fetch before the caller re-renders.

use tracing::{debug, info};

use crate::models::registration::Registration;
use crate::services::capacity::{CapacityService, CapacitySnapshot, ClosedReason, RegistrationEligibility};
use crate::services::registration::RegistrationService;
use crate::utils::errors::{EventFlowError, Result};
use crate::views::RefreshTrigger;

/// Detail view for a single event
pub struct EventDetailView {
    capacity: CapacityService,
    registrations: RegistrationService,
    event_id: String,
    user_id: String,
    snapshot: Option<CapacitySnapshot>,
}

impl EventDetailView {
    /// Create an unloaded view; call [`Self::load`] to populate it
    pub fn new(
        capacity: CapacityService,
        registrations: RegistrationService,
        event_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            capacity,
            registrations,
            event_id: event_id.into(),
            user_id: user_id.into(),
            snapshot: None,
        }
    }

    /// Run the full fetch and reconcile
    pub async fn load(&mut self) -> Result<&CapacitySnapshot> {
        let snapshot = self
            .capacity
            .reconcile(&self.event_id, &self.user_id)
            .await?;

        Ok(self.snapshot.insert(snapshot))
    }

    /// Re-issue the full fetch
    pub async fn refresh(&mut self, trigger: RefreshTrigger) -> Result<&CapacitySnapshot> {
        debug!(event_id = %self.event_id, trigger = ?trigger, "Refreshing event details");
        self.load().await
    }

    /// Last reconciled snapshot, if loaded
    pub fn snapshot(&self) -> Option<&CapacitySnapshot> {
        self.snapshot.as_ref()
    }

    /// Register the signed-in user for this event.
    ///
    /// The eligibility check runs against the loaded snapshot before
    /// any request is issued; an ineligible state aborts locally. On
    /// success the view re-fetches everything before returning.
    pub async fn register(&mut self, notes: Option<String>) -> Result<Registration> {
        let eligibility = match self.snapshot {
            Some(ref snapshot) => snapshot.eligibility,
            None => {
                return Err(EventFlowError::Validation(
                    "Event details have not been loaded.".to_string(),
                ))
            }
        };

        match eligibility {
            RegistrationEligibility::AlreadyRegistered => {
                return Err(EventFlowError::Validation(
                    "You are already registered for this event.".to_string(),
                ));
            }
            RegistrationEligibility::Closed {
                reason: ClosedReason::AlreadyStarted,
            } => {
                return Err(EventFlowError::Validation(
                    "This event has already started or ended.".to_string(),
                ));
            }
            RegistrationEligibility::Closed {
                reason: ClosedReason::NotPublished,
            } => {
                return Err(EventFlowError::Validation(
                    "Registration is closed for this event.".to_string(),
                ));
            }
            RegistrationEligibility::Open { .. } | RegistrationEligibility::WaitlistOnly => {}
        }

        let registration = self
            .registrations
            .register_for_event(&self.event_id, notes)
            .await?;
        info!(
            event_id = %self.event_id,
            status = ?registration.status,
            "Registered from detail view"
        );

        // Refresh on mutate
        self.load().await?;

        Ok(registration)
    }

    /// Cancel the signed-in user's registration for this event.
    ///
    /// A missing or already-cancelled registration is a no-op from the
    /// user's perspective; no request is issued.
    pub async fn cancel_registration(&mut self) -> Result<()> {
        let registration = match self.snapshot {
            Some(ref snapshot) => snapshot.user_registration.clone(),
            None => None,
        };

        let Some(registration) = registration else {
            debug!(event_id = %self.event_id, "No registration to cancel");
            return Ok(());
        };

        if !registration.is_active() {
            debug!(
                event_id = %self.event_id,
                registration_id = %registration.id,
                "Registration already cancelled"
            );
            return Ok(());
        }

        self.registrations.cancel(&registration).await?;

        // Refresh on mutate
        self.load().await?;

        Ok(())
    }
}
