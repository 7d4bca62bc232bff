//! Capacity reconciliation service
//!
//! Derives, for one event and the signed-in user, the confirmed count,
//! the remaining seats, the user's own registration and whether
//! registering is currently possible. Admission control itself (who is
//! CONFIRMED vs WAITLISTED under concurrent registration) is the
//! server's responsibility; this service only reconciles fetched state.

use chrono::{DateTime, Utc};
use futures::try_join;
use tracing::debug;

use crate::api::repositories::{EventRepository, RegistrationRepository};
use crate::models::event::{Event, EventStatus};
use crate::models::registration::Registration;
use crate::utils::errors::Result;

/// Why registration is closed outright
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosedReason {
    /// Event is not in PUBLISHED state
    NotPublished,
    /// Event has already started or ended
    AlreadyStarted,
}

/// Whether the signed-in user can register right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationEligibility {
    /// Seats remain; direct registration is offered
    Open { remaining: u32 },
    /// No seats remain. The server may still waitlist, so the UI offers
    /// the waitlist framing instead of blocking outright.
    WaitlistOnly,
    /// The user already holds a registration record for this event
    AlreadyRegistered,
    /// Registration is not possible in the event's current state
    Closed { reason: ClosedReason },
}

impl RegistrationEligibility {
    /// A registration request may be issued in this state
    pub fn allows_registration(&self) -> bool {
        matches!(
            self,
            RegistrationEligibility::Open { .. } | RegistrationEligibility::WaitlistOnly
        )
    }
}

/// Derived registration state for one event and one user
#[derive(Debug, Clone)]
pub struct CapacitySnapshot {
    pub event: Event,
    /// Count of CONFIRMED registrations, recomputed from the fetched
    /// registration list rather than taken from the event record
    pub registered_count: u32,
    pub remaining: u32,
    /// The user's registration for this event, any status. Records are
    /// never deleted, so a cancelled registration still shows up here.
    pub user_registration: Option<Registration>,
    pub eligibility: RegistrationEligibility,
}

impl CapacitySnapshot {
    /// Derive a snapshot from already-fetched records
    pub fn derive(
        event: Event,
        event_registrations: &[Registration],
        user_registrations: &[Registration],
        now: DateTime<Utc>,
    ) -> Self {
        let registered_count = event_registrations
            .iter()
            .filter(|r| r.is_confirmed())
            .count() as u32;
        let remaining = event.capacity.saturating_sub(registered_count);
        let user_registration = user_registrations
            .iter()
            .find(|r| r.event_id == event.id)
            .cloned();

        let eligibility = if user_registration.is_some() {
            RegistrationEligibility::AlreadyRegistered
        } else if event.status != EventStatus::Published {
            RegistrationEligibility::Closed {
                reason: ClosedReason::NotPublished,
            }
        } else if !event.is_upcoming(now) {
            RegistrationEligibility::Closed {
                reason: ClosedReason::AlreadyStarted,
            }
        } else if remaining == 0 {
            RegistrationEligibility::WaitlistOnly
        } else {
            RegistrationEligibility::Open { remaining }
        };

        Self {
            event,
            registered_count,
            remaining,
            user_registration,
            eligibility,
        }
    }

    /// No seats remain
    pub fn is_full(&self) -> bool {
        self.remaining == 0
    }
}

/// Capacity reconciliation service
#[derive(Debug, Clone)]
pub struct CapacityService {
    events: EventRepository,
    registrations: RegistrationRepository,
}

impl CapacityService {
    /// Create a new CapacityService instance
    pub fn new(events: EventRepository, registrations: RegistrationRepository) -> Self {
        Self {
            events,
            registrations,
        }
    }

    /// Fetch the event, its registrations and the user's registrations,
    /// then derive the snapshot.
    ///
    /// Every state change re-enters here before re-rendering; there is
    /// no incremental update path. Overlapping refreshes from several
    /// views are tolerated, not deduplicated.
    pub async fn reconcile(&self, event_id: &str, user_id: &str) -> Result<CapacitySnapshot> {
        let (event, event_registrations, user_registrations) = try_join!(
            self.events.get_by_id(event_id),
            self.registrations.list_for_event(event_id),
            self.registrations.list_for_user(user_id),
        )?;

        let snapshot = CapacitySnapshot::derive(
            event,
            &event_registrations,
            &user_registrations,
            Utc::now(),
        );
        debug!(
            event_id = event_id,
            registered_count = snapshot.registered_count,
            remaining = snapshot.remaining,
            eligibility = ?snapshot.eligibility,
            "Capacity reconciled"
        );

        Ok(snapshot)
    }
}
