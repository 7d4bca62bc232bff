//! Dashboard models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::event::{Event, EventStatus, EventWire};
use crate::models::registration::Registration;

/// Headline numbers shown at the top of the dashboards
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_events: usize,
    pub total_registrations: usize,
    pub upcoming_events: usize,
    pub completed_events: usize,
}

impl DashboardStats {
    /// Derive stats from a fetched event list and a registration count
    pub fn compute(events: &[Event], total_registrations: usize, now: DateTime<Utc>) -> Self {
        let upcoming_events = events
            .iter()
            .filter(|e| e.start_date_time > now && e.status == EventStatus::Published)
            .count();
        let completed_events = events
            .iter()
            .filter(|e| e.status == EventStatus::Completed || e.end_date_time < now)
            .count();

        Self {
            total_events: events.len(),
            total_registrations,
            upcoming_events,
            completed_events,
        }
    }
}

/// Wire pairing of a registration with its (flat) event
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationWithEventWire {
    pub registration: Registration,
    pub event: EventWire,
}

/// A registration paired with its event, as shown on the attendee dashboard
#[derive(Debug, Clone)]
pub struct RegistrationWithEvent {
    pub registration: Registration,
    pub event: Event,
}

impl From<RegistrationWithEventWire> for RegistrationWithEvent {
    fn from(wire: RegistrationWithEventWire) -> Self {
        Self {
            registration: wire.registration,
            event: wire.event.into(),
        }
    }
}

/// Attendee dashboard payload as the API ships it
#[derive(Debug, Clone, Deserialize)]
pub struct AttendeeDashboardWire {
    #[serde(default)]
    pub registrations: Vec<RegistrationWithEventWire>,
    #[serde(default)]
    pub count: usize,
}

/// Attendee dashboard: the user's active registrations with their events
#[derive(Debug, Clone)]
pub struct AttendeeDashboard {
    pub registrations: Vec<RegistrationWithEvent>,
    pub count: usize,
}

impl From<AttendeeDashboardWire> for AttendeeDashboard {
    fn from(wire: AttendeeDashboardWire) -> Self {
        Self {
            count: wire.count,
            registrations: wire.registrations.into_iter().map(Into::into).collect(),
        }
    }
}

/// Organizer dashboard: the organizer's own events plus derived stats
#[derive(Debug, Clone)]
pub struct OrganizerDashboard {
    pub events: Vec<Event>,
    pub stats: DashboardStats,
}

/// Admin dashboard: all events plus derived stats
#[derive(Debug, Clone)]
pub struct AdminDashboard {
    pub events: Vec<Event>,
    pub stats: DashboardStats,
}
