//! Dashboard service implementation
//!
//! The attendee payload comes from the server; organizer and admin
//! stats are derived client-side from the listed events and
//! registrations after the role-gated endpoint has been cleared.

use chrono::Utc;
use tracing::debug;

use crate::api::repositories::{DashboardRepository, EventRepository, RegistrationRepository};
use crate::models::dashboard::{AdminDashboard, AttendeeDashboard, DashboardStats, OrganizerDashboard};
use crate::models::user::User;
use crate::utils::errors::Result;

/// Dashboard service aggregating per-role dashboard data
#[derive(Debug, Clone)]
pub struct DashboardService {
    dashboards: DashboardRepository,
    events: EventRepository,
    registrations: RegistrationRepository,
}

impl DashboardService {
    /// Create a new DashboardService instance
    pub fn new(
        dashboards: DashboardRepository,
        events: EventRepository,
        registrations: RegistrationRepository,
    ) -> Self {
        Self {
            dashboards,
            events,
            registrations,
        }
    }

    /// Active registrations with their events, as reported by the server
    pub async fn attendee(&self) -> Result<AttendeeDashboard> {
        self.dashboards.attendee().await
    }

    /// The organizer's own events plus derived stats
    pub async fn organizer(&self, user: &User) -> Result<OrganizerDashboard> {
        self.dashboards.organizer().await?;

        let events: Vec<_> = self
            .events
            .list()
            .await?
            .into_iter()
            .filter(|e| e.organizer_id == user.id)
            .collect();
        let registrations = self.registrations.list_all().await?;
        let own_registrations = registrations
            .iter()
            .filter(|r| events.iter().any(|e| e.id == r.event_id))
            .count();

        let stats = DashboardStats::compute(&events, own_registrations, Utc::now());
        debug!(
            user_id = %user.id,
            total_events = stats.total_events,
            "Organizer dashboard assembled"
        );

        Ok(OrganizerDashboard { events, stats })
    }

    /// All events plus derived stats
    pub async fn admin(&self) -> Result<AdminDashboard> {
        self.dashboards.admin().await?;

        let events = self.events.list().await?;
        let registrations = self.registrations.list_all().await?;
        let stats = DashboardStats::compute(&events, registrations.len(), Utc::now());
        debug!(total_events = stats.total_events, "Admin dashboard assembled");

        Ok(AdminDashboard { events, stats })
    }
}
