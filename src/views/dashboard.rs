//! Dashboard views
//!
//! One view per role, each gated by the capability set resolved at
//! session start and each owning its own fetched copy of the data.

use chrono::Utc;
use tracing::debug;

use crate::models::dashboard::{AdminDashboard, AttendeeDashboard, OrganizerDashboard};
use crate::models::event::{Event, EventStatus};
use crate::services::dashboard::DashboardService;
use crate::services::event::EventService;
use crate::state::capabilities::{AuthContext, Capability};
use crate::utils::errors::Result;
use crate::views::RefreshTrigger;

/// Number of suggested events shown on the attendee dashboard
const UPCOMING_SUGGESTIONS: usize = 6;

/// Attendee dashboard: own registrations plus suggested upcoming events
pub struct AttendeeDashboardView {
    dashboards: DashboardService,
    events: EventService,
    context: AuthContext,
    pub dashboard: Option<AttendeeDashboard>,
    pub upcoming: Vec<Event>,
}

impl AttendeeDashboardView {
    pub fn new(dashboards: DashboardService, events: EventService, context: AuthContext) -> Self {
        Self {
            dashboards,
            events,
            context,
            dashboard: None,
            upcoming: Vec::new(),
        }
    }

    /// Fetch registrations and derive the upcoming-event suggestions
    pub async fn load(&mut self) -> Result<()> {
        self.context.require(Capability::ViewAttendeeDashboard)?;

        let dashboard = self.dashboards.attendee().await?;
        let events = self.events.list().await?;

        let now = Utc::now();
        self.upcoming = events
            .into_iter()
            .filter(|e| {
                e.status == EventStatus::Published
                    && e.start_date_time > now
                    && !dashboard
                        .registrations
                        .iter()
                        .any(|r| r.registration.event_id == e.id)
            })
            .take(UPCOMING_SUGGESTIONS)
            .collect();
        self.dashboard = Some(dashboard);

        Ok(())
    }

    /// Re-issue the full fetch
    pub async fn refresh(&mut self, trigger: RefreshTrigger) -> Result<()> {
        debug!(trigger = ?trigger, "Refreshing attendee dashboard");
        self.load().await
    }
}

/// Organizer dashboard: own events and derived stats
pub struct OrganizerDashboardView {
    dashboards: DashboardService,
    context: AuthContext,
    pub dashboard: Option<OrganizerDashboard>,
}

impl OrganizerDashboardView {
    pub fn new(dashboards: DashboardService, context: AuthContext) -> Self {
        Self {
            dashboards,
            context,
            dashboard: None,
        }
    }

    pub async fn load(&mut self) -> Result<()> {
        self.context.require(Capability::ViewOrganizerDashboard)?;
        self.dashboard = Some(self.dashboards.organizer(&self.context.user).await?);

        Ok(())
    }

    pub async fn refresh(&mut self, trigger: RefreshTrigger) -> Result<()> {
        debug!(trigger = ?trigger, "Refreshing organizer dashboard");
        self.load().await
    }
}

/// Admin dashboard: all events and derived stats
pub struct AdminDashboardView {
    dashboards: DashboardService,
    context: AuthContext,
    pub dashboard: Option<AdminDashboard>,
}

impl AdminDashboardView {
    pub fn new(dashboards: DashboardService, context: AuthContext) -> Self {
        Self {
            dashboards,
            context,
            dashboard: None,
        }
    }

    pub async fn load(&mut self) -> Result<()> {
        self.context.require(Capability::ViewAdminDashboard)?;
        self.dashboard = Some(self.dashboards.admin().await?);

        Ok(())
    }

    pub async fn refresh(&mut self, trigger: RefreshTrigger) -> Result<()> {
        debug!(trigger = ?trigger, "Refreshing admin dashboard");
        self.load().await
    }
}
