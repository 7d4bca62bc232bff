//! Services module
//!
//! This module contains the business logic services layered over the
//! API repositories

pub mod auth;
pub mod capacity;
pub mod dashboard;
pub mod event;
pub mod registration;
pub mod user;

// Re-export commonly used services
pub use auth::AuthService;
pub use capacity::{
    CapacityService, CapacitySnapshot, ClosedReason, RegistrationEligibility,
};
pub use dashboard::DashboardService;
pub use event::EventService;
pub use registration::RegistrationService;
pub use user::UserService;

use crate::api::client::ApiClient;
use crate::api::repositories::{
    DashboardRepository, EventRepository, RegistrationRepository, UserRepository,
};
use crate::config::settings::Settings;
use crate::state::session::Session;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub event_service: EventService,
    pub registration_service: RegistrationService,
    pub capacity_service: CapacityService,
    pub dashboard_service: DashboardService,
    session: Session,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings, session: Session) -> Result<Self> {
        let client = ApiClient::new(&settings.api, session.clone())?;

        let events = EventRepository::new(client.clone());
        let registrations = RegistrationRepository::new(client.clone());
        let users = UserRepository::new(client.clone());
        let dashboards = DashboardRepository::new(client.clone());

        let auth_service = AuthService::new(client, users.clone());
        let user_service = UserService::new(users);
        let event_service = EventService::new(events.clone());
        let registration_service = RegistrationService::new(registrations.clone());
        let capacity_service = CapacityService::new(events.clone(), registrations.clone());
        let dashboard_service = DashboardService::new(dashboards, events, registrations);

        Ok(Self {
            auth_service,
            user_service,
            event_service,
            registration_service,
            capacity_service,
            dashboard_service,
            session,
        })
    }

    /// Session shared by every service in this factory
    pub fn session(&self) -> &Session {
        &self.session
    }
}
