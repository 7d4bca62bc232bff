//! API repositories module
//!
//! This module contains all repository implementations for remote data
//! access. The server is authoritative for every entity; repositories
//! hand out transient copies only.

pub mod dashboard;
pub mod event;
pub mod registration;
pub mod user;

// Re-export repositories
pub use dashboard::DashboardRepository;
pub use event::EventRepository;
pub use registration::RegistrationRepository;
pub use user::UserRepository;
