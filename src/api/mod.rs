//! API access module
//!
//! This module handles communication with the EventFlow REST API

pub mod client;
pub mod repositories;

// Re-export commonly used API components
pub use client::ApiClient;
pub use repositories::{
    DashboardRepository, EventRepository, RegistrationRepository, UserRepository,
};
