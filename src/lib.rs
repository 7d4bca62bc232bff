//! EventFlow client
//!
//! A headless client library for the EventFlow event management
//! platform. This library provides typed repositories over the remote
//! REST API, capacity/registration-state reconciliation, role-gated
//! view models for dashboards and event management, and session
//! lifecycle handling.

pub mod api;
pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{EventFlowError, Result};

// Re-export main components for easy access
pub use services::{CapacityService, CapacitySnapshot, RegistrationEligibility, ServiceFactory};
pub use state::{AuthContext, Capability, Session};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
