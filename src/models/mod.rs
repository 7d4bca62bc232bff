//! Data models module
//!
//! This module contains all data structures used throughout the client

pub mod dashboard;
pub mod event;
pub mod registration;
pub mod user;

// Re-export commonly used models
pub use dashboard::{
    AdminDashboard, AttendeeDashboard, DashboardStats, OrganizerDashboard, RegistrationWithEvent,
};
pub use event::{
    Event, EventCategory, EventDraft, EventPage, EventStatus, EventWire, Location, LocationType,
};
pub use registration::{AttendanceUpdate, Registration, RegistrationRequest, RegistrationStatus};
pub use user::{
    LoginRequest, LoginResponse, ProfileUpdate, SignupRequest, User, UserPreferences,
    UserProfileWire, UserRole,
};
