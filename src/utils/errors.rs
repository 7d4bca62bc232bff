//! Error handling for the EventFlow client
//!
//! This module defines the main error types used throughout the client
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for EventFlow client operations
#[derive(Error, Debug)]
pub enum EventFlowError {
    #[error("Session expired")]
    SessionExpired,

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: String },

    #[error("Registration not found: {registration_id}")]
    RegistrationNotFound { registration_id: String },

    #[error("User profile not found")]
    ProfileNotFound,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias for EventFlow client operations
pub type Result<T> = std::result::Result<T, EventFlowError>;

impl EventFlowError {
    /// Check if a manual retry of the same action can succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            EventFlowError::SessionExpired => false,
            EventFlowError::EventNotFound { .. } => false,
            EventFlowError::RegistrationNotFound { .. } => false,
            EventFlowError::ProfileNotFound => false,
            EventFlowError::Api { status, .. } => *status >= 500,
            EventFlowError::Validation(_) => false,
            EventFlowError::PermissionDenied(_) => false,
            EventFlowError::Config(_) => false,
            EventFlowError::Http(_) => true,
            EventFlowError::Serialization(_) => false,
            EventFlowError::Io(_) => true,
            EventFlowError::UrlParse(_) => false,
        }
    }

    /// Message shown to the user for this error.
    ///
    /// Server-provided rejection messages take precedence verbatim;
    /// transport failures collapse into a generic retry prompt.
    pub fn user_message(&self) -> String {
        match self {
            EventFlowError::SessionExpired => {
                "Session expired. Please log in again.".to_string()
            }
            EventFlowError::EventNotFound { .. } => {
                "Event not found or has been cancelled".to_string()
            }
            EventFlowError::RegistrationNotFound { .. } => {
                "Registration not found".to_string()
            }
            EventFlowError::ProfileNotFound => "User profile not found".to_string(),
            EventFlowError::Api { message, .. } if !message.is_empty() => message.clone(),
            EventFlowError::Api { status, .. } => {
                format!("Request failed with status {}", status)
            }
            EventFlowError::Validation(message) => message.clone(),
            EventFlowError::PermissionDenied(message) => message.clone(),
            EventFlowError::Config(message) => message.clone(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}
