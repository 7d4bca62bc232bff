//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::event::EventCategory;

/// User role, fixed after account creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Organizer,
    Attendee,
    Admin,
}

/// Notification and category preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub categories: Vec<EventCategory>,
    pub notifications: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            notifications: true,
        }
    }
}

/// Signed-in user as consumed by views
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub role: UserRole,
    pub profile_image: Option<String>,
    pub preferences: UserPreferences,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}

impl User {
    /// Display name used in greetings and organizer listings
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Profile as the API ships it, with preferences flattened
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileWire {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub role: UserRole,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub preferences: Option<Vec<EventCategory>>,
    #[serde(default)]
    pub notifications: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}

impl From<UserProfileWire> for User {
    fn from(wire: UserProfileWire) -> Self {
        Self {
            id: wire.id,
            email: wire.email,
            first_name: wire.first_name,
            last_name: wire.last_name,
            phone: wire.phone,
            role: wire.role,
            profile_image: wire.profile_image,
            preferences: UserPreferences {
                categories: wire.preferences.unwrap_or_default(),
                notifications: wire.notifications.unwrap_or(true),
            },
            created_at: wire.created_at,
            updated_at: wire.updated_at,
            is_active: wire.is_active,
        }
    }
}

/// Profile update request body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub preferences: Vec<EventCategory>,
    pub notifications: bool,
}

/// Account creation request body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: UserRole,
}

/// Login request body
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response carrying the bearer token
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_wire_assembles_preferences() {
        let json = r#"{
            "id": "organizer-1",
            "email": "organizer@eventflow.com",
            "firstName": "Event",
            "lastName": "Organizer",
            "phone": "+1234567891",
            "role": "ORGANIZER",
            "preferences": ["CONFERENCE", "WORKSHOP"],
            "notifications": true,
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-01T00:00:00Z",
            "isActive": true
        }"#;

        let user: User = serde_json::from_str::<UserProfileWire>(json).unwrap().into();
        assert_eq!(user.role, UserRole::Organizer);
        assert_eq!(user.preferences.categories.len(), 2);
        assert!(user.preferences.notifications);
        assert_eq!(user.display_name(), "Event Organizer");
    }

    #[test]
    fn test_missing_preferences_default() {
        let json = r#"{
            "id": "attendee-1",
            "email": "a@eventflow.com",
            "firstName": "A",
            "lastName": "B",
            "phone": "+1",
            "role": "ATTENDEE",
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-01T00:00:00Z",
            "isActive": true
        }"#;

        let user: User = serde_json::from_str::<UserProfileWire>(json).unwrap().into();
        assert!(user.preferences.categories.is_empty());
        assert!(user.preferences.notifications);
    }

    #[test]
    fn test_login_response_field_name() {
        let json = r#"{"accessToken": "token-123"}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "token-123");
    }
}
