//! Canned wire payloads for the integration tests
//!
//! Events are dated far in the future so eligibility derivation sees
//! them as upcoming regardless of when the suite runs.

use serde_json::{json, Value};

/// Default test user
pub fn test_user_id() -> &'static str {
    "attendee-1"
}

/// A published physical event with the given capacity
pub fn published_event(event_id: &str, capacity: u32) -> Value {
    json!({
        "id": event_id,
        "title": "Tech Conference 2099",
        "description": "Annual technology conference",
        "category": "CONFERENCE",
        "organizerId": "organizer-1",
        "startDateTime": "2099-03-15T09:00:00Z",
        "endDateTime": "2099-03-15T17:00:00Z",
        "locationType": "PHYSICAL",
        "address": "123 Tech Center",
        "city": "San Francisco",
        "country": "USA",
        "capacity": capacity,
        "registrationDeadline": "2099-03-10T23:59:59Z",
        "status": "PUBLISHED",
        "tags": ["technology", "networking"],
        "createdAt": "2025-01-01T00:00:00Z",
        "updatedAt": "2025-01-01T00:00:00Z",
        "registeredCount": 0
    })
}

/// A published online event with the given virtual link
pub fn online_event(event_id: &str, virtual_link: &str) -> Value {
    json!({
        "id": event_id,
        "title": "React Workshop",
        "description": "Hands-on workshop",
        "category": "WORKSHOP",
        "organizerId": "organizer-1",
        "startDateTime": "2099-02-20T14:00:00Z",
        "endDateTime": "2099-02-20T18:00:00Z",
        "locationType": "ONLINE",
        "virtualLink": virtual_link,
        "capacity": 50,
        "registrationDeadline": "2099-02-18T23:59:59Z",
        "status": "PUBLISHED",
        "tags": ["react", "frontend"],
        "createdAt": "2025-01-05T00:00:00Z",
        "updatedAt": "2025-01-05T00:00:00Z",
        "registeredCount": 0
    })
}

/// A registration record
pub fn registration(id: &str, event_id: &str, user_id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "eventId": event_id,
        "userId": user_id,
        "status": status,
        "registrationDate": "2025-02-01T10:00:00Z",
        "attended": false
    })
}

/// A user profile with the given role
pub fn profile(user_id: &str, role: &str) -> Value {
    json!({
        "id": user_id,
        "email": format!("{}@eventflow.com", user_id),
        "firstName": "Test",
        "lastName": "User",
        "phone": "+1234567890",
        "role": role,
        "preferences": ["CONFERENCE"],
        "notifications": true,
        "createdAt": "2025-01-01T00:00:00Z",
        "updatedAt": "2025-01-01T00:00:00Z",
        "isActive": true
    })
}
