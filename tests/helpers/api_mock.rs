//! Mock EventFlow API server for testing
//!
//! This module wraps wiremock with helpers for the endpoints the client
//! consumes, including negative mocks that fail the test if a request
//! reaches them at all.

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock EventFlow API server
pub struct EventFlowMockServer {
    pub server: MockServer,
}

impl EventFlowMockServer {
    /// Start a fresh mock server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to point the client configuration at
    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    /// Mock a successful login returning the given token
    pub async fn mock_login(&self, token: &str) {
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "accessToken": token })),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock a successful account creation
    pub async fn mock_signup(&self) {
        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
            .mount(&self.server)
            .await;
    }

    /// Mock a successful profile update echoing back the stored profile
    pub async fn mock_update_profile(&self, stored: Value) {
        Mock::given(method("PUT"))
            .and(path("/users/profile"))
            .respond_with(ResponseTemplate::new(200).set_body_json(stored))
            .mount(&self.server)
            .await;
    }

    /// Mock the paged events listing
    pub async fn mock_events_list(&self, events: Vec<Value>) {
        Mock::given(method("GET"))
            .and(path("/events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "content": events })))
            .mount(&self.server)
            .await;
    }

    /// Mock a single event lookup
    pub async fn mock_event(&self, event_id: &str, event: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/events/{}", event_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(event))
            .mount(&self.server)
            .await;
    }

    /// Mock a missing (deleted or cancelled) event
    pub async fn mock_event_not_found(&self, event_id: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/events/{}", event_id)))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({ "message": "Event not found" })),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock event creation echoing back the given stored event
    pub async fn mock_create_event(&self, stored: Value) {
        Mock::given(method("POST"))
            .and(path("/events"))
            .respond_with(ResponseTemplate::new(201).set_body_json(stored))
            .mount(&self.server)
            .await;
    }

    /// Mock the registrations listing for one event
    pub async fn mock_event_registrations(&self, event_id: &str, registrations: Vec<Value>) {
        Mock::given(method("GET"))
            .and(path(format!("/registrations/event/{}", event_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(registrations)))
            .mount(&self.server)
            .await;
    }

    /// Mock the registrations listing for one user
    pub async fn mock_user_registrations(&self, user_id: &str, registrations: Vec<Value>) {
        Mock::given(method("GET"))
            .and(path(format!("/registrations/user/{}", user_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(registrations)))
            .mount(&self.server)
            .await;
    }

    /// Mock a successful registration request
    pub async fn mock_register(&self, registration: Value) {
        Mock::given(method("POST"))
            .and(path("/registrations"))
            .respond_with(ResponseTemplate::new(201).set_body_json(registration))
            .mount(&self.server)
            .await;
    }

    /// Fail the test if any registration request is issued
    pub async fn mock_register_never(&self) {
        Mock::given(method("POST"))
            .and(path("/registrations"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    /// Mock a successful registration cancel
    pub async fn mock_cancel(&self, registration_id: &str) {
        Mock::given(method("DELETE"))
            .and(path(format!("/registrations/{}", registration_id)))
            .respond_with(ResponseTemplate::new(204))
            .mount(&self.server)
            .await;
    }

    /// Fail the test if any cancel request is issued
    pub async fn mock_cancel_never(&self, registration_id: &str) {
        Mock::given(method("DELETE"))
            .and(path(format!("/registrations/{}", registration_id)))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    /// Mock a successful attendance update
    pub async fn mock_attendance(&self, registration_id: &str) {
        Mock::given(method("PUT"))
            .and(path(format!("/registrations/{}/attendance", registration_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
            .mount(&self.server)
            .await;
    }

    /// Mock the signed-in user's profile
    pub async fn mock_profile(&self, profile: Value) {
        Mock::given(method("GET"))
            .and(path("/users/profile"))
            .respond_with(ResponseTemplate::new(200).set_body_json(profile))
            .mount(&self.server)
            .await;
    }

    /// Mock the attendee dashboard payload
    pub async fn mock_attendee_dashboard(&self, payload: Value) {
        Mock::given(method("GET"))
            .and(path("/dashboard/attendee"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload))
            .mount(&self.server)
            .await;
    }

    /// Mock the role-gated organizer/admin dashboard endpoints
    pub async fn mock_dashboard_gate(&self, role: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/dashboard/{}", role)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&self.server)
            .await;
    }

    /// Mock the all-registrations listing
    pub async fn mock_all_registrations(&self, registrations: Vec<Value>) {
        Mock::given(method("GET"))
            .and(path("/registrations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(registrations)))
            .mount(&self.server)
            .await;
    }

    /// Mock any GET on the given path answering 401
    pub async fn mock_unauthorized(&self, mock_path: &str) {
        Mock::given(method("GET"))
            .and(path(mock_path))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({ "message": "Token expired" })),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock a rejection with a server-provided message
    pub async fn mock_rejection(&self, http_method: &str, mock_path: &str, status: u16, message: &str) {
        Mock::given(method(http_method))
            .and(path(mock_path))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "message": message })))
            .mount(&self.server)
            .await;
    }
}
