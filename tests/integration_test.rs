//! Integration tests for the API client and repositories
//!
//! Every test runs against a wiremock EventFlow API; no real network
//! access is involved.

mod helpers;

use assert_matches::assert_matches;
use eventflow_client::models::event::LocationType;
use eventflow_client::EventFlowError;
use helpers::*;
use serde_json::json;

#[tokio::test]
async fn test_login_stores_token() {
    let ctx = TestContext::signed_out().await;
    ctx.mock.mock_login("issued-token").await;

    ctx.services
        .auth_service
        .login("admin@eventflow.com", "admin123")
        .await
        .expect("login failed");

    assert_eq!(ctx.session.token().as_deref(), Some("issued-token"));
    assert!(!ctx.session.is_expired());
}

#[tokio::test]
async fn test_failed_login_is_not_session_expiry() {
    let ctx = TestContext::signed_out().await;
    ctx.mock
        .mock_rejection("POST", "/auth/login", 401, "Bad credentials")
        .await;

    let result = ctx
        .services
        .auth_service
        .login("admin@eventflow.com", "wrong")
        .await;

    assert_matches!(result, Err(EventFlowError::Api { status: 401, .. }));
    // A rejected login never triggers the global session-expired flow
    assert!(!ctx.session.is_expired());
    assert_eq!(ctx.session.redirect_path(), None);
}

#[tokio::test]
async fn test_event_list_unwraps_page_and_nests_location() {
    let ctx = TestContext::new().await;
    ctx.mock
        .mock_events_list(vec![
            published_event("event-1", 500),
            online_event("event-2", "https://zoom.us/meeting/123"),
        ])
        .await;

    let events = ctx.services.event_service.list().await.expect("list failed");

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].location.location_type, LocationType::Physical);
    assert_eq!(events[0].location.city.as_deref(), Some("San Francisco"));
    assert_eq!(events[1].location.location_type, LocationType::Online);
    assert_eq!(
        events[1].location.virtual_link.as_deref(),
        Some("https://zoom.us/meeting/123")
    );
}

#[tokio::test]
async fn test_created_online_event_round_trips_location() {
    let ctx = TestContext::new().await;
    let stored = online_event("event-9", "https://meet.example.com/42");
    ctx.mock.mock_create_event(stored.clone()).await;
    ctx.mock.mock_event("event-9", stored).await;

    let mut draft = eventflow_client::models::event::EventDraft::template(chrono::Utc::now());
    draft.title = "React Workshop".to_string();
    draft.description = "Hands-on workshop".to_string();
    draft.location =
        eventflow_client::models::event::Location::online("https://meet.example.com/42");

    let created = ctx
        .services
        .event_service
        .create(&draft)
        .await
        .expect("create failed");
    let fetched = ctx
        .services
        .event_service
        .get_by_id(&created.id)
        .await
        .expect("fetch failed");

    assert_eq!(fetched.location.location_type, LocationType::Online);
    assert_eq!(
        fetched.location.virtual_link.as_deref(),
        Some("https://meet.example.com/42")
    );
}

#[tokio::test]
async fn test_invalid_draft_rejected_without_network_call() {
    let ctx = TestContext::new().await;
    // No POST /events mock mounted: a request would return 404 and the
    // test would fail with an Api error instead of a Validation error.

    let mut draft = eventflow_client::models::event::EventDraft::template(chrono::Utc::now());
    draft.title = "Broken".to_string();
    draft.description = "deadline after start".to_string();
    draft.location = eventflow_client::models::event::Location::physical(None, "Berlin", "Germany");
    draft.registration_deadline = draft.start_date_time + chrono::Duration::hours(1);

    let result = ctx.services.event_service.create(&draft).await;
    assert_matches!(result, Err(EventFlowError::Validation(_)));
}

#[tokio::test]
async fn test_missing_event_maps_to_not_found() {
    let ctx = TestContext::new().await;
    ctx.mock.mock_event_not_found("event-gone").await;

    let result = ctx.services.event_service.get_by_id("event-gone").await;

    assert_matches!(
        result,
        Err(EventFlowError::EventNotFound { ref event_id }) if event_id == "event-gone"
    );
}

#[tokio::test]
async fn test_unauthorized_call_expires_session() {
    let ctx = TestContext::new().await;
    ctx.mock.mock_unauthorized("/events").await;

    let result = ctx.services.event_service.list().await;

    assert_matches!(result, Err(EventFlowError::SessionExpired));
    assert_eq!(ctx.session.token(), None);
    assert!(ctx.session.is_expired());
    assert_eq!(ctx.session.redirect_path(), Some("/login?expired=1"));
}

#[tokio::test]
async fn test_server_rejection_message_surfaces_verbatim() {
    let ctx = TestContext::new().await;
    ctx.mock
        .mock_rejection(
            "PUT",
            "/events/event-1",
            400,
            "Validation failed: capacity - must be greater than or equal to 1",
        )
        .await;

    let mut draft = eventflow_client::models::event::EventDraft::template(chrono::Utc::now());
    draft.title = "Valid title".to_string();
    draft.description = "Valid description".to_string();
    draft.location = eventflow_client::models::event::Location::physical(None, "Berlin", "Germany");

    let err = ctx
        .services
        .event_service
        .update("event-1", &draft)
        .await
        .expect_err("server rejection expected");

    assert_eq!(
        err.user_message(),
        "Validation failed: capacity - must be greater than or equal to 1"
    );
}

#[tokio::test]
async fn test_profile_and_capabilities_resolution() {
    let ctx = TestContext::new().await;
    ctx.mock.mock_profile(profile("organizer-1", "ORGANIZER")).await;

    let context = ctx
        .services
        .auth_service
        .establish_context()
        .await
        .expect("context failed");

    assert!(context.can(eventflow_client::Capability::ManageOwnEvents));
    assert!(context.can(eventflow_client::Capability::ViewOrganizerDashboard));
    assert!(!context.can(eventflow_client::Capability::ManageAllEvents));
}

#[tokio::test]
async fn test_attendee_dashboard_maps_events() {
    let ctx = TestContext::new().await;
    ctx.mock
        .mock_attendee_dashboard(json!({
            "registrations": [{
                "registration": registration("reg-1", "event-1", test_user_id(), "CONFIRMED"),
                "event": published_event("event-1", 100)
            }],
            "count": 1
        }))
        .await;

    let dashboard = ctx
        .services
        .dashboard_service
        .attendee()
        .await
        .expect("dashboard failed");

    assert_eq!(dashboard.count, 1);
    assert_eq!(dashboard.registrations.len(), 1);
    let entry = &dashboard.registrations[0];
    assert_eq!(entry.event.location.location_type, LocationType::Physical);
    assert!(entry.registration.is_confirmed());
}

#[tokio::test]
async fn test_organizer_dashboard_derives_stats() {
    let ctx = TestContext::new().await;
    ctx.mock.mock_dashboard_gate("organizer").await;
    ctx.mock
        .mock_events_list(vec![
            published_event("event-1", 100),
            online_event("event-2", "https://zoom.us/meeting/123"),
        ])
        .await;
    ctx.mock
        .mock_all_registrations(vec![
            registration("reg-1", "event-1", "user-a", "CONFIRMED"),
            registration("reg-2", "event-other", "user-b", "CONFIRMED"),
        ])
        .await;
    ctx.mock.mock_profile(profile("organizer-1", "ORGANIZER")).await;

    let user = ctx
        .services
        .user_service
        .profile()
        .await
        .expect("profile failed");
    let dashboard = ctx
        .services
        .dashboard_service
        .organizer(&user)
        .await
        .expect("dashboard failed");

    // Both listed events belong to organizer-1; only reg-1 targets them
    assert_eq!(dashboard.stats.total_events, 2);
    assert_eq!(dashboard.stats.total_registrations, 1);
    assert_eq!(dashboard.stats.upcoming_events, 2);
    assert_eq!(dashboard.stats.completed_events, 0);
}

#[tokio::test]
async fn test_attendance_update() {
    let ctx = TestContext::new().await;
    ctx.mock.mock_attendance("reg-1").await;

    ctx.services
        .registration_service
        .set_attendance("reg-1", true)
        .await
        .expect("attendance update failed");
}

#[tokio::test]
async fn test_sign_up_posts_without_credentials() {
    let ctx = TestContext::signed_out().await;
    ctx.mock.mock_signup().await;

    let request = eventflow_client::models::user::SignupRequest {
        first_name: "New".to_string(),
        last_name: "Attendee".to_string(),
        email: "new@eventflow.com".to_string(),
        phone: "+1234567899".to_string(),
        password: "s3cret".to_string(),
        role: eventflow_client::models::user::UserRole::Attendee,
    };

    ctx.services
        .auth_service
        .sign_up(&request)
        .await
        .expect("sign up failed");
    // Account creation does not log the user in
    assert!(!ctx.session.is_authenticated());
}

#[tokio::test]
async fn test_profile_update_round_trips() {
    let ctx = TestContext::new().await;
    ctx.mock.mock_update_profile(profile("attendee-1", "ATTENDEE")).await;

    let update = eventflow_client::models::user::ProfileUpdate {
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        phone: "+1234567890".to_string(),
        profile_image: None,
        preferences: vec![eventflow_client::models::event::EventCategory::Conference],
        notifications: true,
    };

    let user = ctx
        .services
        .user_service
        .update_profile(&update)
        .await
        .expect("profile update failed");
    assert_eq!(user.id, "attendee-1");
}

#[tokio::test]
async fn test_event_form_create_submits_flattened_draft() {
    let ctx = TestContext::new().await;
    ctx.mock
        .mock_create_event(online_event("event-7", "https://meet.example.com/7"))
        .await;

    let mut form = eventflow_client::views::EventFormView::create(
        ctx.services.event_service.clone(),
        chrono::Utc::now(),
    );
    assert!(!form.is_edit());
    form.draft.title = "React Workshop".to_string();
    form.draft.description = "Hands-on workshop".to_string();
    form.draft.location =
        eventflow_client::models::event::Location::online("https://meet.example.com/7");

    let created = form.submit().await.expect("submit failed");
    assert_eq!(created.id, "event-7");
}
