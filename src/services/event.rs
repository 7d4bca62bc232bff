//! Event service implementation
//!
//! Wraps the event repository with the client-side submission guards.
//! The guards only save round-trips; the server remains the final
//! authority and its rejection messages are surfaced verbatim.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::api::repositories::EventRepository;
use crate::models::event::{Event, EventDraft};
use crate::utils::errors::{EventFlowError, Result};

/// Event service for listing and managing events
#[derive(Debug, Clone)]
pub struct EventService {
    events: EventRepository,
}

impl EventService {
    /// Create a new EventService instance
    pub fn new(events: EventRepository) -> Self {
        Self { events }
    }

    /// List all events
    pub async fn list(&self) -> Result<Vec<Event>> {
        self.events.list().await
    }

    /// Fetch one event
    pub async fn get_by_id(&self, id: &str) -> Result<Event> {
        self.events.get_by_id(id).await
    }

    /// Validate and create an event.
    ///
    /// A draft failing validation is rejected without a network call.
    pub async fn create(&self, draft: &EventDraft) -> Result<Event> {
        validate_draft(draft, Utc::now())?;

        let event = self.events.create(draft).await?;
        info!(event_id = %event.id, "Event created through service");
        Ok(event)
    }

    /// Validate and update an event
    pub async fn update(&self, id: &str, draft: &EventDraft) -> Result<Event> {
        validate_draft(draft, Utc::now())?;

        self.events.update(id, draft).await
    }

    /// Delete an event
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.events.delete(id).await
    }
}

/// Pre-submit draft validation
pub fn validate_draft(draft: &EventDraft, now: DateTime<Utc>) -> Result<()> {
    debug!(title = %draft.title, "Validating event draft");

    if draft.title.trim().is_empty() || draft.description.trim().is_empty() {
        return Err(EventFlowError::Validation(
            "Title and description are required.".to_string(),
        ));
    }
    if draft.start_date_time <= now {
        return Err(EventFlowError::Validation(
            "Start date/time must be a valid future date.".to_string(),
        ));
    }
    if draft.end_date_time <= now {
        return Err(EventFlowError::Validation(
            "End date/time must be a valid future date.".to_string(),
        ));
    }
    if draft.end_date_time <= draft.start_date_time {
        return Err(EventFlowError::Validation(
            "End date/time must be after start date/time.".to_string(),
        ));
    }
    if draft.registration_deadline <= now {
        return Err(EventFlowError::Validation(
            "Registration deadline must be a valid future date.".to_string(),
        ));
    }
    if draft.registration_deadline >= draft.start_date_time {
        return Err(EventFlowError::Validation(
            "Registration deadline must be before start date/time.".to_string(),
        ));
    }
    if draft.capacity < 1 {
        return Err(EventFlowError::Validation(
            "Capacity must be at least 1.".to_string(),
        ));
    }

    if draft.location.requires_venue() {
        let city_missing = draft
            .location
            .city
            .as_deref()
            .map_or(true, |c| c.trim().is_empty());
        let country_missing = draft
            .location
            .country
            .as_deref()
            .map_or(true, |c| c.trim().is_empty());
        if city_missing || country_missing {
            return Err(EventFlowError::Validation(
                "City and country are required for physical/hybrid events.".to_string(),
            ));
        }
    }

    if draft.location.requires_virtual_link() {
        match draft.location.virtual_link.as_deref() {
            None => {
                return Err(EventFlowError::Validation(
                    "Virtual link is required for online/hybrid events.".to_string(),
                ));
            }
            Some(link) if link.trim().is_empty() => {
                return Err(EventFlowError::Validation(
                    "Virtual link is required for online/hybrid events.".to_string(),
                ));
            }
            Some(link) => {
                if url::Url::parse(link).is_err() {
                    return Err(EventFlowError::Validation(
                        "Virtual link must be a valid URL.".to_string(),
                    ));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::{Location, LocationType};
    use assert_matches::assert_matches;

    fn now() -> DateTime<Utc> {
        "2025-02-01T00:00:00Z".parse().unwrap()
    }

    fn valid_draft() -> EventDraft {
        let mut draft = EventDraft::template(now());
        draft.title = "Swing Night".to_string();
        draft.description = "Monthly social dance".to_string();
        draft.location = Location::physical(None, "Berlin", "Germany");
        draft
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(validate_draft(&valid_draft(), now()).is_ok());
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut draft = valid_draft();
        draft.title = "   ".to_string();
        assert_matches!(
            validate_draft(&draft, now()),
            Err(EventFlowError::Validation(msg)) if msg == "Title and description are required."
        );
    }

    #[test]
    fn test_end_before_start_rejected() {
        let mut draft = valid_draft();
        draft.end_date_time = draft.start_date_time - chrono::Duration::hours(1);
        assert_matches!(
            validate_draft(&draft, now()),
            Err(EventFlowError::Validation(msg))
                if msg == "End date/time must be after start date/time."
        );
    }

    #[test]
    fn test_deadline_after_start_rejected() {
        let mut draft = valid_draft();
        draft.registration_deadline = draft.start_date_time + chrono::Duration::hours(1);
        assert_matches!(
            validate_draft(&draft, now()),
            Err(EventFlowError::Validation(msg))
                if msg == "Registration deadline must be before start date/time."
        );
    }

    #[test]
    fn test_past_start_rejected() {
        let mut draft = valid_draft();
        draft.start_date_time = now() - chrono::Duration::hours(1);
        assert!(validate_draft(&draft, now()).is_err());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let mut draft = valid_draft();
        draft.capacity = 0;
        assert_matches!(
            validate_draft(&draft, now()),
            Err(EventFlowError::Validation(msg)) if msg == "Capacity must be at least 1."
        );
    }

    #[test]
    fn test_physical_event_needs_city_and_country() {
        let mut draft = valid_draft();
        draft.location.city = None;
        assert_matches!(
            validate_draft(&draft, now()),
            Err(EventFlowError::Validation(msg))
                if msg == "City and country are required for physical/hybrid events."
        );
    }

    #[test]
    fn test_online_event_needs_virtual_link() {
        let mut draft = valid_draft();
        draft.location = Location {
            location_type: LocationType::Online,
            address: None,
            city: None,
            country: None,
            virtual_link: None,
        };
        assert_matches!(
            validate_draft(&draft, now()),
            Err(EventFlowError::Validation(msg))
                if msg == "Virtual link is required for online/hybrid events."
        );
    }

    #[test]
    fn test_hybrid_event_needs_venue_and_link() {
        let mut draft = valid_draft();
        draft.location = Location {
            location_type: LocationType::Hybrid,
            address: None,
            city: Some("Berlin".to_string()),
            country: Some("Germany".to_string()),
            virtual_link: Some("not a url".to_string()),
        };
        assert_matches!(
            validate_draft(&draft, now()),
            Err(EventFlowError::Validation(msg)) if msg == "Virtual link must be a valid URL."
        );
    }
}
