//! Event repository implementation
//!
//! Events travel flat on the wire; this repository reshapes them into
//! the nested location form on every read and flattens drafts on write.

use tracing::{debug, info};

use crate::api::client::ApiClient;
use crate::models::event::{Event, EventDraft, EventPage, EventWire};
use crate::utils::errors::{EventFlowError, Result};

#[derive(Debug, Clone)]
pub struct EventRepository {
    client: ApiClient,
}

impl EventRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all events
    pub async fn list(&self) -> Result<Vec<Event>> {
        let page: EventPage = self.client.get_json("/events").await?;
        debug!(count = page.content.len(), "Fetched event list");

        Ok(page.content.into_iter().map(Event::from).collect())
    }

    /// Fetch a single event by ID
    ///
    /// A missing or cancelled event is reported as a distinct not-found
    /// condition rather than a generic failure.
    pub async fn get_by_id(&self, id: &str) -> Result<Event> {
        let path = format!("/events/{}", urlencoding::encode(id));
        let wire: EventWire = self.client.get_json(&path).await.map_err(|e| match e {
            EventFlowError::Api { status: 404, .. } => EventFlowError::EventNotFound {
                event_id: id.to_string(),
            },
            other => other,
        })?;

        Ok(wire.into())
    }

    /// Create a new event
    pub async fn create(&self, draft: &EventDraft) -> Result<Event> {
        let wire: EventWire = self.client.post_json("/events", &draft.to_wire()).await?;
        info!(event_id = %wire.id, title = %wire.title, "Event created");

        Ok(wire.into())
    }

    /// Update an existing event
    pub async fn update(&self, id: &str, draft: &EventDraft) -> Result<Event> {
        let path = format!("/events/{}", urlencoding::encode(id));
        let wire: EventWire = self
            .client
            .put_json(&path, &draft.to_wire())
            .await
            .map_err(|e| match e {
                EventFlowError::Api { status: 404, .. } => EventFlowError::EventNotFound {
                    event_id: id.to_string(),
                },
                other => other,
            })?;
        info!(event_id = id, "Event updated");

        Ok(wire.into())
    }

    /// Delete an event
    pub async fn delete(&self, id: &str) -> Result<()> {
        let path = format!("/events/{}", urlencoding::encode(id));
        self.client.delete(&path).await.map_err(|e| match e {
            EventFlowError::Api { status: 404, .. } => EventFlowError::EventNotFound {
                event_id: id.to_string(),
            },
            other => other,
        })?;
        info!(event_id = id, "Event deleted");

        Ok(())
    }
}
