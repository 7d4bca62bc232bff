//! Event form view
//!
//! Backs the create and edit forms. Drafts run through the client-side
//! guards on submit; server rejection messages take precedence in the
//! displayed text.

use chrono::{DateTime, Utc};

use crate::models::event::{Event, EventDraft};
use crate::services::event::EventService;
use crate::utils::errors::Result;

/// Create/edit form backing state
pub struct EventFormView {
    events: EventService,
    pub draft: EventDraft,
    event_id: Option<String>,
}

impl EventFormView {
    /// Form for a new event, pre-filled with the usual defaults
    pub fn create(events: EventService, now: DateTime<Utc>) -> Self {
        Self {
            events,
            draft: EventDraft::template(now),
            event_id: None,
        }
    }

    /// Form editing an existing event
    pub fn edit(events: EventService, event: &Event) -> Self {
        Self {
            events,
            draft: EventDraft::from(event),
            event_id: Some(event.id.clone()),
        }
    }

    /// True when submitting will update an existing event
    pub fn is_edit(&self) -> bool {
        self.event_id.is_some()
    }

    /// Validate and submit the draft
    pub async fn submit(&self) -> Result<Event> {
        match self.event_id {
            Some(ref id) => self.events.update(id, &self.draft).await,
            None => self.events.create(&self.draft).await,
        }
    }
}
