//! Event list view
//!
//! Shows published events with in-memory search and category filtering.
//! Filtering always operates on the server-fetched list; there is no
//! local fallback store.

use tracing::debug;

use crate::models::event::{Event, EventCategory, EventStatus};
use crate::services::event::EventService;
use crate::utils::errors::Result;
use crate::views::RefreshTrigger;

/// In-memory filter over the fetched event list
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub search: Option<String>,
    pub category: Option<EventCategory>,
}

impl EventFilter {
    /// Check if an event passes the filter
    pub fn matches(&self, event: &Event) -> bool {
        if let Some(category) = self.category {
            if event.category != category {
                return false;
            }
        }

        if let Some(ref query) = self.search {
            let query = query.to_lowercase();
            if query.is_empty() {
                return true;
            }
            let in_title = event.title.to_lowercase().contains(&query);
            let in_description = event.description.to_lowercase().contains(&query);
            let in_tags = event
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&query));
            if !(in_title || in_description || in_tags) {
                return false;
            }
        }

        true
    }

    /// No search text or category restriction set
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().map_or(true, str::is_empty) && self.category.is_none()
    }
}

/// Event browsing view
pub struct EventListView {
    events: EventService,
    all_events: Vec<Event>,
    pub filter: EventFilter,
}

impl EventListView {
    /// Create an empty view; call [`Self::load`] to populate it
    pub fn new(events: EventService) -> Self {
        Self {
            events,
            all_events: Vec::new(),
            filter: EventFilter::default(),
        }
    }

    /// Fetch the event list, keeping only published events sorted by
    /// start time
    pub async fn load(&mut self) -> Result<()> {
        let mut events: Vec<Event> = self
            .events
            .list()
            .await?
            .into_iter()
            .filter(|e| e.status == EventStatus::Published)
            .collect();
        events.sort_by_key(|e| e.start_date_time);
        self.all_events = events;

        Ok(())
    }

    /// Re-issue the full fetch
    pub async fn refresh(&mut self, trigger: RefreshTrigger) -> Result<()> {
        debug!(trigger = ?trigger, "Refreshing event list");
        self.load().await
    }

    /// Events passing the current filter
    pub fn visible(&self) -> Vec<&Event> {
        self.all_events
            .iter()
            .filter(|e| self.filter.matches(e))
            .collect()
    }

    /// Set the free-text search query
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.filter.search = Some(query.into());
    }

    /// Restrict to one category
    pub fn set_category(&mut self, category: Option<EventCategory>) {
        self.filter.category = category;
    }

    /// Clear search text and category restriction
    pub fn clear_filters(&mut self) {
        self.filter = EventFilter::default();
    }
}
