//! Event model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventCategory {
    Conference,
    Workshop,
    Webinar,
    Social,
    Sports,
}

/// Event lifecycle status
///
/// DRAFT -> PUBLISHED -> ONGOING -> COMPLETED, or CANCELLED at any point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Draft,
    Published,
    Ongoing,
    Completed,
    Cancelled,
}

/// Location type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationType {
    Online,
    Physical,
    Hybrid,
}

/// Nested location value assembled from the flat wire fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "type")]
    pub location_type: LocationType,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub virtual_link: Option<String>,
}

impl Location {
    /// Location for a purely virtual event
    pub fn online(virtual_link: impl Into<String>) -> Self {
        Self {
            location_type: LocationType::Online,
            address: None,
            city: None,
            country: None,
            virtual_link: Some(virtual_link.into()),
        }
    }

    /// Location for an in-person event
    pub fn physical(
        address: Option<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            location_type: LocationType::Physical,
            address,
            city: Some(city.into()),
            country: Some(country.into()),
            virtual_link: None,
        }
    }

    /// City and country are required for this location type
    pub fn requires_venue(&self) -> bool {
        matches!(
            self.location_type,
            LocationType::Physical | LocationType::Hybrid
        )
    }

    /// A virtual link is required for this location type
    pub fn requires_virtual_link(&self) -> bool {
        matches!(
            self.location_type,
            LocationType::Online | LocationType::Hybrid
        )
    }
}

/// Event as consumed by views, with the nested location shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: EventCategory,
    pub organizer_id: String,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
    pub location: Location,
    pub capacity: u32,
    pub registration_deadline: DateTime<Utc>,
    pub status: EventStatus,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub requirements: Option<String>,
    pub agenda: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Confirmed registrations as reported by the server at fetch time
    pub registered_count: u32,
}

impl Event {
    /// Check if the event has not started yet
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.start_date_time > now
    }

    /// Check if the registration deadline has passed
    pub fn deadline_passed(&self, now: DateTime<Utc>) -> bool {
        self.registration_deadline <= now
    }

    /// Check if the server-reported count has reached capacity
    pub fn is_full(&self) -> bool {
        self.registered_count >= self.capacity
    }
}

/// Flat wire representation of an event as the REST API ships it
///
/// Location fields travel alongside the event fields; the event
/// repository reshapes them into the nested [`Location`] for consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventWire {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: EventCategory,
    pub organizer_id: String,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
    pub location_type: LocationType,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub virtual_link: Option<String>,
    pub capacity: u32,
    pub registration_deadline: DateTime<Utc>,
    pub status: EventStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub agenda: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub registered_count: u32,
}

impl From<EventWire> for Event {
    fn from(wire: EventWire) -> Self {
        Self {
            id: wire.id,
            title: wire.title,
            description: wire.description,
            category: wire.category,
            organizer_id: wire.organizer_id,
            start_date_time: wire.start_date_time,
            end_date_time: wire.end_date_time,
            location: Location {
                location_type: wire.location_type,
                address: wire.address,
                city: wire.city,
                country: wire.country,
                virtual_link: wire.virtual_link,
            },
            capacity: wire.capacity,
            registration_deadline: wire.registration_deadline,
            status: wire.status,
            tags: wire.tags,
            image_url: wire.image_url,
            requirements: wire.requirements,
            agenda: wire.agenda,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
            registered_count: wire.registered_count,
        }
    }
}

/// Paged wrapper returned by the events listing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct EventPage {
    #[serde(default)]
    pub content: Vec<EventWire>,
}

/// New or edited event as authored in the form views
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub category: EventCategory,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
    pub location: Location,
    pub capacity: u32,
    pub registration_deadline: DateTime<Utc>,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub requirements: Option<String>,
    pub agenda: Option<String>,
}

impl EventDraft {
    /// Form defaults: start tomorrow, one hour long, deadline in 12 hours
    pub fn template(now: DateTime<Utc>) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: EventCategory::Conference,
            start_date_time: now + chrono::Duration::hours(24),
            end_date_time: now + chrono::Duration::hours(25),
            location: Location {
                location_type: LocationType::Physical,
                address: None,
                city: None,
                country: None,
                virtual_link: None,
            },
            capacity: 50,
            registration_deadline: now + chrono::Duration::hours(12),
            tags: Vec::new(),
            image_url: None,
            requirements: None,
            agenda: None,
        }
    }

    /// Flatten for the wire, dropping location fields the type does not use
    pub fn to_wire(&self) -> EventDraftWire {
        let venue = self.location.requires_venue();
        let virtual_link = self.location.requires_virtual_link();

        EventDraftWire {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category,
            start_date_time: self.start_date_time,
            end_date_time: self.end_date_time,
            location_type: self.location.location_type,
            address: if venue { self.location.address.clone() } else { None },
            city: if venue { self.location.city.clone() } else { None },
            country: if venue { self.location.country.clone() } else { None },
            virtual_link: if virtual_link {
                self.location.virtual_link.clone()
            } else {
                None
            },
            capacity: self.capacity,
            registration_deadline: self.registration_deadline,
            tags: self.tags.clone(),
            image_url: self.image_url.clone(),
            requirements: self.requirements.clone(),
            agenda: self.agenda.clone(),
        }
    }
}

impl From<&Event> for EventDraft {
    fn from(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone(),
            category: event.category,
            start_date_time: event.start_date_time,
            end_date_time: event.end_date_time,
            location: event.location.clone(),
            capacity: event.capacity,
            registration_deadline: event.registration_deadline,
            tags: event.tags.clone(),
            image_url: event.image_url.clone(),
            requirements: event.requirements.clone(),
            agenda: event.agenda.clone(),
        }
    }
}

/// Flat wire representation for event create/update requests
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraftWire {
    pub title: String,
    pub description: String,
    pub category: EventCategory,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
    pub location_type: LocationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_link: Option<String>,
    pub capacity: u32,
    pub registration_deadline: DateTime<Utc>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agenda: Option<String>,
}
