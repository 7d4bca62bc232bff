//! View layer
//!
//! Each view owns its own fetched copy of server data for its lifetime
//! and re-issues the full fetch on every trigger: first mount, a route
//! regaining focus, or the window becoming visible again. Overlapping
//! refreshes are tolerated; nothing is cached or deduplicated.

pub mod calendar;
pub mod dashboard;
pub mod event_detail;
pub mod event_form;
pub mod event_list;

pub use calendar::{month_grid, CalendarDay};
pub use dashboard::{AdminDashboardView, AttendeeDashboardView, OrganizerDashboardView};
pub use event_detail::EventDetailView;
pub use event_form::EventFormView;
pub use event_list::{EventFilter, EventListView};

/// What caused a view to re-fetch its data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTrigger {
    /// View shown for the first time
    Mount,
    /// Navigation returned to the view's route
    RouteFocus,
    /// Window or tab became visible again
    VisibilityRegained,
}
