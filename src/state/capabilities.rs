//! Role capabilities
//!
//! Roles are resolved into a capability set once when the session
//! context is established; views consult the set instead of re-checking
//! `user.role` ad hoc.

use std::collections::HashSet;

use crate::models::event::Event;
use crate::models::user::{User, UserRole};
use crate::utils::errors::{EventFlowError, Result};

/// Actions a signed-in user may perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Browse and filter published events
    BrowseEvents,
    /// Register for events and cancel own registrations
    RegisterForEvents,
    /// Create, edit and delete own events
    ManageOwnEvents,
    /// Edit and delete any event
    ManageAllEvents,
    /// Mark attendance on registrations
    RecordAttendance,
    /// Administer user accounts
    ManageUsers,
    ViewAttendeeDashboard,
    ViewOrganizerDashboard,
    ViewAdminDashboard,
}

/// Capability set resolved from a role
#[derive(Debug, Clone)]
pub struct CapabilitySet {
    capabilities: HashSet<Capability>,
}

impl CapabilitySet {
    /// Resolve the capability set for a role
    pub fn for_role(role: UserRole) -> Self {
        let mut capabilities = HashSet::new();
        capabilities.insert(Capability::BrowseEvents);
        capabilities.insert(Capability::RegisterForEvents);

        match role {
            UserRole::Attendee => {
                capabilities.insert(Capability::ViewAttendeeDashboard);
            }
            UserRole::Organizer => {
                capabilities.insert(Capability::ManageOwnEvents);
                capabilities.insert(Capability::RecordAttendance);
                capabilities.insert(Capability::ViewOrganizerDashboard);
            }
            UserRole::Admin => {
                capabilities.insert(Capability::ManageOwnEvents);
                capabilities.insert(Capability::ManageAllEvents);
                capabilities.insert(Capability::RecordAttendance);
                capabilities.insert(Capability::ManageUsers);
                capabilities.insert(Capability::ViewAdminDashboard);
            }
        }

        Self { capabilities }
    }

    /// Check if the set contains a capability
    pub fn contains(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}

/// Authenticated user plus capabilities, resolved once at session start
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: User,
    pub capabilities: CapabilitySet,
}

impl AuthContext {
    /// Build the context for a fetched profile
    pub fn new(user: User) -> Self {
        let capabilities = CapabilitySet::for_role(user.role);
        Self { user, capabilities }
    }

    /// Check a capability
    pub fn can(&self, capability: Capability) -> bool {
        self.capabilities.contains(capability)
    }

    /// Require a capability or return a permission error
    pub fn require(&self, capability: Capability) -> Result<()> {
        if self.can(capability) {
            Ok(())
        } else {
            Err(EventFlowError::PermissionDenied(format!(
                "User {} lacks required capability: {:?}",
                self.user.id, capability
            )))
        }
    }

    /// Check if this user may edit or delete the given event
    pub fn can_manage_event(&self, event: &Event) -> bool {
        self.can(Capability::ManageAllEvents)
            || (self.can(Capability::ManageOwnEvents) && event.organizer_id == self.user.id)
    }
}
