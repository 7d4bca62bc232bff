//! Session state management
//!
//! This module owns the auth session lifecycle and the capability set
//! resolved from the signed-in user's role.

pub mod capabilities;
pub mod session;

pub use capabilities::{AuthContext, Capability, CapabilitySet};
pub use session::{Session, EXPIRED_LOGIN_PATH};
