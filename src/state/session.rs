//! Session and token lifecycle management
//!
//! The session replaces any ambient token singleton: it is created once
//! at startup (init-on-load), handed explicitly to the API client and
//! services, and cleared on logout or authentication failure.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

/// Login route carrying the session-expired signal
pub const EXPIRED_LOGIN_PATH: &str = "/login?expired=1";

#[derive(Debug, Default)]
struct SessionInner {
    token: RwLock<Option<String>>,
    expired: AtomicBool,
    store: Option<PathBuf>,
}

/// Shared session state holding the single persisted auth token
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<SessionInner>,
}

impl Session {
    /// Create an in-memory session with no persisted token
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session backed by a token file, loading any persisted
    /// token from a previous run
    pub fn with_store(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let token = match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let token = contents.trim().to_string();
                if token.is_empty() {
                    None
                } else {
                    debug!(path = %path.display(), "Loaded persisted auth token");
                    Some(token)
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read persisted auth token");
                None
            }
        };

        Self {
            inner: Arc::new(SessionInner {
                token: RwLock::new(token),
                expired: AtomicBool::new(false),
                store: Some(path),
            }),
        }
    }

    /// Current bearer token, if signed in
    pub fn token(&self) -> Option<String> {
        self.inner.token.read().clone()
    }

    /// Store a freshly issued token and reset the expiry flag
    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        *self.inner.token.write() = Some(token.clone());
        self.inner.expired.store(false, Ordering::SeqCst);
        self.persist(Some(&token));
        debug!("Session token stored");
    }

    /// Clear credentials on user-initiated logout
    pub fn clear(&self) {
        *self.inner.token.write() = None;
        self.inner.expired.store(false, Ordering::SeqCst);
        self.persist(None);
        info!("Session cleared");
    }

    /// Clear credentials after an authentication failure.
    ///
    /// The token is dropped in a single assignment and the session
    /// reports [`EXPIRED_LOGIN_PATH`] as its redirect target.
    pub fn expire(&self) {
        *self.inner.token.write() = None;
        self.inner.expired.store(true, Ordering::SeqCst);
        self.persist(None);
        warn!("Session expired, credentials cleared");
    }

    /// Check if a token is currently held
    pub fn is_authenticated(&self) -> bool {
        self.inner.token.read().is_some()
    }

    /// Check if the session was terminated by an auth failure
    pub fn is_expired(&self) -> bool {
        self.inner.expired.load(Ordering::SeqCst)
    }

    /// Navigation target after an auth failure, if one happened
    pub fn redirect_path(&self) -> Option<&'static str> {
        if self.is_expired() {
            Some(EXPIRED_LOGIN_PATH)
        } else {
            None
        }
    }

    fn persist(&self, token: Option<&str>) {
        let Some(ref path) = self.inner.store else {
            return;
        };

        let result = match token {
            Some(token) => std::fs::write(path, token),
            None => match std::fs::remove_file(path) {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
                _ => Ok(()),
            },
        };

        if let Err(e) = result {
            warn!(path = %path.display(), error = %e, "Failed to update persisted auth token");
        }
    }
}
