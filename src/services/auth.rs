//! Authentication service implementation
//!
//! This service handles login, account creation and logout, and
//! resolves the signed-in user's capability set once per session.

use tracing::{debug, info};

use crate::api::client::ApiClient;
use crate::api::repositories::UserRepository;
use crate::models::user::{LoginRequest, LoginResponse, SignupRequest};
use crate::state::capabilities::AuthContext;
use crate::state::session::Session;
use crate::utils::errors::Result;

/// Authentication service managing the session lifecycle
#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
    users: UserRepository,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(client: ApiClient, users: UserRepository) -> Self {
        Self { client, users }
    }

    /// Session the service stores tokens into
    pub fn session(&self) -> &Session {
        self.client.session()
    }

    /// Exchange credentials for a bearer token and store it
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.client.post_public("/auth/login", &request).await?;
        self.session().set_token(response.access_token);
        info!(email = email, "User logged in");

        Ok(())
    }

    /// Create a new account. The caller logs in separately afterwards.
    pub async fn sign_up(&self, request: &SignupRequest) -> Result<()> {
        self.client
            .post_public_discard("/auth/register", request)
            .await?;
        info!(email = %request.email, role = ?request.role, "Account created");

        Ok(())
    }

    /// Drop the stored credentials
    pub fn logout(&self) {
        self.session().clear();
    }

    /// Fetch the profile and resolve capabilities for this session.
    ///
    /// Views consult the returned context instead of re-checking the
    /// role ad hoc.
    pub async fn establish_context(&self) -> Result<AuthContext> {
        let user = self.users.profile().await?;
        debug!(user_id = %user.id, role = ?user.role, "Session context established");

        Ok(AuthContext::new(user))
    }
}
