//! EventFlow API client
//!
//! Thin wrapper around reqwest that attaches the session's bearer token
//! to every request and applies the single cross-cutting failure policy:
//! a 401/403 on any authenticated call clears the stored credentials and
//! expires the session.

use std::time::Duration;

use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::settings::ApiConfig;
use crate::state::session::Session;
use crate::utils::errors::{EventFlowError, Result};
use crate::utils::logging::log_api_error;

/// Error body shape returned by the API
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Authenticated HTTP client for the EventFlow API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Create a new ApiClient instance
    pub fn new(config: &ApiConfig, session: Session) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("EventFlow-Client/0.1")
            .build()
            .map_err(EventFlowError::Http)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Session this client reads its token from
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// GET a JSON resource
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(Method::GET, path, None, true).await?;
        Ok(response.json::<T>().await?)
    }

    /// POST a JSON body and parse the JSON response
    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .send(Method::POST, path, Some(serde_json::to_value(body)?), true)
            .await?;
        Ok(response.json::<T>().await?)
    }

    /// PUT a JSON body and parse the JSON response
    pub async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .send(Method::PUT, path, Some(serde_json::to_value(body)?), true)
            .await?;
        Ok(response.json::<T>().await?)
    }

    /// PUT a JSON body, discarding the response body
    pub async fn put_discard<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        self.send(Method::PUT, path, Some(serde_json::to_value(body)?), true)
            .await?;
        Ok(())
    }

    /// DELETE a resource
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::DELETE, path, None, true).await?;
        Ok(())
    }

    /// POST without credentials, for login and account creation.
    ///
    /// A 401 here is an ordinary API error, not a session expiry.
    pub async fn post_public<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .send(Method::POST, path, Some(serde_json::to_value(body)?), false)
            .await?;
        Ok(response.json::<T>().await?)
    }

    /// POST without credentials, discarding the response body
    pub async fn post_public_discard<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<()> {
        self.send(Method::POST, path, Some(serde_json::to_value(body)?), false)
            .await?;
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        authenticated: bool,
    ) -> Result<Response> {
        debug!(method = %method, path = path, "Sending API request");

        let mut request = self.http.request(method, format!("{}{}", self.base_url, path));
        if authenticated {
            if let Some(token) = self.session.token() {
                request = request.bearer_auth(token);
            }
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        self.check_status(response, path, authenticated).await
    }

    async fn check_status(
        &self,
        response: Response,
        path: &str,
        authenticated: bool,
    ) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if authenticated
            && (status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN)
        {
            self.session.expire();
            log_api_error(path, Some(status.as_u16()), "authentication failure");
            return Err(EventFlowError::SessionExpired);
        }

        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_default();
        log_api_error(path, Some(status.as_u16()), &message);

        Err(EventFlowError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
