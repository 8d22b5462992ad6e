//! Token endpoint authenticator
//!
//! Talks to the backend's sign-in and token-refresh endpoints directly over
//! the transport, bypassing the resilient client so that a failing refresh
//! can never trigger another refresh.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use serde::Deserialize;
use serde_json::json;

use crate::client::{ApiRequest, AuthError};
use crate::core::models::{RenewedToken, Session};
use crate::core::ports::{Authenticator, Transport};

/// Credential sign-in endpoint
pub const LOGIN_PATH: &str = "/api/login/";

/// Access-token refresh endpoint
pub const REFRESH_PATH: &str = "/api/token/refresh/";

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access: String,
    refresh: String,
}

#[derive(Debug, Deserialize)]
struct RefreshResponse {
    access: String,
    #[serde(default)]
    access_expiration: Option<DateTime<Utc>>,
}

/// Authenticator backed by the backend's token endpoints
#[derive(Clone)]
pub struct TokenEndpoint {
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for TokenEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenEndpoint").finish_non_exhaustive()
    }
}

impl TokenEndpoint {
    /// Create an authenticator over `transport`
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Exchange username and password for a new session
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let request = ApiRequest::post(
            LOGIN_PATH,
            json!({
                "username": username,
                "password": password,
            }),
        );

        let response = self.transport.execute(&request).await?;
        if !response.is_success() {
            return Err(AuthError::Rejected(response.status));
        }

        let tokens: LoginResponse =
            response.json().map_err(|e| AuthError::Malformed(e.to_string()))?;
        debug!("signed in as {username}");

        Ok(Session::new(tokens.access)
            .with_refresh_token(tokens.refresh)
            .with_username(username)
            .with_default_lifetime(Utc::now()))
    }
}

#[async_trait]
impl Authenticator for TokenEndpoint {
    async fn refresh(&self, refresh_token: &str) -> Result<RenewedToken, AuthError> {
        let request = ApiRequest::post(REFRESH_PATH, json!({ "refresh": refresh_token }));

        let response = self.transport.execute(&request).await?;
        if !response.is_success() {
            return Err(AuthError::Rejected(response.status));
        }

        let body: RefreshResponse =
            response.json().map_err(|e| AuthError::Malformed(e.to_string()))?;

        Ok(RenewedToken {
            access_token: body.access,
            expires_at: body.access_expiration,
        })
    }
}
