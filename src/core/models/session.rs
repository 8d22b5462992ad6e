//! Authenticated session state
//!
//! A session is what the backend handed out at sign-in: a short-lived access
//! token, a longer-lived refresh token, and when the access token runs out.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Access token lifetime assumed when the backend does not report one
pub const ACCESS_TOKEN_LIFETIME_SECS: i64 = 45 * 60;

/// Credentials for the current user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer access token attached to every request
    pub access_token: String,
    /// Token used to obtain a new access token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// When the access token stops being accepted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_expires_at: Option<DateTime<Utc>>,
    /// Username the session belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Session {
    /// Create a session holding only an access token
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
            access_expires_at: None,
            username: None,
        }
    }

    /// Attach a refresh token
    #[must_use]
    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    /// Set the access token expiry
    #[must_use]
    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.access_expires_at = Some(expires_at);
        self
    }

    /// Set the expiry to the default lifetime counted from `now`
    #[must_use]
    pub fn with_default_lifetime(self, now: DateTime<Utc>) -> Self {
        self.with_expiry(now + TimeDelta::seconds(ACCESS_TOKEN_LIFETIME_SECS))
    }

    /// Record which user owns the session
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Whether the access token has expired at `now`.
    ///
    /// Sessions without an expiry never report expired; the backend's 401
    /// is authoritative for them.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.access_expires_at.is_some_and(|expiry| now >= expiry)
    }

    /// Apply a renewed access token, keeping the refresh token and user
    #[must_use]
    pub fn renewed(&self, token: &RenewedToken) -> Self {
        Self {
            access_token: token.access_token.clone(),
            access_expires_at: token.expires_at,
            ..self.clone()
        }
    }
}

/// A fresh access token issued by the refresh endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenewedToken {
    /// The new access token
    pub access_token: String,
    /// When the new token expires, if the backend said
    pub expires_at: Option<DateTime<Utc>>,
}

impl RenewedToken {
    /// Create a renewed token without expiry information
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at: None,
        }
    }
}
