//! Authenticator port
//!
//! Defines how an expired access token is renewed.

use async_trait::async_trait;

use crate::client::AuthError;
use crate::core::models::RenewedToken;

/// Exchanges a refresh token for a new access token
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Obtain a new access token
    async fn refresh(&self, refresh_token: &str) -> Result<RenewedToken, AuthError>;
}
