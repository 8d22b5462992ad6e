//! HTTP transport port
//!
//! Defines how a single request reaches the backend.

use async_trait::async_trait;

use crate::client::{ApiRequest, ApiResponse, TransportError};

/// Sends one HTTP request
///
/// Any status code counts as a successful transport. Only a failure to get a
/// response at all is an error. Retry and authentication policy live in the
/// client, not here.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request exactly once
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError>;
}
