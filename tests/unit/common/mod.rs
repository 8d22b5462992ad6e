//! Shared test doubles
//!
//! Scripted transports and authenticators for driving `ApiClient` without a
//! network.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::json;

use tomctl::adapters::MemorySessionStore;
use tomctl::client::{ApiClient, ApiRequest, ApiResponse, AuthError, TransportError};
use tomctl::core::models::{RenewedToken, Session};
use tomctl::core::ports::{Authenticator, Transport};

/// Transport replaying a fixed list of results, then answering 200 `{}`
#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new(script: Vec<Result<ApiResponse, TransportError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answer each attempt with the given statuses in order
    pub fn statuses(statuses: &[u16]) -> Self {
        Self::new(statuses.iter().map(|&s| Ok(ApiResponse::with_json(s, &json!({})))).collect())
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }

    pub fn attempts(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().push(request.clone());
        self.script
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse::with_json(200, &json!({}))))
    }
}

/// Transport accepting only one access token; everything else gets 401
pub struct TokenGate {
    valid_token: Mutex<Option<String>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl TokenGate {
    pub fn accepting(token: &str) -> Self {
        Self {
            valid_token: Mutex::new(Some(token.to_string())),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting_all() -> Self {
        Self {
            valid_token: Mutex::new(None),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl Transport for TokenGate {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().push(request.clone());
        let valid = self.valid_token.lock().clone();
        if valid.is_some() && request.bearer_token() == valid.as_deref() {
            Ok(ApiResponse::with_json(200, &json!({"ok": true})))
        } else {
            Ok(ApiResponse::with_json(401, &json!({"detail": "token not valid"})))
        }
    }
}

/// Authenticator that takes `delay` and counts its calls
pub struct CountingAuthenticator {
    delay: Duration,
    result: Result<String, AuthError>,
    calls: AtomicUsize,
}

impl CountingAuthenticator {
    pub fn issuing(token: &str) -> Self {
        Self {
            delay: Duration::from_millis(100),
            result: Ok(token.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(err: AuthError) -> Self {
        Self {
            delay: Duration::from_millis(100),
            result: Err(err),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Authenticator for CountingAuthenticator {
    async fn refresh(&self, _refresh_token: &str) -> Result<RenewedToken, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.result.clone().map(RenewedToken::new)
    }
}

/// Signed-in session with a refresh token and no expiry
pub fn session(access: &str) -> Session {
    Session::new(access).with_refresh_token("refresh-token").with_username("ada")
}

/// Client wired to the given doubles
pub fn client(
    transport: Arc<dyn Transport>,
    sessions: Arc<MemorySessionStore>,
    authenticator: Arc<dyn Authenticator>,
) -> ApiClient {
    ApiClient::new(transport, sessions, authenticator)
}
