//! Resilient API client
//!
//! A single entry point, [`ApiClient::send`], for every call to the backend.
//! It attaches the session's credentials, retries transient failures with
//! exponential backoff, and renews the session on 401.
//!
//! ## Request lifecycle
//!
//! ```text
//! attach token ─▶ dispatch ─┬─ 2xx ──────────────▶ Ok(response)
//!                           ├─ 401 (first) ──────▶ renew session ─▶ dispatch
//!                           ├─ 401 (again) ──────▶ Err(Client 401)
//!                           ├─ network / 408 429 5xx-transient
//!                           │     retries left ──▶ sleep 1s·2^n ─▶ dispatch
//!                           │     exhausted ─────▶ Err(RetryBudgetExhausted)
//!                           └─ other 4xx / 5xx ──▶ Err(Client / Server)
//! ```
//!
//! Retries resend the identical request, so non-idempotent calls get
//! at-least-once delivery on transient failures.

mod error;
mod refresh;
mod request;
mod retry;

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::adapters::{ReqwestTransport, TokenEndpoint};
use crate::config::Config;
use crate::core::ports::{Authenticator, SessionStore, Transport};

pub use error::{AuthError, ClientError, RetryableFailure, TransportError};
pub use refresh::{RefreshCoordinator, RefreshLease, RefreshOutcome, RefreshTicket};
pub use request::{AUTHORIZATION, ApiRequest, ApiResponse, Method, RequestState};
pub use retry::{
    DEFAULT_BASE_DELAY, DEFAULT_MAX_RETRIES, DEFAULT_RETRYABLE_STATUSES, Outcome, RetryPolicy,
};

/// Scheme the backend expects in the `Authorization` header
pub const DEFAULT_AUTH_SCHEME: &str = "JWT";

/// HTTP client for the observation manager backend
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    sessions: Arc<dyn SessionStore>,
    authenticator: Arc<dyn Authenticator>,
    policy: RetryPolicy,
    auth_scheme: String,
    refresh: RefreshCoordinator,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("policy", &self.policy)
            .field("auth_scheme", &self.auth_scheme)
            .field("refresh", &self.refresh)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client with the default retry policy and auth scheme
    #[must_use]
    pub fn new(
        transport: Arc<dyn Transport>,
        sessions: Arc<dyn SessionStore>,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        Self {
            transport,
            sessions,
            authenticator,
            policy: RetryPolicy::default(),
            auth_scheme: DEFAULT_AUTH_SCHEME.to_string(),
            refresh: RefreshCoordinator::new(),
        }
    }

    /// Build a client talking to the configured backend over HTTP
    pub fn from_config(
        config: &Config,
        sessions: Arc<dyn SessionStore>,
    ) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(&config.api.base_url, config.api.timeout())
            .map_err(ClientError::Network)?;
        let transport: Arc<dyn Transport> = Arc::new(transport);
        let authenticator = Arc::new(TokenEndpoint::new(Arc::clone(&transport)));
        Ok(Self::new(transport, sessions, authenticator)
            .with_retry_policy(config.retry.policy())
            .with_auth_scheme(&config.api.auth_scheme))
    }

    /// Replace the retry policy
    #[must_use]
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the `Authorization` scheme (default `JWT`)
    #[must_use]
    pub fn with_auth_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.auth_scheme = scheme.into();
        self
    }

    /// The retry policy in use
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Refresh bookkeeping, shared by all requests of this client
    #[must_use]
    pub const fn refresh_coordinator(&self) -> &RefreshCoordinator {
        &self.refresh
    }

    /// Send a request, retrying and re-authenticating as needed
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let mut state = RequestState::default();
        let mut token = self.initial_token().await?;

        loop {
            let attempt = request.authorized(&self.auth_scheme, token.as_deref());
            debug!(
                "{} {} (retry {}, auth retried: {})",
                attempt.method, attempt.path, state.retry_count, state.auth_retried
            );

            match self.policy.classify(self.transport.execute(&attempt).await) {
                Outcome::Success(response) => return Ok(response),
                Outcome::Unauthorized(response) => {
                    if state.auth_retried {
                        return Err(ClientError::from_response(&response));
                    }
                    state.auth_retried = true;
                    token = Some(self.renew_token(token.as_deref()).await?);
                },
                Outcome::Retryable(failure) => {
                    if !self.policy.can_retry(&state) {
                        return Err(ClientError::RetryBudgetExhausted {
                            attempts: state.retry_count + 1,
                            last: failure,
                        });
                    }
                    let delay = self.policy.backoff(state.retry_count);
                    state.retry_count += 1;
                    warn!(
                        "{} {} failed ({failure}), retry {}/{} in {delay:?}",
                        request.method, request.path, state.retry_count, self.policy.max_retries
                    );
                    tokio::time::sleep(delay).await;
                },
                Outcome::Failed(err) => return Err(err),
            }
        }
    }

    /// GET and decode a JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        Ok(self.send(ApiRequest::get(path)).await?.json()?)
    }

    /// POST a JSON body and decode the JSON reply
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let request = ApiRequest::post(path, serde_json::to_value(body)?);
        Ok(self.send(request).await?.json()?)
    }

    /// PUT a JSON body and decode the JSON reply
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let request = ApiRequest::put(path, serde_json::to_value(body)?);
        Ok(self.send(request).await?.json()?)
    }

    /// DELETE, ignoring the body
    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        self.send(ApiRequest::delete(path)).await.map(|_| ())
    }

    /// Token for the first attempt, renewing up front if the session says
    /// its access token has already expired
    async fn initial_token(&self) -> Result<Option<String>, ClientError> {
        match self.sessions.current() {
            Some(session) if session.is_expired_at(Utc::now()) => {
                debug!("access token expired, renewing before dispatch");
                self.renew_token(Some(session.access_token.as_str())).await.map(Some)
            },
            Some(session) => Ok(Some(session.access_token)),
            None => Ok(None),
        }
    }

    /// Obtain a token newer than `stale`, refreshing at most once across all
    /// concurrent callers
    async fn renew_token(&self, stale: Option<&str>) -> Result<String, ClientError> {
        if let Some(session) = self.sessions.current()
            && Some(session.access_token.as_str()) != stale
            && !session.is_expired_at(Utc::now())
            && !self.refresh.is_refreshing()
        {
            debug!("session already renewed by another request");
            return Ok(session.access_token);
        }

        match self.refresh.join() {
            RefreshTicket::Waiter(rx) => match rx.await {
                Ok(Some(token)) => Ok(token),
                _ => Err(ClientError::AuthenticationExpired),
            },
            RefreshTicket::Leader(lease) => self.lead_refresh(lease).await,
        }
    }

    async fn lead_refresh(&self, lease: RefreshLease<'_>) -> Result<String, ClientError> {
        let Some(session) = self.sessions.current() else {
            return Err(self.expire(lease, &AuthError::MissingRefreshToken));
        };
        let Some(refresh_token) = session.refresh_token.as_deref() else {
            return Err(self.expire(lease, &AuthError::MissingRefreshToken));
        };

        match self.authenticator.refresh(refresh_token).await {
            Ok(renewed) => {
                if let Err(err) = self.sessions.store(session.renewed(&renewed)) {
                    warn!("could not persist renewed session: {err}");
                }
                let woken = lease.succeed(&renewed.access_token);
                info!("session renewed ({woken} waiting request(s) resumed)");
                Ok(renewed.access_token)
            },
            Err(err) => Err(self.expire(lease, &err)),
        }
    }

    /// Sign out once, then fail the leader and every waiter
    fn expire(&self, lease: RefreshLease<'_>, cause: &AuthError) -> ClientError {
        warn!("session refresh failed: {cause}; signing out");
        if let Err(err) = self.sessions.sign_out() {
            warn!("could not clear session: {err}");
        }
        lease.fail();
        ClientError::AuthenticationExpired
    }
}
