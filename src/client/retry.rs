//! Retry policy and outcome classification

use std::time::Duration;

use super::error::{ClientError, RetryableFailure, TransportError};
use super::request::{ApiResponse, RequestState};

/// Statuses worth resending the same request for
pub const DEFAULT_RETRYABLE_STATUSES: [u16; 6] = [408, 429, 500, 502, 503, 504];

/// Retries allowed after the first attempt
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Delay before the first retry; doubles for each following one
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);

/// Exponential backoff policy for transient failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries allowed after the first attempt
    pub max_retries: u32,
    /// Delay before the first retry
    pub base_delay: Duration,
    /// Statuses treated as transient
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: DEFAULT_BASE_DELAY,
            retryable_statuses: DEFAULT_RETRYABLE_STATUSES.to_vec(),
        }
    }
}

/// What to do after one attempt
#[derive(Debug)]
pub enum Outcome {
    /// 2xx, hand back to the caller
    Success(ApiResponse),
    /// 401, renew the session and resend
    Unauthorized(ApiResponse),
    /// Transient failure, back off and resend
    Retryable(RetryableFailure),
    /// Permanent failure, propagate
    Failed(ClientError),
}

impl RetryPolicy {
    /// Policy that never retries
    #[must_use]
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Whether `status` is in the retryable set
    #[must_use]
    pub fn is_retryable_status(&self, status: u16) -> bool {
        self.retryable_statuses.contains(&status)
    }

    /// Whether another retry fits in the budget
    #[must_use]
    pub const fn can_retry(&self, state: &RequestState) -> bool {
        state.retry_count < self.max_retries
    }

    /// Delay before retry number `retry_count` (zero-based): 1s, 2s, 4s, ...
    #[must_use]
    pub fn backoff(&self, retry_count: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(retry_count))
    }

    /// Classify the result of one attempt
    #[must_use]
    pub fn classify(&self, result: Result<ApiResponse, TransportError>) -> Outcome {
        match result {
            Err(err) if err.is_retryable() => {
                Outcome::Retryable(RetryableFailure::Network(err.to_string()))
            },
            Err(err) => Outcome::Failed(ClientError::Network(err)),
            Ok(response) if response.is_success() => Outcome::Success(response),
            Ok(response) if response.status == 401 => Outcome::Unauthorized(response),
            Ok(response) if self.is_retryable_status(response.status) => {
                Outcome::Retryable(RetryableFailure::Status(response.status))
            },
            Ok(response) => Outcome::Failed(ClientError::from_response(&response)),
        }
    }
}
