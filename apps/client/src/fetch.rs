//! Resume fetching — the single point of entry for all calls to the resume
//! service.
//!
//! One logical fetch makes up to `max_retries` sequential HTTP attempts with
//! exponential backoff between them. Transient failures (transport errors,
//! non-2xx statuses, undecodable success bodies) never escape individually:
//! each one is reported to an [`AttemptSink`], and only the last attempt's
//! reason appears in the terminal [`FetchError`].

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::Resume;

/// Path on the resume service. Fixed; the base URL is the only configurable
/// part of the endpoint.
const RESUME_PATH: &str = "/api/resume";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Retry schedule for one logical fetch. Defaults: 3 attempts, 1s before the
/// second, 2s before the third, nothing after the last.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub backoff_multiplier: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(1000),
            backoff_multiplier: 2,
        }
    }
}

impl RetryPolicy {
    /// Delay to sleep before `attempt` starts. Attempt 0 runs immediately;
    /// each later attempt waits double the previous delay.
    pub fn delay_before(&self, attempt: u32) -> Option<Duration> {
        if attempt == 0 {
            None
        } else {
            Some(self.initial_delay * self.backoff_multiplier.pow(attempt - 1))
        }
    }
}

/// Terminal failure of one full fetch-with-retry invocation. Carries the
/// number of attempts made and the last attempt's reason verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Failed to fetch resume after {attempts} attempts: {reason}")]
pub struct FetchError {
    pub attempts: u32,
    pub reason: String,
}

/// Observer for failed attempts. Every failed attempt is reported here
/// before the fetcher decides whether to retry, so no attempt outcome is
/// discarded silently.
pub trait AttemptSink: Send + Sync {
    fn attempt_failed(&self, attempt: u32, reason: &str);
}

/// Production sink: failed attempts become `warn!` records.
pub struct TracingSink;

impl AttemptSink for TracingSink {
    fn attempt_failed(&self, attempt: u32, reason: &str) {
        warn!("Fetch attempt {} failed: {}", attempt + 1, reason);
    }
}

/// Error payload the resume service (or any intermediary) may send on
/// non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// One attempt's failure. Never surfaced to the caller directly; folded
/// into the sink and, for the last attempt, into [`FetchError`].
#[derive(Debug, Error)]
enum TransientError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Verbatim `error` field parsed out of a non-2xx response body.
    #[error("{0}")]
    Upstream(String),

    /// Non-2xx response whose body carried no parseable error payload.
    #[error("HTTP error (status {0})")]
    Status(u16),

    /// 2xx response whose body was not a resume. Retried like any other
    /// transient failure.
    #[error("invalid resume body: {0}")]
    Body(#[from] serde_json::Error),
}

/// Fetches the resume from a single configured endpoint, retrying transient
/// failures per [`RetryPolicy`].
pub struct RetryingFetcher {
    client: Client,
    endpoint: String,
    policy: RetryPolicy,
}

impl RetryingFetcher {
    pub fn new(base_url: &str) -> Self {
        Self::with_policy(base_url, RetryPolicy::default())
    }

    pub fn with_policy(base_url: &str, policy: RetryPolicy) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), RESUME_PATH),
            policy,
        }
    }

    /// One logical fetch: sequential attempts, backoff between them, first
    /// success returns immediately. A new invocation does not abort an
    /// in-flight one; overlap policy is the controller's concern.
    pub async fn fetch_with_retry(&self, sink: &dyn AttemptSink) -> Result<Resume, FetchError> {
        let mut last_reason = String::new();

        for attempt in 0..self.policy.max_retries {
            if let Some(delay) = self.policy.delay_before(attempt) {
                debug!("Waiting {}ms before attempt {}", delay.as_millis(), attempt + 1);
                tokio::time::sleep(delay).await;
            }

            match self.attempt_once().await {
                Ok(resume) => {
                    debug!("Fetch succeeded on attempt {}", attempt + 1);
                    return Ok(resume);
                }
                Err(err) => {
                    let reason = err.to_string();
                    sink.attempt_failed(attempt, &reason);
                    last_reason = reason;
                }
            }
        }

        Err(FetchError {
            attempts: self.policy.max_retries,
            reason: last_reason,
        })
    }

    async fn attempt_once(&self) -> Result<Resume, TransientError> {
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match serde_json::from_str::<ErrorBody>(&body) {
                Ok(payload) => TransientError::Upstream(payload.error),
                Err(_) => TransientError::Status(status.as_u16()),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_constants() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 3);
        assert_eq!(policy.initial_delay, Duration::from_millis(1000));
        assert_eq!(policy.backoff_multiplier, 2);
    }

    #[test]
    fn test_backoff_schedule_doubles_and_skips_first_attempt() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_before(0), None);
        assert_eq!(policy.delay_before(1), Some(Duration::from_millis(1000)));
        assert_eq!(policy.delay_before(2), Some(Duration::from_millis(2000)));
    }

    #[test]
    fn test_terminal_error_message_embeds_attempts_and_last_reason() {
        let err = FetchError {
            attempts: 3,
            reason: "not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to fetch resume after 3 attempts: not found"
        );
    }

    #[test]
    fn test_status_fallback_message_contains_code() {
        assert_eq!(
            TransientError::Status(500).to_string(),
            "HTTP error (status 500)"
        );
    }
}
