//! Client configuration
//!
//! Everything the client needs is carried in an explicit [`ClientConfig`]
//! value; nothing is read from process-wide state after startup.

use crate::error::{CliError, Result};
use std::time::Duration;

// ============================================================================
// Configuration Constants
// ============================================================================

/// InterProScan 5 REST service
pub const DEFAULT_BASE_URL: &str = "https://www.ebi.ac.uk/Tools/services/rest/iprscan5";

/// Seconds between status checks
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

/// Seconds to wait after a synchronous submission before the first status check
pub const DEFAULT_INITIAL_DELAY_SECS: u64 = 5;

/// Per-request timeout; generous because result files can be large.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 300;

/// How the client waits for a job to reach a terminal state.
///
/// With neither limit set the loop waits until the service reports a
/// terminal status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: Option<u32>,
    pub max_wait: Option<Duration>,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            max_attempts: None,
            max_wait: None,
        }
    }
}

impl PollPolicy {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_max_wait(mut self, max_wait: Option<Duration>) -> Self {
        self.max_wait = max_wait;
        self
    }

    pub fn is_bounded(&self) -> bool {
        self.max_attempts.is_some() || self.max_wait.is_some()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base URL, without trailing slash
    base_url: String,

    /// Per-request HTTP timeout
    pub request_timeout: Duration,

    /// Wait before the first status check of a synchronous run
    pub initial_delay: Duration,

    pub poll: PollPolicy,
}

impl ClientConfig {
    /// Create a config for the given base URL with default timings
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into())?;

        Ok(Self {
            base_url,
            request_timeout: Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
            initial_delay: Duration::from_secs(DEFAULT_INITIAL_DELAY_SECS),
            poll: PollPolicy::default(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn with_poll_policy(mut self, poll: PollPolicy) -> Self {
        self.poll = poll;
        self
    }

    /// User-Agent sent with every request
    pub fn user_agent(&self) -> String {
        format!(
            "EBI-Sample-Client/{} ({}; Rust; {}) reqwest",
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_NAME"),
            std::env::consts::OS
        )
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
            initial_delay: Duration::from_secs(DEFAULT_INITIAL_DELAY_SECS),
            poll: PollPolicy::default(),
        }
    }
}

fn normalize_base_url(url: String) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');

    if trimmed.is_empty() {
        return Err(CliError::config("Base URL cannot be empty"));
    }

    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(CliError::config(format!(
            "Base URL must start with http:// or https://, got '{}'",
            url
        )));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.poll.interval, Duration::from_secs(10));
        assert!(!config.poll.is_bounded());
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        let config = ClientConfig::new("http://localhost:8080/iprscan5/").unwrap();
        assert_eq!(config.base_url(), "http://localhost:8080/iprscan5");
    }

    #[test]
    fn test_rejects_non_http_url() {
        assert!(matches!(
            ClientConfig::new("ftp://example.org"),
            Err(CliError::Config(_))
        ));
        assert!(ClientConfig::new("  ").is_err());
    }

    #[test]
    fn test_builders() {
        let config = ClientConfig::new("http://localhost:9000")
            .unwrap()
            .with_request_timeout(Duration::from_secs(30))
            .with_initial_delay(Duration::ZERO)
            .with_poll_policy(
                PollPolicy::default()
                    .with_interval(Duration::from_secs(1))
                    .with_max_attempts(Some(3)),
            );

        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.initial_delay, Duration::ZERO);
        assert_eq!(config.poll.max_attempts, Some(3));
        assert!(config.poll.is_bounded());
    }

    #[test]
    fn test_user_agent_names_client() {
        let agent = ClientConfig::default().user_agent();
        assert!(agent.starts_with("EBI-Sample-Client/"));
        assert!(agent.contains("iprscan-cli"));
    }
}
