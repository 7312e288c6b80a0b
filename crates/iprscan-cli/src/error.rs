//! Error types for the iprscan CLI
//!
//! User-facing errors with messages that say what failed and, where it helps,
//! what to try next.

use iprscan_common::IprscanError;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Error type for client and command operations
#[derive(Error, Debug)]
pub enum CliError {
    /// The service answered with a non-success status; `message` is its payload
    #[error("Service returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// HTTP request failed before a response was received
    #[error("Network request failed: {0}. Check your internet connection and the service URL.")]
    Http(#[from] reqwest::Error),

    /// Response document did not have the expected structure
    #[error("Unexpected XML from service: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// The service has no parameter with this name
    #[error("Parameter '{0}' not found. Run 'iprscan --params' to list available parameters.")]
    ParameterNotFound(String),

    /// Poll limits were reached before the job finished
    #[error("Gave up waiting for job {job_id} after {attempts} status checks ({elapsed_secs}s)")]
    Timeout {
        job_id: String,
        attempts: u32,
        elapsed_secs: u64,
    },

    /// The job reached a terminal state other than FINISHED
    #[error("Job {job_id} ended with status {status}")]
    JobFailed { job_id: String, status: String },

    /// The requested output format is not offered for the job
    #[error("No result type '{requested}' for this job. Available: {available}")]
    NoMatchingResultType { requested: String, available: String },

    /// Some result types could not be fetched or written
    #[error("{failed} of {attempted} result(s) could not be retrieved")]
    PartialRetrieval { failed: usize, attempted: usize },

    /// Shared domain error (parameter validation)
    #[error(transparent)]
    Common(#[from] IprscanError),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create an API error
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// HTTP status carried by an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
