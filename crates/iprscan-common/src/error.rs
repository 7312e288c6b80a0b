//! Error types shared across the iprscan workspace

use thiserror::Error;

/// Result type alias for shared operations
pub type Result<T> = std::result::Result<T, IprscanError>;

/// Main error type for shared domain operations
#[derive(Error, Debug)]
pub enum IprscanError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl IprscanError {
    /// Create a missing parameter error
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingParameter(name.into())
    }

    /// Create an invalid parameter error
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
