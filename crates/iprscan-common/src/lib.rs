//! InterProScan Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, error handling and logging for the iprscan workspace.
//!
//! # Overview
//!
//! - **Types**: job identifiers, job status, submission parameters and the
//!   service's parameter / result-type descriptions
//! - **Error Handling**: shared error and result types
//! - **Logging**: tracing subscriber setup used by the CLI
//!
//! # Example
//!
//! ```
//! use iprscan_common::types::{JobParameters, ParamValue};
//!
//! let mut params = JobParameters::new();
//! params.insert("sequence", ParamValue::text("MKTAYIAKQR"));
//! params.insert("appl", ParamValue::list(["PfamA", "SMART"]));
//! assert!(params.contains("appl"));
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{IprscanError, Result};
