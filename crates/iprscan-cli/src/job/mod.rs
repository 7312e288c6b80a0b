//! Job workflow
//!
//! Polling and result retrieval on top of the [`JobService`] seam, so the
//! workflow can run against the HTTP client or an in-memory fake.

pub mod poll;
pub mod results;

pub use poll::poll_until_terminal;
pub use results::{retrieve_all, OutputOptions, RetrievalFailure, RetrievalReport, WrittenResult};

use crate::error::Result;
use async_trait::async_trait;
use iprscan_common::types::{JobId, JobStatus, ResultType};

/// The job operations the workflow depends on
#[async_trait]
pub trait JobService: Send + Sync {
    /// Fetch the current status of a job (one request)
    async fn job_status(&self, job_id: &JobId) -> Result<JobStatus>;

    /// List the result types available for a job
    async fn result_types(&self, job_id: &JobId) -> Result<Vec<ResultType>>;

    /// Download one result
    async fn fetch_result(&self, job_id: &JobId, identifier: &str) -> Result<Vec<u8>>;
}
