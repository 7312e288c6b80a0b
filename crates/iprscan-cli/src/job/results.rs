//! Result retrieval
//!
//! Fetches every result type offered for a finished job and writes each one
//! to `{prefix or job id}.{identifier}.{suffix}`. A failure on one type is
//! recorded and the remaining types are still attempted.

use crate::error::{CliError, Result};
use crate::job::JobService;
use iprscan_common::types::{JobId, ResultType};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Where and what to write
#[derive(Debug, Clone)]
pub struct OutputOptions {
    /// File name base; the job id when unset
    pub prefix: Option<String>,
    /// Only retrieve the result type with this identifier
    pub format: Option<String>,
    /// Output directory; empty means the current directory
    pub directory: PathBuf,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            prefix: None,
            format: None,
            directory: PathBuf::new(),
        }
    }
}

impl OutputOptions {
    fn wants(&self, result_type: &ResultType) -> bool {
        self.format
            .as_deref()
            .is_none_or(|format| format == result_type.identifier)
    }

    fn path_for(&self, job_id: &JobId, result_type: &ResultType) -> PathBuf {
        let base = self.prefix.as_deref().unwrap_or(job_id.as_str());
        self.directory.join(result_type.file_name(base))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenResult {
    pub identifier: String,
    pub path: PathBuf,
    pub size: usize,
}

#[derive(Debug)]
pub struct RetrievalFailure {
    pub identifier: String,
    pub error: CliError,
}

/// Outcome of [`retrieve_all`]
#[derive(Debug, Default)]
pub struct RetrievalReport {
    pub written: Vec<WrittenResult>,
    pub failures: Vec<RetrievalFailure>,
}

impl RetrievalReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.written.len() + self.failures.len()
    }
}

/// Fetch and write every wanted result type of a job.
///
/// Listing the result types is the only step whose failure aborts the call;
/// per-type fetch or write failures end up in the report.
pub async fn retrieve_all<S>(
    service: &S,
    job_id: &JobId,
    options: &OutputOptions,
) -> Result<RetrievalReport>
where
    S: JobService + ?Sized,
{
    let types = service.result_types(job_id).await?;
    let wanted: Vec<&ResultType> = types.iter().filter(|t| options.wants(t)).collect();

    if let (Some(requested), true) = (options.format.as_deref(), wanted.is_empty()) {
        return Err(CliError::NoMatchingResultType {
            requested: requested.to_string(),
            available: types
                .iter()
                .map(|t| t.identifier.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        });
    }

    let mut report = RetrievalReport::default();

    for result_type in wanted {
        let path = options.path_for(job_id, result_type);

        match fetch_and_write(service, job_id, result_type, &path).await {
            Ok(size) => {
                info!(identifier = %result_type.identifier, path = %path.display(), size, "Result written");
                report.written.push(WrittenResult {
                    identifier: result_type.identifier.clone(),
                    path,
                    size,
                });
            },
            Err(error) => {
                warn!(identifier = %result_type.identifier, error = %error, "Result retrieval failed");
                report.failures.push(RetrievalFailure {
                    identifier: result_type.identifier.clone(),
                    error,
                });
            },
        }
    }

    Ok(report)
}

async fn fetch_and_write<S>(
    service: &S,
    job_id: &JobId,
    result_type: &ResultType,
    path: &Path,
) -> Result<usize>
where
    S: JobService + ?Sized,
{
    let bytes = service.fetch_result(job_id, &result_type.identifier).await?;
    tokio::fs::write(path, &bytes).await?;
    Ok(bytes.len())
}
