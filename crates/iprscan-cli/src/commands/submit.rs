//! Job submission
//!
//! Submits a job and, unless running asynchronously, waits for it and
//! downloads the results.

use crate::api::ApiClient;
use crate::commands::fetch;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::job::OutputOptions;
use iprscan_common::types::JobParameters;
use tracing::info;

/// Everything needed for one submission
#[derive(Debug, Clone)]
pub struct Submission {
    pub email: String,
    pub title: Option<String>,
    pub parameters: JobParameters,
    /// Print the job id and return without waiting
    pub async_mode: bool,
}

/// Submit a job.
///
/// Asynchronous mode prints the job id on stdout and returns. Synchronous
/// mode prints it on stderr, waits the configured initial delay and then
/// behaves like `--polljob`.
pub async fn run(
    client: &ApiClient,
    config: &ClientConfig,
    submission: Submission,
    output: &OutputOptions,
    quiet: bool,
) -> Result<()> {
    let job_id = client
        .submit(
            &submission.email,
            submission.title.as_deref(),
            submission.parameters,
        )
        .await?;

    info!(job_id = %job_id, async_mode = submission.async_mode, "Job submitted");

    if submission.async_mode {
        println!("{}", job_id);
        return Ok(());
    }

    eprintln!("{}", job_id);
    tokio::time::sleep(config.initial_delay).await;

    fetch::run(client, &job_id, &config.poll, output, quiet).await
}
