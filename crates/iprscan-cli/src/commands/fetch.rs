//! `--polljob` implementation
//!
//! Waits for a job to finish, then downloads its results.

use crate::config::PollPolicy;
use crate::error::{CliError, Result};
use crate::job::{poll_until_terminal, retrieve_all, JobService, OutputOptions};
use crate::progress::{self, format_bytes};
use colored::Colorize;
use iprscan_common::types::{JobId, JobStatus};

/// Poll until terminal, then write every wanted result.
///
/// Written file names go to stdout; per-type failures are listed on stderr
/// after all types were attempted.
pub async fn run<S>(
    service: &S,
    job_id: &JobId,
    policy: &PollPolicy,
    output: &OutputOptions,
    quiet: bool,
) -> Result<()>
where
    S: JobService + ?Sized,
{
    let status = wait_for_job(service, job_id, policy, quiet).await?;

    if !status.is_finished() {
        return Err(CliError::JobFailed {
            job_id: job_id.to_string(),
            status: status.to_string(),
        });
    }

    let report = retrieve_all(service, job_id, output).await?;

    for written in &report.written {
        println!("{}", written.path.display());
        if !quiet {
            eprintln!(
                "{} {} ({})",
                "✓".green(),
                written.identifier,
                format_bytes(written.size as u64)
            );
        }
    }

    for failure in &report.failures {
        eprintln!("{} {}: {}", "✗".red(), failure.identifier, failure.error);
    }

    if !report.is_complete() {
        return Err(CliError::PartialRetrieval {
            failed: report.failures.len(),
            attempted: report.attempted(),
        });
    }

    Ok(())
}

/// Poll with a spinner on terminals, plain status lines otherwise
async fn wait_for_job<S>(
    service: &S,
    job_id: &JobId,
    policy: &PollPolicy,
    quiet: bool,
) -> Result<JobStatus>
where
    S: JobService + ?Sized,
{
    let spinner = progress::create_poll_spinner(job_id.as_str(), quiet);
    let plain = spinner.is_hidden() && !quiet;

    let result = poll_until_terminal(service, job_id, policy, |status, _| {
        if plain {
            eprintln!("{}", status);
        } else {
            spinner.set_message(status.to_string());
        }
    })
    .await;

    spinner.finish_and_clear();
    result
}
