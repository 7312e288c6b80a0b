//! Status polling
//!
//! `PENDING` and `RUNNING` keep the loop going; any other token ends it.
//! Without limits in the [`PollPolicy`] the loop only ends on a terminal
//! status (or when the process is interrupted).

use crate::config::PollPolicy;
use crate::error::{CliError, Result};
use crate::job::JobService;
use iprscan_common::types::{JobId, JobStatus};
use tokio::time::{sleep, Instant};
use tracing::{debug, info};

/// Poll until the job reaches a terminal status and return that status.
///
/// The first check happens immediately. `observer` sees every status together
/// with its 1-based attempt number. The terminal status is returned without
/// a further request.
pub async fn poll_until_terminal<S, F>(
    service: &S,
    job_id: &JobId,
    policy: &PollPolicy,
    mut observer: F,
) -> Result<JobStatus>
where
    S: JobService + ?Sized,
    F: FnMut(&JobStatus, u32),
{
    let started = Instant::now();
    let mut attempts: u32 = 0;

    loop {
        let status = service.job_status(job_id).await?;
        attempts += 1;
        observer(&status, attempts);

        if status.is_terminal() {
            info!(job_id = %job_id, status = %status, attempts, "Job reached terminal status");
            return Ok(status);
        }

        let out_of_attempts = policy.max_attempts.is_some_and(|max| attempts >= max);
        let remaining = policy
            .max_wait
            .map(|max| max.saturating_sub(started.elapsed()));

        if out_of_attempts || remaining.is_some_and(|r| r.is_zero()) {
            return Err(CliError::Timeout {
                job_id: job_id.to_string(),
                attempts,
                elapsed_secs: started.elapsed().as_secs(),
            });
        }

        // The last check lands on the max-wait deadline
        let delay = remaining.map_or(policy.interval, |r| r.min(policy.interval));

        debug!(job_id = %job_id, status = %status, delay = ?delay, "Waiting");
        sleep(delay).await;
    }
}
