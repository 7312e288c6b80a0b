//! `--status` implementation

use crate::api::ApiClient;
use crate::error::Result;
use iprscan_common::types::JobId;

/// Print the status token of a job as the service returned it
pub async fn run(client: &ApiClient, job_id: &JobId) -> Result<()> {
    let status = client.job_status(job_id).await?;
    println!("{}", status);
    Ok(())
}
