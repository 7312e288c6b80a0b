//! API endpoint URL builders
//!
//! Path segments (parameter names, job ids, result identifiers) are
//! percent-encoded; the base URL is used as given.

use urlencoding::encode;

/// Build parameter list URL
pub fn parameters_url(base_url: &str) -> String {
    format!("{}/parameters", base_url)
}

/// Build parameter details URL
pub fn parameter_details_url(base_url: &str, name: &str) -> String {
    format!("{}/parameter_details/{}", base_url, encode(name))
}

/// Build job submission URL
pub fn run_url(base_url: &str) -> String {
    format!("{}/run/", base_url)
}

/// Build job status URL
pub fn status_url(base_url: &str, job_id: &str) -> String {
    format!("{}/status/{}", base_url, encode(job_id))
}

/// Build result types URL
pub fn result_types_url(base_url: &str, job_id: &str) -> String {
    format!("{}/result_types/{}", base_url, encode(job_id))
}

/// Build result download URL
pub fn result_url(base_url: &str, job_id: &str, identifier: &str) -> String {
    format!(
        "{}/result/{}/{}",
        base_url,
        encode(job_id),
        encode(identifier)
    )
}
