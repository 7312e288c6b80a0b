//! HTTP API client for the InterProScan 5 REST service
//!
//! Every network call goes through [`ApiClient::get`] or
//! [`ApiClient::post_form`], which turn non-success responses into
//! [`CliError::Api`] carrying the service's error payload.

use crate::api::{endpoints, form, xml};
use crate::config::ClientConfig;
use crate::error::{CliError, Result};
use crate::job::JobService;
use async_trait::async_trait;
use iprscan_common::types::{JobId, JobParameters, JobStatus, ParameterDetail, ResultType};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, warn};

/// API client for the InterProScan 5 service
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ------------------------------------------------------------------------
    // Request wrapper
    // ------------------------------------------------------------------------

    async fn get(&self, url: &str) -> Result<Response> {
        debug!(url = %url, "GET");
        let response = self.client.get(url).send().await?;
        check_status(response).await
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        Ok(self.get(url).await?.text().await?)
    }

    async fn post_form(&self, url: &str, body: String) -> Result<String> {
        debug!(url = %url, body = %body, "POST");
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        Ok(check_status(response).await?.text().await?)
    }

    // ------------------------------------------------------------------------
    // Parameter discovery
    // ------------------------------------------------------------------------

    /// List the names of the parameters the service accepts
    pub async fn list_parameter_names(&self) -> Result<Vec<String>> {
        let url = endpoints::parameters_url(&self.base_url);
        let doc = self.get_text(&url).await?;
        xml::parse_parameter_names(&doc)
    }

    /// Describe one parameter.
    ///
    /// A 404, an empty body or an `<error>` document means the service does
    /// not know the name.
    pub async fn describe_parameter(&self, name: &str) -> Result<ParameterDetail> {
        let url = endpoints::parameter_details_url(&self.base_url, name);

        let doc = match self.get_text(&url).await {
            Err(e) if e.status() == Some(StatusCode::NOT_FOUND.as_u16()) => {
                return Err(CliError::ParameterNotFound(name.to_string()));
            },
            other => other?,
        };

        if xml::is_empty_or_error(&doc) {
            return Err(CliError::ParameterNotFound(name.to_string()));
        }

        xml::parse_parameter_detail(&doc)
    }

    // ------------------------------------------------------------------------
    // Jobs
    // ------------------------------------------------------------------------

    /// Submit a job and return the identifier exactly as the service sent it
    pub async fn submit(
        &self,
        email: &str,
        title: Option<&str>,
        parameters: JobParameters,
    ) -> Result<JobId> {
        let parameters = form::merge_submission_fields(email, title, parameters);
        parameters.validate()?;

        let url = endpoints::run_url(&self.base_url);
        let job_id = self
            .post_form(&url, form::encode_submission(&parameters))
            .await?;

        debug!(job_id = %job_id, "Job submitted");
        Ok(JobId::new(job_id))
    }

    /// Fetch the current status of a job
    pub async fn job_status(&self, job_id: &JobId) -> Result<JobStatus> {
        let url = endpoints::status_url(&self.base_url, job_id.as_str());
        let status = self.get_text(&url).await?;

        debug!(job_id = %job_id, status = %status, "Job status");
        Ok(JobStatus::new(status))
    }

    /// List the result types available for a job
    pub async fn result_types(&self, job_id: &JobId) -> Result<Vec<ResultType>> {
        let url = endpoints::result_types_url(&self.base_url, job_id.as_str());
        let doc = self.get_text(&url).await?;
        xml::parse_result_types(&doc)
    }

    /// Download one result
    pub async fn fetch_result(&self, job_id: &JobId, identifier: &str) -> Result<Vec<u8>> {
        let url = endpoints::result_url(&self.base_url, job_id.as_str(), identifier);
        let bytes = self.get(&url).await?.bytes().await?;

        debug!(job_id = %job_id, identifier = %identifier, size = bytes.len(), "Result fetched");
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl JobService for ApiClient {
    async fn job_status(&self, job_id: &JobId) -> Result<JobStatus> {
        ApiClient::job_status(self, job_id).await
    }

    async fn result_types(&self, job_id: &JobId) -> Result<Vec<ResultType>> {
        ApiClient::result_types(self, job_id).await
    }

    async fn fetch_result(&self, job_id: &JobId, identifier: &str) -> Result<Vec<u8>> {
        ApiClient::fetch_result(self, job_id, identifier).await
    }
}

/// Pass successful responses through; turn anything else into an API error
/// carrying the body the service sent.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read response body".to_string());

    warn!(url = %url, status = status.as_u16(), message = %message, "Service request failed");
    Err(CliError::api(status.as_u16(), message))
}
