//! InterProScan 5 CLI Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Command-line client for the InterProScan 5 REST service at EMBL-EBI.
//!
//! # Overview
//!
//! - **Parameter discovery**: list accepted parameters (`--params`) and
//!   describe one (`--paramDetail appl`)
//! - **Submission**: submit a protein sequence (`--email ... --sequence ...`),
//!   synchronously or with `--async`
//! - **Status**: check a job (`--status --jobid ...`)
//! - **Results**: list result types (`--resultTypes --jobid ...`) and download
//!   them (`--polljob --jobid ...`)
//!
//! The flag names follow the EBI sample clients so existing scripts keep
//! working.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod job;
pub mod progress;

// Re-export commonly used types
pub use error::{CliError, Result};

use crate::config::{
    ClientConfig, PollPolicy, DEFAULT_API_TIMEOUT_SECS, DEFAULT_BASE_URL,
    DEFAULT_INITIAL_DELAY_SECS, DEFAULT_POLL_INTERVAL_SECS,
};
use crate::job::OutputOptions;
use clap::Parser;
use iprscan_common::logging::LogLevel;
use iprscan_common::types::{JobId, JobParameters, ParamValue};
use std::time::Duration;
use tracing::debug;

/// Identify protein family, domain and signal signatures in a protein
/// sequence using InterProScan 5.
#[derive(Parser, Debug)]
#[command(name = "iprscan")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "For further information about InterProScan 5, see https://www.ebi.ac.uk/interpro/")]
pub struct Cli {
    /// Sequence file name, literal sequence, or database identifier
    #[arg(value_name = "SEQUENCE")]
    pub sequence_arg: Option<String>,

    /// E-mail address
    #[arg(long)]
    pub email: Option<String>,

    /// Input sequence file name, literal sequence, or database identifier
    #[arg(long)]
    pub sequence: Option<String>,

    /// Signature methods to use, see --paramDetail appl
    #[arg(long)]
    pub appl: Option<String>,

    /// Enable InterProScan Matches look-up (ignored)
    #[arg(long)]
    pub crc: bool,

    /// Disable InterProScan Matches look-up (ignored)
    #[arg(long)]
    pub nocrc: bool,

    /// Enable inclusion of GO terms
    #[arg(long, conflicts_with = "nogoterms")]
    pub goterms: bool,

    /// Disable inclusion of GO terms
    #[arg(long)]
    pub nogoterms: bool,

    /// Enable inclusion of pathway terms
    #[arg(long, conflicts_with = "nopathways")]
    pub pathways: bool,

    /// Disable inclusion of pathway terms
    #[arg(long)]
    pub nopathways: bool,

    /// Job title
    #[arg(long)]
    pub title: Option<String>,

    /// File name prefix for results (defaults to the job id)
    #[arg(long)]
    pub outfile: Option<String>,

    /// Only retrieve results of this type
    #[arg(long)]
    pub outformat: Option<String>,

    /// Asynchronous mode: print the job id and exit
    #[arg(long = "async")]
    pub async_mode: bool,

    /// Job identifier
    #[arg(long)]
    pub jobid: Option<String>,

    /// Wait for the job and retrieve its results
    #[arg(long)]
    pub polljob: bool,

    /// Get job status
    #[arg(long)]
    pub status: bool,

    /// Get result types
    #[arg(long = "resultTypes")]
    pub result_types: bool,

    /// List input parameters
    #[arg(long)]
    pub params: bool,

    /// Get details for a parameter
    #[arg(long = "paramDetail", value_name = "NAME")]
    pub param_detail: Option<String>,

    /// Decrease output level
    #[arg(long)]
    pub quiet: bool,

    /// Increase output level
    #[arg(long)]
    pub verbose: bool,

    /// Base URL for the service
    #[arg(long = "baseURL", env = "IPRSCAN_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Debug output level
    #[arg(long = "debugLevel", default_value_t = 0)]
    pub debug_level: u8,

    /// Seconds between status checks
    #[arg(long, env = "IPRSCAN_POLL_INTERVAL", default_value_t = DEFAULT_POLL_INTERVAL_SECS, value_name = "SECS")]
    pub poll_interval: u64,

    /// Seconds to wait after submission before the first status check
    #[arg(long, default_value_t = DEFAULT_INITIAL_DELAY_SECS, value_name = "SECS")]
    pub initial_delay: u64,

    /// Give up after this many status checks
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,

    /// Give up after waiting this many seconds for the job
    #[arg(long, value_name = "SECS")]
    pub max_wait: Option<u64>,

    /// Per-request HTTP timeout in seconds
    #[arg(long, env = "IPRSCAN_API_TIMEOUT_SECS", default_value_t = DEFAULT_API_TIMEOUT_SECS, value_name = "SECS")]
    pub timeout: u64,
}

/// What an invocation asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    ListParameters,
    ParameterDetail(String),
    Submit,
    Status(JobId),
    ResultTypes(JobId),
    PollJob(JobId),
}

impl Cli {
    /// Resolve the requested mode; `None` for an unrecognised combination.
    pub fn mode(&self) -> Option<Mode> {
        if self.params {
            return Some(Mode::ListParameters);
        }

        if let Some(name) = &self.param_detail {
            return Some(Mode::ParameterDetail(name.clone()));
        }

        if self.email.is_some() && self.jobid.is_none() {
            return Some(Mode::Submit);
        }

        let job_id = JobId::from(self.jobid.as_deref()?);

        if self.status {
            Some(Mode::Status(job_id))
        } else if self.result_types {
            Some(Mode::ResultTypes(job_id))
        } else if self.polljob {
            Some(Mode::PollJob(job_id))
        } else {
            None
        }
    }

    /// Log level implied by `--verbose`, `--quiet` and `--debugLevel`
    pub fn log_level(&self) -> LogLevel {
        LogLevel::from_cli_flags(self.verbose, self.quiet, self.debug_level)
    }

    /// Build the client configuration from the parsed flags
    pub fn client_config(&self) -> Result<ClientConfig> {
        let poll = PollPolicy::default()
            .with_interval(Duration::from_secs(self.poll_interval))
            .with_max_attempts(self.max_attempts)
            .with_max_wait(self.max_wait.map(Duration::from_secs));

        Ok(ClientConfig::new(self.base_url.clone())?
            .with_request_timeout(Duration::from_secs(self.timeout))
            .with_initial_delay(Duration::from_secs(self.initial_delay))
            .with_poll_policy(poll))
    }

    /// Collect the submission parameters.
    ///
    /// The positional sequence takes precedence over `--sequence`.
    pub fn job_parameters(&self) -> Result<JobParameters> {
        let mut params = JobParameters::new();

        if let Some(arg) = self.sequence_arg.as_deref().or(self.sequence.as_deref()) {
            params.insert("sequence", ParamValue::Text(input::load_sequence(arg)));
        }

        if self.crc || self.nocrc {
            debug!("--crc/--nocrc are accepted for compatibility and ignored");
        }

        params.insert_flag("goterms", flag_choice(self.goterms, self.nogoterms));
        params.insert_flag("pathways", flag_choice(self.pathways, self.nopathways));

        if let Some(appl) = &self.appl {
            let methods = input::split_applications(appl);
            if !methods.is_empty() {
                params.insert(api::form::APPL_PARAM, ParamValue::List(methods));
            }
        }

        Ok(params)
    }

    /// Output file naming and filtering
    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            prefix: self.outfile.clone(),
            format: self.outformat.clone(),
            ..Default::default()
        }
    }
}

fn flag_choice(enable: bool, disable: bool) -> Option<bool> {
    match (enable, disable) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}
