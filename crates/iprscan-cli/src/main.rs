//! iprscan - InterProScan 5 REST client entry point

use clap::{CommandFactory, Parser};
use iprscan_cli::api::ApiClient;
use iprscan_cli::commands;
use iprscan_cli::commands::submit::Submission;
use iprscan_cli::{Cli, CliError, Mode};
use iprscan_common::logging::{init_logging, LogConfig};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    // Values from a local .env feed clap's env fallbacks
    let _ = dotenvy::dotenv();

    // No arguments at all: show usage and exit cleanly
    if std::env::args_os().len() < 2 {
        let _ = Cli::command().print_help();
        return;
    }

    let cli = Cli::parse();

    let (log_config, rejected) = LogConfig::builder()
        .level(cli.log_level())
        .log_file_prefix("iprscan")
        .build()
        .merge_env();

    // Logging is optional for a CLI; carry on without it
    let _ = init_logging(&log_config);

    for problem in &rejected {
        eprintln!("Warning: ignoring invalid logging setting {}", problem);
    }

    let Some(mode) = cli.mode() else {
        eprintln!("Error: unrecognised argument combination");
        eprintln!();
        eprintln!("{}", Cli::command().render_help());
        process::exit(2);
    };

    if let Err(e) = execute(&cli, mode).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Run the resolved mode
async fn execute(cli: &Cli, mode: Mode) -> Result<(), CliError> {
    let config = cli.client_config()?;
    let client = ApiClient::new(&config)?;

    match mode {
        Mode::ListParameters => commands::params::list(&client).await,

        Mode::ParameterDetail(name) => commands::params::detail(&client, &name).await,

        Mode::Submit => {
            let submission = Submission {
                email: cli.email.clone().unwrap_or_default(),
                title: cli.title.clone(),
                parameters: cli.job_parameters()?,
                async_mode: cli.async_mode,
            };
            commands::submit::run(&client, &config, submission, &cli.output_options(), cli.quiet)
                .await
        },

        Mode::Status(job_id) => commands::status::run(&client, &job_id).await,

        Mode::ResultTypes(job_id) => commands::result_types::run(&client, &job_id).await,

        Mode::PollJob(job_id) => {
            commands::fetch::run(
                &client,
                &job_id,
                &config.poll,
                &cli.output_options(),
                cli.quiet,
            )
            .await
        },
    }
}
