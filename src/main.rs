use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pdfbatch::batch::BatchOrchestrator;
use pdfbatch::cli::{Cli, Command};
use pdfbatch::config::Config;
use pdfbatch::server;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.to_config()?;

    init_tracing(&config);

    match cli.selected_command() {
        Command::Serve => {
            info!(
                input_root = %config.input_root.display(),
                output_root = %config.output_root.display(),
                "Initializing pdfbatch"
            );
            server::serve(config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Run => {
            let result = tokio::task::spawn_blocking(move || {
                BatchOrchestrator::run(&config.input_root, &config.output_root)
            })
            .await?;

            println!("{}", serde_json::to_string_pretty(&result)?);

            Ok(if result.succeeded {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

fn init_tracing(config: &Config) {
    // RUST_LOG takes precedence over the verbosity flags
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_directives()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
