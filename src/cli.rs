//! Command-line interface.
//!
//! Every option can also be supplied through an environment variable, which is
//! how the service is usually configured when deployed.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_BIND, DEFAULT_WEB_ROOT, INPUT_DIR_NAME, OUTPUT_DIR_NAME};

/// Merge each company's PDF files into a single document.
///
/// The input root holds one directory per company. For every company a file
/// named `<company>_merged.pdf` is written to the output root.
#[derive(Parser, Debug)]
#[command(name = "pdfbatch")]
#[command(version)]
#[command(about = "Merge each company's PDF files into a single document", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base directory holding the `pdfs` and `merged` directories
    #[arg(long, value_name = "DIR", env = "PDFBATCH_WEB_ROOT", default_value = DEFAULT_WEB_ROOT, global = true)]
    pub web_root: PathBuf,

    /// Directory with one subdirectory per company [default: <WEB_ROOT>/pdfs]
    #[arg(long, value_name = "DIR", env = "PDFBATCH_INPUT_ROOT", global = true)]
    pub input_root: Option<PathBuf>,

    /// Directory receiving the merged files [default: <WEB_ROOT>/merged]
    #[arg(long, value_name = "DIR", env = "PDFBATCH_OUTPUT_ROOT", global = true)]
    pub output_root: Option<PathBuf>,

    /// Address the HTTP service listens on
    #[arg(long, value_name = "ADDR", env = "PDFBATCH_BIND", default_value = DEFAULT_BIND, global = true)]
    pub bind: SocketAddr,

    /// Verbose output - log every file appended to a merge
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    pub quiet: bool,
}

/// What to do once configured.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Serve the merge trigger and health check over HTTP (default)
    Serve,

    /// Run a single batch, print the result as JSON and exit
    ///
    /// Exits with status 1 if the batch reports failure.
    Run,
}

impl Cli {
    /// The subcommand to execute, defaulting to `serve`.
    pub fn selected_command(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }

    /// Convert CLI arguments into a validated [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an error if the resolved configuration fails validation.
    pub fn to_config(&self) -> Result<Config> {
        let config = Config {
            input_root: self
                .input_root
                .clone()
                .unwrap_or_else(|| self.web_root.join(INPUT_DIR_NAME)),
            output_root: self
                .output_root
                .clone()
                .unwrap_or_else(|| self.web_root.join(OUTPUT_DIR_NAME)),
            bind: self.bind,
            verbose: self.verbose,
            quiet: self.quiet,
        };

        config.validate()?;
        Ok(config)
    }
}
