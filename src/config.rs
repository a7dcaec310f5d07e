//! Runtime configuration.
//!
//! The input and output roots are resolved once at startup and handed to the
//! batch explicitly; nothing below the service boundary looks them up on its
//! own.

use anyhow::{Result, bail};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Default base directory holding the `pdfs` and `merged` directories.
pub const DEFAULT_WEB_ROOT: &str = "wwwroot";

/// Input directory name under the web root.
pub const INPUT_DIR_NAME: &str = "pdfs";

/// Output directory name under the web root.
pub const OUTPUT_DIR_NAME: &str = "merged";

/// Default listen address of the HTTP service.
pub const DEFAULT_BIND: &str = "0.0.0.0:3001";

/// Complete configuration for the service and the batch runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory with one subdirectory per company.
    pub input_root: PathBuf,

    /// Directory receiving `{company}_merged.pdf` files.
    pub output_root: PathBuf,

    /// Listen address of the HTTP service.
    pub bind: SocketAddr,

    /// Debug-level logging for this crate.
    pub verbose: bool,

    /// Only log warnings and errors.
    pub quiet: bool,
}

impl Config {
    /// Configuration using `<web_root>/pdfs` and `<web_root>/merged`.
    pub fn from_web_root(web_root: &Path) -> Self {
        Self {
            input_root: web_root.join(INPUT_DIR_NAME),
            output_root: web_root.join(OUTPUT_DIR_NAME),
            bind: default_bind(),
            verbose: false,
            quiet: false,
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either root is empty
    /// - The input and output roots are the same directory
    /// - Verbose and quiet modes are both enabled
    pub fn validate(&self) -> Result<()> {
        if self.input_root.as_os_str().is_empty() {
            bail!("Input root must not be empty");
        }

        if self.output_root.as_os_str().is_empty() {
            bail!("Output root must not be empty");
        }

        // Merged files would be picked up as company inputs on the next run
        if self.input_root == self.output_root {
            bail!(
                "Output root cannot be the same as the input root: {}",
                self.output_root.display()
            );
        }

        if self.verbose && self.quiet {
            bail!("Cannot use both --verbose and --quiet");
        }

        Ok(())
    }

    /// Default `tracing` filter directives for this configuration.
    pub fn log_directives(&self) -> &'static str {
        if self.verbose {
            "pdfbatch=debug,tower_http=debug"
        } else if self.quiet {
            "pdfbatch=warn,tower_http=warn"
        } else {
            "pdfbatch=info,tower_http=debug"
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_web_root(Path::new(DEFAULT_WEB_ROOT))
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3001))
}
