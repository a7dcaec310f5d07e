//! pdfbatch - merge per-company PDF collections into one document per company.
//!
//! Given an input root with one subdirectory per company, a batch writes one
//! `{company}_merged.pdf` per company into an output root and reports what
//! happened to each company. The batch is exposed over HTTP (see [`server`])
//! and as a one-shot command.
//!
//! # Examples
//!
//! ```no_run
//! use pdfbatch::batch::BatchOrchestrator;
//! use pdfbatch::config::Config;
//!
//! let config = Config::default();
//! let result = BatchOrchestrator::run(&config.input_root, &config.output_root);
//! println!("{}", result.message);
//! ```
//!
//! ## Using Individual Components
//!
//! ```no_run
//! use pdfbatch::merge::PdfMerger;
//! use pdfbatch::walker;
//! use std::path::Path;
//!
//! # fn example() -> pdfbatch::Result<()> {
//! let files = walker::list_pdf_files(Path::new("wwwroot/pdfs/Acme"))?;
//! let stats = PdfMerger::merge(&files, Path::new("Acme_merged.pdf"))?;
//! println!("Created {} page document", stats.total_pages);
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod merge;
pub mod server;
pub mod walker;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use batch::{BatchOrchestrator, BatchResult, CompanyOutcome};
pub use config::Config;
pub use error::{ErrorKind, MergeError, Result};
