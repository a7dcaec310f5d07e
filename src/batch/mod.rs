//! Batch merging of per-company PDF collections.
//!
//! The input root holds one directory per company. A batch walks those
//! directories in sorted order and, for each company, writes
//! `{company}_merged.pdf` into the output root:
//!
//! - no PDFs: nothing is written, the company still succeeds
//! - one PDF: the file is copied verbatim
//! - two or more: the files are merged in sorted path order
//!
//! A failing company is recorded and the batch moves on. The batch as a whole
//! succeeds when at least one company did.
//!
//! # Examples
//!
//! ```no_run
//! use pdfbatch::batch::BatchOrchestrator;
//! use std::path::Path;
//!
//! let result = BatchOrchestrator::run(Path::new("wwwroot/pdfs"), Path::new("wwwroot/merged"));
//! for outcome in &result.company_outcomes {
//!     println!("{}: {}", outcome.company_name, outcome.message);
//! }
//! ```

pub mod company;
pub mod orchestrator;
pub mod outcome;

pub use company::{CompanyFailure, CompanyProcessor};
pub use orchestrator::BatchOrchestrator;
pub use outcome::{BatchResult, CompanyOutcome};
