//! File I/O for the merge engine.
//!
//! - [`PdfReader`] loads a source document and records its page count.
//! - [`PdfWriter`] writes a merged document or copies a single source file,
//!   always through a temporary file that is renamed into place, so an output
//!   path either holds a complete PDF or is left untouched.

pub mod reader;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader};
pub use writer::PdfWriter;
