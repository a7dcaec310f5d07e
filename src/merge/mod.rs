//! PDF merging.
//!
//! [`PdfMerger`] concatenates the pages of two or more source documents, in
//! the order given, into a single output file.

pub mod merger;

pub use merger::{MergeStatistics, PdfMerger};
