//! Error types for pdfbatch.
//!
//! Every failure carries the path it concerns so that a company outcome can
//! name the offending file. Errors fall into four scopes (see [`ErrorKind`]):
//! a missing input root, a failure isolated to one company, a failure of the
//! batch itself, and anything unexpected at the service boundary.

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfbatch operations.
pub type Result<T> = std::result::Result<T, MergeError>;

/// Scope in which an error is caught and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input root is missing; reported once at the top of the batch result.
    RootNotFound,
    /// Copy or merge failed for a single company.
    CompanyProcessing,
    /// The batch could not continue (e.g. output root cannot be created).
    Orchestration,
    /// The batch could not run at all.
    TransportFault,
}

/// Main error type for pdfbatch operations.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error("PDFs directory not found: {}", path.display())]
    RootNotFound { path: PathBuf },

    #[error("Failed to read directory {}: {source}", path.display())]
    FailedToReadDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to merge PDF: {}\n  Reason: {reason}", file_name(path))]
    FailedToLoadPdf { path: PathBuf, reason: String },

    #[error("Failed to merge PDF: {}\n  Reason: {reason}", file_name(path))]
    FailedToAppendPages { path: PathBuf, reason: String },

    #[error("At least two PDF files are required to merge, got {count}")]
    NotEnoughInputs { count: usize },

    #[error("Failed to copy {} to {}: {source}", from.display(), to.display())]
    FailedToCopy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create output file: {}\n  Reason: {source}", path.display())]
    FailedToCreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write to output file: {}\n  Reason: {source}", path.display())]
    FailedToWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create output directory {}: {source}", path.display())]
    FailedToCreateOutputRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Background task failed: {reason}")]
    TaskFailed { reason: String },
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl MergeError {
    /// Create a RootNotFound error.
    pub fn root_not_found(path: impl Into<PathBuf>) -> Self {
        Self::RootNotFound { path: path.into() }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FailedToAppendPages error.
    pub fn failed_to_append_pages(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FailedToAppendPages {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a TaskFailed error.
    pub fn task_failed(reason: impl Into<String>) -> Self {
        Self::TaskFailed {
            reason: reason.into(),
        }
    }

    /// The input file this error is attributed to, if any.
    pub fn offending_path(&self) -> Option<&std::path::Path> {
        match self {
            Self::FailedToLoadPdf { path, .. } | Self::FailedToAppendPages { path, .. } => {
                Some(path)
            }
            Self::FailedToCopy { from, .. } => Some(from),
            _ => None,
        }
    }

    /// Classify this error into the scope where it is caught.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RootNotFound { .. } => ErrorKind::RootNotFound,
            Self::FailedToLoadPdf { .. }
            | Self::FailedToAppendPages { .. }
            | Self::NotEnoughInputs { .. }
            | Self::FailedToCopy { .. }
            | Self::FailedToCreateOutput { .. }
            | Self::FailedToWrite { .. } => ErrorKind::CompanyProcessing,
            Self::FailedToReadDirectory { .. }
            | Self::FailedToCreateOutputRoot { .. } => ErrorKind::Orchestration,
            Self::TaskFailed { .. } => ErrorKind::TransportFault,
        }
    }
}
