use lopdf::Document;
use std::path::{Path, PathBuf};

use crate::error::{MergeError, Result};

/// A loaded source document.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,
}

/// Loads source PDFs for merging.
pub struct PdfReader;

impl PdfReader {
    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::FailedToLoadPdf`] naming `path` if the file cannot
    /// be read or parsed.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<LoadedPdf> {
        let path = path.as_ref();
        let document = Document::load(path)
            .map_err(|err| MergeError::failed_to_load_pdf(path, err.to_string()))?;
        let page_count = document.get_pages().len();

        Ok(LoadedPdf {
            document,
            path: path.to_path_buf(),
            page_count,
        })
    }
}
