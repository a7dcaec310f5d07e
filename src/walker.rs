//! Discovery of company directories and their PDF files.
//!
//! Both listings are non-recursive and sorted, so a batch visits companies and
//! merges files in the same order on every run regardless of how the
//! filesystem enumerates entries.
//!
//! Symlinks are resolved when classifying an entry, so a link to a directory
//! counts as a company and a link to a PDF counts as an input. Dangling links
//! match neither and are skipped.

use globset::{GlobBuilder, GlobMatcher};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use walkdir::WalkDir;

use crate::error::{MergeError, Result};

/// Pattern a file name must match to be picked up as an input.
const PDF_PATTERN: &str = "*.pdf";

fn pdf_matcher() -> &'static GlobMatcher {
    static MATCHER: OnceLock<GlobMatcher> = OnceLock::new();
    MATCHER.get_or_init(|| {
        GlobBuilder::new(PDF_PATTERN)
            .case_insensitive(true)
            .literal_separator(true)
            .build()
            .expect("PDF glob pattern is valid")
            .compile_matcher()
    })
}

/// List the immediate subdirectories of `root`, one per company.
///
/// # Errors
///
/// Returns [`MergeError::RootNotFound`] if `root` does not exist or is not a
/// directory, and [`MergeError::FailedToReadDirectory`] if it cannot be read.
pub fn list_company_directories(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(MergeError::root_not_found(root));
    }

    let mut directories = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|err| walk_error(root, err))?;
        if entry.path().is_dir() {
            directories.push(entry.into_path());
        }
    }

    Ok(directories)
}

/// List the PDF files directly inside `company_dir`, sorted by full path.
///
/// Nested directories are not searched. An empty result is not an error.
pub fn list_pdf_files(company_dir: &Path) -> Result<Vec<PathBuf>> {
    let matcher = pdf_matcher();
    let mut files = Vec::new();

    for entry in WalkDir::new(company_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|err| walk_error(company_dir, err))?;
        if matcher.is_match(entry.file_name()) && entry.path().is_file() {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// Company identifier derived from the directory's base name.
pub fn company_name(company_dir: &Path) -> String {
    company_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| company_dir.display().to_string())
}

fn walk_error(dir: &Path, err: walkdir::Error) -> MergeError {
    let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
    MergeError::FailedToReadDirectory { path, source }
}
