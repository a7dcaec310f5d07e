use lopdf::Document;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{MergeError, Result};

/// Writes output files atomically: data goes to a sibling temp file which is
/// renamed over the destination once complete.
pub struct PdfWriter;

impl PdfWriter {
    /// Serialize `doc` to `path`, overwriting any existing file.
    ///
    /// The parent directory must already exist.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::FailedToCreateOutput`] if the temp file cannot be
    /// created and [`MergeError::FailedToWrite`] if serialization, flushing or
    /// the final rename fails. The temp file is removed on failure.
    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<u64> {
        let path = path.as_ref();
        let temp_path = Self::temp_path(path);

        let result = Self::save_to_temp(doc, &temp_path)
            .and_then(|()| Self::persist(&temp_path, path));
        if result.is_err() {
            let _ = std::fs::remove_file(&temp_path);
        }
        result
    }

    /// Copy `from` to `to` byte for byte, overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::FailedToCopy`] if the source cannot be read or the
    /// copy cannot be written.
    pub fn copy<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> Result<u64> {
        let (from, to) = (from.as_ref(), to.as_ref());
        let temp_path = Self::temp_path(to);

        let copy_error = |source: std::io::Error| MergeError::FailedToCopy {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        };

        let result = std::fs::copy(from, &temp_path)
            .map_err(copy_error)
            .and_then(|_| Self::persist(&temp_path, to));
        if result.is_err() {
            let _ = std::fs::remove_file(&temp_path);
        }
        result
    }

    fn save_to_temp(doc: &mut Document, temp_path: &Path) -> Result<()> {
        let file = File::create(temp_path).map_err(|source| MergeError::FailedToCreateOutput {
            path: temp_path.to_path_buf(),
            source,
        })?;

        let write_error = |source: std::io::Error| MergeError::FailedToWrite {
            path: temp_path.to_path_buf(),
            source,
        };

        let mut writer = BufWriter::new(file);
        doc.save_to(&mut writer)
            .map_err(|err| write_error(std::io::Error::other(err)))?;
        writer.flush().map_err(write_error)?;
        writer
            .into_inner()
            .map_err(|err| write_error(err.into_error()))?
            .sync_all()
            .map_err(write_error)?;

        Ok(())
    }

    fn persist(temp_path: &Path, path: &Path) -> Result<u64> {
        std::fs::rename(temp_path, path).map_err(|source| MergeError::FailedToWrite {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(std::fs::metadata(path).map(|m| m.len()).unwrap_or(0))
    }

    fn temp_path(path: &Path) -> PathBuf {
        path.with_extension("tmp")
    }
}
