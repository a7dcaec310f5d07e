//! Core PDF merging implementation.

use lopdf::{Document, Object, ObjectId};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{MergeError, Result};
use crate::io::{PdfReader, PdfWriter};

/// Statistics about a completed merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeStatistics {
    /// Number of source documents merged.
    pub files_merged: usize,

    /// Total number of pages in the merged document.
    pub total_pages: usize,

    /// Size of the written output in bytes.
    pub output_size: u64,
}

/// Concatenates PDF documents page by page.
pub struct PdfMerger;

impl PdfMerger {
    /// Merge `paths`, in order, into a single document written to `output`.
    ///
    /// Sources are loaded and appended one at a time; every page of every
    /// source ends up in the output, in source order and, within a source, in
    /// its original page order. The output is only written once all sources
    /// have been appended, so a failing source leaves `output` untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::NotEnoughInputs`] for fewer than two paths,
    /// [`MergeError::FailedToLoadPdf`] or [`MergeError::FailedToAppendPages`]
    /// naming the offending source, or a write error for the output.
    pub fn merge(paths: &[PathBuf], output: &Path) -> Result<MergeStatistics> {
        if paths.len() < 2 {
            return Err(MergeError::NotEnoughInputs { count: paths.len() });
        }

        let base = PdfReader::read(&paths[0])?;
        debug!(path = %base.path.display(), pages = base.page_count, "loaded base document");

        let mut merged = base.document;
        let root_pages_id = Self::root_pages_id(&merged)
            .map_err(|err| MergeError::failed_to_append_pages(&paths[0], err.to_string()))?;

        for path in &paths[1..] {
            let loaded = PdfReader::read(path)?;
            Self::append_document(&mut merged, root_pages_id, loaded.document, loaded.page_count)
                .map_err(|err| MergeError::failed_to_append_pages(path, err.to_string()))?;
            debug!(path = %path.display(), pages = loaded.page_count, "appended document");
        }

        // Drop the orphaned catalogs of the appended sources
        merged.prune_objects();
        merged.renumber_objects();
        merged.compress();

        let total_pages = merged.get_pages().len();
        let output_size = PdfWriter::save(&mut merged, output)?;

        Ok(MergeStatistics {
            files_merged: paths.len(),
            total_pages,
            output_size,
        })
    }

    fn root_pages_id(doc: &Document) -> lopdf::Result<ObjectId> {
        doc.catalog()?.get(b"Pages")?.as_reference()
    }

    /// Graft the page tree of `doc` under the root Pages node of `merged`.
    ///
    /// The source tree keeps its own intermediate node, so attributes its
    /// pages inherit (MediaBox, Resources, Rotate) still apply.
    fn append_document(
        merged: &mut Document,
        root_pages_id: ObjectId,
        mut doc: Document,
        page_count: usize,
    ) -> lopdf::Result<()> {
        // Avoid object id collisions by renumbering the incoming document
        doc.renumber_objects_with(merged.max_id + 1);
        let source_pages_id = Self::root_pages_id(&doc)?;

        merged.max_id = merged.max_id.max(doc.max_id);
        merged.objects.extend(doc.objects);

        merged
            .get_object_mut(source_pages_id)?
            .as_dict_mut()?
            .set("Parent", Object::Reference(root_pages_id));

        let pages_dict = merged.get_object_mut(root_pages_id)?.as_dict_mut()?;
        pages_dict
            .get_mut(b"Kids")?
            .as_array_mut()?
            .push(Object::Reference(source_pages_id));

        let current_count = pages_dict.get(b"Count")?.as_i64()?;
        pages_dict.set("Count", Object::Integer(current_count + page_count as i64));

        Ok(())
    }
}
