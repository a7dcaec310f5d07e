use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::batch::outcome::CompanyOutcome;
use crate::error::MergeError;
use crate::io::PdfWriter;
use crate::merge::PdfMerger;
use crate::walker;

/// Suffix appended to the company name to form the output file name.
pub const OUTPUT_SUFFIX: &str = "_merged.pdf";

/// A company whose copy or merge failed.
#[derive(Debug, thiserror::Error)]
#[error("Error processing {company_name}: {error}")]
pub struct CompanyFailure {
    pub company_name: String,
    pub pdf_count: usize,
    #[source]
    pub error: MergeError,
}

impl CompanyFailure {
    /// Convert into the outcome reported for this company.
    pub fn into_outcome(self) -> CompanyOutcome {
        CompanyOutcome::failed(&self.company_name, self.pdf_count, &self.error)
    }
}

/// Applies the per-company policy: no files are skipped, a single file is
/// copied and two or more files are merged.
pub struct CompanyProcessor;

impl CompanyProcessor {
    /// Process one company directory, writing into `output_root`.
    ///
    /// # Errors
    ///
    /// Returns a [`CompanyFailure`] carrying the underlying error if the
    /// directory cannot be listed or the copy or merge fails.
    pub fn process(
        company_dir: &Path,
        company_name: &str,
        output_root: &Path,
    ) -> Result<CompanyOutcome, CompanyFailure> {
        let fail = |pdf_count, error| CompanyFailure {
            company_name: company_name.to_string(),
            pdf_count,
            error,
        };

        let pdf_files = walker::list_pdf_files(company_dir).map_err(|err| fail(0, err))?;
        let output_path = Self::output_path(output_root, company_name);

        match pdf_files.as_slice() {
            [] => {
                debug!(company = company_name, "no PDF files found");
                Ok(CompanyOutcome::no_files(company_name))
            }
            [single] => {
                PdfWriter::copy(single, &output_path).map_err(|err| fail(1, err))?;
                info!(company = company_name, output = %output_path.display(), "copied single PDF");
                Ok(CompanyOutcome::copied(company_name, &output_path))
            }
            files => {
                let stats = PdfMerger::merge(files, &output_path)
                    .map_err(|err| fail(files.len(), err))?;
                info!(
                    company = company_name,
                    files = stats.files_merged,
                    pages = stats.total_pages,
                    output = %output_path.display(),
                    "merged PDFs"
                );
                Ok(CompanyOutcome::merged(company_name, files.len(), &output_path))
            }
        }
    }

    /// `{output_root}/{company_name}_merged.pdf`
    pub fn output_path(output_root: &Path, company_name: &str) -> PathBuf {
        output_root.join(format!("{company_name}{OUTPUT_SUFFIX}"))
    }
}
