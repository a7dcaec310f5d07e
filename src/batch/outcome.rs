use serde::{Deserialize, Serialize};
use std::path::Path;

/// What happened to one company directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyOutcome {
    /// Base name of the company directory.
    pub company_name: String,

    /// False only if the copy or merge for this company failed.
    pub succeeded: bool,

    /// Human-readable summary.
    pub message: String,

    /// Number of input PDFs found for the company.
    pub pdf_count: usize,

    /// Produced file, or empty if nothing was produced.
    pub output_path: String,
}

impl CompanyOutcome {
    /// A company directory without any PDFs.
    pub fn no_files(company_name: &str) -> Self {
        Self {
            company_name: company_name.to_string(),
            succeeded: true,
            message: format!("No PDF files found in {company_name} directory."),
            pdf_count: 0,
            output_path: String::new(),
        }
    }

    /// A single PDF copied to `output_path`.
    pub fn copied(company_name: &str, output_path: &Path) -> Self {
        Self {
            company_name: company_name.to_string(),
            succeeded: true,
            message: format!("Single PDF copied for {company_name}."),
            pdf_count: 1,
            output_path: output_path.display().to_string(),
        }
    }

    /// `pdf_count` PDFs merged into `output_path`.
    pub fn merged(company_name: &str, pdf_count: usize, output_path: &Path) -> Self {
        Self {
            company_name: company_name.to_string(),
            succeeded: true,
            message: format!("Successfully merged {pdf_count} PDFs for {company_name}."),
            pdf_count,
            output_path: output_path.display().to_string(),
        }
    }

    /// Processing failed; nothing was produced.
    pub fn failed(company_name: &str, pdf_count: usize, error: impl std::fmt::Display) -> Self {
        Self {
            company_name: company_name.to_string(),
            succeeded: false,
            message: format!("Error processing {company_name}: {error}"),
            pdf_count,
            output_path: String::new(),
        }
    }
}

/// Aggregate over all companies of one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    /// True iff at least one company succeeded, or there was nothing to do.
    pub succeeded: bool,

    /// Aggregate summary.
    pub message: String,

    /// One entry per company directory, in discovery order.
    pub company_outcomes: Vec<CompanyOutcome>,

    pub total_companies: usize,
    pub successful_count: usize,
    pub failed_count: usize,
}

impl BatchResult {
    /// A batch that did not get to process any company.
    pub fn aborted(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            message: message.into(),
            ..Self::default()
        }
    }

    /// A batch with no company directories to process.
    pub fn nothing_to_process() -> Self {
        Self {
            succeeded: true,
            message: "No company directories found to process.".to_string(),
            ..Self::default()
        }
    }

    /// Record a company outcome and update the counts.
    pub fn push(&mut self, outcome: CompanyOutcome) {
        if outcome.succeeded {
            self.successful_count += 1;
        } else {
            self.failed_count += 1;
        }
        self.total_companies += 1;
        self.company_outcomes.push(outcome);
    }

    /// Settle the aggregate flag and summary once every company is processed.
    ///
    /// Any forward progress counts as success: a mixed batch reports
    /// `succeeded = true` and the failures are only visible per company.
    pub fn finish(&mut self) {
        self.succeeded = self.successful_count > 0;
        self.message = format!(
            "Processed {} companies. Successful: {}, Failed: {}",
            self.total_companies, self.successful_count, self.failed_count
        );
    }

    /// Mark the batch as aborted, keeping the outcomes collected so far.
    pub fn abort(&mut self, error: impl std::fmt::Display) {
        self.succeeded = false;
        self.message = format!("Error during PDF merge process: {error}");
    }
}
