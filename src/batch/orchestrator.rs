use std::path::Path;
use tracing::{error, info, warn};

use crate::batch::company::CompanyProcessor;
use crate::batch::outcome::BatchResult;
use crate::error::{ErrorKind, MergeError, Result};
use crate::walker;

/// Runs the company processor over every company directory of an input root.
pub struct BatchOrchestrator;

impl BatchOrchestrator {
    /// Run one batch from `input_root` into `output_root`.
    ///
    /// Never fails: a missing input root, a failing company or a failure of
    /// the batch itself are all reported in the returned [`BatchResult`].
    /// Companies are processed one after another in sorted directory order.
    pub fn run(input_root: &Path, output_root: &Path) -> BatchResult {
        info!(
            input_root = %input_root.display(),
            output_root = %output_root.display(),
            "starting PDF merge for all companies"
        );

        if !input_root.is_dir() {
            let err = MergeError::root_not_found(input_root);
            warn!("{err}");
            return BatchResult::aborted(err.to_string());
        }

        let mut result = BatchResult::default();
        match Self::process_all(input_root, output_root, &mut result) {
            Ok(()) if result.total_companies == 0 => {
                info!("no company directories found");
                BatchResult::nothing_to_process()
            }
            Ok(()) => {
                result.finish();
                info!("{}", result.message);
                result
            }
            // The root can vanish between the check above and the listing
            Err(err) if err.kind() == ErrorKind::RootNotFound => {
                warn!("{err}");
                BatchResult::aborted(err.to_string())
            }
            Err(err) => {
                error!(error = %err, "PDF merge process aborted");
                result.abort(&err);
                result
            }
        }
    }

    fn process_all(input_root: &Path, output_root: &Path, result: &mut BatchResult) -> Result<()> {
        std::fs::create_dir_all(output_root).map_err(|source| {
            MergeError::FailedToCreateOutputRoot {
                path: output_root.to_path_buf(),
                source,
            }
        })?;

        for company_dir in walker::list_company_directories(input_root)? {
            let company_name = walker::company_name(&company_dir);
            let outcome = match CompanyProcessor::process(&company_dir, &company_name, output_root)
            {
                Ok(outcome) => outcome,
                Err(failure) => {
                    warn!(
                        company = %failure.company_name,
                        file = ?failure.error.offending_path(),
                        error = %failure.error,
                        "company processing failed"
                    );
                    failure.into_outcome()
                }
            };
            result.push(outcome);
        }

        Ok(())
    }
}
