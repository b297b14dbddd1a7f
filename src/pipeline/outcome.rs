// file: src/pipeline/outcome.rs
// description: tagged terminal outcome of a run and its single report
// reference: one success report or one classified failure per run

use crate::error::{FailureKind, RunFailure};
use crate::models::RunReport;
use tracing::{error, info, warn};

#[derive(Debug)]
pub enum RunOutcome {
    Success(RunReport),
    Failed(RunFailure),
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Success(_))
    }

    /// `None` for a successful run.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            RunOutcome::Success(_) => None,
            RunOutcome::Failed(failure) => Some(failure.kind()),
        }
    }

    pub fn report_data(&self) -> Option<&RunReport> {
        match self {
            RunOutcome::Success(report) => Some(report),
            RunOutcome::Failed(_) => None,
        }
    }

    pub fn into_result(self) -> Result<RunReport, RunFailure> {
        self.into()
    }

    /// Emits the outcome to the tracing sink: metrics on success, one
    /// warning for not found, one error for read or parse failures.
    pub fn report(&self) {
        match self {
            RunOutcome::Success(report) => {
                let summary = report.aggregation.summary_line();
                if summary.is_empty() {
                    info!("No log entries to summarize");
                } else {
                    info!("{}", summary);
                }

                if let Some(top) = &report.aggregation.most_common_error {
                    info!(
                        "Most common ERROR: \"{}\" occurred {} times",
                        top.message, top.count
                    );
                }

                for entry in &report.preview {
                    info!("[LOG]: {}", entry);
                }
            }
            RunOutcome::Failed(failure) => match failure.kind() {
                FailureKind::NotFound => warn!("{}", failure),
                FailureKind::ReadFailure | FailureKind::ParseFailure => error!("{}", failure),
            },
        }
    }
}

impl From<Result<RunReport, RunFailure>> for RunOutcome {
    fn from(result: Result<RunReport, RunFailure>) -> Self {
        match result {
            Ok(report) => RunOutcome::Success(report),
            Err(failure) => RunOutcome::Failed(failure),
        }
    }
}

impl From<RunOutcome> for Result<RunReport, RunFailure> {
    fn from(outcome: RunOutcome) -> Self {
        match outcome {
            RunOutcome::Success(report) => Ok(report),
            RunOutcome::Failed(failure) => Err(failure),
        }
    }
}
