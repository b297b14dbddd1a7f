// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

pub mod driver;
mod ingestion;
mod outcome;

pub use driver::{DEFAULT_INTERVAL, DEFAULT_RETRY_DELAY, Driver, DriverStats, Job, log_run_start};
pub use ingestion::IngestionPipeline;
pub use outcome::RunOutcome;
