// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod aggregator;
pub mod config;
pub mod error;
pub mod exporter;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod utils;

pub use aggregator::AggregationEngine;
pub use config::{Config, LogAnalyzerConfig};
pub use error::{AnalyzerError, FailureKind, Result, RunFailure};
pub use exporter::JsonExporter;
pub use models::{AggregationResult, ErrorFrequency, LogEntry, RunReport};
pub use parser::LineParser;
pub use pipeline::{Driver, DriverStats, IngestionPipeline, Job, RunOutcome};
pub use utils::{OperationTimer, PerformanceMetrics};
