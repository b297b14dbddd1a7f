// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod log_entry;
pub mod summary;

pub use log_entry::LogEntry;
pub use summary::{AggregationResult, ErrorFrequency, RunReport};
