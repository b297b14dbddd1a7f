// file: src/models/summary.rs
// description: per-run aggregation results and success report
// reference: internal data structures

use super::LogEntry;
use indexmap::IndexMap;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorFrequency {
    pub message: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregationResult {
    /// Keyed by exact level token, in order of first appearance.
    pub counts_by_level: IndexMap<String, usize>,
    pub most_common_error: Option<ErrorFrequency>,
}

impl AggregationResult {
    pub fn count(&self, level: &str) -> usize {
        self.counts_by_level.get(level).copied().unwrap_or(0)
    }

    pub fn total_entries(&self) -> usize {
        self.counts_by_level.values().sum()
    }

    /// `INFO: 2, WARNING: 1, ERROR: 3` over whichever levels are present.
    pub fn summary_line(&self) -> String {
        self.counts_by_level
            .iter()
            .map(|(level, count)| format!("{}: {}", level, count))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Everything a successful run surfaces to the operator.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub path: PathBuf,
    pub total_lines: usize,
    pub aggregation: AggregationResult,
    pub preview: Vec<LogEntry>,
}
