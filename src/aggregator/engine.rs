// file: src/aggregator/engine.rs
// description: per-level counts and most frequent ERROR message over one run
// reference: single pass over parsed entries, first-seen ordering

use crate::models::{AggregationResult, ErrorFrequency, LogEntry};
use indexmap::IndexMap;

pub struct AggregationEngine;

impl AggregationEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn aggregate(&self, entries: &[LogEntry]) -> AggregationResult {
        let mut counts_by_level: IndexMap<String, usize> = IndexMap::new();
        let mut error_messages: IndexMap<&str, usize> = IndexMap::new();

        for entry in entries {
            *counts_by_level.entry(entry.level.clone()).or_insert(0) += 1;

            if entry.is_error() {
                *error_messages.entry(entry.message.as_str()).or_insert(0) += 1;
            }
        }

        AggregationResult {
            counts_by_level,
            most_common_error: most_frequent(&error_messages),
        }
    }
}

impl Default for AggregationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Highest count wins; ties go to the message seen first.
fn most_frequent(messages: &IndexMap<&str, usize>) -> Option<ErrorFrequency> {
    let mut best: Option<(&str, usize)> = None;

    for (&message, &count) in messages {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((message, count)),
        }
    }

    best.map(|(message, count)| ErrorFrequency {
        message: message.to_string(),
        count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn entry(level: &str, message: &str) -> LogEntry {
        let timestamp = NaiveDate::from_ymd_opt(2025, 7, 10)
            .unwrap()
            .and_hms_opt(14, 30, 21)
            .unwrap();
        LogEntry::new(timestamp, level, message)
    }

    #[test]
    fn test_counts_and_most_common_error() {
        let entries = vec![
            entry("INFO", "User login successful for user123"),
            entry("ERROR", "Database connection failed - timeout"),
            entry("WARNING", "Disk usage at 85%"),
            entry("INFO", "User logout for user123"),
            entry("ERROR", "Payment processing failed for user456"),
            entry("ERROR", "Database connection failed - timeout"),
        ];

        let result = AggregationEngine::new().aggregate(&entries);

        assert_eq!(result.count("INFO"), 2);
        assert_eq!(result.count("WARNING"), 1);
        assert_eq!(result.count("ERROR"), 3);
        assert_eq!(result.counts_by_level.len(), 3);
        assert_eq!(
            result.most_common_error,
            Some(ErrorFrequency {
                message: "Database connection failed - timeout".to_string(),
                count: 2,
            })
        );
    }

    #[test]
    fn test_tie_goes_to_first_seen_message() {
        let entries = vec![
            entry("ERROR", "b"),
            entry("ERROR", "a"),
            entry("ERROR", "a"),
            entry("ERROR", "b"),
        ];

        let result = AggregationEngine::new().aggregate(&entries);
        let top = result.most_common_error.unwrap();
        assert_eq!(top.message, "b");
        assert_eq!(top.count, 2);
    }

    #[test]
    fn test_no_errors_means_no_most_common() {
        let entries = vec![entry("INFO", "ok"), entry("error", "lowercase is not ERROR")];

        let result = AggregationEngine::new().aggregate(&entries);
        assert!(result.most_common_error.is_none());
        assert_eq!(result.count("error"), 1);
    }

    #[test]
    fn test_empty_input() {
        let result = AggregationEngine::new().aggregate(&[]);
        assert_eq!(result, AggregationResult::default());
    }

    #[test]
    fn test_error_messages_grouped_exactly() {
        let entries = vec![
            entry("ERROR", "timeout"),
            entry("ERROR", "timeout "),
            entry("ERROR", "Timeout"),
            entry("ERROR", "timeout "),
        ];

        let top = AggregationEngine::new()
            .aggregate(&entries)
            .most_common_error
            .unwrap();
        assert_eq!(top.message, "timeout ");
        assert_eq!(top.count, 2);
    }
}
