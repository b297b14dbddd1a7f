// file: src/models/log_entry.rs
// description: single structurally valid log record
// reference: internal data structures

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One parsed log line. Only produced by a full grammar match, never partially.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub timestamp: NaiveDateTime,
    pub level: String,
    pub message: String,
}

impl LogEntry {
    pub fn new(
        timestamp: NaiveDateTime,
        level: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            level: level.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == "ERROR"
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.level,
            self.message
        )
    }
}
