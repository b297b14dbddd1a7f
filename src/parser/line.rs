// file: src/parser/line.rs
// description: tokenizes one raw log line into a LogEntry
// reference: `<YYYY-MM-DD HH:MM:SS> <LEVEL> <message>`

use crate::models::LogEntry;
use crate::models::log_entry::TIMESTAMP_FORMAT;
use crate::parser::patterns::TIMESTAMP;
use chrono::{NaiveDateTime, Timelike};

pub struct LineParser;

impl LineParser {
    pub fn new() -> Self {
        Self
    }

    /// Returns `None` unless the whole line matches the grammar.
    pub fn parse(&self, line: &str) -> Option<LogEntry> {
        if line.trim().is_empty() {
            return None;
        }

        let first_space = line.find(' ')?;
        let second_space = first_space + 1 + line[first_space + 1..].find(' ')?;

        let timestamp = parse_timestamp(&line[..second_space])?;

        let rest = &line[second_space + 1..];
        let (level, message) = rest.split_once(' ')?;

        Some(LogEntry::new(timestamp, level, message))
    }
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if !TIMESTAMP.is_match(raw) {
        return None;
    }

    let timestamp = NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).ok()?;

    // chrono accepts `:60` as a leap second
    if timestamp.nanosecond() >= 1_000_000_000 {
        return None;
    }

    Some(timestamp)
}
