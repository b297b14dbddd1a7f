// file: src/pipeline/ingestion.rs
// description: one analysis run over the configured log file
// reference: resolve path, read whole file, parse every line, aggregate

use crate::aggregator::AggregationEngine;
use crate::config::Config;
use crate::error::RunFailure;
use crate::models::{LogEntry, RunReport};
use crate::parser::LineParser;
use crate::pipeline::driver::Job;
use crate::pipeline::outcome::RunOutcome;
use crate::utils::{OperationTimer, PerformanceMetrics};
use std::borrow::Cow;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::fs;
use tracing::{Instrument, debug, info, info_span};
use uuid::Uuid;

pub struct IngestionPipeline {
    config: Arc<Config>,
    parser: LineParser,
    engine: AggregationEngine,
}

impl IngestionPipeline {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            parser: LineParser::new(),
            engine: AggregationEngine::new(),
        }
    }

    /// Runs once and returns exactly one classified outcome. Nothing is
    /// logged for the outcome itself; see [`RunOutcome::report`].
    pub async fn run(&self) -> RunOutcome {
        let span = info_span!("run", run_id = %Uuid::new_v4());

        async {
            let timer = OperationTimer::new("log analysis");
            let result = self.analyze().await;
            timer.finish();
            RunOutcome::from(result)
        }
        .instrument(span)
        .await
    }

    async fn analyze(&self) -> Result<RunReport, RunFailure> {
        let path = self.resolve_path().await?;
        info!("Processing log file: {}", path.display());

        let bytes = fs::read(&path)
            .await
            .map_err(|source| RunFailure::ReadFailure {
                path: path.clone(),
                source,
            })?;

        let content = decode(&bytes);
        let lines = split_lines(&content);
        info!("Total lines in log file: {}", lines.len());

        let entries = self.parse_all(&lines)?;
        let aggregation = self.engine.aggregate(&entries);

        let preview = entries
            .into_iter()
            .take(self.config.log_analyzer.preview_lines)
            .collect();

        Ok(RunReport {
            path,
            total_lines: lines.len(),
            aggregation,
            preview,
        })
    }

    async fn resolve_path(&self) -> Result<PathBuf, RunFailure> {
        let path = self
            .config
            .log_analyzer
            .resolved_path()
            .ok_or(RunFailure::NotFound { path: None })?;

        if !is_existing_file(&path).await {
            return Err(RunFailure::NotFound { path: Some(path) });
        }

        Ok(path)
    }

    /// All or nothing: the first malformed line fails the whole run.
    fn parse_all(&self, lines: &[&str]) -> Result<Vec<LogEntry>, RunFailure> {
        let start = Instant::now();
        let mut entries = Vec::with_capacity(lines.len());

        for (index, line) in lines.iter().enumerate() {
            match self.parser.parse(line) {
                Some(entry) => entries.push(entry),
                None => {
                    return Err(RunFailure::ParseFailure {
                        line_number: index + 1,
                        line: line.to_string(),
                    });
                }
            }
        }

        debug!(
            "{}",
            PerformanceMetrics::new("parse", entries.len(), start.elapsed()).format()
        );
        Ok(entries)
    }
}

impl Job for IngestionPipeline {
    async fn execute(&self) {
        self.run().await.report();
    }
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Drops a leading UTF-8 byte order mark; invalid sequences become U+FFFD.
fn decode(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    String::from_utf8_lossy(bytes)
}

/// Splits on `\r\n`, `\n` or a lone `\r`. A trailing terminator does not
/// start another line.
fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(end) => {
                lines.push(&rest[..end]);
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }

    lines
}

// Errors other than "not found" fall through so the read classifies them.
async fn is_existing_file(path: &Path) -> bool {
    match fs::metadata(path).await {
        Ok(metadata) => metadata.is_file(),
        Err(e) => e.kind() != ErrorKind::NotFound,
    }
}
