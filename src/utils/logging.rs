// file: src/utils/logging.rs
// description: Tracing subscriber initialization with optional ANSI coloring

use crate::error::FailureKind;
use crate::pipeline::RunOutcome;
use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `verbose`.
pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    colored::control::set_override(colored_output);

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact()
        .with_ansi(colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// One-line colored verdict for a finished run: green check on success,
/// yellow warning for not found, red cross for read or parse failures.
pub fn format_verdict(outcome: &RunOutcome) -> String {
    match outcome {
        RunOutcome::Success(report) => {
            let mut msg = format!(
                "{}: {} lines analyzed",
                report.path.display(),
                report.total_lines
            );
            let summary = report.aggregation.summary_line();
            if !summary.is_empty() {
                msg.push_str(&format!(" ({})", summary));
            }
            format!("{} {}", "✓".green().bold(), msg.green())
        }
        RunOutcome::Failed(failure) => {
            let msg = failure.to_string();
            match failure.kind() {
                FailureKind::NotFound => format!("{} {}", "⚠".yellow().bold(), msg.yellow()),
                FailureKind::ReadFailure | FailureKind::ParseFailure => {
                    format!("{} {}", "✗".red().bold(), msg.red())
                }
            }
        }
    }
}
