// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log_sentinel::pipeline::log_run_start;
use log_sentinel::utils::logging::format_verdict;
use log_sentinel::{Config, Driver, IngestionPipeline, JsonExporter, RunOutcome};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "log_sentinel")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Periodic log file analyzer", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Overrides `log_analyzer.log_file_path`
    #[arg(long, value_name = "PATH", env = "LOG_SENTINEL_LOG_FILE")]
    log_file: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze the log file on a fixed interval until interrupted
    Watch {
        #[arg(long, value_name = "SECS")]
        interval: Option<u64>,
    },

    /// Analyze the log file once and exit
    Analyze {
        #[arg(long)]
        json: bool,

        #[arg(short, long, requires = "json")]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    log_sentinel::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());

    let mut config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }

    let code = match cli.command {
        Commands::Watch { interval } => {
            cmd_watch(config, interval).await?;
            ExitCode::SUCCESS
        }
        Commands::Analyze { json, pretty } => cmd_analyze(config, json, pretty).await?,
    };

    Ok(code)
}

async fn cmd_watch(mut config: Config, interval: Option<u64>) -> Result<()> {
    if let Some(interval) = interval {
        anyhow::ensure!(interval > 0, "--interval must be greater than 0");
        config.log_analyzer.interval_seconds = interval;
    }

    let config = Arc::new(config);
    let pipeline = Arc::new(IngestionPipeline::new(Arc::clone(&config)));

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown requested, stopping after the current run");
            shutdown.cancel();
        }
    });

    let driver = Driver::new(pipeline, config.log_analyzer.interval())
        .with_retry_delay(config.log_analyzer.retry_delay());
    driver.run(cancel).await;

    Ok(())
}

/// Exits non-zero when the run is classified as a failure.
async fn cmd_analyze(config: Config, json: bool, pretty: bool) -> Result<ExitCode> {
    let pipeline = IngestionPipeline::new(Arc::new(config));

    log_run_start();
    let outcome = pipeline.run().await;
    outcome.report();

    match &outcome {
        RunOutcome::Success(report) if json => {
            let rendered = JsonExporter::new(pretty)
                .render(report)
                .context("Failed to render report")?;
            println!("{}", rendered);
        }
        RunOutcome::Success(_) => println!("{}", format_verdict(&outcome)),
        RunOutcome::Failed(_) => eprintln!("{}", format_verdict(&outcome)),
    }

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
