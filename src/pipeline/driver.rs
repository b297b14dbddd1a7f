// file: src/pipeline/driver.rs
// description: polling loop that runs a job per tick until cancelled
// reference: fixed interval between runs, fixed backoff after a panicked run

use chrono::{DateTime, Local};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinError;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(10);

pub fn run_start_message(now: DateTime<Local>) -> String {
    format!(
        "Log analyzer running at: {}",
        now.format("%Y-%m-%d %H:%M:%S %:z")
    )
}

/// Logged at the start of every run, scheduled or one-shot.
pub fn log_run_start() {
    info!("{}", run_start_message(Local::now()));
}

/// Work performed once per tick. Implementations handle their own
/// classified failures; a panic is the only failure the driver sees.
pub trait Job: Send + Sync + 'static {
    fn execute(&self) -> impl Future<Output = ()> + Send;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriverStats {
    pub ticks: u64,
    pub failures: u64,
}

pub struct Driver<J> {
    job: Arc<J>,
    interval: Duration,
    retry_delay: Duration,
}

impl<J: Job> Driver<J> {
    pub fn new(job: Arc<J>, interval: Duration) -> Self {
        Self {
            job,
            interval,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Cancellation is observed before a tick and while waiting between
    /// ticks. A run already in progress always completes.
    pub async fn run(&self, cancel: CancellationToken) -> DriverStats {
        let mut stats = DriverStats::default();

        info!(
            "Log analyzer started (interval: {}s, retry delay: {}s)",
            self.interval.as_secs(),
            self.retry_delay.as_secs()
        );

        while !cancel.is_cancelled() {
            log_run_start();
            stats.ticks += 1;

            let delay = match self.tick().await {
                Ok(()) => self.interval,
                Err(e) => {
                    stats.failures += 1;
                    error!("Error occurred in log analyzer: {}", e);
                    self.retry_delay
                }
            };

            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(delay) => {}
            }
        }

        info!(
            "Log analyzer stopped after {} ticks ({} failed)",
            stats.ticks, stats.failures
        );
        stats
    }

    async fn tick(&self) -> Result<(), JoinError> {
        let job = Arc::clone(&self.job);
        tokio::spawn(async move { job.execute().await }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::Mutex;
    use tokio::time::Instant;

    struct ScriptedJob {
        calls: Mutex<Vec<Instant>>,
        cancel: CancellationToken,
        panic_on: Option<usize>,
        stop_after: usize,
    }

    impl ScriptedJob {
        fn new(cancel: CancellationToken, stop_after: usize, panic_on: Option<usize>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                cancel,
                panic_on,
                stop_after,
            }
        }

        fn gaps(&self) -> Vec<Duration> {
            let calls = self.calls.lock().unwrap();
            calls.windows(2).map(|w| w[1] - w[0]).collect()
        }
    }

    impl Job for ScriptedJob {
        async fn execute(&self) {
            let call = {
                let mut calls = self.calls.lock().unwrap();
                calls.push(Instant::now());
                calls.len()
            };

            if self.panic_on == Some(call) {
                panic!("scripted failure on call {}", call);
            }

            if call >= self.stop_after {
                self.cancel.cancel();
            }
        }
    }

    fn assert_close(actual: Duration, expected: Duration) {
        assert!(
            actual >= expected && actual < expected + Duration::from_millis(50),
            "expected about {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_run_start_message_shape() {
        let now = Local.with_ymd_and_hms(2025, 7, 10, 14, 30, 21).unwrap();
        let message = run_start_message(now);
        assert!(message.starts_with("Log analyzer running at: 2025-07-10 14:30:21 "));
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_are_spaced_by_interval() {
        let cancel = CancellationToken::new();
        let job = Arc::new(ScriptedJob::new(cancel.clone(), 3, None));
        let driver = Driver::new(Arc::clone(&job), Duration::from_secs(30));

        let stats = driver.run(cancel).await;

        assert_eq!(stats, DriverStats { ticks: 3, failures: 0 });
        let gaps = job.gaps();
        assert_eq!(gaps.len(), 2);
        for gap in gaps {
            assert_close(gap, Duration::from_secs(30));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_panicked_run_backs_off_and_continues() {
        let cancel = CancellationToken::new();
        let job = Arc::new(ScriptedJob::new(cancel.clone(), 3, Some(1)));
        let driver = Driver::new(Arc::clone(&job), Duration::from_secs(30))
            .with_retry_delay(Duration::from_secs(10));

        let stats = driver.run(cancel).await;

        assert_eq!(stats, DriverStats { ticks: 3, failures: 1 });
        let gaps = job.gaps();
        assert_close(gaps[0], Duration::from_secs(10));
        assert_close(gaps[1], Duration::from_secs(30));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_before_start_runs_nothing() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let job = Arc::new(ScriptedJob::new(cancel.clone(), 1, None));

        let stats = Driver::new(Arc::clone(&job), DEFAULT_INTERVAL).run(cancel).await;

        assert_eq!(stats.ticks, 0);
        assert!(job.calls.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_wait_stops_loop() {
        let cancel = CancellationToken::new();
        let job = Arc::new(ScriptedJob::new(cancel.clone(), usize::MAX, None));
        let driver = Driver::new(Arc::clone(&job), Duration::from_secs(30));

        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(45)).await;
            trigger.cancel();
        });

        let stats = driver.run(cancel).await;
        assert_eq!(stats.ticks, 2);
    }
}
