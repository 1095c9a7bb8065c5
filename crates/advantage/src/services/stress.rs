//! Stress Batch Runner
//!
//! Fires a batch of `GET /stress/heavy_task` calls at the gateway with
//! a bounded number in flight at once and a per-request timeout. Used
//! to exercise the stress microservice from the CLI.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::debug;

use crate::adapters::Gateway;

/// Batch parameters
#[derive(Debug, Clone)]
pub struct StressConfig {
    /// Total requests in the batch
    pub requests: usize,
    /// Maximum requests in flight at once
    pub concurrency: usize,
    /// `seconds` query parameter forwarded to the heavy task
    pub task_seconds: u64,
    /// Per-request deadline
    pub timeout: Duration,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            requests: 50,
            concurrency: 8,
            task_seconds: 2,
            timeout: Duration::from_secs(10),
        }
    }
}

/// What became of the batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StressReport {
    pub succeeded: usize,
    pub failed: usize,
    pub timed_out: usize,
    pub elapsed: Duration,
}

impl StressReport {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed + self.timed_out
    }
}

enum RequestOutcome {
    Succeeded,
    Failed,
    TimedOut,
}

/// Issues stress batches against one gateway
pub struct StressRunner {
    client: reqwest::Client,
    base_url: String,
}

impl StressRunner {
    pub fn new(gateway: &Gateway) -> Self {
        Self {
            client: gateway.http_client(),
            base_url: gateway.base_url().to_string(),
        }
    }

    /// Run one batch and account for every request.
    pub async fn run(&self, config: &StressConfig) -> StressReport {
        let url = format!("{}/stress/heavy_task", self.base_url);
        let client = self.client.clone();
        let seconds = config.task_seconds;

        debug!(requests = config.requests, concurrency = config.concurrency, "starting stress batch");

        run_bounded(config, move || {
            let client = client.clone();
            let url = url.clone();
            async move {
                match client.get(&url).query(&[("seconds", seconds)]).send().await {
                    Ok(resp) if resp.status().is_success() => Ok(()),
                    _ => Err(()),
                }
            }
        })
        .await
    }
}

/// Fan out `config.requests` tasks, at most `config.concurrency` in
/// flight, each under `config.timeout`.
async fn run_bounded<F, Fut>(config: &StressConfig, task: F) -> StressReport
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<(), ()>> + Send + 'static,
{
    let started = Instant::now();
    let semaphore = Arc::new(Semaphore::new(config.concurrency.max(1)));
    let timeout = config.timeout;

    let mut join = JoinSet::new();
    for _ in 0..config.requests {
        let semaphore = semaphore.clone();
        let fut = task();
        join.spawn(async move {
            let Ok(_permit) = semaphore.acquire_owned().await else {
                return RequestOutcome::Failed;
            };
            match tokio::time::timeout(timeout, fut).await {
                Ok(Ok(())) => RequestOutcome::Succeeded,
                Ok(Err(())) => RequestOutcome::Failed,
                Err(_) => RequestOutcome::TimedOut,
            }
        });
    }

    let mut report = StressReport {
        succeeded: 0,
        failed: 0,
        timed_out: 0,
        elapsed: Duration::ZERO,
    };
    while let Some(joined) = join.join_next().await {
        match joined {
            Ok(RequestOutcome::Succeeded) => report.succeeded += 1,
            Ok(RequestOutcome::Failed) | Err(_) => report.failed += 1,
            Ok(RequestOutcome::TimedOut) => report.timed_out += 1,
        }
    }
    report.elapsed = started.elapsed();
    report
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn config(requests: usize, concurrency: usize, timeout: Duration) -> StressConfig {
        StressConfig {
            requests,
            concurrency,
            task_seconds: 0,
            timeout,
        }
    }

    #[tokio::test]
    async fn every_request_is_accounted_for() {
        let report = run_bounded(&config(12, 4, Duration::from_secs(1)), || async {
            Ok(())
        })
        .await;

        assert_eq!(report.succeeded, 12);
        assert_eq!(report.total(), 12);
    }

    #[tokio::test]
    async fn in_flight_requests_never_exceed_the_bound() {
        let in_flight = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let gauge = in_flight.clone();
        let high = peak.clone();
        let report = run_bounded(&config(20, 3, Duration::from_secs(5)), move || {
            let gauge = gauge.clone();
            let high = high.clone();
            async move {
                let now = gauge.fetch_add(1, Ordering::SeqCst) + 1;
                high.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(5)).await;
                gauge.fetch_sub(1, Ordering::SeqCst);
                Ok(())
            }
        })
        .await;

        assert_eq!(report.succeeded, 20);
        assert!(peak.load(Ordering::SeqCst) <= 3);
    }

    #[tokio::test]
    async fn slow_requests_are_reported_as_timed_out() {
        let report = run_bounded(&config(4, 4, Duration::from_millis(5)), || async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok(())
        })
        .await;

        assert_eq!(report.timed_out, 4);
        assert_eq!(report.succeeded, 0);
    }

    #[tokio::test]
    async fn failures_are_counted_separately() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let report = run_bounded(&config(6, 2, Duration::from_secs(1)), move || {
            let counter = counter.clone();
            async move {
                if counter.fetch_add(1, Ordering::SeqCst) % 2 == 0 {
                    Ok(())
                } else {
                    Err(())
                }
            }
        })
        .await;

        assert_eq!(report.succeeded + report.failed, 6);
        assert_eq!(report.failed, 3);
    }
}
