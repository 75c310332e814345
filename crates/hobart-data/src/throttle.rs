//! Paced, failure-isolated per-ticker fetching.

use crate::error::{DataError, Result};
use crate::model::{FetchOutcome, TickerResult};
use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{Interval, MissedTickBehavior, interval, sleep, timeout};
use tracing::{debug, warn};

/// Configuration for per-ticker fetching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Minimum spacing between the starts of successive ticker calls. A call
    /// issuing several provider requests spends one slot.
    pub request_delay: Duration,
    /// Deadline for a single request.
    pub timeout: Duration,
    /// Requests allowed in flight at once (1 = strictly sequential).
    pub max_in_flight: usize,
    /// Extra attempts after a failed request.
    pub retries: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            request_delay: Duration::from_millis(1000),
            timeout: Duration::from_secs(30),
            max_in_flight: 1,
            retries: 0,
        }
    }
}

/// Cooperative cancellation signal checked between per-ticker fetches.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    /// Create an unset flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Observer for long fetch loops.
pub trait FetchProgress {
    /// A loop over `total` tickers is starting.
    fn started(&self, total: usize) {
        let _ = total;
    }

    /// One ticker finished.
    fn finished(&self, symbol: &str, succeeded: bool) {
        let _ = (symbol, succeeded);
    }
}

impl FetchProgress for () {}

/// Fetch every symbol, isolating failures per ticker.
///
/// Results come back in input order regardless of `max_in_flight`. The only
/// error is [`DataError::Cancelled`].
pub async fn fetch_each<T, F, Fut>(
    symbols: &[String],
    config: &FetchConfig,
    cancel: &CancellationFlag,
    progress: &dyn FetchProgress,
    fetch: F,
) -> Result<Vec<TickerResult<T>>>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    progress.started(symbols.len());

    let pacer = pacer(config.request_delay);
    let pacer = &pacer;
    let fetch = &fetch;

    let results: Vec<Option<TickerResult<T>>> = stream::iter(symbols.iter())
        .map(|symbol| async move {
            if cancel.is_cancelled() {
                return None;
            }
            if let Some(pacer) = pacer {
                pacer.lock().await.tick().await;
            }
            if cancel.is_cancelled() {
                return None;
            }

            let outcome = fetch_with_policy(symbol, config, fetch).await;
            progress.finished(symbol, outcome.is_fetched());
            Some(TickerResult {
                symbol: symbol.clone(),
                outcome,
            })
        })
        .buffered(config.max_in_flight.max(1))
        .collect()
        .await;

    if cancel.is_cancelled() {
        return Err(DataError::Cancelled);
    }

    Ok(results.into_iter().flatten().collect())
}

fn pacer(delay: Duration) -> Option<Mutex<Interval>> {
    if delay.is_zero() {
        return None;
    }
    let mut ticker = interval(delay);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    Some(Mutex::new(ticker))
}

async fn fetch_with_policy<T, F, Fut>(symbol: &str, config: &FetchConfig, fetch: &F) -> FetchOutcome<T>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 0;
    loop {
        let result = match timeout(config.timeout, fetch(symbol.to_string())).await {
            Ok(result) => result,
            Err(_) => Err(DataError::Timeout {
                symbol: symbol.to_string(),
                timeout_ms: config.timeout.as_millis() as u64,
            }),
        };

        match result {
            Ok(value) => {
                debug!(symbol, attempt, "fetched");
                return FetchOutcome::Fetched(value);
            }
            Err(e) if attempt < config.retries => {
                attempt += 1;
                debug!(symbol, attempt, error = %e, "retrying");
                sleep(config.request_delay).await;
            }
            Err(e) => {
                warn!(symbol, error = %e, "fetch failed");
                return FetchOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn symbols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn fast_config() -> FetchConfig {
        FetchConfig {
            request_delay: Duration::ZERO,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_failures_are_isolated() {
        let tickers = symbols(&["A", "BAD", "C"]);
        let results = fetch_each(&tickers, &fast_config(), &CancellationFlag::new(), &(), |s| async move {
            if s == "BAD" {
                Err(DataError::InvalidSymbol(s))
            } else {
                Ok(s.len())
            }
        })
        .await
        .unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].outcome, FetchOutcome::Fetched(1));
        assert!(!results[1].outcome.is_fetched());
        assert_eq!(results[2].symbol, "C");
    }

    #[tokio::test]
    async fn test_order_preserved_with_fan_out() {
        let tickers = symbols(&["A", "B", "C", "D", "E"]);
        let config = FetchConfig {
            max_in_flight: 3,
            ..fast_config()
        };
        let results = fetch_each(&tickers, &config, &CancellationFlag::new(), &(), |s| async move {
            // later symbols finish first
            let delay = 5 * (5 - (s.as_bytes()[0] - b'A') as u64);
            sleep(Duration::from_millis(delay)).await;
            Ok(s)
        })
        .await
        .unwrap();

        let order: Vec<_> = results.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C", "D", "E"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_becomes_failure() {
        let tickers = symbols(&["SLOW"]);
        let config = FetchConfig {
            timeout: Duration::from_millis(10),
            ..fast_config()
        };
        let results = fetch_each(&tickers, &config, &CancellationFlag::new(), &(), |_| async {
            sleep(Duration::from_secs(60)).await;
            Ok(())
        })
        .await
        .unwrap();

        match &results[0].outcome {
            FetchOutcome::Failed { reason } => assert!(reason.contains("timed out")),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_bounded_retry() {
        let calls = AtomicUsize::new(0);
        let tickers = symbols(&["FLAKY"]);
        let config = FetchConfig {
            retries: 2,
            ..fast_config()
        };
        let results = fetch_each(&tickers, &config, &CancellationFlag::new(), &(), |_| {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 2 {
                    Err(DataError::Http("503".to_string()))
                } else {
                    Ok(n)
                }
            }
        })
        .await
        .unwrap();

        assert_eq!(results[0].outcome, FetchOutcome::Fetched(2));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_no_retry_by_default() {
        let calls = AtomicUsize::new(0);
        let tickers = symbols(&["X"]);
        let results = fetch_each(&tickers, &fast_config(), &CancellationFlag::new(), &(), |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err::<(), _>(DataError::Http("500".to_string())) }
        })
        .await
        .unwrap();

        assert!(!results[0].outcome.is_fetched());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cancellation_between_fetches() {
        let cancel = CancellationFlag::new();
        let tickers = symbols(&["A", "B", "C"]);
        let result = fetch_each(&tickers, &fast_config(), &cancel, &(), |s| {
            let cancel = cancel.clone();
            async move {
                cancel.cancel();
                Ok(s)
            }
        })
        .await;

        assert!(matches!(result, Err(DataError::Cancelled)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_requests_are_spaced() {
        let started = Mutex::new(Vec::new());
        let tickers = symbols(&["A", "B", "C"]);
        let config = FetchConfig {
            request_delay: Duration::from_millis(500),
            ..Default::default()
        };
        let origin = tokio::time::Instant::now();
        let log = &started;
        fetch_each(&tickers, &config, &CancellationFlag::new(), &(), |_| async move {
            log.lock().await.push(origin.elapsed());
            Ok(())
        })
        .await
        .unwrap();

        let started = started.into_inner();
        assert_eq!(started.len(), 3);
        assert!(started[1] - started[0] >= Duration::from_millis(500));
        assert!(started[2] - started[1] >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pacing_is_per_ticker_call() {
        let started = Mutex::new(Vec::new());
        let tickers = symbols(&["A", "B"]);
        let config = FetchConfig {
            request_delay: Duration::from_millis(500),
            ..Default::default()
        };
        let origin = tokio::time::Instant::now();
        let log = &started;
        fetch_each(&tickers, &config, &CancellationFlag::new(), &(), |s| async move {
            for request in ["summary", "chart"] {
                log.lock().await.push((s.clone(), request, origin.elapsed()));
                sleep(Duration::from_millis(10)).await;
            }
            Ok(())
        })
        .await
        .unwrap();

        let started = started.into_inner();
        assert_eq!(started.len(), 4);
        assert_eq!(started[1].1, "chart");
        assert!(started[1].2 - started[0].2 < Duration::from_millis(500));
        assert_eq!(started[2].0, "B");
        assert!(started[2].2 - started[0].2 >= Duration::from_millis(500));
    }
}
