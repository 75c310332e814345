//! Progress bars for per-ticker fetch loops.

use hobart_data::FetchProgress;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Draws one bar per fetch loop on stderr and counts failed tickers.
#[derive(Debug)]
pub(crate) struct BarProgress {
    bar: ProgressBar,
    failed: AtomicUsize,
}

impl BarProgress {
    pub(crate) fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Self {
            bar,
            failed: AtomicUsize::new(0),
        }
    }
}

impl FetchProgress for BarProgress {
    fn started(&self, total: usize) {
        self.failed.store(0, Ordering::Relaxed);
        self.bar.reset();
        self.bar.set_length(total as u64);
        self.bar.set_message(format!("Fetching {total} tickers..."));
        if total == 0 {
            self.bar.finish_and_clear();
        }
    }

    fn finished(&self, symbol: &str, succeeded: bool) {
        if !succeeded {
            self.failed.fetch_add(1, Ordering::Relaxed);
        }
        self.bar.inc(1);
        self.bar.set_message(symbol.to_string());

        if self.bar.length().is_some_and(|len| self.bar.position() >= len) {
            let failed = self.failed.load(Ordering::Relaxed);
            self.bar.finish_with_message(format!(
                "Fetched {} tickers ({failed} failed)",
                self.bar.position() as usize - failed
            ));
        }
    }
}
