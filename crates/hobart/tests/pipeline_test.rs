//! Interactive sessions against scripted input and fake providers.

use chrono::Duration;
use hobart::data::{
    Attribute, CsvCache, DataError, DateWindow, FetchConfig, FundamentalsRecord, MarketDataSource,
    PricePoint, PriceSeries, Result as DataResult,
};
use hobart::portfolio::HrpOptimizer;
use hobart::{
    Constituent, ExportSettings, GicsSector, IndexChoice, Pipeline, PipelineConfig, PipelineError,
    Prompter, SessionSummary, UniverseError, UniverseSource,
};
use rust_decimal::Decimal;
use std::collections::{HashSet, VecDeque};
use std::io;

const SYMBOLS: [&str; 8] = ["AAA", "BBB", "CCC", "DDD", "EEE", "FFF", "GGG", "HHH"];

struct Script {
    answers: VecDeque<String>,
    transcript: String,
}

impl Script {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            transcript: String::new(),
        }
    }
}

impl Prompter for Script {
    fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
        self.transcript.push_str(message);
        let answer = self.answers.pop_front();
        if let Some(answer) = &answer {
            self.transcript.push_str(answer);
            self.transcript.push('\n');
        }
        Ok(answer)
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        self.transcript.push_str(text);
        self.transcript.push('\n');
        Ok(())
    }
}

struct FakeUniverse;

impl UniverseSource for FakeUniverse {
    async fn constituents(&self, index: IndexChoice) -> Result<Vec<Constituent>, UniverseError> {
        if index == IndexChoice::Sap500 {
            return Err(UniverseError::Unavailable {
                index,
                reason: "listing page moved".to_string(),
            });
        }
        Ok(SYMBOLS
            .iter()
            .map(|s| Constituent::new(*s, format!("{s} Holdings"), GicsSector::Industrials))
            .collect())
    }
}

/// GGG has no fundamentals and HHH lacks revenue growth unless every
/// fundamentals request fails; prices fail for the listed symbols.
#[derive(Default)]
struct FakeMarket {
    fundamentals_down: bool,
    price_failures: HashSet<&'static str>,
}

impl FakeMarket {
    fn failing_prices(symbols: &[&'static str]) -> Self {
        Self {
            price_failures: symbols.iter().copied().collect(),
            ..Default::default()
        }
    }
}

fn position(symbol: &str) -> f64 {
    SYMBOLS.iter().position(|s| *s == symbol).unwrap_or(0) as f64
}

impl MarketDataSource for FakeMarket {
    async fn fetch_fundamentals(&self, symbol: &str) -> DataResult<FundamentalsRecord> {
        if self.fundamentals_down || symbol == "GGG" {
            return Err(DataError::MissingData {
                symbol: symbol.to_string(),
                reason: "quoteSummary returned no result".to_string(),
            });
        }
        let k = position(symbol);
        let mut record = Attribute::ALL
            .into_iter()
            .enumerate()
            .fold(FundamentalsRecord::new(symbol), |r, (i, a)| {
                r.with(a, Some(1.0 + ((k + 1.0) * (i as f64 + 3.0)) % 7.0))
            });
        if symbol == "HHH" {
            record.set(Attribute::RevenueGrowth, None);
        }
        Ok(record)
    }

    async fn fetch_adjusted_closes(
        &self,
        symbol: &str,
        window: &DateWindow,
    ) -> DataResult<PriceSeries> {
        if self.price_failures.contains(symbol) {
            return Err(DataError::InvalidSymbol(symbol.to_string()));
        }
        let k = position(symbol);
        let start = window.start_date();
        Ok(PriceSeries::new(
            symbol,
            (0..90).map(|day| {
                let t = day as f64;
                PricePoint {
                    date: start + Duration::days(day),
                    adjusted_close: (20.0 + 35.0 * k)
                        * (1.0 + 0.0005 * t)
                        * (1.0 + (0.01 + 0.004 * k) * (t * (0.5 + 0.1 * k)).sin()),
                }
            }),
        ))
    }
}

fn config() -> PipelineConfig {
    PipelineConfig {
        fetch: FetchConfig {
            request_delay: std::time::Duration::ZERO,
            ..Default::default()
        },
        ..Default::default()
    }
}

async fn session(
    market: FakeMarket,
    config: PipelineConfig,
    answers: &[&str],
) -> (Result<SessionSummary, PipelineError>, String) {
    let pipeline = Pipeline::new(config, FakeUniverse, market, HrpOptimizer::default()).unwrap();
    let mut script = Script::new(answers);
    let result = pipeline.run(&mut script).await;
    (result, script.transcript)
}

#[tokio::test]
async fn test_full_session_with_reprompts() {
    let (result, transcript) = session(
        FakeMarket::default(),
        config(),
        &[
            "7",
            "dow",
            "2",
            "g",
            "forward pe",
            "",
            "4",
            "a lot",
            "$10,000",
            "q",
        ],
    )
    .await;
    let summary = result.unwrap();

    assert!(transcript.contains("Unknown index"));
    assert!(transcript.contains("at least 3"));
    assert!(transcript.contains("lower is better"));
    assert!(transcript.contains("Could not fetch fundamentals for 1 of 8 tickers."));
    assert!(transcript.contains("Dropped 1 ticker(s) with incomplete data: HHH"));
    assert!(transcript.contains("Purchase Plan"));

    assert_eq!(summary.reports.len(), 1);
    assert_eq!(summary.abandoned, 0);
    let report = &summary.reports[0];
    assert_eq!(report.index, "dow");
    assert_eq!(report.universe_size, 8);
    assert_eq!(report.fundamentals_failed, vec!["GGG"]);
    assert_eq!(report.dropped, vec!["HHH"]);
    assert_eq!(report.candidates.len(), 6);
    assert_eq!(report.selected.len(), 4);
    assert_eq!(
        report.selected,
        report.candidates[..4]
            .iter()
            .map(|c| c.symbol.clone())
            .collect::<Vec<_>>()
    );
    assert_eq!(report.optimizer.as_deref(), Some("hrp"));

    let plan = report.plan.as_ref().unwrap();
    assert_eq!(plan.budget, Decimal::from(10_000));
    assert_eq!(plan.invested + plan.leftover, plan.budget);
    assert!(plan.positions.iter().all(|p| plan.leftover < p.price));
}

#[tokio::test]
async fn test_end_of_input_ends_session_cleanly() {
    let (result, _) = session(FakeMarket::default(), config(), &[]).await;
    let summary = result.unwrap();
    assert!(summary.reports.is_empty());

    let (result, _) = session(FakeMarket::default(), config(), &["dow", "3"]).await;
    assert!(result.unwrap().reports.is_empty());
}

#[tokio::test]
async fn test_restart_runs_again() {
    let (result, _) = session(
        FakeMarket::default(),
        config(),
        &["1", "3", "5000", "", "sap100", "6", "2500"],
    )
    .await;
    let summary = result.unwrap();

    assert_eq!(summary.reports.len(), 2);
    assert_eq!(summary.reports[0].selected.len(), 3);
    assert_eq!(summary.reports[1].index, "sap100");
    assert_eq!(summary.reports[1].selected.len(), 6);
}

#[tokio::test]
async fn test_price_failures_are_not_fatal() {
    let (result, transcript) = session(
        FakeMarket::failing_prices(&["BBB"]),
        config(),
        &["dow", "6", "10000", "q"],
    )
    .await;
    let summary = result.unwrap();

    assert!(transcript.contains("Price history unavailable for BBB"));
    let report = &summary.reports[0];
    assert_eq!(report.price_failures, vec!["BBB"]);
    let plan = report.plan.as_ref().unwrap();
    assert_eq!(plan.positions.len(), 5);
    assert!(plan.positions.iter().all(|p| p.symbol != "BBB"));
}

#[tokio::test]
async fn test_optimizer_failure_abandons_run() {
    let market = FakeMarket::failing_prices(&["AAA", "BBB", "CCC", "DDD", "EEE"]);
    let (result, transcript) = session(market, config(), &["dow", "6", "q"]).await;
    let summary = result.unwrap();

    assert!(transcript.contains("Portfolio optimization failed"));
    assert_eq!(summary.abandoned, 1);
    assert!(summary.reports.is_empty());
}

#[tokio::test]
async fn test_fundamentals_outage_is_fatal() {
    let market = FakeMarket {
        fundamentals_down: true,
        ..Default::default()
    };
    let (result, _) = session(market, config(), &["dow"]).await;
    assert!(matches!(
        result,
        Err(PipelineError::Data(DataError::EmptyBatch { attempted: 8 }))
    ));
}

#[tokio::test]
async fn test_universe_outage_is_fatal() {
    let (result, _) = session(FakeMarket::default(), config(), &["sap500"]).await;
    assert!(matches!(
        result,
        Err(PipelineError::Universe(UniverseError::Unavailable { .. }))
    ));
}

#[tokio::test]
async fn test_exports_written_per_run() {
    let dir = std::env::temp_dir().join(format!("hobart-pipeline-{}", std::process::id()));
    let config = PipelineConfig {
        export: Some(ExportSettings {
            dir: dir.clone(),
            format: Default::default(),
        }),
        ..config()
    };
    let (result, transcript) = session(FakeMarket::default(), config, &["dow", "3", "1000"]).await;
    let report = &result.unwrap().reports[0];

    let stem = format!("dow_{}", report.window_end);
    for suffix in ["candidates.csv", "plan.csv", "report.json"] {
        let path = dir.join(format!("{stem}_{suffix}"));
        assert!(path.exists(), "{} missing", path.display());
    }
    assert!(transcript.contains("Wrote"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_cache_keeps_only_the_current_day() {
    let dir = std::env::temp_dir().join(format!("hobart-pipeline-cache-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let cache = CsvCache::new(&dir).unwrap();
    let stale_day = chrono::Utc::now().date_naive() - Duration::days(30);
    let stale = FundamentalsRecord::new("AAA").with(Attribute::ForwardPe, Some(99.0));
    cache.put_fundamentals(&stale, stale_day).unwrap();

    let config = PipelineConfig {
        cache_dir: Some(dir.clone()),
        ..config()
    };
    let (result, _) = session(FakeMarket::default(), config, &["dow", "3", "1000"]).await;
    let report = &result.unwrap().reports[0];

    assert!(cache.get_fundamentals("AAA", stale_day).unwrap().is_none());
    let fresh = cache
        .get_fundamentals("AAA", report.window_end)
        .unwrap()
        .unwrap();
    assert_ne!(fresh.get(Attribute::ForwardPe), Some(99.0));

    std::fs::remove_dir_all(&dir).unwrap();
}
