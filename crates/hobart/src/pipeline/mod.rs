//! The interactive pipeline.
//!
//! One run walks the stages in order:
//!
//! ```text
//! SelectingUniverse -> FetchingFundamentals -> Scoring -> SelectingPortfolio
//!   -> FetchingPrices -> Optimizing -> Allocating -> Reporting -> Idle
//! ```
//!
//! `Idle` either returns to `SelectingUniverse` or ends the session. The
//! stages are driven by a loop over an explicit state value, so any number of
//! restarts runs in constant stack. End of input at any prompt ends the
//! session cleanly.

mod config;
mod error;
mod prompt;

pub use config::{ExportSettings, PipelineConfig};
pub use error::PipelineError;
pub use prompt::Prompter;

use crate::universe::{IndexChoice, Universe, UniverseSource};
use hobart_data::{
    CancellationFlag, CsvCache, DateWindow, FetchProgress, FundamentalsFetcher, FundamentalsRecord,
    MarketDataSource, PriceAssembler, PriceTable,
};
use hobart_factors::{CompositeScorer, RankedCandidates, SelectionBounds, glossary, lookup};
use hobart_output::{
    CandidateExport, PlanExport, ReportBuilder, RunReport, export_run, render_allocation_table,
    render_dropped, render_glossary, render_glossary_entry, render_performance,
    render_ranked_table,
};
use hobart_portfolio::{DiscreteAllocator, OptimizedPortfolio, ReturnsMatrix, WeightOptimizer};
use serde::Serialize;
use std::fmt;
use std::io;
use tracing::{debug, info, warn};

/// Pipeline stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Stage {
    /// Asking which index to screen
    SelectingUniverse,
    /// Fetching fundamentals for every constituent
    FetchingFundamentals,
    /// Ranking the constituents
    Scoring,
    /// Asking how many companies to hold
    SelectingPortfolio,
    /// Fetching price history for the selection
    FetchingPrices,
    /// Computing target weights
    Optimizing,
    /// Asking for a budget and allocating whole shares
    Allocating,
    /// Presenting and exporting the run
    Reporting,
    /// Asking whether to start over
    Idle,
}

/// What a session produced.
#[derive(Debug, Clone, Default)]
pub struct SessionSummary {
    /// One report per completed run
    pub reports: Vec<RunReport>,
    /// Runs abandoned after a recoverable error
    pub abandoned: usize,
}

/// State carried through one run.
struct Run {
    universe: Universe,
    window: DateWindow,
    fundamentals_failed: Vec<String>,
    dropped: Vec<String>,
    ranked: RankedCandidates,
    selected: RankedCandidates,
    price_failures: Vec<String>,
    optimizer: String,
}

impl Run {
    fn new(universe: Universe, window: DateWindow) -> Self {
        Self {
            universe,
            window,
            fundamentals_failed: Vec::new(),
            dropped: Vec::new(),
            ranked: RankedCandidates::default(),
            selected: RankedCandidates::default(),
            price_failures: Vec::new(),
            optimizer: String::new(),
        }
    }

    fn export(&self, ranked: &RankedCandidates) -> Vec<CandidateExport> {
        CandidateExport::from_ranked(ranked, |symbol| self.universe.describe(symbol))
    }
}

enum Step {
    SelectingUniverse,
    FetchingFundamentals(Run),
    Scoring(Run, Vec<FundamentalsRecord>),
    SelectingPortfolio(Run),
    FetchingPrices(Run),
    Optimizing(Run, PriceTable),
    Allocating(Run, OptimizedPortfolio, Vec<(String, f64)>),
    Reporting(Run, PlanExport),
    Idle,
    Quit,
}

impl Step {
    const fn stage(&self) -> Option<Stage> {
        Some(match self {
            Self::SelectingUniverse => Stage::SelectingUniverse,
            Self::FetchingFundamentals(_) => Stage::FetchingFundamentals,
            Self::Scoring(..) => Stage::Scoring,
            Self::SelectingPortfolio(_) => Stage::SelectingPortfolio,
            Self::FetchingPrices(_) => Stage::FetchingPrices,
            Self::Optimizing(..) => Stage::Optimizing,
            Self::Allocating(..) => Stage::Allocating,
            Self::Reporting(..) => Stage::Reporting,
            Self::Idle => Stage::Idle,
            Self::Quit => return None,
        })
    }
}

/// Drives interactive sessions against a universe source, a market data
/// source and a weight optimizer.
pub struct Pipeline<U, M, O> {
    config: PipelineConfig,
    universe: U,
    market: M,
    optimizer: O,
    cache: Option<CsvCache>,
    cancel: CancellationFlag,
    progress: Box<dyn FetchProgress>,
}

impl<U, M, O> fmt::Debug for Pipeline<U, M, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", &self.config)
            .field("cache", &self.cache)
            .field("cancelled", &self.cancel.is_cancelled())
            .finish_non_exhaustive()
    }
}

impl<U, M, O> Pipeline<U, M, O>
where
    U: UniverseSource,
    M: MarketDataSource,
    O: WeightOptimizer,
{
    /// Create a pipeline, validating `config` and opening the cache.
    pub fn new(
        config: PipelineConfig,
        universe: U,
        market: M,
        optimizer: O,
    ) -> Result<Self, PipelineError> {
        config.validate().map_err(PipelineError::Config)?;
        let cache = config.cache_dir.as_ref().map(CsvCache::new).transpose()?;

        Ok(Self {
            config,
            universe,
            market,
            optimizer,
            cache,
            cancel: CancellationFlag::new(),
            progress: Box::new(()),
        })
    }

    /// Use `cancel` to stop fetch loops early.
    pub fn with_cancellation(mut self, cancel: CancellationFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Report fetch progress to `progress`.
    pub fn with_progress(mut self, progress: Box<dyn FetchProgress>) -> Self {
        self.progress = progress;
        self
    }

    /// Configuration in use.
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run sessions until the user quits or input ends.
    ///
    /// Recoverable errors abandon the current run and return to the restart
    /// prompt; any other error ends the session.
    pub async fn run<P: Prompter>(&self, prompter: &mut P) -> Result<SessionSummary, PipelineError> {
        let mut summary = SessionSummary::default();
        let mut step = Step::SelectingUniverse;

        while let Some(stage) = step.stage() {
            debug!(?stage, "entering stage");
            step = match self.advance(step, prompter, &mut summary).await {
                Ok(next) => next,
                Err(e) if e.is_recoverable() => {
                    warn!(?stage, error = %e, "run abandoned");
                    prompter.say(&format!("\n{e}\n"))?;
                    summary.abandoned += 1;
                    Step::Idle
                }
                Err(e) => return Err(e),
            };
        }

        info!(
            completed = summary.reports.len(),
            abandoned = summary.abandoned,
            "session ended"
        );
        Ok(summary)
    }

    fn prune_cache(&self, window: &DateWindow) {
        let Some(cache) = &self.cache else {
            return;
        };
        match cache.prune_stale(window.end_date()) {
            Ok(0) => {}
            Ok(removed) => debug!(removed, as_of = %window.end_date(), "pruned stale cache entries"),
            Err(e) => warn!(error = %e, "failed to prune cache"),
        }
    }

    async fn advance<P: Prompter>(
        &self,
        step: Step,
        prompter: &mut P,
        summary: &mut SessionSummary,
    ) -> Result<Step, PipelineError> {
        match step {
            Step::SelectingUniverse => {
                let Some(index) = ask_index(prompter)? else {
                    return Ok(Step::Quit);
                };
                let window = DateWindow::ending_now(self.config.lookback_days);
                self.prune_cache(&window);
                let constituents = self.universe.constituents(index).await?;
                let universe = Universe::new(index, constituents)?;
                info!(index = %index, constituents = universe.len(), "universe loaded");
                prompter.say(&format!(
                    "Loaded {} constituents of the {}.",
                    universe.len(),
                    index.title()
                ))?;
                Ok(Step::FetchingFundamentals(Run::new(universe, window)))
            }

            Step::FetchingFundamentals(mut run) => {
                let symbols = run.universe.symbols();
                let batch = FundamentalsFetcher::new(self.config.fetch.clone())
                    .fetch_universe(
                        &self.market,
                        &symbols,
                        &run.window,
                        self.cache.as_ref(),
                        &self.cancel,
                        self.progress.as_ref(),
                    )
                    .await?;
                if batch.failed_count() > 0 {
                    prompter.say(&format!(
                        "Could not fetch fundamentals for {} of {} tickers.",
                        batch.failed_count(),
                        symbols.len()
                    ))?;
                }
                run.fundamentals_failed = batch.failures.iter().map(|(s, _)| s.clone()).collect();
                Ok(Step::Scoring(run, batch.into_records()))
            }

            Step::Scoring(mut run, records) => {
                let outcome = CompositeScorer::new(self.config.weights)?.score(&records)?;
                prompter.say(&render_dropped(&outcome.dropped))?;
                run.dropped = outcome.dropped;
                run.ranked = outcome.ranked;
                Ok(Step::SelectingPortfolio(run))
            }

            Step::SelectingPortfolio(mut run) => {
                let bounds = SelectionBounds::new(run.ranked.len(), self.config.max_portfolio_size);
                bounds.check_satisfiable()?;

                let shown = run.export(&run.ranked.top(bounds.max()));
                prompter.say(&render_ranked_table(
                    &format!("Top {} of {} ranked companies", shown.len(), run.ranked.len()),
                    &shown,
                ))?;

                let question = format!(
                    "How many companies should the portfolio hold ({}-{}, g for glossary)? ",
                    bounds.min(),
                    bounds.max()
                );
                loop {
                    let Some(answer) = prompter.ask(&question)? else {
                        return Ok(Step::Quit);
                    };
                    if is_glossary_request(&answer) {
                        if !glossary_menu(prompter)? {
                            return Ok(Step::Quit);
                        }
                        continue;
                    }
                    match bounds.validate_portfolio_size(&answer) {
                        Ok(size) => {
                            run.selected = run.ranked.top(size);
                            info!(size, "portfolio size chosen");
                            return Ok(Step::FetchingPrices(run));
                        }
                        Err(e) => prompter.say(&e.to_string())?,
                    }
                }
            }

            Step::FetchingPrices(mut run) => {
                let assembly = PriceAssembler::new(self.config.fetch.clone())
                    .assemble(
                        &self.market,
                        &run.selected.symbols(),
                        &run.window,
                        self.cache.as_ref(),
                        &self.cancel,
                        self.progress.as_ref(),
                    )
                    .await?;
                run.price_failures = assembly.failures.iter().map(|(s, _)| s.clone()).collect();
                if !run.price_failures.is_empty() {
                    prompter.say(&format!(
                        "Price history unavailable for {}; continuing without them.",
                        run.price_failures.join(", ")
                    ))?;
                }
                Ok(Step::Optimizing(run, assembly.table))
            }

            Step::Optimizing(mut run, table) => {
                let returns = ReturnsMatrix::from_prices(&table)?;
                let optimized = self.optimizer.optimize(&returns)?;
                run.optimizer = self.optimizer.name().to_string();
                Ok(Step::Allocating(run, optimized, table.latest_prices()))
            }

            Step::Allocating(run, optimized, prices) => {
                let bounds = self.config.budget;
                let question = format!(
                    "How much would you like to invest (${}-${})? ",
                    bounds.min(),
                    bounds.max()
                );
                loop {
                    let Some(answer) = prompter.ask(&question)? else {
                        return Ok(Step::Quit);
                    };
                    match bounds.validate(&answer) {
                        Ok(budget) => {
                            let allocation =
                                DiscreteAllocator.allocate(&optimized.weights, &prices, budget)?;
                            let plan = PlanExport::new(
                                run.window.end_date(),
                                &allocation,
                                optimized.performance,
                            );
                            return Ok(Step::Reporting(run, plan));
                        }
                        Err(e) => prompter.say(&e.to_string())?,
                    }
                }
            }

            Step::Reporting(run, plan) => {
                prompter.say(&render_ranked_table(
                    "Selected companies",
                    &run.export(&run.selected),
                ))?;
                prompter.say(&render_allocation_table(&plan))?;
                if let Some(performance) = &plan.performance {
                    prompter.say(&render_performance(performance))?;
                }

                let candidates = run.export(&run.ranked);
                let report = ReportBuilder::new()
                    .index(run.universe.index().name())
                    .window(run.window.start_date(), run.window.end_date())
                    .universe_size(run.universe.len())
                    .fundamentals_failed(run.fundamentals_failed.clone())
                    .dropped(run.dropped.clone())
                    .candidates(candidates.clone())
                    .selected(run.selected.symbols())
                    .price_failures(run.price_failures.clone())
                    .optimizer(run.optimizer.clone())
                    .plan(plan.clone())
                    .build()?;

                if let Some(export) = &self.config.export {
                    let stem = format!("{}_{}", run.universe.index(), run.window.end_date());
                    let mut written =
                        export_run(&export.dir, &stem, &candidates, Some(&plan), export.format)?;
                    let report_path = export.dir.join(format!("{stem}_report.json"));
                    report.write_to(&report_path)?;
                    written.push(report_path);
                    for path in &written {
                        prompter.say(&format!("Wrote {}", path.display()))?;
                    }
                }

                info!(
                    index = %run.universe.index(),
                    holdings = plan.funded_count(),
                    leftover = %plan.leftover,
                    "run complete"
                );
                summary.reports.push(report);
                Ok(Step::Idle)
            }

            Step::Idle => {
                match prompter.ask("\nPress Enter to start over, or q to quit: ")? {
                    Some(answer) if !answer.trim().eq_ignore_ascii_case("q") => {
                        Ok(Step::SelectingUniverse)
                    }
                    _ => Ok(Step::Quit),
                }
            }

            Step::Quit => Ok(Step::Quit),
        }
    }
}

fn ask_index<P: Prompter>(prompter: &mut P) -> io::Result<Option<IndexChoice>> {
    let menu: Vec<String> = IndexChoice::ALL
        .iter()
        .map(|index| format!("[{}] {}", index.number(), index.name()))
        .collect();
    let question = format!("Choose an index {}: ", menu.join("  "));

    loop {
        let Some(answer) = prompter.ask(&question)? else {
            return Ok(None);
        };
        match answer.parse::<IndexChoice>() {
            Ok(index) => return Ok(Some(index)),
            Err(e) => prompter.say(&e.to_string())?,
        }
    }
}

fn is_glossary_request(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("g") || answer.eq_ignore_ascii_case("glossary")
}

/// Browse the glossary. Returns `false` if input ended.
fn glossary_menu<P: Prompter>(prompter: &mut P) -> io::Result<bool> {
    prompter.say(&render_glossary(&glossary()))?;
    loop {
        let Some(answer) = prompter.ask("Attribute name or number (Enter to go back): ")? else {
            return Ok(false);
        };
        if answer.trim().is_empty() {
            return Ok(true);
        }
        match lookup(&answer) {
            Some(entry) => prompter.say(&render_glossary_entry(&entry))?,
            None => prompter.say(&format!("No attribute matches {:?}.", answer.trim()))?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("g", true)]
    #[case(" G ", true)]
    #[case("glossary", true)]
    #[case("Glossary", true)]
    #[case("10", false)]
    #[case("go", false)]
    fn test_glossary_request(#[case] answer: &str, #[case] expected: bool) {
        assert_eq!(is_glossary_request(answer), expected);
    }

    #[test]
    fn test_quit_has_no_stage() {
        assert_eq!(Step::Quit.stage(), None);
        assert_eq!(Step::Idle.stage(), Some(Stage::Idle));
        assert_eq!(
            Step::SelectingUniverse.stage(),
            Some(Stage::SelectingUniverse)
        );
    }
}
