//! Hobart CLI binary.
//!
//! Screens an index on fundamentals, asks how many companies to hold and how
//! much to invest, and prints a whole-share purchase plan.

mod integration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use hobart::{
    ExportSettings, GicsSector, IndexChoice, Pipeline, PipelineConfig, StaticUniverse, Universe,
};
use hobart_data::{CancellationFlag, FetchConfig, YahooMarketData};
use hobart_factors::{glossary, lookup};
use hobart_output::{ExportFormat, render_glossary, render_glossary_entry};
use hobart_portfolio::{BudgetBounds, CovarianceMethod, HrpConfig, HrpOptimizer};
use integration::cache_manager::{default_cache_dir, open_cache, print_cache_info};
use integration::progress::BarProgress;
use integration::prompt::StdinPrompter;
use rust_decimal::Decimal;
use std::error::Error;
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hobart")]
#[command(about = "Hobart: fundamentals screening and whole-share portfolio planning", long_about = None)]
#[command(version, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (the default)
    Run(RunArgs),

    /// Show the constituents of an index
    Universe {
        /// Index to show: dow, sap100 or sap500
        #[arg(long, default_value = "sap500")]
        index: String,

        /// List the constituents of one GICS sector (name or code)
        #[arg(long)]
        sector: Option<String>,
    },

    /// Describe the scoring attributes
    Glossary {
        /// Attribute name or number
        attribute: Option<String>,
    },

    /// Inspect or clear the data cache
    Cache {
        /// Remove every cached file
        #[arg(long)]
        clear: bool,
    },
}

#[derive(Args, Clone)]
struct RunArgs {
    /// Milliseconds between provider requests
    #[arg(long, default_value = "1000")]
    delay_ms: u64,

    /// Seconds before a single request is abandoned
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Requests allowed in flight at once
    #[arg(long, default_value = "1")]
    max_in_flight: usize,

    /// Extra attempts after a failed request
    #[arg(long, default_value = "0")]
    retries: u32,

    /// Days of price history behind the weights
    #[arg(long, default_value = "365")]
    lookback_days: i64,

    /// Largest portfolio that may be chosen
    #[arg(long, default_value = "50")]
    max_portfolio_size: usize,

    /// Smallest accepted budget in dollars
    #[arg(long, default_value = "100")]
    min_budget: Decimal,

    /// Largest accepted budget in dollars
    #[arg(long, default_value = "10000000")]
    max_budget: Decimal,

    /// Covariance estimator used by the optimizer
    #[arg(long, value_enum, default_value = "sample")]
    covariance: Covariance,

    /// Annual risk-free rate for the Sharpe ratio
    #[arg(long, default_value = "0.02")]
    risk_free_rate: f64,

    /// Reuse fundamentals and prices fetched earlier the same day
    #[arg(long, overrides_with = "no_cache")]
    cache: bool,

    /// Always fetch fresh data (the default)
    #[arg(long, overrides_with = "cache")]
    no_cache: bool,

    /// Clear cached data before starting
    #[arg(long, conflicts_with = "no_cache")]
    refresh: bool,

    /// Write ranked candidates, plans and reports to this directory
    #[arg(long)]
    export: Option<PathBuf>,

    /// Export format: csv, json or pretty-json
    #[arg(long, default_value = "csv", requires = "export")]
    format: ExportFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum Covariance {
    Sample,
    LedoitWolf,
}

impl From<Covariance> for CovarianceMethod {
    fn from(value: Covariance) -> Self {
        match value {
            Covariance::Sample => Self::Sample,
            Covariance::LedoitWolf => Self::LedoitWolf,
        }
    }
}

impl RunArgs {
    fn pipeline_config(&self) -> Result<PipelineConfig, Box<dyn Error>> {
        Ok(PipelineConfig {
            fetch: FetchConfig {
                request_delay: Duration::from_millis(self.delay_ms),
                timeout: Duration::from_secs(self.timeout_secs),
                max_in_flight: self.max_in_flight,
                retries: self.retries,
            },
            lookback_days: self.lookback_days,
            max_portfolio_size: self.max_portfolio_size,
            budget: BudgetBounds::new(self.min_budget, self.max_budget)?,
            weights: Default::default(),
            cache_dir: (self.cache && !self.no_cache).then(default_cache_dir),
            export: self.export.clone().map(|dir| ExportSettings {
                dir,
                format: self.format,
            }),
        })
    }

    fn optimizer(&self) -> HrpOptimizer {
        HrpOptimizer::new(HrpConfig {
            risk_free_rate: self.risk_free_rate,
            covariance: self.covariance.into(),
            ..Default::default()
        })
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so they never interleave with prompts. `RUST_LOG`
/// selects the level (default `warn`); `RUST_LOG_FORMAT=json` switches to
/// JSON lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if std::env::var("RUST_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        None => interactive(&cli.run).await?,
        Some(Commands::Run(args)) => interactive(&args).await?,
        Some(Commands::Universe { index, sector }) => list_universe(&index, sector.as_deref())?,
        Some(Commands::Glossary { attribute }) => show_glossary(attribute.as_deref())?,
        Some(Commands::Cache { clear }) => manage_cache(clear)?,
    }

    Ok(())
}

async fn interactive(args: &RunArgs) -> Result<(), Box<dyn Error>> {
    let config = args.pipeline_config()?;

    if args.refresh {
        let removed = open_cache()?.clear()?;
        println!("Cleared {removed} cached files.");
    }

    let cancel = CancellationFlag::new();
    watch_interrupts(cancel.clone());

    let pipeline = Pipeline::new(
        config,
        StaticUniverse,
        YahooMarketData::try_new()?,
        args.optimizer(),
    )?
    .with_cancellation(cancel)
    .with_progress(Box::new(BarProgress::new()));
    debug!(?pipeline, "session configured");

    println!("\nHobart: score an index on fundamentals and plan a purchase.");
    println!("Press Ctrl-D at any prompt to quit.\n");

    let mut prompter = StdinPrompter::stdio();
    let summary = pipeline.run(&mut prompter).await?;

    info!(
        completed = summary.reports.len(),
        abandoned = summary.abandoned,
        "goodbye"
    );
    println!(
        "\nCompleted {} run(s), {} abandoned.",
        summary.reports.len(),
        summary.abandoned
    );
    Ok(())
}

/// The first Ctrl-C stops fetch loops after the request in flight; the
/// second exits.
fn watch_interrupts(cancel: CancellationFlag) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_err() {
            return;
        }
        cancel.cancel();
        eprintln!("\nInterrupted; stopping after the current request. Press Ctrl-C again to exit.");
        if tokio::signal::ctrl_c().await.is_ok() {
            process::exit(130);
        }
    });
}

fn list_universe(index: &str, sector: Option<&str>) -> Result<(), Box<dyn Error>> {
    let index: IndexChoice = index.parse()?;
    let universe = Universe::new(index, StaticUniverse::list(index))?;
    let sector = sector.map(str::parse::<GicsSector>).transpose()?;

    println!("\n{} ({} constituents)", index.title(), universe.len());
    println!("{}", "=".repeat(80));

    if let Some(sector) = sector {
        println!("{:<8} {:<50} {}", "Symbol", "Company", "Sector");
        println!("{}", "-".repeat(80));
        for constituent in universe.constituents().iter().filter(|c| c.sector == sector) {
            println!(
                "{:<8} {:<50} {}",
                constituent.symbol, constituent.name, constituent.sector
            );
        }
    } else {
        let counts = universe.sector_counts();
        println!("{:<6} {:<30} {:>10}", "Code", "Sector", "Companies");
        println!("{}", "-".repeat(80));
        for sector in GicsSector::ALL {
            println!(
                "{:<6} {:<30} {:>10}",
                sector.code(),
                sector.name(),
                counts.get(&sector).copied().unwrap_or(0)
            );
        }
        println!("\nUse --sector <name|code> to list the companies of one sector.");
    }

    Ok(())
}

fn show_glossary(attribute: Option<&str>) -> Result<(), Box<dyn Error>> {
    match attribute {
        None => println!("{}", render_glossary(&glossary())),
        Some(query) => match lookup(query) {
            Some(entry) => println!("{}", render_glossary_entry(&entry)),
            None => return Err(format!("No attribute matches {query:?}").into()),
        },
    }
    Ok(())
}

fn manage_cache(clear: bool) -> Result<(), Box<dyn Error>> {
    let cache = open_cache()?;
    if clear {
        let removed = cache.clear()?;
        println!("Removed {removed} cached files.");
    }
    print_cache_info(&cache)?;
    Ok(())
}
