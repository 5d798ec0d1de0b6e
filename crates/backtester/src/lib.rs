pub mod error;
pub mod summary;
pub mod types;

use analytics::AnalyticsEngine;
use anyhow::Context;
use app_config::{BacktestSettings, Settings};
use core_types::RawPricePoint;
use execution::{Ledger, execute_events};
use market_data::{PriceSource, TradingCalendar, clean_series, require_history};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use strategies::{MACrossover, Strategy};

pub use error::{Error, Result};
pub use summary::{BatchSummary, FailedRun, SummaryRow};
pub use types::{BacktestResult, RunRequest};

/// The main engine for running historical backtests.
///
/// A `Backtester` is immutable configuration; every run builds its own
/// ledger, so one instance can serve many runs in parallel.
pub struct Backtester {
    /// The strategy producing crossover events.
    strategy: Box<dyn Strategy + Send + Sync>,
    /// Which days the preprocessor treats as expected sessions.
    calendar: TradingCalendar,
}

impl Backtester {
    pub fn new(strategy: Box<dyn Strategy + Send + Sync>, calendar: TradingCalendar) -> Self {
        Self { strategy, calendar }
    }

    /// Builds the golden/death cross backtester described by `settings`.
    pub fn from_settings(settings: &BacktestSettings) -> core_types::Result<Self> {
        let strategy = MACrossover::new(settings.strategy)?;
        Ok(Self::new(Box::new(strategy), settings.calendar))
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Runs one simulation over an already fetched raw series.
    ///
    /// Points outside the request's date range are ignored. Validation
    /// failures abort the run before any trade is made.
    pub fn run(&self, request: &RunRequest, raw: Vec<RawPricePoint>) -> Result<BacktestResult> {
        request.validate()?;

        // --- 1. Clean the series ---
        let in_range: Vec<RawPricePoint> = raw
            .into_iter()
            .filter(|p| p.timestamp >= request.start_date && p.timestamp <= request.end_date)
            .collect();
        let cleaned = clean_series(in_range, self.calendar)?;
        let series = cleaned.points;
        require_history(&series, self.strategy.warm_up())?;

        // --- 2. Indicators and signals ---
        let moving_averages = self.strategy.indicators(&series)?;
        let events = self.strategy.signals(&moving_averages);

        // --- 3. Execute against a fresh ledger ---
        // `require_history` guarantees at least one bar.
        let final_bar = series[series.len() - 1];
        let outcome = execute_events(Ledger::new(request.initial_budget), &events, &final_bar)?;

        // --- 4. Analytics ---
        let report = AnalyticsEngine::new().calculate(
            request.initial_budget,
            &outcome.ledger,
            &outcome.trades,
            &series,
        );

        tracing::info!(
            symbol = %request.symbol,
            strategy = self.strategy.name(),
            bars = series.len(),
            events = events.len(),
            trades = outcome.trades.len(),
            skipped_signals = outcome.skipped_signals(),
            final_value = %report.final_value,
            total_return = %report.total_return,
            vs_buy_hold = %report.strategy_vs_buy_hold,
            "Backtest finished."
        );

        Ok(BacktestResult {
            request: request.clone(),
            cleaning: cleaned.report,
            moving_averages,
            events,
            trades: outcome.trades,
            decisions: outcome.decisions,
            final_ledger: outcome.ledger,
            report,
        })
    }

    /// Fetches the series from `source` in one call, then runs it.
    pub fn run_from_source(
        &self,
        source: &dyn PriceSource,
        request: &RunRequest,
    ) -> anyhow::Result<BacktestResult> {
        tracing::info!(
            symbol = %request.symbol,
            source = source.name(),
            start = %request.start_date,
            end = %request.end_date,
            "Loading historical data for backtest..."
        );
        let raw = source
            .fetch(&request.symbol, request.start_date, request.end_date)
            .with_context(|| format!("Failed to fetch prices for {}", request.symbol))?;

        self.run(request, raw)
            .with_context(|| format!("Backtest failed for {}", request.symbol))
    }

    /// Runs independent requests in parallel, each with its own ledger.
    ///
    /// Results come back in request order. A failing run yields an `Err` in
    /// its slot and does not stop the others.
    pub fn run_batch(
        &self,
        source: &dyn PriceSource,
        requests: &[RunRequest],
        threads: Option<usize>,
    ) -> anyhow::Result<Vec<anyhow::Result<BacktestResult>>> {
        let mut builder = ThreadPoolBuilder::new();
        if let Some(threads) = threads {
            builder = builder.num_threads(threads);
        }
        let pool = builder.build().context("Failed to build batch thread pool")?;

        tracing::info!(runs = requests.len(), threads = pool.current_num_threads(), "Starting batch run.");
        let results: Vec<anyhow::Result<BacktestResult>> = pool.install(|| {
            requests
                .par_iter()
                .map(|request| self.run_from_source(source, request))
                .collect()
        });

        for (request, result) in requests.iter().zip(&results) {
            if let Err(e) = result {
                tracing::warn!(symbol = %request.symbol, error = %e, "Run failed.");
            }
        }
        Ok(results)
    }

    /// Runs every run listed in `settings` as one batch.
    pub fn run_configured(
        settings: &Settings,
        source: &dyn PriceSource,
    ) -> anyhow::Result<Vec<anyhow::Result<BacktestResult>>> {
        let backtester = Self::from_settings(&settings.backtest)
            .context("Invalid backtest settings")?;
        let requests: Vec<RunRequest> = settings
            .runs
            .iter()
            .map(|run| RunRequest::from_config(run, settings.backtest.initial_budget))
            .collect();
        backtester.run_batch(source, &requests, settings.batch_threads)
    }
}
