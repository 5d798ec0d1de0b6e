mod common;

use app_config::{BacktestSettings, RunSpec, Settings};
use backtester::{Backtester, BatchSummary, Error, RunRequest};
use common::*;
use core_types::{RawPricePoint, TradeAction, TradeReason};
use execution::DecisionOutcome;
use market_data::InMemorySource;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn golden_then_death_round_trip() {
    let backtester = fast_backtester(2, 4);

    let result = backtester
        .run(&request("AAA", dec!(1000)), daily_series(&GOLDEN_THEN_DEATH))
        .unwrap();

    assert_eq!(result.trades.len(), 2);
    let (buy, sell) = (&result.trades[0], &result.trades[1]);
    assert_eq!(buy.action, TradeAction::Buy);
    assert_eq!(buy.timestamp, day(5));
    assert_eq!(buy.shares, 100);
    assert_eq!(buy.price, dec!(10));
    assert_eq!(buy.cash_after, dec!(0));
    assert_eq!(sell.action, TradeAction::Sell);
    assert_eq!(sell.reason, TradeReason::DeathCross);
    assert_eq!(sell.timestamp, day(9));
    assert_eq!(sell.cash_after, dec!(900));

    let report = &result.report;
    assert_eq!(report.final_value, dec!(900));
    assert_eq!(report.total_return, dec!(-100));
    assert_eq!(report.return_percentage, dec!(-10));
    assert_eq!(report.trade_count, 2);
    // Buy and hold: 100 shares at 10, worth 4 each at the end.
    assert_eq!(report.buy_hold_value, dec!(400));
    assert_eq!(report.buy_hold_return, dec!(-600));
    assert_eq!(report.strategy_vs_buy_hold, dec!(500));
}

#[test]
fn open_position_is_liquidated_on_the_last_bar() {
    let backtester = fast_backtester(2, 4);

    let result = backtester
        .run(&request("AAA", dec!(1000)), daily_series(&GOLDEN_ONLY))
        .unwrap();

    assert_eq!(result.trades.len(), 2);
    assert_eq!(result.trades[0].action, TradeAction::Buy);
    let forced = &result.trades[1];
    assert!(forced.is_forced());
    assert_eq!(forced.timestamp, day(9));
    assert_eq!(forced.price, dec!(18));
    assert_eq!(result.final_ledger.shares(), 0);
    assert!(!result.final_ledger.position_open());
    assert_eq!(result.report.final_value, dec!(1800));
    assert_eq!(result.report.return_percentage, dec!(80));
}

#[test]
fn tight_budget_skips_the_buy_without_failing() {
    let backtester = fast_backtester(2, 4);

    let result = backtester
        .run(&request("AAA", dec!(5)), daily_series(&GOLDEN_THEN_DEATH))
        .unwrap();

    assert!(result.trades.is_empty());
    assert_eq!(result.decisions[0].outcome, DecisionOutcome::SkippedInsufficientCash);
    assert_eq!(result.decisions[1].outcome, DecisionOutcome::IgnoredFlat);
    assert_eq!(result.final_ledger.cash(), dec!(5));
    assert_eq!(result.report.total_return, dec!(0));
}

#[test]
fn every_trade_is_explained_by_a_decision_or_the_final_bar() {
    let backtester = fast_backtester(2, 4);

    let result = backtester
        .run(&request("AAA", dec!(1000)), daily_series(&GOLDEN_ONLY))
        .unwrap();

    for trade in &result.trades {
        let explained = trade.is_forced()
            || result.decisions.iter().any(|d| {
                d.timestamp == trade.timestamp
                    && matches!(d.outcome, DecisionOutcome::Bought | DecisionOutcome::Sold)
            });
        assert!(explained, "unexplained trade {trade:?}");
    }
    assert_eq!(result.decisions.len(), result.events.len());
}

#[test]
fn too_little_history_is_rejected() {
    let backtester = fast_backtester(2, 4);

    let err = backtester
        .run(&request("AAA", dec!(1000)), daily_series(&[1, 2, 3, 4]))
        .unwrap_err();

    assert_eq!(
        err,
        Error::Validation(core_types::Error::InsufficientHistory {
            required: 5,
            available: 4
        })
    );
}

#[test]
fn empty_series_is_rejected() {
    let backtester = fast_backtester(2, 4);
    let raw = vec![RawPricePoint {
        timestamp: day(0),
        close: None,
    }];

    let err = backtester.run(&request("AAA", dec!(1000)), raw).unwrap_err();

    assert_eq!(err, Error::Validation(core_types::Error::EmptySeries));
}

#[test]
fn non_positive_budget_is_rejected() {
    let backtester = fast_backtester(2, 4);

    let err = backtester
        .run(&request("AAA", dec!(0)), daily_series(&GOLDEN_ONLY))
        .unwrap_err();

    assert_eq!(
        err,
        Error::Validation(core_types::Error::InvalidBudget { budget: dec!(0) })
    );
}

#[test]
fn points_outside_the_requested_range_are_ignored() {
    let backtester = fast_backtester(2, 4);
    let mut closes = GOLDEN_ONLY.to_vec();
    closes.extend([1, 1, 1]);
    let narrowed = RunRequest::new("AAA", start_date(), day(9), dec!(1000));

    let result = backtester.run(&narrowed, daily_series(&closes)).unwrap();

    assert_eq!(result.cleaning.final_length, 10);
    assert_eq!(result.trades[1].price, dec!(18));
}

#[test]
fn default_windows_warm_up_before_signalling() {
    // 150 bars of decline then 150 bars of rally: a single golden cross.
    let closes: Vec<i64> = (0..150).map(|i| 300 - i).chain((0..150).map(|i| 151 + 2 * i)).collect();
    let backtester = Backtester::from_settings(&BacktestSettings::default()).unwrap();

    let result = backtester
        .run(&request("AAA", dec!(5000)), daily_series(&closes))
        .unwrap();

    assert_eq!(result.moving_averages.len(), closes.len());
    assert_eq!(result.moving_averages.iter().filter(|p| p.short_ma.is_none()).count(), 49);
    assert_eq!(result.moving_averages.iter().filter(|p| p.long_ma.is_none()).count(), 199);
    assert!(result.events.iter().all(|e| e.timestamp >= day(200)));
    assert_eq!(result.trades.len(), 2);
    assert_eq!(result.trades[0].reason, TradeReason::GoldenCross);
    assert_eq!(result.trades[1].reason, TradeReason::EndOfSeries);
    assert_eq!(result.final_ledger.shares(), 0);
    assert_eq!(result.report.final_value, result.final_ledger.cash());
}

#[test]
fn reruns_are_identical() {
    let backtester = fast_backtester(2, 4);
    let req = request("AAA", dec!(1000));

    let first = backtester.run(&req, daily_series(&GOLDEN_THEN_DEATH)).unwrap();
    let second = backtester.run(&req, daily_series(&GOLDEN_THEN_DEATH)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn batch_runs_are_isolated_and_ordered() {
    let source = InMemorySource::new()
        .with_series("AAA", daily_series(&GOLDEN_THEN_DEATH))
        .with_series("BBB", daily_series(&GOLDEN_ONLY))
        .with_series("TINY", daily_series(&[1, 2]));
    let requests = vec![
        request("AAA", dec!(1000)),
        request("MISSING", dec!(1000)),
        request("BBB", dec!(2000)),
        request("TINY", dec!(1000)),
    ];
    let backtester = fast_backtester(2, 4);

    let results = backtester.run_batch(&source, &requests, Some(2)).unwrap();

    assert_eq!(results.len(), 4);
    let aaa = results[0].as_ref().unwrap();
    assert_eq!(aaa.request.symbol.0, "AAA");
    assert_eq!(aaa.report.final_value, dec!(900));
    assert!(results[1].is_err());
    let bbb = results[2].as_ref().unwrap();
    assert_eq!(bbb.request.symbol.0, "BBB");
    assert_eq!(bbb.report.final_value, dec!(3600));
    let tiny = results[3].as_ref().unwrap_err();
    assert!(format!("{tiny:#}").contains("Insufficient price history"));
}

#[test]
fn batch_summary_ranks_runs_by_return_percentage() {
    let source = InMemorySource::new()
        .with_series("AAA", daily_series(&GOLDEN_THEN_DEATH))
        .with_series("BBB", daily_series(&GOLDEN_ONLY))
        .with_series("CCC", daily_series(&GOLDEN_ONLY));
    let requests = vec![
        request("AAA", dec!(1000)),
        request("MISSING", dec!(1000)),
        request("BBB", dec!(2000)),
        request("CCC", dec!(1000)),
    ];
    let backtester = fast_backtester(2, 4);
    let results = backtester.run_batch(&source, &requests, Some(2)).unwrap();

    let summary = BatchSummary::from_results(&requests, &results);

    let ranked: Vec<(&str, Decimal)> = summary
        .rows()
        .iter()
        .map(|row| (row.symbol.0.as_str(), row.return_percentage))
        .collect();
    // BBB and CCC tie at 80% and keep their request order.
    assert_eq!(
        ranked,
        vec![("BBB", dec!(80)), ("CCC", dec!(80)), ("AAA", dec!(-10))]
    );
    let best = summary.best().unwrap();
    assert_eq!(best.symbol.0, "BBB");
    assert_eq!(best.total_return, dec!(1600));
    assert_eq!(best.trade_count, 2);
    assert_eq!(summary.failures().len(), 1);
    assert_eq!(summary.failures()[0].symbol.0, "MISSING");
}

#[test]
fn summary_of_an_all_failed_batch_has_no_best_run() {
    let requests = vec![request("MISSING", dec!(1000))];
    let results = fast_backtester(2, 4)
        .run_batch(&InMemorySource::new(), &requests, Some(1))
        .unwrap();

    let summary = BatchSummary::from_results(&requests, &results);

    assert!(summary.rows().is_empty());
    assert!(summary.best().is_none());
    assert_eq!(summary.failures().len(), 1);
}

#[test]
fn non_positive_close_is_a_validation_error() {
    let backtester = fast_backtester(2, 4);
    let mut closes = GOLDEN_ONLY.to_vec();
    closes.push(0);

    let err = backtester
        .run(&request("AAA", dec!(1000)), daily_series(&closes))
        .unwrap_err();

    assert_eq!(
        err,
        Error::Validation(core_types::Error::NonPositivePrice {
            timestamp: day(10),
            close: dec!(0)
        })
    );
}

#[test]
fn configured_runs_use_the_default_budget_unless_overridden() {
    let source = InMemorySource::new()
        .with_series("AAA", daily_series(&GOLDEN_ONLY))
        .with_series("BBB", daily_series(&GOLDEN_ONLY));
    let mut settings = Settings::default();
    settings.backtest.initial_budget = dec!(1000);
    settings.backtest.strategy.short_window = 2;
    settings.backtest.strategy.long_window = 4;
    settings.runs = vec![
        RunSpec {
            symbol: "AAA".into(),
            start_date: start_date(),
            end_date: day(100),
            initial_budget: None,
        },
        RunSpec {
            symbol: "BBB".into(),
            start_date: start_date(),
            end_date: day(100),
            initial_budget: Some(dec!(500)),
        },
    ];

    let results = Backtester::run_configured(&settings, &source).unwrap();

    let budgets: Vec<Decimal> = results
        .iter()
        .map(|r| r.as_ref().unwrap().report.initial_budget)
        .collect();
    assert_eq!(budgets, vec![dec!(1000), dec!(500)]);
}
