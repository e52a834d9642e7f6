mod common;

use common::{approx, futures_config, make_signal, SOL_SIGNAL};

use partial_tp_calculator::config::{Config, TradingConfig};
use partial_tp_calculator::core::{compute_scenario, ScenarioError};
use partial_tp_calculator::models::{DistributionStrategy, TradingMode};
use partial_tp_calculator::parser::{parse_signal, render_signal, ParseFailure, SignalParser, EXAMPLE_SIGNAL};
use partial_tp_calculator::report::ScenarioReport;

#[test]
fn full_pipeline_with_exports() {
    // 1. Parse the bundled example
    let signal = parse_signal(EXAMPLE_SIGNAL).expect("example should be eligible");
    assert_eq!(signal.symbol.as_deref(), Some("JELLYJELLYUSDT"));

    // 2. Default config is 10M spot, equal split
    let cfg = Config::from_lookup(|_| None);
    let trading = cfg.trading_config().unwrap();
    assert_eq!(trading.mode, TradingMode::Spot);
    assert_eq!(trading.leverage, 1);

    // 3. Scenario
    let result = compute_scenario(&signal, &trading).unwrap();
    assert_eq!(result.target_rows.len(), 4);
    assert_eq!(result.stop_loss_rows.len(), 2);
    assert_eq!(result.allocations, vec![25.0; 4]);
    assert!(result.total_profit > 0.0);
    assert!(result.risk_reward_ratio.is_some());

    // 4. Exports
    let dir = tempfile::tempdir().unwrap();
    let report = ScenarioReport::new(signal, trading, result);
    let csv_path = report.save_csv(dir.path()).unwrap();
    let txt_path = report.save_text(dir.path().join("nested")).unwrap();

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("Symbol,"));
    assert!(csv_path
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("JELLYJELLYUSDT_analysis_"));

    let txt = std::fs::read_to_string(&txt_path).unwrap();
    assert!(txt.contains("TAKE PROFIT LEVELS:"));
    assert!(txt.contains("STOP LOSS LEVELS:"));
}

#[test]
fn futures_front_loaded_profit_matches_hand_calculation() {
    let signal = SignalParser::new().parse(SOL_SIGNAL).unwrap();
    assert_eq!(signal.volume_rank.as_deref(), Some("3/489"));
    assert_eq!(signal.risk_level.as_deref(), Some("🟢 Low"));

    let cfg = futures_config(1_000_000.0, 5, DistributionStrategy::FrontLoaded);
    let r = compute_scenario(&signal, &cfg).unwrap();

    let position = 5_000_000.0 / 150.5;
    assert!(approx(r.effective_capital, 5_000_000.0, 1e-9));
    assert!(approx(r.position_size, position, 1e-9));

    // 40/30/20/10 over price deltas 4.5/9.5/19.5/34.5
    let expected = position * (0.4 * 4.5 + 0.3 * 9.5 + 0.2 * 19.5 + 0.1 * 34.5);
    assert!(approx(r.total_profit, expected, 1e-6));
    assert!(approx(r.roi_percent, expected / 1_000_000.0 * 100.0, 1e-9));

    let sl1 = (145.0 - 150.5) * position;
    assert!(approx(r.stop_loss_rows[0].loss, sl1, 1e-6));
    assert!(approx(r.risk_reward_ratio.unwrap(), (expected / sl1).abs(), 1e-9));
}

#[test]
fn reference_sizing_example() {
    let signal = make_signal(0.0241, &[(1, 0.0245, 1.66)], &[]);
    let cfg = TradingConfig::spot(10_000_000.0, DistributionStrategy::Equal);
    let r = compute_scenario(&signal, &cfg).unwrap();

    assert!(approx(r.position_size, 10_000_000.0 / 0.0241, 1e-3));
    assert!(approx(r.total_profit, 165_975.10, 0.01));
    assert_eq!(r.risk_reward_ratio, None);
}

#[test]
fn ineligible_text_never_reaches_calculator() {
    let parser = SignalParser::new();
    let missing_entry = "🆕 NEW CALL: FOOUSDT 🆕\nTarget 1   1.1   +10%";
    assert_eq!(parser.parse(missing_entry), Err(ParseFailure::MissingEntry));

    // extraction still recovers the other fields
    let partial = parser.extract(missing_entry);
    assert_eq!(partial.symbol.as_deref(), Some("FOOUSDT"));
    assert_eq!(partial.targets.len(), 1);

    let cfg = TradingConfig::spot(1_000.0, DistributionStrategy::Equal);
    assert_eq!(
        compute_scenario(&partial, &cfg),
        Err(ScenarioError::Ineligible(ParseFailure::MissingEntry))
    );
}

#[test]
fn custom_allocation_remainder_absorption_end_to_end() {
    let signal = make_signal(
        1.0,
        &[(1, 1.1, 10.0), (2, 1.2, 20.0), (3, 1.3, 30.0)],
        &[(1, 0.9, -10.0)],
    );
    let cfg = TradingConfig::spot(1_000.0, DistributionStrategy::Equal)
        .with_custom_allocations(vec![30.0, 30.0, 30.0]);
    let r = compute_scenario(&signal, &cfg).unwrap();
    assert_eq!(r.allocations, vec![30.0, 30.0, 40.0]);

    let bad = TradingConfig::spot(1_000.0, DistributionStrategy::Equal)
        .with_custom_allocations(vec![90.0, 20.0, 0.0]);
    assert!(matches!(
        compute_scenario(&signal, &bad),
        Err(ScenarioError::Allocation(_))
    ));
}

#[test]
fn rendered_signal_reparses_identically() {
    let parser = SignalParser::new();
    let original = parser.extract(SOL_SIGNAL);
    let reparsed = parser.extract(&render_signal(&original));
    assert_eq!(reparsed, original);
}

#[test]
fn invalid_config_is_reported() {
    let signal = parse_signal(EXAMPLE_SIGNAL).unwrap();
    let cfg = TradingConfig::spot(-5.0, DistributionStrategy::Equal);
    assert!(matches!(
        compute_scenario(&signal, &cfg),
        Err(ScenarioError::Config(_))
    ));
}
