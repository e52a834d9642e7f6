use chrono::{DateTime, Utc};

use crate::config::TradingConfig;
use crate::core::compute_scenario;
use crate::models::{DistributionStrategy, ParsedSignal, PriceLevel};
use crate::parser::SignalParser;
use crate::report::ScenarioReport;

pub use crate::parser::EXAMPLE_SIGNAL;

/// The bundled example, extracted.
pub fn example_signal() -> ParsedSignal {
    SignalParser::new().extract(EXAMPLE_SIGNAL)
}

/// Build a signal from `(level, price, pct)` tuples.
pub fn make_signal(
    entry: f64,
    targets: &[(u32, f64, f64)],
    stop_losses: &[(u32, f64, f64)],
) -> ParsedSignal {
    let rows = |data: &[(u32, f64, f64)]| -> Vec<PriceLevel> {
        data.iter()
            .map(|&(level, price, pct)| PriceLevel::new(level, price, pct))
            .collect()
    };

    ParsedSignal {
        symbol: Some("TESTUSDT".to_string()),
        entry: Some(entry),
        volume_rank: None,
        risk_level: None,
        targets: rows(targets),
        stop_losses: rows(stop_losses),
    }
}

pub fn spot_config(modal: f64, distribution: DistributionStrategy) -> TradingConfig {
    TradingConfig::spot(modal, distribution)
}

/// Example signal, 10M spot, equal split, stamped at a fixed time.
pub fn sample_report() -> ScenarioReport {
    let generated_at = DateTime::parse_from_rfc3339("2024-01-15T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc);
    let signal = example_signal();
    let config = spot_config(10_000_000.0, DistributionStrategy::Equal);
    let result = compute_scenario(&signal, &config).unwrap();
    ScenarioReport::at(generated_at, signal, config, result)
}
