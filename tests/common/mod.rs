#![allow(dead_code)]

use partial_tp_calculator::config::TradingConfig;
use partial_tp_calculator::models::{DistributionStrategy, ParsedSignal, PriceLevel};

/// A four-target, two-stop signal in the supported template.
pub const SOL_SIGNAL: &str = "🆕 NEW CALL: SOLUSDT 🆕
📊 Risk Analysis 📊
Volume(24H) Ranked: 3rd/489
Risk Level: 🟢 Low
Entry: 150.5
📝 Targets & Stop Loss
---------------------------------------
Level      Price    % Change from Entry
---------------------------------------
Target 1   155.0   +2.99%
Target 2   160.0   +6.31%
Target 3   170.0   +12.96%
Target 4   185.0   +22.92%
Stop Loss 1 145.0  -3.65%
Stop Loss 2 140.0  -6.98%
---------------------------------------";

pub fn futures_config(modal: f64, leverage: u32, distribution: DistributionStrategy) -> TradingConfig {
    TradingConfig::futures(modal, leverage, distribution)
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

pub fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}
