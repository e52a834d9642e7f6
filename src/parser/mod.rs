pub mod extract;
pub mod template;

pub use extract::SignalParser;
pub use template::{render_signal, EXAMPLE_SIGNAL};

use thiserror::Error;
use tracing::warn;

use crate::models::ParsedSignal;

/// Why a parsed signal cannot be handed to the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("signal text is empty")]
    EmptyInput,
    #[error("no valid entry price found")]
    MissingEntry,
    #[error("no target rows found")]
    NoTargets,
    #[error("entry price must be a positive number")]
    InvalidEntry,
    #[error("target {level} price must be a positive number")]
    InvalidTargetPrice { level: u32 },
    #[error("stop loss {level} price must be a positive number")]
    InvalidStopLossPrice { level: u32 },
}

fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

/// Eligibility gate: an entry price and at least one target are required,
/// and every price must be finite and positive. Returns the entry price on
/// success.
pub fn check_eligible(signal: &ParsedSignal) -> Result<f64, ParseFailure> {
    let entry = signal.entry.ok_or(ParseFailure::MissingEntry)?;
    if !is_valid_price(entry) {
        return Err(ParseFailure::InvalidEntry);
    }
    if signal.targets.is_empty() {
        return Err(ParseFailure::NoTargets);
    }
    if let Some(tp) = signal.targets.iter().find(|t| !is_valid_price(t.price)) {
        return Err(ParseFailure::InvalidTargetPrice { level: tp.level });
    }
    if let Some(sl) = signal.stop_losses.iter().find(|s| !is_valid_price(s.price)) {
        return Err(ParseFailure::InvalidStopLossPrice { level: sl.level });
    }

    for sl in signal.stop_losses_at_or_above_entry() {
        warn!(
            "Stop loss {} at {} is not below entry {}",
            sl.level, sl.price, entry
        );
    }

    Ok(entry)
}

/// Convenience wrapper around [`SignalParser::parse`].
pub fn parse_signal(text: &str) -> Result<ParsedSignal, ParseFailure> {
    SignalParser::new().parse(text)
}
