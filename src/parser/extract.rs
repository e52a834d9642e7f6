use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::debug;

use crate::models::{ParsedSignal, PriceLevel};

use super::{check_eligible, ParseFailure};

static SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"CALL:\s*(\w+)").expect("symbol pattern"));

static ENTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Entry:\s*([0-9.]+)").expect("entry pattern"));

static VOLUME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Volume.*Ranked:\s*([0-9]+)(?:st|nd|rd|th)/([0-9]+)").expect("volume pattern")
});

// Remainder of the same line only; an empty label never borrows the next line.
static RISK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Risk Level:[ \t]*([^\r\n]+)").expect("risk pattern"));

static TARGET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Target\s+([0-9]+)\s+([0-9.]+)\s+([+-][0-9.]+)%").expect("target pattern")
});

static STOP_LOSS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Stop Loss\s+([0-9]+)\s+([0-9.]+)\s+([+-][0-9.]+)%").expect("stop loss pattern")
});

/// Best-effort extractor for the single supported signal template.
///
/// Each field is searched independently across the whole text, so a missing
/// or malformed field never prevents the others from being recovered.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalParser;

impl SignalParser {
    pub fn new() -> Self {
        Self
    }

    /// Recovers whatever fields match. Never fails.
    pub fn extract(&self, text: &str) -> ParsedSignal {
        let signal = ParsedSignal {
            symbol: extract_symbol(text),
            entry: extract_entry(text),
            volume_rank: extract_volume_rank(text),
            risk_level: extract_risk_level(text),
            targets: extract_levels(&TARGET_RE, text, "target"),
            stop_losses: extract_levels(&STOP_LOSS_RE, text, "stop loss"),
        };

        debug!(
            "Extracted signal: symbol={:?} entry={:?} targets={} stop_losses={}",
            signal.symbol,
            signal.entry,
            signal.targets.len(),
            signal.stop_losses.len()
        );

        signal
    }

    /// Extracts, then rejects signals that cannot feed the calculator.
    pub fn parse(&self, text: &str) -> Result<ParsedSignal, ParseFailure> {
        if text.trim().is_empty() {
            return Err(ParseFailure::EmptyInput);
        }
        let signal = self.extract(text);
        check_eligible(&signal)?;
        Ok(signal)
    }
}

fn extract_symbol(text: &str) -> Option<String> {
    let symbol = SYMBOL_RE.captures(text).map(|c| c[1].to_string());
    if symbol.is_none() {
        debug!("No call announcement found");
    }
    symbol
}

fn extract_entry(text: &str) -> Option<f64> {
    let Some(caps) = ENTRY_RE.captures(text) else {
        debug!("No entry label found");
        return None;
    };
    let entry = parse_positive(&caps[1]);
    if entry.is_none() {
        debug!("Entry value {:?} is not a positive number", &caps[1]);
    }
    entry
}

fn extract_volume_rank(text: &str) -> Option<String> {
    let caps = VOLUME_RE.captures(text)?;
    let rank: u32 = caps[1].parse().ok()?;
    let total: u32 = caps[2].parse().ok()?;
    Some(format!("{rank}/{total}"))
}

fn extract_risk_level(text: &str) -> Option<String> {
    let caps = RISK_RE.captures(text)?;
    let risk = caps[1].trim();
    if risk.is_empty() {
        None
    } else {
        Some(risk.to_string())
    }
}

fn extract_levels(re: &Regex, text: &str, kind: &str) -> Vec<PriceLevel> {
    re.captures_iter(text)
        .filter_map(|caps| {
            let row = level_from_captures(&caps);
            if row.is_none() {
                debug!("Skipping malformed {} row: {:?}", kind, &caps[0]);
            }
            row
        })
        .collect()
}

fn level_from_captures(caps: &Captures<'_>) -> Option<PriceLevel> {
    let level = caps[1].parse::<u32>().ok().filter(|l| *l > 0)?;
    let price = parse_positive(&caps[2])?;
    let pct = caps[3].parse::<f64>().ok().filter(|p| p.is_finite())?;
    Some(PriceLevel::new(level, price, pct))
}

fn parse_positive(raw: &str) -> Option<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}
