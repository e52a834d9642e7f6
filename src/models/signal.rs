use serde::{Deserialize, Serialize};

/// One row of the targets / stop-loss table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    pub level: u32,
    pub price: f64,
    /// Signed as written in the source text, e.g. `+1.66` or `-3.32`.
    pub percentage_from_entry: f64,
}

impl PriceLevel {
    pub fn new(level: u32, price: f64, percentage_from_entry: f64) -> Self {
        Self {
            level,
            price,
            percentage_from_entry,
        }
    }
}

/// Fields recovered from a free-text signal. Every field is optional on its
/// own; eligibility for calculation is checked separately.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedSignal {
    pub symbol: Option<String>,
    pub entry: Option<f64>,
    /// Formatted as `N/Total`.
    pub volume_rank: Option<String>,
    pub risk_level: Option<String>,
    /// In order of appearance, not sorted, not deduplicated.
    #[serde(default)]
    pub targets: Vec<PriceLevel>,
    #[serde(default)]
    pub stop_losses: Vec<PriceLevel>,
}

impl ParsedSignal {
    pub fn symbol_or_unknown(&self) -> &str {
        self.symbol.as_deref().unwrap_or("UNKNOWN")
    }

    /// Splits `volume_rank` back into `(rank, total)`.
    pub fn volume_rank_parts(&self) -> Option<(u32, u32)> {
        let (rank, total) = self.volume_rank.as_deref()?.split_once('/')?;
        Some((rank.parse().ok()?, total.parse().ok()?))
    }

    /// Stop-losses that sit at or above entry, which is unusual for a long call.
    pub fn stop_losses_at_or_above_entry(&self) -> Vec<&PriceLevel> {
        match self.entry {
            Some(entry) => self
                .stop_losses
                .iter()
                .filter(|sl| sl.price >= entry)
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_rank_parts_splits_formatted_rank() {
        let signal = ParsedSignal {
            volume_rank: Some("408/489".to_string()),
            ..Default::default()
        };
        assert_eq!(signal.volume_rank_parts(), Some((408, 489)));
    }

    #[test]
    fn volume_rank_parts_rejects_garbage() {
        let signal = ParsedSignal {
            volume_rank: Some("high".to_string()),
            ..Default::default()
        };
        assert_eq!(signal.volume_rank_parts(), None);
    }

    #[test]
    fn stop_losses_above_entry_are_reported() {
        let signal = ParsedSignal {
            entry: Some(1.0),
            stop_losses: vec![
                PriceLevel::new(1, 0.9, -10.0),
                PriceLevel::new(2, 1.1, 10.0),
            ],
            ..Default::default()
        };
        let flagged = signal.stop_losses_at_or_above_entry();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].level, 2);
    }

    #[test]
    fn unknown_symbol_placeholder() {
        assert_eq!(ParsedSignal::default().symbol_or_unknown(), "UNKNOWN");
    }
}
