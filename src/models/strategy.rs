use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionStrategy {
    Equal,
    FrontLoaded,
    BackLoaded,
    Custom,
}

impl fmt::Display for DistributionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl DistributionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistributionStrategy::Equal => "equal",
            DistributionStrategy::FrontLoaded => "front-loaded",
            DistributionStrategy::BackLoaded => "back-loaded",
            DistributionStrategy::Custom => "custom",
        }
    }

    /// Human label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            DistributionStrategy::Equal => "Equal",
            DistributionStrategy::FrontLoaded => "Aggressive (Front-loaded)",
            DistributionStrategy::BackLoaded => "Conservative (Back-loaded)",
            DistributionStrategy::Custom => "Custom",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<DistributionStrategy> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "equal" | "rata" => Some(DistributionStrategy::Equal),
            "front-loaded" | "frontloaded" | "front" | "aggressive" => {
                Some(DistributionStrategy::FrontLoaded)
            }
            "back-loaded" | "backloaded" | "back" | "conservative" => {
                Some(DistributionStrategy::BackLoaded)
            }
            "custom" => Some(DistributionStrategy::Custom),
            _ => None,
        }
    }
}

impl FromStr for DistributionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_loose(s).ok_or_else(|| format!("unknown distribution strategy: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradingMode {
    Spot,
    Futures,
}

impl fmt::Display for TradingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradingMode::Spot => write!(f, "Spot"),
            TradingMode::Futures => write!(f, "Futures"),
        }
    }
}

impl TradingMode {
    pub fn from_str_loose(s: &str) -> Option<TradingMode> {
        match s.trim().to_lowercase().as_str() {
            "spot" => Some(TradingMode::Spot),
            "futures" | "future" | "perp" => Some(TradingMode::Futures),
            _ => None,
        }
    }
}

impl FromStr for TradingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_loose(s).ok_or_else(|| format!("unknown trading mode: {s}"))
    }
}
