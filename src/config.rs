use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{DistributionStrategy, TradingMode};

pub const MAX_LEVERAGE: u32 = 125;
pub const DEFAULT_MODAL: f64 = 10_000_000.0;
pub const DEFAULT_FUTURES_LEVERAGE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("modal must be greater than zero, got {0}")]
    NonPositiveModal(f64),
    #[error("leverage must be between 1 and 125, got {0}")]
    LeverageOutOfRange(u32),
    #[error("spot trading cannot use leverage {0}")]
    SpotLeverage(u32),
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Caller-supplied sizing for one scenario run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingConfig {
    /// Capital in base currency.
    pub modal: f64,
    pub mode: TradingMode,
    pub leverage: u32,
    pub distribution: DistributionStrategy,
    /// One entry per target, only read for the custom strategy.
    #[serde(default)]
    pub custom_allocations: Vec<f64>,
}

impl TradingConfig {
    pub fn spot(modal: f64, distribution: DistributionStrategy) -> Self {
        Self {
            modal,
            mode: TradingMode::Spot,
            leverage: 1,
            distribution,
            custom_allocations: Vec::new(),
        }
    }

    pub fn futures(modal: f64, leverage: u32, distribution: DistributionStrategy) -> Self {
        Self {
            modal,
            mode: TradingMode::Futures,
            leverage,
            distribution,
            custom_allocations: Vec::new(),
        }
    }

    pub fn with_custom_allocations(mut self, allocations: Vec<f64>) -> Self {
        self.distribution = DistributionStrategy::Custom;
        self.custom_allocations = allocations;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.modal.is_finite() && self.modal > 0.0) {
            return Err(ConfigError::NonPositiveModal(self.modal));
        }
        match self.mode {
            TradingMode::Spot if self.leverage != 1 => {
                Err(ConfigError::SpotLeverage(self.leverage))
            }
            TradingMode::Futures if !(1..=MAX_LEVERAGE).contains(&self.leverage) => {
                Err(ConfigError::LeverageOutOfRange(self.leverage))
            }
            _ => Ok(()),
        }
    }

    pub fn effective_capital(&self) -> f64 {
        self.modal * self.leverage as f64
    }
}

/// Application settings, read from the environment (and `.env`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Sizing
    pub modal: f64,
    pub trading_mode: TradingMode,
    pub leverage: u32,

    // Distribution
    pub distribution: DistributionStrategy,
    pub custom_allocations: Vec<f64>,

    // Output
    pub output_dir: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            modal: DEFAULT_MODAL,
            trading_mode: TradingMode::Spot,
            leverage: DEFAULT_FUTURES_LEVERAGE,
            distribution: DistributionStrategy::Equal,
            custom_allocations: Vec::new(),
            output_dir: "reports".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unparseable values keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let custom_allocations = lookup("CUSTOM_ALLOCATIONS")
            .and_then(|raw| parse_percent_list(&raw).ok())
            .unwrap_or_default();

        Config {
            modal: lookup("MODAL")
                .and_then(|v| v.trim().replace('_', "").parse().ok())
                .unwrap_or(defaults.modal),
            trading_mode: lookup("TRADING_MODE")
                .and_then(|v| TradingMode::from_str_loose(&v))
                .unwrap_or(defaults.trading_mode),
            leverage: lookup("LEVERAGE")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.leverage),
            distribution: lookup("DISTRIBUTION")
                .and_then(|v| DistributionStrategy::from_str_loose(&v))
                .unwrap_or(defaults.distribution),
            custom_allocations,
            output_dir: lookup("OUTPUT_DIR").unwrap_or(defaults.output_dir),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Validated sizing for the calculator. Spot always trades at 1x.
    pub fn trading_config(&self) -> Result<TradingConfig, ConfigError> {
        let base = match self.trading_mode {
            TradingMode::Spot => TradingConfig::spot(self.modal, self.distribution),
            TradingMode::Futures => {
                TradingConfig::futures(self.modal, self.leverage, self.distribution)
            }
        };
        let cfg = TradingConfig {
            custom_allocations: self.custom_allocations.clone(),
            ..base
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Parses `"30, 30, 40"` style percentage lists.
pub fn parse_percent_list(raw: &str) -> Result<Vec<f64>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.trim_end_matches('%')
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "CUSTOM_ALLOCATIONS",
                    value: s.to_string(),
                })
        })
        .collect()
}
