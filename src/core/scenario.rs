use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ConfigError, TradingConfig};
use crate::core::allocation::{compute_allocation, AllocationError};
use crate::models::ParsedSignal;
use crate::parser::{check_eligible, ParseFailure};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    #[error("signal is not eligible: {0}")]
    Ineligible(#[from] ParseFailure),
    #[error("invalid allocation: {0}")]
    Allocation(#[from] AllocationError),
    #[error("allocation has {allocations} rows but the signal has {targets} targets")]
    AllocationLengthMismatch { targets: usize, allocations: usize },
    #[error("invalid trading config: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRow {
    pub level: u32,
    pub target_price: f64,
    pub percentage_from_entry: f64,
    pub allocation_pct: f64,
    pub units: f64,
    pub sale_value: f64,
    pub cost_basis: f64,
    pub profit: f64,
    pub cumulative_profit: f64,
    /// Cumulative profit as a percentage of modal.
    pub cumulative_roi_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopLossRow {
    pub level: u32,
    pub price: f64,
    pub percentage_from_entry: f64,
    /// Signed: negative when the stop sits below entry.
    pub loss: f64,
    /// Relative to modal, not to leveraged capital.
    pub loss_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub entry: f64,
    pub modal: f64,
    pub leverage: u32,
    pub effective_capital: f64,
    pub position_size: f64,
    pub allocations: Vec<f64>,
    pub target_rows: Vec<TargetRow>,
    pub stop_loss_rows: Vec<StopLossRow>,
    pub total_profit: f64,
    pub roi_percent: f64,
    /// Profit from the first two targets only; absent with fewer than two.
    pub partial_profit: Option<f64>,
    pub partial_roi_percent: Option<f64>,
    /// `|total_profit / first stop-loss loss|`; absent without a usable stop.
    pub risk_reward_ratio: Option<f64>,
}

impl ScenarioResult {
    pub fn primary_stop_loss(&self) -> Option<&StopLossRow> {
        self.stop_loss_rows.first()
    }
}

/// Pure profit/loss calculator over a parsed signal and a trading config.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioCalculator;

impl ScenarioCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Allocation percentages the given config yields for a signal.
    pub fn allocation(
        &self,
        signal: &ParsedSignal,
        config: &TradingConfig,
    ) -> Result<Vec<f64>, ScenarioError> {
        let alloc = compute_allocation(
            config.distribution,
            signal.targets.len(),
            &config.custom_allocations,
        )?;
        if alloc.len() != signal.targets.len() {
            return Err(ScenarioError::AllocationLengthMismatch {
                targets: signal.targets.len(),
                allocations: alloc.len(),
            });
        }
        Ok(alloc)
    }

    pub fn compute(
        &self,
        signal: &ParsedSignal,
        config: &TradingConfig,
    ) -> Result<ScenarioResult, ScenarioError> {
        config.validate()?;
        let entry = check_eligible(signal)?;
        let allocations = self.allocation(signal, config)?;

        let modal = config.modal;
        let effective_capital = config.effective_capital();
        let position_size = effective_capital / entry;

        let mut cumulative_profit = 0.0;
        let target_rows: Vec<TargetRow> = signal
            .targets
            .iter()
            .zip(&allocations)
            .map(|(target, &allocation_pct)| {
                let units = position_size * (allocation_pct / 100.0);
                let sale_value = units * target.price;
                let cost_basis = units * entry;
                let profit = sale_value - cost_basis;
                cumulative_profit += profit;
                TargetRow {
                    level: target.level,
                    target_price: target.price,
                    percentage_from_entry: target.percentage_from_entry,
                    allocation_pct,
                    units,
                    sale_value,
                    cost_basis,
                    profit,
                    cumulative_profit,
                    cumulative_roi_percent: cumulative_profit / modal * 100.0,
                }
            })
            .collect();

        let stop_loss_rows: Vec<StopLossRow> = signal
            .stop_losses
            .iter()
            .map(|sl| {
                let loss = (sl.price - entry) * position_size;
                StopLossRow {
                    level: sl.level,
                    price: sl.price,
                    percentage_from_entry: sl.percentage_from_entry,
                    loss,
                    loss_percent: loss / modal * 100.0,
                }
            })
            .collect();

        let total_profit: f64 = target_rows.iter().map(|r| r.profit).sum();
        let roi_percent = total_profit / modal * 100.0;

        let partial_profit = match target_rows.as_slice() {
            [first, second, ..] => Some(first.profit + second.profit),
            _ => None,
        };
        let partial_roi_percent = partial_profit.map(|p| p / modal * 100.0);

        let risk_reward_ratio = stop_loss_rows
            .first()
            .filter(|sl| sl.loss != 0.0)
            .map(|sl| (total_profit / sl.loss).abs());

        Ok(ScenarioResult {
            entry,
            modal,
            leverage: config.leverage,
            effective_capital,
            position_size,
            allocations,
            target_rows,
            stop_loss_rows,
            total_profit,
            roi_percent,
            partial_profit,
            partial_roi_percent,
            risk_reward_ratio,
        })
    }
}

/// Convenience wrapper around [`ScenarioCalculator::compute`].
pub fn compute_scenario(
    signal: &ParsedSignal,
    config: &TradingConfig,
) -> Result<ScenarioResult, ScenarioError> {
    ScenarioCalculator::new().compute(signal, config)
}
