pub mod signal;
pub mod strategy;

pub use signal::{ParsedSignal, PriceLevel};
pub use strategy::{DistributionStrategy, TradingMode};
