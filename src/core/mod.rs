pub mod allocation;
pub mod scenario;

pub use allocation::{compute_allocation, compute_custom_allocation, AllocationError};
pub use scenario::{
    compute_scenario, ScenarioCalculator, ScenarioError, ScenarioResult, StopLossRow, TargetRow,
};
