use thiserror::Error;
use tracing::warn;

use crate::models::DistributionStrategy;

/// Front-loaded tables, more weight on early targets.
const FRONT_LOADED_2: &[f64] = &[70.0, 30.0];
const FRONT_LOADED_3: &[f64] = &[50.0, 30.0, 20.0];
const FRONT_LOADED_4: &[f64] = &[40.0, 30.0, 20.0, 10.0];

/// Back-loaded tables, more weight on later targets.
const BACK_LOADED_2: &[f64] = &[30.0, 70.0];
const BACK_LOADED_3: &[f64] = &[20.0, 30.0, 50.0];
const BACK_LOADED_4: &[f64] = &[10.0, 20.0, 30.0, 40.0];

pub const TOTAL_PERCENT: f64 = 100.0;
const MIN_CUSTOM_PERCENT: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocationError {
    #[error("cannot allocate across zero targets")]
    NoTargets,
    #[error("custom allocation has {got} values but the signal has {expected} targets")]
    CustomLengthMismatch { expected: usize, got: usize },
    #[error("custom allocation TP{tp} = {value}% is outside [1, {remaining}]", tp = .index + 1)]
    CustomOutOfRange {
        index: usize,
        value: f64,
        remaining: f64,
    },
}

/// Percentages of the position closed at each target, in target order.
///
/// Front/back-loaded strategies only have tables for 2, 3 and 4 targets; any
/// other count gets the 4-target table, so its length will not match
/// `target_count`. `custom` is only read for [`DistributionStrategy::Custom`].
pub fn compute_allocation(
    strategy: DistributionStrategy,
    target_count: usize,
    custom: &[f64],
) -> Result<Vec<f64>, AllocationError> {
    if target_count == 0 {
        return Err(AllocationError::NoTargets);
    }

    let alloc = match strategy {
        DistributionStrategy::Equal => vec![TOTAL_PERCENT / target_count as f64; target_count],
        DistributionStrategy::FrontLoaded => {
            table_for(target_count, [FRONT_LOADED_2, FRONT_LOADED_3, FRONT_LOADED_4]).to_vec()
        }
        DistributionStrategy::BackLoaded => {
            table_for(target_count, [BACK_LOADED_2, BACK_LOADED_3, BACK_LOADED_4]).to_vec()
        }
        DistributionStrategy::Custom => compute_custom_allocation(custom, target_count)?,
    };

    if alloc.len() != target_count {
        warn!(
            "{} allocation has no table for {} targets, using the 4-target table",
            strategy, target_count
        );
    }

    Ok(alloc)
}

fn table_for(target_count: usize, tables: [&'static [f64]; 3]) -> &'static [f64] {
    match target_count {
        2 => tables[0],
        3 => tables[1],
        _ => tables[2],
    }
}

/// Validates user-entered percentages. Each non-final value must lie in
/// `[1, remaining]`; the final value is always replaced by what is left of 100.
pub fn compute_custom_allocation(
    inputs: &[f64],
    target_count: usize,
) -> Result<Vec<f64>, AllocationError> {
    if target_count == 0 {
        return Err(AllocationError::NoTargets);
    }
    if inputs.len() != target_count {
        return Err(AllocationError::CustomLengthMismatch {
            expected: target_count,
            got: inputs.len(),
        });
    }

    let mut remaining = TOTAL_PERCENT;
    let mut alloc = Vec::with_capacity(target_count);

    for (index, &value) in inputs[..target_count - 1].iter().enumerate() {
        if !(MIN_CUSTOM_PERCENT..=remaining).contains(&value) {
            return Err(AllocationError::CustomOutOfRange {
                index,
                value,
                remaining,
            });
        }
        alloc.push(value);
        remaining -= value;
    }

    // Last row absorbs the remainder regardless of what was entered.
    alloc.push(remaining);
    Ok(alloc)
}

/// Default custom inputs: 30% per non-final target while budget allows.
/// Every non-final slot keeps at least 1% so the defaults pass
/// [`compute_custom_allocation`] for up to 100 targets.
pub fn default_custom_inputs(target_count: usize) -> Vec<f64> {
    let mut remaining = TOTAL_PERCENT;
    let mut out = Vec::with_capacity(target_count);
    for i in 0..target_count {
        if i + 1 == target_count {
            out.push(remaining);
        } else {
            // non-final slots still to fill after this one
            let reserved = target_count.saturating_sub(i + 2) as f64 * MIN_CUSTOM_PERCENT;
            let pct = 30.0_f64.min(remaining - reserved).max(0.0);
            out.push(pct);
            remaining -= pct;
        }
    }
    out
}
