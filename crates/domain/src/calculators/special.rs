//! Special abilities.
//!
//! A special is bought at level 1, then levelled like a skill with a fixed
//! multiplier. The first three specials have a flat price; from the fourth on
//! the price doubles with every special already owned.

use serde::{Deserialize, Serialize};

use super::UpgradeCost;
use crate::error::CalculationError;
use crate::rules::{SPECIAL_ACQUISITION_COST, SPECIAL_FLAT_PRICE_LIMIT, SPECIAL_LEVEL_MULTIPLIER};
use crate::value_objects::{CalculationStep, CostBreakdown, Points};

/// Lowest level an owned special can have
pub const FIRST_SPECIAL_LEVEL: i64 = 1;

/// Request to acquire and/or level a special ability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialUpgrade {
    /// Specials the character already has; only read when acquiring
    pub owned_count: i32,
    /// The special is not owned yet and must be acquired first
    pub untrained: bool,
    pub current_level: i32,
    pub target_level: i32,
}

impl SpecialUpgrade {
    /// Level an owned special from `current_level` to `target_level`
    pub fn level_up(current_level: i32, target_level: i32) -> Self {
        Self {
            owned_count: 0,
            untrained: false,
            current_level,
            target_level,
        }
    }

    /// Acquire a new special (the `owned_count + 1`-th) and level it to `target_level`
    pub fn acquire(owned_count: i32, target_level: i32) -> Self {
        Self {
            owned_count,
            untrained: true,
            current_level: 1,
            target_level,
        }
    }

    pub fn effective_start(&self) -> i64 {
        if self.untrained {
            -1
        } else {
            i64::from(self.current_level).max(FIRST_SPECIAL_LEVEL)
        }
    }

    pub fn effective_end(&self) -> i64 {
        i64::from(self.target_level).max(FIRST_SPECIAL_LEVEL)
    }

    /// Ordinal of the special being acquired (1 for the first one)
    pub fn acquisition_ordinal(&self) -> u32 {
        self.owned_count.max(0).unsigned_abs() + 1
    }
}

impl UpgradeCost for SpecialUpgrade {
    type Output = CostBreakdown;

    fn calculate(&self) -> Result<CostBreakdown, CalculationError> {
        special_cost(self)
    }
}

/// Lowest target level that still describes an upgrade.
///
/// Forms raise their target to this floor whenever the untrained flag or the
/// current level changes.
pub fn minimum_target_level(untrained: bool, current_level: i32) -> i32 {
    if untrained {
        FIRST_SPECIAL_LEVEL as i32
    } else {
        current_level.max(FIRST_SPECIAL_LEVEL as i32).saturating_add(1)
    }
}

/// Price of acquiring the `ordinal`-th special at level 1
pub fn acquisition_cost(ordinal: u32) -> Result<Points, CalculationError> {
    if ordinal <= SPECIAL_FLAT_PRICE_LIMIT {
        return Ok(SPECIAL_ACQUISITION_COST);
    }
    2u64.checked_pow(ordinal - SPECIAL_FLAT_PRICE_LIMIT)
        .and_then(|factor| factor.checked_mul(SPECIAL_ACQUISITION_COST))
        .ok_or_else(|| CalculationError::overflow("special acquisition"))
}

/// Price a special ability upgrade, acquisition included
pub fn special_cost(upgrade: &SpecialUpgrade) -> Result<CostBreakdown, CalculationError> {
    let start = upgrade.effective_start();
    let end = upgrade.effective_end();
    if end <= start {
        return Ok(CostBreakdown::no_op());
    }

    let mut breakdown = CostBreakdown::no_op();

    if upgrade.untrained {
        let ordinal = upgrade.acquisition_ordinal();
        let cost = acquisition_cost(ordinal)?;
        let step = CalculationStep::new(format!("acquire special #{} (at level 1)", ordinal), cost);
        let step = if ordinal > SPECIAL_FLAT_PRICE_LIMIT {
            step.with_formula(format!(
                "{} x 2^({} - {})",
                SPECIAL_ACQUISITION_COST, ordinal, SPECIAL_FLAT_PRICE_LIMIT
            ))
        } else {
            step
        };
        breakdown
            .push(step)
            .ok_or_else(|| CalculationError::overflow("special upgrade"))?;
    }

    // Acquisition already bought level 1
    let loop_start = if upgrade.untrained {
        FIRST_SPECIAL_LEVEL
    } else {
        start
    };

    for level in (loop_start + 1)..=end {
        let factor =
            Points::try_from(level + 1).map_err(|_| CalculationError::overflow("special level"))?;
        let cost = factor
            .checked_mul(SPECIAL_LEVEL_MULTIPLIER)
            .ok_or_else(|| CalculationError::overflow("special level"))?;
        let step = CalculationStep::new(format!("from level {} to {}", level - 1, level), cost)
            .with_formula(format!("(level {} + 1) x {}", level, SPECIAL_LEVEL_MULTIPLIER));
        breakdown
            .push(step)
            .ok_or_else(|| CalculationError::overflow("special upgrade"))?;
    }

    Ok(breakdown)
}
