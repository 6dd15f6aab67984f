//! Parameter bonuses.
//!
//! A parameter (Hit Points, Mana Points, ...) has a base value and can be
//! raised by buying bonus points. Bonus B costs 100 x (B + 1) and adds the
//! parameter's multiplier to its value. The bonus can never exceed the base.

use serde::Serialize;

use super::UpgradeCost;
use crate::entities::ParameterDescriptor;
use crate::error::CalculationError;
use crate::rules::PARAMETER_COST_MULTIPLIER;
use crate::value_objects::{CalculationStep, CostBreakdown, Points};

/// Request to raise a parameter's bonus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterUpgrade {
    pub parameter: &'static ParameterDescriptor,
    pub base_value: i32,
    pub current_bonus: i32,
    pub target_bonus: i32,
}

impl ParameterUpgrade {
    pub fn new(
        parameter: &'static ParameterDescriptor,
        base_value: i32,
        current_bonus: i32,
        target_bonus: i32,
    ) -> Self {
        Self {
            parameter,
            base_value,
            current_bonus,
            target_bonus,
        }
    }

    /// Checks, in order: the base must be positive, the target bonus must not
    /// exceed the base.
    pub fn validate(&self) -> Result<(), CalculationError> {
        if self.base_value <= 0 {
            return Err(CalculationError::NonPositiveBaseValue);
        }
        if self.target_bonus > self.base_value {
            return Err(CalculationError::BonusExceedsBase {
                base_value: self.base_value,
            });
        }
        Ok(())
    }

    /// Parameter value once the target bonus is bought
    pub fn final_value(&self) -> FinalParameterValue {
        let bonus = i64::from(self.target_bonus) * i64::from(self.parameter.multiplier);
        FinalParameterValue {
            base: i64::from(self.base_value),
            bonus,
            total: i64::from(self.base_value) + bonus,
        }
    }
}

/// Base and bonus components of a parameter after an upgrade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalParameterValue {
    pub base: i64,
    pub bonus: i64,
    pub total: i64,
}

/// Cost of a parameter upgrade plus the resulting value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterBreakdown {
    #[serde(flatten)]
    pub cost: CostBreakdown,
    pub final_value: FinalParameterValue,
}

impl UpgradeCost for ParameterUpgrade {
    type Output = ParameterBreakdown;

    fn calculate(&self) -> Result<ParameterBreakdown, CalculationError> {
        parameter_cost(self)
    }
}

/// Price a parameter upgrade.
///
/// Checks, in order: the base must be positive, the target bonus must not
/// exceed the base. A target at or below the current bonus prices to zero.
pub fn parameter_cost(upgrade: &ParameterUpgrade) -> Result<ParameterBreakdown, CalculationError> {
    upgrade.validate()?;

    let mut cost = CostBreakdown::no_op();
    // Bonuses below zero do not exist; price from zero
    let start = i64::from(upgrade.current_bonus.max(0));
    let end = i64::from(upgrade.target_bonus);

    for bonus in (start + 1)..=end {
        let factor =
            Points::try_from(bonus + 1).map_err(|_| CalculationError::overflow("parameter bonus"))?;
        let step_cost = PARAMETER_COST_MULTIPLIER
            .checked_mul(factor)
            .ok_or_else(|| CalculationError::overflow("parameter bonus"))?;

        let mut description = format!("from bonus {} to {}", bonus - 1, bonus);
        if upgrade.parameter.is_mana() {
            description.push_str(&format!(" (+{} Mana)", upgrade.parameter.multiplier));
        }

        cost.push(
            CalculationStep::new(description, step_cost)
                .with_formula(format!("{} x ({} + 1)", PARAMETER_COST_MULTIPLIER, bonus)),
        )
        .ok_or_else(|| CalculationError::overflow("parameter upgrade"))?;
    }

    Ok(ParameterBreakdown {
        cost,
        final_value: upgrade.final_value(),
    })
}
