//! Skill levels.
//!
//! Levels start at 0 once a skill is learned; an untrained character sits at
//! the "not yet learned" level -1. Learning the skill (reaching level 0) has a
//! flat price per category. Every later level L costs (L + 1) times the
//! category/master multiplier.

use serde::{Deserialize, Serialize};

use super::UpgradeCost;
use crate::entities::SkillDescriptor;
use crate::error::CalculationError;
use crate::rules::{skill_learning_cost, skill_level_multiplier};
use crate::value_objects::{CalculationStep, CostBreakdown, Points};

/// Level of a skill that has not been learned yet
pub const UNLEARNED_LEVEL: i64 = -1;

/// Request to raise a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillUpgrade {
    pub skill: &'static SkillDescriptor,
    /// The character has not learned the skill; `current_level` is ignored
    pub untrained: bool,
    pub current_level: i32,
    pub target_level: i32,
    pub has_master: bool,
}

impl SkillUpgrade {
    pub fn new(skill: &'static SkillDescriptor, current_level: i32, target_level: i32) -> Self {
        Self {
            skill,
            untrained: false,
            current_level,
            target_level,
            has_master: false,
        }
    }

    /// Start from the "not yet learned" state
    pub fn untrained(mut self) -> Self {
        self.untrained = true;
        self
    }

    pub fn with_master(mut self, has_master: bool) -> Self {
        self.has_master = has_master;
        self
    }

    /// Level the upgrade starts from, -1 when untrained
    pub fn effective_start(&self) -> i64 {
        if self.untrained {
            UNLEARNED_LEVEL
        } else {
            i64::from(self.current_level.max(0))
        }
    }

    pub fn effective_end(&self) -> i64 {
        i64::from(self.target_level.max(0))
    }

    /// Reject upgrades the rules forbid outright.
    ///
    /// A Specialized skill without a master may only be learned (brought to
    /// level 0); any other request fails, even one that would price to zero.
    pub fn validate(&self) -> Result<(), CalculationError> {
        if self.skill.is_specialized()
            && !self.has_master
            && (self.effective_start() >= 0 || self.effective_end() >= 1)
        {
            return Err(CalculationError::SpecializedRequiresMaster);
        }
        Ok(())
    }
}

impl UpgradeCost for SkillUpgrade {
    type Output = CostBreakdown;

    fn calculate(&self) -> Result<CostBreakdown, CalculationError> {
        skill_cost(self)
    }
}

/// Price a skill upgrade.
///
/// Fails when a Specialized skill would progress without a master. That check
/// runs before the range check, so a trained Specialized skill without a
/// master is rejected even when the target does not exceed the current level.
pub fn skill_cost(upgrade: &SkillUpgrade) -> Result<CostBreakdown, CalculationError> {
    let category = upgrade.skill.category;
    let start = upgrade.effective_start();
    let end = upgrade.effective_end();
    let multiplier = skill_level_multiplier(category, upgrade.has_master);

    upgrade.validate()?;

    if end <= start {
        return Ok(CostBreakdown::no_op());
    }

    let mut breakdown = CostBreakdown::no_op();
    for level in (start + 1)..=end {
        let step = if level == 0 {
            let cost = skill_learning_cost(category);
            CalculationStep::new("from untrained to level 0", cost)
                .with_formula(format!("flat {} ({})", cost, category))
        } else {
            let multiplier = multiplier.ok_or(CalculationError::SpecializedRequiresMaster)?;
            let factor = Points::try_from(level + 1)
                .map_err(|_| CalculationError::overflow("skill level"))?;
            let cost = factor
                .checked_mul(multiplier)
                .ok_or_else(|| CalculationError::overflow("skill level"))?;
            CalculationStep::new(format!("from level {} to {}", level - 1, level), cost)
                .with_formula(format!("(level {} + 1) x {}", level, multiplier))
        };
        breakdown
            .push(step)
            .ok_or_else(|| CalculationError::overflow("skill upgrade"))?;
    }

    Ok(breakdown)
}
