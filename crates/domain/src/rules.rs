//! Pricing constants of the Development Point economy

use crate::entities::SkillCategory;
use crate::value_objects::Points;

/// Price factor per face when upgrading into a die tier
pub const DICE_COST_MULTIPLIER: Points = 50;

/// Flat price of acquiring one of the first few special abilities
pub const SPECIAL_ACQUISITION_COST: Points = 100;

/// Specials up to this ordinal are bought at the flat price; later ones double each time
pub const SPECIAL_FLAT_PRICE_LIMIT: u32 = 3;

pub const SPECIAL_LEVEL_MULTIPLIER: Points = 100;

pub const PARAMETER_COST_MULTIPLIER: Points = 100;

/// Price of learning a skill at level 0
pub fn skill_learning_cost(category: SkillCategory) -> Points {
    match category {
        SkillCategory::Natural => 50,
        SkillCategory::Specialized => 100,
    }
}

/// Per-level multiplier for skill levels 1 and up.
///
/// `None` for Specialized skills without a master: they cannot go past level 0.
pub fn skill_level_multiplier(category: SkillCategory, has_master: bool) -> Option<Points> {
    match (category, has_master) {
        (SkillCategory::Natural, true) => Some(25),
        (SkillCategory::Natural, false) => Some(50),
        (SkillCategory::Specialized, true) => Some(100),
        (SkillCategory::Specialized, false) => None,
    }
}
