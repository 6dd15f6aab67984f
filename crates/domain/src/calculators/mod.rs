//! Cost calculators for the Development Point economy.
//!
//! Each calculator is a pure function of a small upgrade record. The records
//! also implement [`UpgradeCost`] so callers can price any of them the same way.
//!
//! # Calculators
//!
//! - Die tiers (`dice`)
//! - Skill levels (`skill`)
//! - Special abilities (`special`)
//! - Parameter bonuses (`parameter`)
//! - Training time (`training`), shared by all of the above

pub mod dice;
pub mod parameter;
pub mod skill;
pub mod special;
pub mod training;

use crate::error::CalculationError;

pub use dice::{dice_cost, DiceUpgrade};
pub use parameter::{parameter_cost, FinalParameterValue, ParameterBreakdown, ParameterUpgrade};
pub use skill::{skill_cost, SkillUpgrade};
pub use special::{acquisition_cost, minimum_target_level, special_cost, SpecialUpgrade};
pub use training::{training_days, training_days_by_face};

/// An upgrade request that can be priced.
pub trait UpgradeCost {
    /// Breakdown produced on success
    type Output;

    /// Compute the cost. Recomputing with the same record always yields the same result.
    fn calculate(&self) -> Result<Self::Output, CalculationError>;
}
