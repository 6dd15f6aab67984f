//! Development Points domain.
//!
//! Pricing rules for improving a character: die tier upgrades, skill levels,
//! special abilities and parameter bonuses, plus the training time a cost
//! translates to. Everything here is pure and deterministic.
//!
//! ## Structure
//!
//! - `value_objects/` - die tiers and cost breakdowns
//! - `entities/` - the fixed skill and parameter catalogs
//! - `rules` - pricing constants
//! - `calculators/` - one module per calculator

pub mod calculators;
pub mod entities;
pub mod error;
pub mod rules;
pub mod value_objects;

pub use calculators::{
    acquisition_cost, dice_cost, minimum_target_level, parameter_cost, skill_cost, special_cost,
    training_days, training_days_by_face, DiceUpgrade, FinalParameterValue, ParameterBreakdown,
    ParameterUpgrade, SkillUpgrade, SpecialUpgrade, UpgradeCost,
};
pub use entities::{ParameterDescriptor, SkillCategory, SkillDescriptor, MANA_POINTS_ID};
pub use error::{CalculationError, DomainError};
pub use value_objects::{CalculationStep, CostBreakdown, DieTier, Points};
