//! Value objects shared by every calculator

mod breakdown;
mod die_tier;

pub use breakdown::{CalculationStep, CostBreakdown, Points};
pub use die_tier::DieTier;
