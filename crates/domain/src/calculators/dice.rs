//! Die tier upgrades.
//!
//! Each step up the scale costs the face value of the tier being reached
//! times [`DICE_COST_MULTIPLIER`]: d6 -> d8 costs 8 x 50 = 400.

use serde::{Deserialize, Serialize};

use super::UpgradeCost;
use crate::error::CalculationError;
use crate::rules::DICE_COST_MULTIPLIER;
use crate::value_objects::{CalculationStep, CostBreakdown, DieTier, Points};

/// Request to raise a trait from one die tier to another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceUpgrade {
    pub start: DieTier,
    pub end: DieTier,
}

impl DiceUpgrade {
    pub fn new(start: DieTier, end: DieTier) -> Self {
        Self { start, end }
    }
}

impl UpgradeCost for DiceUpgrade {
    type Output = CostBreakdown;

    fn calculate(&self) -> Result<CostBreakdown, CalculationError> {
        Ok(dice_cost(self.start, self.end))
    }
}

/// Price the climb from `start` to `end`.
///
/// Same-tier and downgrade requests price to zero.
pub fn dice_cost(start: DieTier, end: DieTier) -> CostBreakdown {
    if end.ordinal() <= start.ordinal() {
        return CostBreakdown::no_op();
    }

    let tiers = &DieTier::all()[start.ordinal()..=end.ordinal()];
    let steps: Vec<CalculationStep> = tiers
        .windows(2)
        .map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            let face = Points::from(to.face_value());
            CalculationStep::new(format!("from {} to {}", from, to), face * DICE_COST_MULTIPLIER)
                .with_formula(format!("{} x {}", face, DICE_COST_MULTIPLIER))
        })
        .collect();

    CostBreakdown {
        total_cost: steps.iter().map(|s| s.cost).sum(),
        steps,
    }
}
