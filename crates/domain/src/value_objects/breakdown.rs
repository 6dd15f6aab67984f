//! Itemized cost breakdowns produced by the calculators

use serde::{Deserialize, Serialize};

/// Development Points, the currency every upgrade is priced in
pub type Points = u64;

/// One priced step of an upgrade (e.g., "from d6 to d8")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationStep {
    pub description: String,
    pub cost: Points,
    /// Arithmetic used to reach `cost`, for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

impl CalculationStep {
    pub fn new(description: impl Into<String>, cost: Points) -> Self {
        Self {
            description: description.into(),
            cost,
            formula: None,
        }
    }

    pub fn with_formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = Some(formula.into());
        self
    }
}

/// Total cost of an upgrade together with the steps that make it up
///
/// A zero total with no steps means nothing was requested (the target does not
/// exceed the starting point).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub total_cost: Points,
    pub steps: Vec<CalculationStep>,
}

impl CostBreakdown {
    /// The zero-cost result for an empty or inverted range
    pub fn no_op() -> Self {
        Self::default()
    }

    pub fn is_no_op(&self) -> bool {
        self.steps.is_empty()
    }

    /// Append a step, keeping the total in sync.
    ///
    /// Returns `None` when the running total would overflow.
    pub(crate) fn push(&mut self, step: CalculationStep) -> Option<()> {
        self.total_cost = self.total_cost.checked_add(step.cost)?;
        self.steps.push(step);
        Some(())
    }
}
