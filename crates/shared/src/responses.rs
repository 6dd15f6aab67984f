//! Calculator response payloads
//!
//! Every calculator answers with a [`CalculationResponse`]. Rule violations
//! (e.g., a bonus above the base value) are reported in `error` with a zero
//! total and no steps, rather than as a failed request.

use serde::{Deserialize, Serialize};

use devpoints_domain::{
    CalculationError, CalculationStep, CostBreakdown, DieTier, FinalParameterValue,
    ParameterDescriptor, Points, SkillCategory, SkillDescriptor,
};

use crate::format::{format_days, format_points};

/// A priced step as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepData {
    pub description: String,
    pub cost: Points,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

impl From<CalculationStep> for StepData {
    fn from(step: CalculationStep) -> Self {
        Self {
            description: step.description,
            cost: step.cost,
            formula: step.formula,
        }
    }
}

/// Final value of a parameter after the requested bonus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalValueData {
    pub total: i64,
    pub base: i64,
    pub bonus: i64,
}

impl From<FinalParameterValue> for FinalValueData {
    fn from(value: FinalParameterValue) -> Self {
        Self {
            total: value.total,
            base: value.base,
            bonus: value.bonus,
        }
    }
}

/// Training time derived from a cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingData {
    pub reference_die: DieTier,
    pub days: u64,
    pub formatted_days: String,
}

impl TrainingData {
    pub fn new(reference_die: DieTier, days: u64) -> Self {
        Self {
            reference_die,
            days,
            formatted_days: format_days(days),
        }
    }
}

/// Result of any calculator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    pub total_cost: Points,
    pub formatted_total: String,
    pub steps: Vec<StepData>,
    /// Why the cost could not be computed; `total_cost` is 0 and `steps` empty when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Present when the total is positive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training: Option<TrainingData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_value: Option<FinalValueData>,
}

impl CalculationResponse {
    pub fn from_breakdown(breakdown: CostBreakdown) -> Self {
        Self {
            total_cost: breakdown.total_cost,
            formatted_total: format_points(breakdown.total_cost),
            steps: breakdown.steps.into_iter().map(StepData::from).collect(),
            error: None,
            training: None,
            final_value: None,
        }
    }

    pub fn from_error(error: &CalculationError) -> Self {
        Self {
            total_cost: 0,
            formatted_total: format_points(0),
            steps: Vec::new(),
            error: Some(error.to_string()),
            training: None,
            final_value: None,
        }
    }

    pub fn with_training(mut self, training: TrainingData) -> Self {
        self.training = Some(training);
        self
    }

    pub fn with_final_value(mut self, value: impl Into<FinalValueData>) -> Self {
        self.final_value = Some(value.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Standalone training time conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDaysResponse {
    pub days: u64,
    pub formatted_days: String,
}

impl TrainingDaysResponse {
    pub fn new(days: u64) -> Self {
        Self {
            days,
            formatted_days: format_days(days),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimumTargetResponse {
    pub minimum_target_level: i32,
}

// =============================================================================
// Catalogs
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DieTierData {
    pub die: DieTier,
    pub face_value: u32,
}

impl From<DieTier> for DieTierData {
    fn from(die: DieTier) -> Self {
        Self {
            die,
            face_value: die.face_value(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillData {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
}

impl From<&SkillDescriptor> for SkillData {
    fn from(skill: &SkillDescriptor) -> Self {
        Self {
            id: skill.id.to_string(),
            name: skill.name.to_string(),
            category: skill.category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterData {
    pub id: String,
    pub name: String,
    pub multiplier: u32,
}

impl From<&ParameterDescriptor> for ParameterData {
    fn from(parameter: &ParameterDescriptor) -> Self {
        Self {
            id: parameter.id.to_string(),
            name: parameter.name.to_string(),
            multiplier: parameter.multiplier,
        }
    }
}
