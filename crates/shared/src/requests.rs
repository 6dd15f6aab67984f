//! Calculator request payloads
//!
//! Field names are camelCase on the wire. Numeric fields go through
//! [`lenient_int`] so raw form values can be posted as-is; missing fields take
//! the same defaults the calculator forms start with.

use serde::{Deserialize, Serialize};

use devpoints_domain::DieTier;

use crate::form::lenient_int;

fn default_start_die() -> DieTier {
    DieTier::D6
}

fn default_end_die() -> DieTier {
    DieTier::D10
}

fn default_skill() -> String {
    "guerriero".to_string()
}

fn default_parameter() -> String {
    "hit_points".to_string()
}

fn default_true() -> bool {
    true
}

fn default_one() -> i32 {
    1
}

fn default_base_value() -> i32 {
    20
}

/// Raise a trait from one die tier to another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceCostRequest {
    #[serde(default = "default_start_die")]
    pub start_die: DieTier,
    #[serde(default = "default_end_die")]
    pub end_die: DieTier,
}

impl Default for DiceCostRequest {
    fn default() -> Self {
        Self {
            start_die: default_start_die(),
            end_die: default_end_die(),
        }
    }
}

/// Raise a skill's level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCostRequest {
    /// Skill id or display name from the catalog
    #[serde(default = "default_skill")]
    pub skill: String,
    #[serde(default)]
    pub untrained: bool,
    #[serde(default, deserialize_with = "lenient_int")]
    pub current_level: i32,
    #[serde(default = "default_one", deserialize_with = "lenient_int")]
    pub target_level: i32,
    #[serde(default)]
    pub has_master: bool,
    /// Reference die for training time; the server default applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_die: Option<DieTier>,
}

impl Default for SkillCostRequest {
    fn default() -> Self {
        Self {
            skill: default_skill(),
            untrained: false,
            current_level: 0,
            target_level: default_one(),
            has_master: false,
            training_die: None,
        }
    }
}

/// Acquire and/or level a special ability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialCostRequest {
    #[serde(default, deserialize_with = "lenient_int")]
    pub owned_count: i32,
    #[serde(default = "default_true")]
    pub untrained: bool,
    #[serde(default = "default_one", deserialize_with = "lenient_int")]
    pub current_level: i32,
    #[serde(default = "default_one", deserialize_with = "lenient_int")]
    pub target_level: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_die: Option<DieTier>,
}

impl Default for SpecialCostRequest {
    fn default() -> Self {
        Self {
            owned_count: 0,
            untrained: default_true(),
            current_level: default_one(),
            target_level: default_one(),
            training_die: None,
        }
    }
}

/// Raise a parameter's bonus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterCostRequest {
    /// Parameter id or display name from the catalog
    #[serde(default = "default_parameter")]
    pub parameter: String,
    #[serde(default = "default_base_value", deserialize_with = "lenient_int")]
    pub base_value: i32,
    #[serde(default, deserialize_with = "lenient_int")]
    pub current_bonus: i32,
    #[serde(default = "default_one", deserialize_with = "lenient_int")]
    pub target_bonus: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_die: Option<DieTier>,
}

impl Default for ParameterCostRequest {
    fn default() -> Self {
        Self {
            parameter: default_parameter(),
            base_value: default_base_value(),
            current_bonus: 0,
            target_bonus: default_one(),
            training_die: None,
        }
    }
}

/// Convert an already computed cost into days of training
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDaysRequest {
    #[serde(default, deserialize_with = "lenient_int")]
    pub cost: i32,
    pub reference_die: DieTier,
}

/// Query for the lowest sensible target level of a special ability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimumTargetQuery {
    #[serde(default = "default_true")]
    pub untrained: bool,
    #[serde(default = "default_one", deserialize_with = "lenient_int")]
    pub current_level: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bodies_take_form_defaults() {
        let dice: DiceCostRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(dice, DiceCostRequest::default());
        assert_eq!(dice.start_die, DieTier::D6);
        assert_eq!(dice.end_die, DieTier::D10);

        let skill: SkillCostRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(skill, SkillCostRequest::default());

        let special: SpecialCostRequest = serde_json::from_str("{}").unwrap();
        assert!(special.untrained);
        assert_eq!(special.target_level, 1);

        let parameter: ParameterCostRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(parameter.base_value, 20);
        assert_eq!(parameter.target_bonus, 1);
    }

    #[test]
    fn form_strings_are_accepted() {
        let request: ParameterCostRequest = serde_json::from_str(
            r#"{"parameter": "mana_points", "baseValue": "20", "currentBonus": "", "targetBonus": "3x"}"#,
        )
        .unwrap();
        assert_eq!(request.base_value, 20);
        assert_eq!(request.current_bonus, 0);
        assert_eq!(request.target_bonus, 3);
    }

    #[test]
    fn camel_case_field_names() {
        let request: SkillCostRequest = serde_json::from_str(
            r#"{"skill": "alchimia", "untrained": true, "currentLevel": 2, "targetLevel": 4, "hasMaster": true, "trainingDie": "d8"}"#,
        )
        .unwrap();
        assert!(request.untrained);
        assert!(request.has_master);
        assert_eq!(request.current_level, 2);
        assert_eq!(request.training_die, Some(DieTier::D8));
    }

    #[test]
    fn unknown_die_is_rejected() {
        let result: Result<DiceCostRequest, _> =
            serde_json::from_str(r#"{"startDie": "d7", "endDie": "d8"}"#);
        assert!(result.is_err());
    }
}
