//! Parameter catalog - numeric resources that can be raised with bonus points
//!
//! Each bonus point bought for a parameter adds `multiplier` to its value.

use serde::Serialize;

use crate::error::DomainError;

/// A parameter from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    /// Value gained per bonus point
    pub multiplier: u32,
}

/// Id of the mana pool, whose step descriptions mention the mana gained
pub const MANA_POINTS_ID: &str = "mana_points";

impl ParameterDescriptor {
    /// Get all parameters in display order
    pub fn all() -> &'static [ParameterDescriptor] {
        PARAMETERS
    }

    /// Look up a parameter by id or display name (case-insensitive)
    pub fn find(key: &str) -> Result<&'static ParameterDescriptor, DomainError> {
        let key = key.trim();
        PARAMETERS
            .iter()
            .find(|p| p.id.eq_ignore_ascii_case(key) || p.name.eq_ignore_ascii_case(key))
            .ok_or_else(|| DomainError::not_found("Parameter", key))
    }

    pub fn is_mana(&self) -> bool {
        self.id == MANA_POINTS_ID
    }
}

static PARAMETERS: &[ParameterDescriptor] = &[
    ParameterDescriptor {
        id: "hit_points",
        name: "Hit Points",
        multiplier: 1,
    },
    ParameterDescriptor {
        id: MANA_POINTS_ID,
        name: "Mana Points",
        multiplier: 5,
    },
];
