//! Die tier value object
//!
//! Traits are rated on an ordered die scale (d2 up to d20). The face value of a
//! tier is both the price factor when upgrading into it and the number of
//! Development Points a character can spend per day when training with it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A tier on the die scale, ordered by face value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DieTier {
    #[serde(rename = "d2")]
    D2,
    #[serde(rename = "d4")]
    D4,
    #[serde(rename = "d6")]
    D6,
    #[serde(rename = "d8")]
    D8,
    #[serde(rename = "d10")]
    D10,
    #[serde(rename = "d12")]
    D12,
    #[serde(rename = "d20")]
    D20,
}

impl DieTier {
    /// Get all tiers in ascending order
    pub fn all() -> &'static [DieTier] {
        &[
            DieTier::D2,
            DieTier::D4,
            DieTier::D6,
            DieTier::D8,
            DieTier::D10,
            DieTier::D12,
            DieTier::D20,
        ]
    }

    /// Number of faces on the die
    pub fn face_value(&self) -> u32 {
        match self {
            DieTier::D2 => 2,
            DieTier::D4 => 4,
            DieTier::D6 => 6,
            DieTier::D8 => 8,
            DieTier::D10 => 10,
            DieTier::D12 => 12,
            DieTier::D20 => 20,
        }
    }

    /// Position on the scale, d2 = 0
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    pub fn from_face_value(face_value: u32) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|tier| tier.face_value() == face_value)
    }

    /// Short label (e.g., "d6")
    pub fn label(&self) -> &'static str {
        match self {
            DieTier::D2 => "d2",
            DieTier::D4 => "d4",
            DieTier::D6 => "d6",
            DieTier::D8 => "d8",
            DieTier::D10 => "d10",
            DieTier::D12 => "d12",
            DieTier::D20 => "d20",
        }
    }
}

impl fmt::Display for DieTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for DieTier {
    type Err = DomainError;

    /// Accepts "d6", "D6" or a bare face value "6"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let digits = normalized.strip_prefix('d').unwrap_or(&normalized);
        digits
            .parse::<u32>()
            .ok()
            .and_then(Self::from_face_value)
            .ok_or_else(|| DomainError::parse(format!("Unknown die tier: '{}'", s)))
    }
}
