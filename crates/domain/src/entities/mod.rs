//! Fixed catalogs of skills and parameters

mod parameter;
mod skill;

pub use parameter::{ParameterDescriptor, MANA_POINTS_ID};
pub use skill::{SkillCategory, SkillDescriptor};
