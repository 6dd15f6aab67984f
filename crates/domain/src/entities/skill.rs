//! Skill catalog - the fixed list of skills a character can level up
//!
//! Every skill belongs to one of two cost categories:
//! - Natural skills can be learned and improved without a master
//! - Specialized skills cost more and stop at level 0 unless a master trains the character

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Cost category of a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Natural,
    Specialized,
}

impl SkillCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Natural => "Natural",
            Self::Specialized => "Specialized",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A skill from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDescriptor {
    /// Stable ascii identifier used by clients
    pub id: &'static str,
    pub name: &'static str,
    pub category: SkillCategory,
}

impl SkillDescriptor {
    const fn natural(id: &'static str, name: &'static str) -> Self {
        Self {
            id,
            name,
            category: SkillCategory::Natural,
        }
    }

    const fn specialized(id: &'static str, name: &'static str) -> Self {
        Self {
            id,
            name,
            category: SkillCategory::Specialized,
        }
    }

    /// Get all skills in display order
    pub fn all() -> &'static [SkillDescriptor] {
        SKILLS
    }

    /// Look up a skill by id or display name (case-insensitive)
    pub fn find(key: &str) -> Result<&'static SkillDescriptor, DomainError> {
        let key = key.trim();
        SKILLS
            .iter()
            .find(|s| s.id.eq_ignore_ascii_case(key) || s.name.to_lowercase() == key.to_lowercase())
            .ok_or_else(|| DomainError::not_found("Skill", key))
    }

    pub fn is_specialized(&self) -> bool {
        self.category == SkillCategory::Specialized
    }
}

static SKILLS: &[SkillDescriptor] = &[
    SkillDescriptor::natural("conoscenza", "Conoscenza"),
    SkillDescriptor::specialized("magia_runica", "Magia Runica"),
    SkillDescriptor::specialized("elementalista", "Elementalista"),
    SkillDescriptor::specialized("preghiera", "Preghiera"),
    SkillDescriptor::specialized("bardica", "BARDICA"),
    SkillDescriptor::natural("guerriero", "Guerriero"),
    SkillDescriptor::natural("esploratore", "Esploratore"),
    SkillDescriptor::natural("sotterfugi", "Sotterfugi"),
    SkillDescriptor::natural("furtivita", "Furtività"),
    SkillDescriptor::natural("atletica", "Atletica"),
    SkillDescriptor::natural("oratore", "Oratore"),
    SkillDescriptor::specialized("alchimia", "Alchimia"),
    SkillDescriptor::specialized("geniere", "Geniere"),
    SkillDescriptor::specialized("costruire_oggetti", "Costruire oggetti"),
    SkillDescriptor::specialized("costruire_edifici", "Costruire edifici"),
    SkillDescriptor::specialized("forgiare", "Forgiare"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_sixteen_unique_skills() {
        let ids: HashSet<_> = SkillDescriptor::all().iter().map(|s| s.id).collect();
        assert_eq!(SkillDescriptor::all().len(), 16);
        assert_eq!(ids.len(), 16);
    }

    #[test]
    fn find_by_id_or_name() {
        let by_id = SkillDescriptor::find("guerriero").unwrap();
        assert_eq!(by_id.name, "Guerriero");
        assert_eq!(by_id.category, SkillCategory::Natural);

        let by_name = SkillDescriptor::find("Magia Runica").unwrap();
        assert_eq!(by_name.id, "magia_runica");
        assert!(by_name.is_specialized());

        let accented = SkillDescriptor::find("furtività").unwrap();
        assert_eq!(accented.id, "furtivita");
    }

    #[test]
    fn find_unknown_skill() {
        let err = SkillDescriptor::find("pittura").unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entry_type: "Skill", .. }));
    }

    #[test]
    fn category_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&SkillCategory::Specialized).unwrap(),
            "\"specialized\""
        );
    }
}
