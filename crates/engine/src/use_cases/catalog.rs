//! Catalog use cases - the fixed lists the calculator forms are built from.

use devpoints_domain::{DieTier, ParameterDescriptor, SkillDescriptor};
use devpoints_shared::{DieTierData, ParameterData, SkillData};

#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogUseCases;

impl CatalogUseCases {
    pub fn new() -> Self {
        Self
    }

    /// Die tiers in ascending order
    pub fn dice(&self) -> Vec<DieTierData> {
        DieTier::all().iter().copied().map(DieTierData::from).collect()
    }

    pub fn skills(&self) -> Vec<SkillData> {
        SkillDescriptor::all().iter().map(SkillData::from).collect()
    }

    pub fn parameters(&self) -> Vec<ParameterData> {
        ParameterDescriptor::all()
            .iter()
            .map(ParameterData::from)
            .collect()
    }
}
