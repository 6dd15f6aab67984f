//! Cost calculation use cases.
//!
//! Resolve catalog entries named in a request, bound the size of the
//! requested range, run the domain calculator and shape the response.

use devpoints_domain::{
    dice_cost, minimum_target_level, parameter_cost, skill_cost, special_cost, training_days,
    training_days_by_face, CalculationError, CostBreakdown, DieTier, DomainError,
    ParameterDescriptor, ParameterUpgrade, SkillDescriptor, SkillUpgrade, SpecialUpgrade,
};
use devpoints_shared::{
    CalculationResponse, DiceCostRequest, MinimumTargetQuery, MinimumTargetResponse,
    ParameterCostRequest, SkillCostRequest, SpecialCostRequest, TrainingData,
    TrainingDaysRequest, TrainingDaysResponse,
};

/// Request-level failures. Rule violations are not errors here: they are
/// reported inside the [`CalculationResponse`].
#[derive(Debug, thiserror::Error)]
pub enum CostError {
    #[error(transparent)]
    Lookup(#[from] DomainError),
    #[error("Requested span of {span} levels exceeds the limit of {limit}")]
    SpanTooLarge { span: i64, limit: u32 },
}

/// Limits and defaults applied to every calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculationLimits {
    pub max_level_span: u32,
    pub default_training_die: DieTier,
}

pub struct CostUseCases {
    limits: CalculationLimits,
}

impl CostUseCases {
    pub fn new(limits: CalculationLimits) -> Self {
        Self { limits }
    }

    pub fn dice(&self, request: DiceCostRequest) -> CalculationResponse {
        let breakdown = dice_cost(request.start_die, request.end_die);
        tracing::debug!(
            start = %request.start_die,
            end = %request.end_die,
            total = breakdown.total_cost,
            "Priced die upgrade"
        );
        self.respond(Ok(breakdown), request.start_die)
    }

    pub fn skill(&self, request: SkillCostRequest) -> Result<CalculationResponse, CostError> {
        let skill = SkillDescriptor::find(&request.skill).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected skill cost request");
        })?;

        let mut upgrade = SkillUpgrade::new(skill, request.current_level, request.target_level)
            .with_master(request.has_master);
        if request.untrained {
            upgrade = upgrade.untrained();
        }
        let die = self.training_die(request.training_die);

        // A forbidden upgrade builds no steps, so its span is irrelevant
        if let Err(e) = upgrade.validate() {
            tracing::debug!(skill = skill.id, error = %e, "Skill upgrade not allowed");
            return Ok(self.respond(Err(e), die));
        }
        self.check_span(upgrade.effective_start(), upgrade.effective_end())?;

        let result = skill_cost(&upgrade);
        tracing::debug!(
            skill = skill.id,
            category = %skill.category,
            from = upgrade.effective_start(),
            to = upgrade.effective_end(),
            has_master = upgrade.has_master,
            total = result.as_ref().map(|b| b.total_cost).ok(),
            "Priced skill upgrade"
        );
        Ok(self.respond(result, die))
    }

    pub fn special(&self, request: SpecialCostRequest) -> Result<CalculationResponse, CostError> {
        let upgrade = SpecialUpgrade {
            owned_count: request.owned_count,
            untrained: request.untrained,
            current_level: request.current_level,
            target_level: request.target_level,
        };
        self.check_span(upgrade.effective_start(), upgrade.effective_end())?;

        let result = special_cost(&upgrade);
        tracing::debug!(
            untrained = upgrade.untrained,
            owned = upgrade.owned_count,
            from = upgrade.effective_start(),
            to = upgrade.effective_end(),
            total = result.as_ref().map(|b| b.total_cost).ok(),
            "Priced special upgrade"
        );
        Ok(self.respond(result, self.training_die(request.training_die)))
    }

    pub fn parameter(
        &self,
        request: ParameterCostRequest,
    ) -> Result<CalculationResponse, CostError> {
        let parameter = ParameterDescriptor::find(&request.parameter).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected parameter cost request");
        })?;

        let upgrade = ParameterUpgrade::new(
            parameter,
            request.base_value,
            request.current_bonus,
            request.target_bonus,
        );
        let die = self.training_die(request.training_die);

        if let Err(e) = upgrade.validate() {
            tracing::debug!(parameter = parameter.id, error = %e, "Parameter upgrade not allowed");
            return Ok(self.respond(Err(e), die));
        }
        self.check_span(
            i64::from(upgrade.current_bonus.max(0)),
            i64::from(upgrade.target_bonus),
        )?;

        let response = match parameter_cost(&upgrade) {
            Ok(priced) => {
                tracing::debug!(
                    parameter = parameter.id,
                    base = upgrade.base_value,
                    to = upgrade.target_bonus,
                    total = priced.cost.total_cost,
                    "Priced parameter upgrade"
                );
                self.respond(Ok(priced.cost), die)
                    .with_final_value(priced.final_value)
            }
            Err(e) => {
                tracing::debug!(parameter = parameter.id, error = %e, "Parameter upgrade not allowed");
                self.respond(Err(e), die)
            }
        };
        Ok(response)
    }

    pub fn training_days(&self, request: TrainingDaysRequest) -> TrainingDaysResponse {
        let days = training_days_by_face(
            i128::from(request.cost),
            request.reference_die.face_value(),
        );
        TrainingDaysResponse::new(days)
    }

    pub fn minimum_target(&self, query: MinimumTargetQuery) -> MinimumTargetResponse {
        MinimumTargetResponse {
            minimum_target_level: minimum_target_level(query.untrained, query.current_level),
        }
    }

    fn training_die(&self, requested: Option<DieTier>) -> DieTier {
        requested.unwrap_or(self.limits.default_training_die)
    }

    fn check_span(&self, start: i64, end: i64) -> Result<(), CostError> {
        let span = end - start;
        if span > i64::from(self.limits.max_level_span) {
            tracing::warn!(
                span,
                limit = self.limits.max_level_span,
                "Rejected calculation with oversized span"
            );
            return Err(CostError::SpanTooLarge {
                span,
                limit: self.limits.max_level_span,
            });
        }
        Ok(())
    }

    fn respond(
        &self,
        result: Result<CostBreakdown, CalculationError>,
        training_die: DieTier,
    ) -> CalculationResponse {
        match result {
            Ok(breakdown) if breakdown.total_cost > 0 => {
                let days = training_days(breakdown.total_cost, training_die);
                CalculationResponse::from_breakdown(breakdown)
                    .with_training(TrainingData::new(training_die, days))
            }
            Ok(breakdown) => CalculationResponse::from_breakdown(breakdown),
            Err(e) => CalculationResponse::from_error(&e),
        }
    }
}
