//! Development Points protocol - shared types between the calculator engine and its clients
//!
//! This crate contains:
//! - Request payloads for each calculator
//! - Response payloads (cost breakdowns, catalogs)
//! - Form field parsing and locale formatting used on both sides
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and the domain crate
//! 2. **No business logic** - Pricing lives in `devpoints-domain`
//! 3. **WASM compatible** - Must compile for both native and wasm32 targets

pub mod form;
pub mod format;
pub mod requests;
pub mod responses;

pub use form::{lenient_int, parse_form_int};
pub use format::{format_days, format_grouped, format_points, DAYS_UNIT, POINTS_UNIT};
pub use requests::{
    DiceCostRequest, MinimumTargetQuery, ParameterCostRequest, SkillCostRequest,
    SpecialCostRequest, TrainingDaysRequest,
};
pub use responses::{
    CalculationResponse, DieTierData, FinalValueData, MinimumTargetResponse, ParameterData,
    SkillData, StepData, TrainingData, TrainingDaysResponse,
};
