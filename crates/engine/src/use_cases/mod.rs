//! Use cases - request orchestration.
//!
//! Each module wraps the pure domain calculators for one area of the API.

pub mod catalog;
pub mod costs;

pub use catalog::CatalogUseCases;
pub use costs::{CalculationLimits, CostError, CostUseCases};
