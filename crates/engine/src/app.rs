//! Application state and composition.

use crate::config::AppConfig;
use crate::use_cases::{self, CalculationLimits};

/// Main application state.
///
/// Immutable after startup; passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub costs: use_cases::CostUseCases,
    pub catalog: use_cases::CatalogUseCases,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let limits = CalculationLimits {
            max_level_span: config.max_level_span,
            default_training_die: config.default_training_die,
        };

        let use_cases = UseCases {
            costs: use_cases::CostUseCases::new(limits),
            catalog: use_cases::CatalogUseCases::new(),
        };

        Self { use_cases }
    }
}
