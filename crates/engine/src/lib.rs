//! Development Points Engine library.
//!
//! Serves the Development Points calculators over HTTP.
//!
//! ## Structure
//!
//! - `use_cases/` - Request orchestration around the domain calculators
//! - `api/` - HTTP entry points
//! - `config` - Environment configuration
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod config;
pub mod use_cases;

pub use app::App;
pub use config::AppConfig;
