//! API layer - HTTP entry points.

pub mod http;

pub use http::{routes, ApiError};
