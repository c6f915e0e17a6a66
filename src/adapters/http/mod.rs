//! HTTP adapters - the REST surface over the assessment handlers.

pub mod assessment;
pub mod health;

pub use assessment::{assessment_routes, AssessmentHandlers};
pub use health::health_routes;
