//! HTTP adapter for assessment endpoints.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::AssessmentHandlers;
pub use routes::assessment_routes;
