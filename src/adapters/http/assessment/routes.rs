//! HTTP routes for assessment endpoints.

use axum::{routing::post, Router};

use super::handlers::{generate_report, next_question, start_assessment, AssessmentHandlers};

/// Creates the assessment router with all endpoints.
pub fn assessment_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/start", post(start_assessment))
        .route("/next-question", post(next_question))
        .route("/generate-report", post(generate_report))
        .with_state(handlers)
}
