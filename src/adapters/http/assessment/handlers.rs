//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::assessment::{
    GenerateReportCommand, GenerateReportHandler, NextQuestionCommand, NextQuestionHandler,
    StartAssessmentHandler,
};
use crate::domain::assessment::AssessmentError;

use super::dto::{
    ApiError, ApiResponse, GenerateReportRequest, NextQuestionRequest, QuestionData, ReportData,
    StartAssessmentData,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AssessmentHandlers {
    start_handler: Arc<StartAssessmentHandler>,
    next_handler: Arc<NextQuestionHandler>,
    report_handler: Arc<GenerateReportHandler>,
}

impl AssessmentHandlers {
    pub fn new(
        start_handler: Arc<StartAssessmentHandler>,
        next_handler: Arc<NextQuestionHandler>,
        report_handler: Arc<GenerateReportHandler>,
    ) -> Self {
        Self {
            start_handler,
            next_handler,
            report_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/assessment/start - Begin a new assessment
pub async fn start_assessment(State(handlers): State<AssessmentHandlers>) -> Response {
    let started = handlers.start_handler.handle();
    (
        StatusCode::OK,
        Json(ApiResponse::ok(StartAssessmentData::from(started))),
    )
        .into_response()
}

/// POST /api/assessment/next-question - Record an answer, get the next question
pub async fn next_question(
    State(handlers): State<AssessmentHandlers>,
    Json(req): Json<NextQuestionRequest>,
) -> Response {
    let cmd = NextQuestionCommand {
        session_id: req.session_id,
        selected_answer: req.selected_answer,
        question_number: req.question_number,
    };

    match handlers.next_handler.handle(cmd).await {
        Ok(question) => (
            StatusCode::OK,
            Json(ApiResponse::ok(QuestionData::from(question))),
        )
            .into_response(),
        Err(e) => handle_assessment_error(e, "Failed to generate next question"),
    }
}

/// POST /api/assessment/generate-report - Finish and fetch the chaos report
pub async fn generate_report(
    State(handlers): State<AssessmentHandlers>,
    Json(req): Json<GenerateReportRequest>,
) -> Response {
    let cmd = GenerateReportCommand {
        session_id: req.session_id,
    };

    match handlers.report_handler.handle(cmd).await {
        Ok(report) => (
            StatusCode::OK,
            Json(ApiResponse::ok(ReportData::from(report))),
        )
            .into_response(),
        Err(e) => handle_assessment_error(e, "Failed to generate report"),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_assessment_error(error: AssessmentError, generation_message: &str) -> Response {
    match error {
        AssessmentError::InvalidRequest => (
            StatusCode::BAD_REQUEST,
            Json(ApiError::new(
                "Missing sessionId, selectedAnswer, or questionNumber",
            )),
        )
            .into_response(),
        AssessmentError::SessionNotFound => (
            StatusCode::NOT_FOUND,
            Json(ApiError::new("Session not found or expired")),
        )
            .into_response(),
        AssessmentError::Generation(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::new(generation_message)),
        )
            .into_response(),
    }
}
