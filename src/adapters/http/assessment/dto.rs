//! HTTP DTOs for assessment endpoints.
//!
//! These types pin the wire contract (camelCase fields, success envelope)
//! independently of the domain types.

use serde::{Deserialize, Serialize};

use crate::application::handlers::assessment::AssessmentStarted;
use crate::domain::assessment::{GeneratedQuestion, Report};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

// Request fields all default: a missing field arrives as empty/zero and is
// rejected by the handler with the contract's 400 message instead of being
// bounced by the deserializer.

/// Request to record an answer and fetch the next question.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextQuestionRequest {
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub selected_answer: String,
    #[serde(default)]
    pub question_number: u32,
}

/// Request to finish an assessment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportRequest {
    #[serde(default)]
    pub session_id: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Success envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Failure envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub success: bool,
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }
}

/// Payload for a freshly started assessment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartAssessmentData {
    pub session_id: String,
    pub question: String,
    pub options: Vec<String>,
    pub question_number: u32,
    pub is_complete: bool,
}

impl From<AssessmentStarted> for StartAssessmentData {
    fn from(started: AssessmentStarted) -> Self {
        Self {
            session_id: started.session_id.to_string(),
            question: started.question.question,
            options: started.question.options,
            question_number: started.question.question_number,
            is_complete: started.question.is_complete,
        }
    }
}

/// Payload for one generated question.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionData {
    pub question: String,
    pub options: Vec<String>,
    pub question_number: u32,
    pub is_complete: bool,
}

impl From<GeneratedQuestion> for QuestionData {
    fn from(question: GeneratedQuestion) -> Self {
        Self {
            question: question.question,
            options: question.options,
            question_number: question.question_number,
            is_complete: question.is_complete,
        }
    }
}

/// Payload for the final report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub score: u32,
    pub top_issues: Vec<String>,
    pub recommendations: Vec<String>,
}

impl From<Report> for ReportData {
    fn from(report: Report) -> Self {
        Self {
            score: report.score,
            top_issues: report.top_issues,
            recommendations: report.recommendations,
        }
    }
}
