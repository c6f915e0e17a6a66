//! StartAssessmentHandler - opens a session and serves the fixed first question.

use std::sync::Arc;

use tracing::info;

use crate::domain::assessment::{prompts, GeneratedQuestion};
use crate::domain::foundation::{SessionId, Timestamp};
use crate::ports::SessionStore;

/// Result of starting an assessment.
#[derive(Debug, Clone)]
pub struct AssessmentStarted {
    pub session_id: SessionId,
    pub question: GeneratedQuestion,
}

/// Handler for starting assessments.
pub struct StartAssessmentHandler {
    store: Arc<dyn SessionStore>,
}

impl StartAssessmentHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Creates a session and returns the opening business-classification
    /// question. Infallible: the store is in-memory and the first question
    /// is hardcoded, never generated.
    pub fn handle(&self) -> AssessmentStarted {
        let session_id = self.store.create(Timestamp::now());
        info!(%session_id, "assessment started");

        AssessmentStarted {
            session_id,
            question: prompts::first_question(),
        }
    }
}
