//! GenerateReportHandler - produces the chaos report and closes the session.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::assessment::{parser, prompts, AssessmentError, Report};
use crate::domain::foundation::{SessionId, Timestamp};
use crate::ports::{SessionStore, TextGenerator};

/// Command to finish an assessment.
#[derive(Debug, Clone)]
pub struct GenerateReportCommand {
    pub session_id: String,
}

/// Handler for report generation.
pub struct GenerateReportHandler {
    store: Arc<dyn SessionStore>,
    generator: Arc<dyn TextGenerator>,
}

impl GenerateReportHandler {
    pub fn new(store: Arc<dyn SessionStore>, generator: Arc<dyn TextGenerator>) -> Self {
        Self { store, generator }
    }

    /// Generates the final report, then closes the session.
    ///
    /// Report delivery is a one-shot terminal transition: on success the
    /// session is removed unconditionally and a repeat call reads as
    /// `SessionNotFound`. On a generation failure the session survives so
    /// the client may retry.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` if the session id is empty
    /// - `SessionNotFound` if the id is malformed, never issued, or expired
    /// - `Generation` if the provider call fails; the session is kept
    pub async fn handle(&self, cmd: GenerateReportCommand) -> Result<Report, AssessmentError> {
        if cmd.session_id.trim().is_empty() {
            return Err(AssessmentError::InvalidRequest);
        }

        let session_id: SessionId = cmd
            .session_id
            .parse()
            .map_err(|_| AssessmentError::SessionNotFound)?;
        let handle = self
            .store
            .get(&session_id)
            .ok_or(AssessmentError::SessionNotFound)?;

        let mut session = handle.lock().await;
        session.touch(Timestamp::now());

        let prompt = prompts::report_prompt(session.answers());
        let raw = self
            .generator
            .generate(&prompt, prompts::REPORT_MAX_TOKENS)
            .await
            .map_err(|e| {
                warn!(%session_id, error = %e, "report generation failed");
                AssessmentError::generation(e)
            })?;

        // Whatever the parse extracts, the session is spent once the
        // provider answered.
        let report = parser::parse_report(&raw);
        self.store.remove(&session_id);
        info!(%session_id, score = report.score, "assessment report delivered");

        Ok(report)
    }
}
