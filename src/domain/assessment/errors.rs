//! Assessment error taxonomy.
//!
//! Three terminal outcomes per request; none is retried server-side and none
//! is fatal to the process.

use thiserror::Error;

/// Errors surfaced by assessment operations.
#[derive(Debug, Error)]
pub enum AssessmentError {
    /// A required request field is missing or empty. No session mutation
    /// has occurred.
    #[error("missing sessionId, selectedAnswer, or questionNumber")]
    InvalidRequest,

    /// The session id is unknown: never issued, already closed, or evicted
    /// by the idle sweep. The three cases are indistinguishable on purpose.
    #[error("session not found or expired")]
    SessionNotFound,

    /// The text generator call failed or timed out. Local mutation committed
    /// before the call (the appended answer) is retained.
    #[error("generation failed: {0}")]
    Generation(String),
}

impl AssessmentError {
    /// Creates a generation error from any displayable cause.
    pub fn generation(cause: impl ToString) -> Self {
        Self::Generation(cause.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_names_the_missing_fields() {
        let message = AssessmentError::InvalidRequest.to_string();
        assert!(message.contains("sessionId"));
        assert!(message.contains("selectedAnswer"));
        assert!(message.contains("questionNumber"));
    }

    #[test]
    fn generation_error_carries_the_cause() {
        let err = AssessmentError::generation("provider unavailable");
        assert_eq!(err.to_string(), "generation failed: provider unavailable");
    }
}
