//! NextQuestionHandler - records one answer and generates the next question.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::assessment::{
    parser, prompts, AssessmentError, GeneratedQuestion, QUESTION_PHASE_LIMIT,
};
use crate::domain::foundation::{SessionId, Timestamp};
use crate::ports::{SessionStore, TextGenerator};

/// Command to record an answer and advance one turn.
#[derive(Debug, Clone)]
pub struct NextQuestionCommand {
    pub session_id: String,
    pub selected_answer: String,
    pub question_number: u32,
}

/// Handler for advancing the question phase.
pub struct NextQuestionHandler {
    store: Arc<dyn SessionStore>,
    generator: Arc<dyn TextGenerator>,
}

impl NextQuestionHandler {
    pub fn new(store: Arc<dyn SessionStore>, generator: Arc<dyn TextGenerator>) -> Self {
        Self { store, generator }
    }

    /// Accepts one answer and returns the next generated question.
    ///
    /// The question phase ends after [`QUESTION_PHASE_LIMIT`] accepted
    /// turns: the returned question carries `is_complete = true` and the
    /// client is expected to request the report next.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` if any field is empty or the turn number is zero;
    ///   nothing is mutated
    /// - `SessionNotFound` if the id is malformed, never issued, or expired
    /// - `Generation` if the provider call fails; the answer recorded this
    ///   turn is retained (no rollback) and no retry is attempted
    pub async fn handle(
        &self,
        cmd: NextQuestionCommand,
    ) -> Result<GeneratedQuestion, AssessmentError> {
        if cmd.session_id.trim().is_empty()
            || cmd.selected_answer.trim().is_empty()
            || cmd.question_number == 0
        {
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

        // Hold the session lock for the whole turn, generator call included,
        // so concurrent requests against the same id are strictly ordered.
        let mut session = handle.lock().await;
        session.touch(Timestamp::now());
        session.record_answer(cmd.question_number, &cmd.selected_answer);

        let prompt = prompts::question_prompt(session.business_type(), session.answers());
        let raw = self
            .generator
            .generate(&prompt, prompts::QUESTION_MAX_TOKENS)
            .await
            .map_err(|e| {
                warn!(%session_id, error = %e, "question generation failed");
                AssessmentError::generation(e)
            })?;

        let (question, options) = parser::parse_question(&raw);
        debug!(
            %session_id,
            question_number = cmd.question_number,
            options = options.len(),
            "next question generated"
        );

        Ok(GeneratedQuestion {
            question,
            options,
            question_number: cmd.question_number + 1,
            is_complete: cmd.question_number >= QUESTION_PHASE_LIMIT,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockFailure, MockTextGenerator};
    use crate::adapters::storage::InMemorySessionStore;

    const CANNED_QUESTION: &str = "How do you schedule work?\n\
                                   A. Shared calendar everyone follows\n\
                                   B. A weekly planning meeting\n\
                                   C. Group chat, day by day\n\
                                   D. Whoever shouts loudest";

    fn handler_with(
        generator: MockTextGenerator,
    ) -> (Arc<InMemorySessionStore>, NextQuestionHandler, MockTextGenerator) {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = NextQuestionHandler::new(store.clone(), Arc::new(generator.clone()));
        (store, handler, generator)
    }

    fn cmd(session_id: &str, answer: &str, number: u32) -> NextQuestionCommand {
        NextQuestionCommand {
            session_id: session_id.to_string(),
            selected_answer: answer.to_string(),
            question_number: number,
        }
    }

    #[tokio::test]
    async fn rejects_missing_fields_before_any_lookup() {
        let (_, handler, generator) = handler_with(MockTextGenerator::new());

        for bad in [
            cmd("", "A. Retail", 1),
            cmd("c4b9e1f0-0000-0000-0000-000000000000", "   ", 1),
            cmd("c4b9e1f0-0000-0000-0000-000000000000", "A. Retail", 0),
        ] {
            let result = handler.handle(bad).await;
            assert!(matches!(result, Err(AssessmentError::InvalidRequest)));
        }
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn unknown_and_malformed_ids_both_read_as_not_found() {
        let (_, handler, _) = handler_with(MockTextGenerator::new());

        let unknown = cmd(&SessionId::new().to_string(), "A. Retail", 1);
        assert!(matches!(
            handler.handle(unknown).await,
            Err(AssessmentError::SessionNotFound)
        ));

        let malformed = cmd("not-a-session-id", "A. Retail", 1);
        assert!(matches!(
            handler.handle(malformed).await,
            Err(AssessmentError::SessionNotFound)
        ));
    }

    #[tokio::test]
    async fn first_turn_sets_business_type_and_appends_one_answer() {
        let (store, handler, _) = handler_with(MockTextGenerator::new().with_reply(CANNED_QUESTION));
        let id = store.create(Timestamp::now());

        handler
            .handle(cmd(&id.to_string(), "A. Retail or e-commerce", 1))
            .await
            .unwrap();

        let handle = store.get(&id).unwrap();
        let session = handle.try_lock().unwrap();
        assert_eq!(session.business_type(), Some("A. Retail or e-commerce"));
        assert_eq!(session.answers().len(), 1);
        assert_eq!(
            session.answers()[0],
            "Question 1: A. Retail or e-commerce"
        );
    }

    #[tokio::test]
    async fn returns_the_parsed_question_with_the_next_number() {
        let (store, handler, _) = handler_with(MockTextGenerator::new().with_reply(CANNED_QUESTION));
        let id = store.create(Timestamp::now());

        let question = handler
            .handle(cmd(&id.to_string(), "A. Retail", 1))
            .await
            .unwrap();

        assert_eq!(question.question, "How do you schedule work?");
        assert_eq!(question.options.len(), 4);
        assert_eq!(question.question_number, 2);
        assert!(!question.is_complete);
    }

    #[tokio::test]
    async fn fifth_turn_completes_the_question_phase() {
        let (store, handler, _) = handler_with(
            MockTextGenerator::new().with_repeated_reply(CANNED_QUESTION, 2),
        );
        let id = store.create(Timestamp::now());

        let fourth = handler
            .handle(cmd(&id.to_string(), "B. Weekly plan", 4))
            .await
            .unwrap();
        assert!(!fourth.is_complete);

        let fifth = handler
            .handle(cmd(&id.to_string(), "C. Group chat", 5))
            .await
            .unwrap();
        assert!(fifth.is_complete);
        assert_eq!(fifth.question_number, 6);
    }

    #[tokio::test]
    async fn prompt_embeds_business_type_and_history_under_budget() {
        let (store, handler, generator) =
            handler_with(MockTextGenerator::new().with_repeated_reply(CANNED_QUESTION, 2));
        let id = store.create(Timestamp::now());

        handler
            .handle(cmd(&id.to_string(), "A. Retail or e-commerce", 1))
            .await
            .unwrap();
        handler
            .handle(cmd(&id.to_string(), "D. Whoever shouts loudest", 2))
            .await
            .unwrap();

        let calls = generator.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].max_tokens, prompts::QUESTION_MAX_TOKENS);
        assert!(calls[1].prompt.contains("A. Retail or e-commerce"));
        assert!(calls[1]
            .prompt
            .contains("Question 2: D. Whoever shouts loudest"));
    }

    #[tokio::test]
    async fn generation_failure_keeps_the_recorded_answer() {
        let (store, handler, _) = handler_with(MockTextGenerator::new().with_failure(
            MockFailure::Provider {
                status: 529,
                message: "overloaded".to_string(),
            },
        ));
        let id = store.create(Timestamp::now());

        let result = handler.handle(cmd(&id.to_string(), "A. Retail", 1)).await;
        assert!(matches!(result, Err(AssessmentError::Generation(_))));

        // No rollback: the answer stays and the session survives.
        let handle = store.get(&id).unwrap();
        let session = handle.try_lock().unwrap();
        assert_eq!(session.answers().len(), 1);
        assert_eq!(session.business_type(), Some("A. Retail"));
    }

    #[tokio::test]
    async fn malformed_generation_still_returns_a_question_shell() {
        let (store, handler, _) =
            handler_with(MockTextGenerator::new().with_reply("no options in here at all"));
        let id = store.create(Timestamp::now());

        let question = handler
            .handle(cmd(&id.to_string(), "A. Retail", 1))
            .await
            .unwrap();

        assert_eq!(question.question, "no options in here at all");
        assert!(question.options.is_empty());
    }
}
