//! Session record for one assessment run.
//!
//! A session ties stateless HTTP turns into one conversation: the answer to
//! each accepted turn is appended here, and the accumulated history drives
//! the next generated question and the final report.

use crate::domain::foundation::{SessionId, Timestamp};

/// Seconds of inactivity after which a session is eligible for eviction.
pub const IDLE_TIMEOUT_SECS: u64 = 1800;

/// Number of accepted turns that ends the question phase.
pub const QUESTION_PHASE_LIMIT: u32 = 5;

/// Server-side record of one assessment run.
///
/// # Invariants
///
/// - `answers` grows by exactly one entry per accepted turn, in turn order;
///   entries are never reordered or removed
/// - `business_type` is populated by the answer to question 1
/// - `last_activity` moves forward on every successful access
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Unique identifier for this session.
    id: SessionId,

    /// Classification from the first answer; drives later prompts.
    business_type: Option<String>,

    /// Accumulated answers, one `"Question {n}: {answer}"` entry per turn.
    answers: Vec<String>,

    /// When the session was last read or written.
    last_activity: Timestamp,
}

impl Session {
    /// Creates a fresh session with no answers recorded.
    pub fn new(id: SessionId, now: Timestamp) -> Self {
        Self {
            id,
            business_type: None,
            answers: Vec::new(),
            last_activity: now,
        }
    }

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the business type, if the first question has been answered.
    pub fn business_type(&self) -> Option<&str> {
        self.business_type.as_deref()
    }

    /// Returns the recorded answers in turn order.
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Returns when the session was last touched.
    pub fn last_activity(&self) -> &Timestamp {
        &self.last_activity
    }

    /// Marks the session as active at `now`.
    pub fn touch(&mut self, now: Timestamp) {
        self.last_activity = now;
    }

    /// Records the answer for one turn.
    ///
    /// The turn number is client-supplied and trusted: a skipped or repeated
    /// number is accepted as-is. Question 1 additionally sets the business
    /// type.
    pub fn record_answer(&mut self, question_number: u32, answer: &str) {
        if question_number == 1 {
            self.business_type = Some(answer.to_string());
        }
        self.answers
            .push(format!("Question {}: {}", question_number, answer));
    }

    /// Whether the session has been idle strictly longer than `idle_secs`
    /// as of `now`.
    pub fn is_idle(&self, now: Timestamp, idle_secs: u64) -> bool {
        now.secs_since(&self.last_activity) > idle_secs as i64
    }
}
