//! Mock text generator for testing.
//!
//! Queue-driven TextGenerator implementation so tests run without a real
//! model API: canned text, injected failures, optional latency, and call
//! capture for verification.
//!
//! # Example
//!
//! ```ignore
//! let generator = MockTextGenerator::new()
//!     .with_reply("Next question?\nA. Yes\nB. No")
//!     .with_failure(MockFailure::Timeout { timeout_secs: 60 });
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{GenerationError, TextGenerator};

/// Mock text generator.
///
/// Replies are consumed in queue order; an exhausted queue fails loudly so
/// under-provisioned tests are obvious.
#[derive(Debug, Clone, Default)]
pub struct MockTextGenerator {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

/// One captured generate() invocation.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: String,
    pub max_tokens: u32,
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Failure(MockFailure),
}

/// Failure modes the mock can inject.
#[derive(Debug, Clone)]
pub enum MockFailure {
    Timeout { timeout_secs: u32 },
    Network { message: String },
    Provider { status: u16, message: String },
    AuthenticationFailed,
    RateLimited { retry_after_secs: u32 },
}

impl From<MockFailure> for GenerationError {
    fn from(failure: MockFailure) -> Self {
        match failure {
            MockFailure::Timeout { timeout_secs } => GenerationError::Timeout { timeout_secs },
            MockFailure::Network { message } => GenerationError::Network(message),
            MockFailure::Provider { status, message } => {
                GenerationError::provider(status, message)
            }
            MockFailure::AuthenticationFailed => GenerationError::AuthenticationFailed,
            MockFailure::RateLimited { retry_after_secs } => {
                GenerationError::RateLimited { retry_after_secs }
            }
        }
    }
}

impl MockTextGenerator {
    /// Creates a mock with an empty reply queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful text reply.
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Text(text.into()));
        self
    }

    /// Queues `count` copies of the same text reply.
    pub fn with_repeated_reply(self, text: impl Into<String>, count: usize) -> Self {
        let text = text.into();
        {
            let mut replies = self.replies.lock().unwrap();
            for _ in 0..count {
                replies.push_back(MockReply::Text(text.clone()));
            }
        }
        self
    }

    /// Queues a failure.
    pub fn with_failure(self, failure: MockFailure) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Failure(failure));
        self
    }

    /// Adds simulated latency to every call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns all captured calls.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of generate() invocations so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, GenerationError> {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt: prompt.to_string(),
            max_tokens,
        });

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::Failure(failure)) => Err(failure.into()),
            None => Err(GenerationError::network("mock: no reply queued")),
        }
    }
}
