//! AI adapters - implementations of the TextGenerator port.

mod anthropic_generator;
mod mock_generator;

pub use anthropic_generator::{AnthropicConfig, AnthropicGenerator};
pub use mock_generator::{MockFailure, MockTextGenerator, RecordedCall};
