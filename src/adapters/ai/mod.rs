//! AI adapters - completion provider implementations.

mod mock;
mod openai;

pub use mock::MockCompletionProvider;
pub use openai::{OpenAiConfig, OpenAiDispatcher};
