//! Mock Completion Provider - scripted replies for tests and offline demos.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::ports::{
    CompletionError, CompletionProvider, CompletionRequest, CompletionResponse, DEFAULT_MODEL,
};

/// Completion provider returning scripted replies and recording every call.
///
/// With no scripted replies it answers a fixed placeholder message, so demo
/// runs work without an API key.
pub struct MockCompletionProvider {
    replies: Mutex<VecDeque<Result<String, CompletionError>>>,
    calls: Mutex<Vec<CompletionRequest>>,
}

impl MockCompletionProvider {
    /// Creates a provider that always answers the placeholder reply.
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Creates a provider answering `reply` first, placeholder afterwards.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        let provider = Self::new();
        provider.push_reply(reply);
        provider
    }

    /// Creates a provider that fails the next request with `error`.
    pub fn failing(error: CompletionError) -> Self {
        let provider = Self::new();
        provider
            .replies
            .lock()
            .unwrap()
            .push_back(Err(error));
        provider
    }

    /// Queues a scripted reply.
    pub fn push_reply(&self, reply: impl Into<String>) {
        self.replies.lock().unwrap().push_back(Ok(reply.into()));
    }

    /// Requests received so far, in order.
    pub fn recorded_calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of requests received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockCompletionProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        self.calls.lock().unwrap().push(request);

        let scripted = self.replies.lock().unwrap().pop_front();
        match scripted {
            Some(Ok(content)) => Ok(CompletionResponse {
                content,
                model: DEFAULT_MODEL.to_string(),
            }),
            Some(Err(error)) => Err(error),
            None => Ok(CompletionResponse {
                content: "Generated campaign message placeholder.".to_string(),
                model: DEFAULT_MODEL.to_string(),
            }),
        }
    }
}
