//! Completion Provider Port - interface for the chat-completion API.
//!
//! The campaign and value proposition workflows hand a fully rendered prompt
//! to this port and get back the model's reply text. Implementations own the
//! wire format, credentials, timeout, and retry policy.

use async_trait::async_trait;

/// Model identifier sent on every request.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-0125";

/// Port for chat-completion requests.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends one completion request and returns the extracted reply.
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError>;
}

/// A single completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// Fully rendered prompt text (preamble plus flattened content).
    pub prompt_text: String,
    /// Conversation session to attribute the request to. Omitted from the
    /// wire payload entirely when absent.
    pub session_id: Option<String>,
}

impl CompletionRequest {
    /// Creates a request with no session attribution.
    pub fn new(prompt_text: impl Into<String>) -> Self {
        Self {
            prompt_text: prompt_text.into(),
            session_id: None,
        }
    }

    /// Attributes the request to a session. Empty identifiers are treated
    /// as absent.
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        let session_id = session_id.into();
        self.session_id = if session_id.is_empty() {
            None
        } else {
            Some(session_id)
        };
        self
    }
}

/// The extracted reply from a completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResponse {
    /// First choice's message content.
    pub content: String,
    /// Model that produced the reply, as reported by the provider.
    pub model: String,
}

/// Completion provider errors.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// Provider answered 2xx but the body carried no choices. Reported
    /// distinctly so a provider problem is never masked as an empty reply.
    #[error("completion response contained no choices")]
    EmptyChoices,

    /// API key rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Rate limited by the provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    /// Provider is unavailable (5xx).
    #[error("provider unavailable: {message}")]
    Unavailable { message: String },

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },

    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(String),

    /// Response body could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Any other non-success status.
    #[error("request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },
}

impl CompletionError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Whether a retry with backoff may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CompletionError::RateLimited { .. }
                | CompletionError::Unavailable { .. }
                | CompletionError::Timeout { .. }
                | CompletionError::Network(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_drops_empty_session_id() {
        let request = CompletionRequest::new("prompt").with_session_id("");
        assert_eq!(request.session_id, None);

        let request = CompletionRequest::new("prompt").with_session_id("advisor-1");
        assert_eq!(request.session_id, Some("advisor-1".to_string()));
    }

    #[test]
    fn retryable_classification() {
        assert!(CompletionError::RateLimited { retry_after_secs: 30 }.is_retryable());
        assert!(CompletionError::unavailable("down").is_retryable());
        assert!(CompletionError::network("reset").is_retryable());
        assert!(CompletionError::Timeout { timeout_secs: 30 }.is_retryable());

        assert!(!CompletionError::EmptyChoices.is_retryable());
        assert!(!CompletionError::AuthenticationFailed.is_retryable());
        assert!(!CompletionError::parse("bad json").is_retryable());
        assert!(!CompletionError::RequestFailed {
            status: 400,
            body: String::new()
        }
        .is_retryable());
    }

    #[test]
    fn empty_choices_displays_distinctly() {
        assert_eq!(
            CompletionError::EmptyChoices.to_string(),
            "completion response contained no choices"
        );
    }
}
