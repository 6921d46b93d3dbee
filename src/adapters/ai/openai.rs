//! OpenAI Dispatcher - CompletionProvider against the chat completions API.
//!
//! Sends the rendered prompt as a single assistant-role message with a fixed
//! model id, attributing the request to a session when one is given. The
//! request carries an explicit timeout and retryable failures get a bounded
//! retry with exponential backoff plus jitter.

use async_trait::async_trait;
use rand::Rng;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    CompletionError, CompletionProvider, CompletionRequest, CompletionResponse, DEFAULT_MODEL,
};

/// Configuration for the OpenAI dispatcher.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use on every request.
    pub model: String,
    /// Base URL for the API (default: https://api.openai.com/v1).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries on retryable failures.
    pub max_retries: u32,
}

impl OpenAiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: DEFAULT_MODEL.to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 2,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum retry count.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Chat completions dispatcher.
pub struct OpenAiDispatcher {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiDispatcher {
    /// Creates a dispatcher with the given configuration.
    pub fn new(config: OpenAiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    fn to_wire_request(&self, request: &CompletionRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "assistant".to_string(),
                content: request.prompt_text.clone(),
            }],
            session_id: request.session_id.clone(),
        }
    }

    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, CompletionError> {
        let wire_request = self.to_wire_request(request);

        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    CompletionError::network(format!("Connection failed: {}", e))
                } else {
                    CompletionError::network(e.to_string())
                }
            })
    }

    async fn handle_response_status(
        &self,
        response: Response,
    ) -> Result<Response, CompletionError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 => Err(CompletionError::AuthenticationFailed),
            429 => Err(CompletionError::RateLimited {
                retry_after_secs: Self::parse_retry_after(&error_body),
            }),
            500..=599 => Err(CompletionError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(CompletionError::RequestFailed {
                status: status.as_u16(),
                body: error_body,
            }),
        }
    }

    /// Parses retry-after seconds from an error body, defaulting to 30.
    fn parse_retry_after(error_body: &str) -> u32 {
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(error_body) {
            if let Some(s) = parsed
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
            {
                if let Some(idx) = s.find("try again in ") {
                    let rest = &s[idx + 13..];
                    if let Some(num_end) = rest.find(|c: char| !c.is_ascii_digit()) {
                        if let Ok(secs) = rest[..num_end].parse::<u32>() {
                            return secs;
                        }
                    }
                }
            }
        }
        30
    }

    async fn parse_response(
        &self,
        response: Response,
    ) -> Result<CompletionResponse, CompletionError> {
        let response = self.handle_response_status(response).await?;

        let wire_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::parse(format!("Failed to parse response: {}", e)))?;

        // A 2xx body without choices is a provider problem, reported as
        // such rather than coerced to an empty reply.
        let choice = wire_response
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::EmptyChoices)?;

        Ok(CompletionResponse {
            content: choice.message.content,
            model: wire_response.model.unwrap_or_else(|| self.config.model.clone()),
        })
    }

    /// Exponential backoff with jitter: 1s, 2s, 4s... plus up to 250ms.
    fn backoff_delay(retry_count: u32) -> Duration {
        let base = Duration::from_secs(1 << retry_count);
        let jitter = Duration::from_millis(rand::thread_rng().gen_range(0..250));
        base + jitter
    }
}

#[async_trait]
impl CompletionProvider for OpenAiDispatcher {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        let mut retry_count = 0;

        loop {
            let result = match self.send_request(&request).await {
                Ok(response) => self.parse_response(response).await,
                Err(err) => Err(err),
            };

            match result {
                Ok(completion) => return Ok(completion),
                Err(err) => {
                    if !err.is_retryable() || retry_count >= self.config.max_retries {
                        tracing::error!(error = %err, retries = retry_count, "completion request failed");
                        return Err(err);
                    }
                    tracing::warn!(error = %err, retry = retry_count + 1, "retrying completion request");
                }
            }

            sleep(Self::backoff_delay(retry_count)).await;
            retry_count += 1;
        }
    }
}

// ----- Wire types -----

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    session_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatcher_for(server: &mockito::Server, max_retries: u32) -> OpenAiDispatcher {
        OpenAiDispatcher::new(
            OpenAiConfig::new("test-key")
                .with_base_url(server.url())
                .with_timeout(Duration::from_secs(5))
                .with_max_retries(max_retries),
        )
    }

    #[test]
    fn config_builder_works() {
        let config = OpenAiConfig::new("test-key")
            .with_model("gpt-4o")
            .with_base_url("https://custom.api.com")
            .with_timeout(Duration::from_secs(10))
            .with_max_retries(5);

        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.base_url, "https://custom.api.com");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn default_model_is_fixed() {
        assert_eq!(OpenAiConfig::new("k").model, DEFAULT_MODEL);
    }

    #[test]
    fn session_id_is_omitted_from_payload_when_absent() {
        let request = ChatCompletionRequest {
            model: DEFAULT_MODEL.to_string(),
            messages: vec![ChatMessage {
                role: "assistant".to_string(),
                content: "text".to_string(),
            }],
            session_id: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("session_id"));

        let request = ChatCompletionRequest {
            session_id: Some("advisor-1".to_string()),
            ..request
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"session_id\":\"advisor-1\""));
    }

    #[test]
    fn message_carries_assistant_role() {
        let config = OpenAiConfig::new("k");
        let dispatcher = OpenAiDispatcher::new(config);
        let wire = dispatcher.to_wire_request(&CompletionRequest::new("hello"));
        assert_eq!(wire.messages.len(), 1);
        assert_eq!(wire.messages[0].role, "assistant");
        assert_eq!(wire.messages[0].content, "hello");
    }

    #[test]
    fn parse_retry_after_from_message() {
        let body = r#"{"error":{"message":"Rate limit exceeded. Please try again in 12 seconds."}}"#;
        assert_eq!(OpenAiDispatcher::parse_retry_after(body), 12);
        assert_eq!(OpenAiDispatcher::parse_retry_after("{}"), 30);
    }

    #[tokio::test]
    async fn complete_extracts_first_choice_content() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_body(
                r#"{"model":"gpt-3.5-turbo-0125","choices":[
                    {"message":{"role":"assistant","content":"Campaign message"}},
                    {"message":{"role":"assistant","content":"Second choice"}}
                ]}"#,
            )
            .create_async()
            .await;

        let dispatcher = dispatcher_for(&server, 0);
        let response = dispatcher
            .complete(CompletionRequest::new("prompt").with_session_id("advisor-1"))
            .await
            .unwrap();

        assert_eq!(response.content, "Campaign message");
        assert_eq!(response.model, "gpt-3.5-turbo-0125");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn missing_choices_is_a_distinct_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"model":"gpt-3.5-turbo-0125"}"#)
            .create_async()
            .await;

        let dispatcher = dispatcher_for(&server, 0);
        let err = dispatcher
            .complete(CompletionRequest::new("prompt"))
            .await
            .unwrap_err();

        assert!(matches!(err, CompletionError::EmptyChoices));
    }

    #[tokio::test]
    async fn server_errors_are_retried_up_to_the_limit() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .with_body("boom")
            .expect(2)
            .create_async()
            .await;

        let dispatcher = dispatcher_for(&server, 1);
        let err = dispatcher
            .complete(CompletionRequest::new("prompt"))
            .await
            .unwrap_err();

        assert!(matches!(err, CompletionError::Unavailable { .. }));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn auth_failures_are_not_retried() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .expect(1)
            .create_async()
            .await;

        let dispatcher = dispatcher_for(&server, 3);
        let err = dispatcher
            .complete(CompletionRequest::new("prompt"))
            .await
            .unwrap_err();

        assert!(matches!(err, CompletionError::AuthenticationFailed));
        mock.assert_async().await;
    }
}
