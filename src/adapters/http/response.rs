//! Shared HTTP error responses.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::handlers::{AdvisorError, CampaignError, PlansError, ValuePropError};
use crate::ports::CompletionError;

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// API error that implements IntoResponse.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(ErrorResponse),
    Unauthorized(String),
    NotFound(String),
    BadGateway(String),
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(ErrorResponse::new("BAD_REQUEST", message))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ApiError::BadRequest(error) => (StatusCode::BAD_REQUEST, error),
            ApiError::Unauthorized(message) => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new("UNAUTHORIZED", message),
            ),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NOT_FOUND", message),
            ),
            ApiError::BadGateway(message) => (
                StatusCode::BAD_GATEWAY,
                ErrorResponse::new("COMPLETION_FAILED", message),
            ),
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("INTERNAL_ERROR", message),
            ),
        };
        (status, Json(error)).into_response()
    }
}

impl From<CampaignError> for ApiError {
    fn from(error: CampaignError) -> Self {
        match error {
            CampaignError::Validation(draft_error) => ApiError::BadRequest(
                ErrorResponse::new("VALIDATION_FAILED", draft_error.to_string()).with_details(
                    serde_json::json!({ "missingFields": draft_error.fields() }),
                ),
            ),
            CampaignError::NotFound(id) => {
                ApiError::NotFound(format!("Campaign {} not found", id))
            }
            CampaignError::Completion(completion_error) => completion_error.into(),
            CampaignError::Store(store_error) => {
                ApiError::Internal(format!("Persistence error: {}", store_error))
            }
            CampaignError::Directory(directory_error) => {
                ApiError::Internal(format!("Plan directory error: {}", directory_error))
            }
        }
    }
}

impl From<ValuePropError> for ApiError {
    fn from(error: ValuePropError) -> Self {
        match error {
            ValuePropError::Store(store_error) => {
                ApiError::Internal(format!("Persistence error: {}", store_error))
            }
            ValuePropError::Completion(completion_error) => completion_error.into(),
        }
    }
}

impl From<PlansError> for ApiError {
    fn from(error: PlansError) -> Self {
        match error {
            PlansError::Directory(directory_error) => {
                ApiError::Internal(format!("Plan directory error: {}", directory_error))
            }
        }
    }
}

impl From<AdvisorError> for ApiError {
    fn from(error: AdvisorError) -> Self {
        match error {
            AdvisorError::Identity(identity_error) => {
                ApiError::Internal(format!("Identity error: {}", identity_error))
            }
            AdvisorError::Completion(completion_error) => completion_error.into(),
        }
    }
}

impl From<CompletionError> for ApiError {
    fn from(error: CompletionError) -> Self {
        ApiError::BadGateway(error.to_string())
    }
}
