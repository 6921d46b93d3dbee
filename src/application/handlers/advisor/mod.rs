//! Advisor profile and advice handlers.

mod generate_advice;
mod get_profile;

pub use generate_advice::{GenerateAdviceCommand, GenerateAdviceHandler};
pub use get_profile::{AdvisorProfile, GetAdvisorProfileHandler};

use crate::ports::{CompletionError, IdentityError};

/// Errors from advisor operations.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    #[error("identity lookup failed: {0}")]
    Identity(#[from] IdentityError),

    #[error("advice generation failed: {0}")]
    Completion(#[from] CompletionError),
}
