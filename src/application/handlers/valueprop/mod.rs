//! Value proposition handlers.

mod generate_value_prop;
mod get_value_prop;
mod save_value_prop;

pub use generate_value_prop::{
    GenerateValuePropCommand, GenerateValuePropHandler, GeneratedValueProp,
};
pub use get_value_prop::GetValuePropHandler;
pub use save_value_prop::{SaveValuePropCommand, SaveValuePropHandler};

use crate::ports::{CompletionError, StoreError};

/// Errors from value proposition operations.
#[derive(Debug, thiserror::Error)]
pub enum ValuePropError {
    #[error("value proposition persistence failed: {0}")]
    Store(#[from] StoreError),

    #[error("draft generation failed: {0}")]
    Completion(#[from] CompletionError),
}
