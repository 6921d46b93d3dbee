//! GenerateValuePropHandler - AI-assisted pitch drafting.
//!
//! Generation never saves; the advisor reviews the draft and saves
//! explicitly.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::prompt::{render_prompt, value_prop_prompt};
use crate::domain::valueprop::PromptRating;
use crate::ports::{CompletionProvider, CompletionRequest};

use super::ValuePropError;

/// Command to draft a value proposition with the completion API.
#[derive(Debug, Clone)]
pub struct GenerateValuePropCommand {
    pub user_id: UserId,
    pub age_group: String,
    pub role: String,
    pub unique_description: String,
    pub ideal_client: Vec<String>,
}

/// A generated draft and the rating its length earns.
#[derive(Debug, Clone)]
pub struct GeneratedValueProp {
    pub text: String,
    pub rating: PromptRating,
}

/// Handler for drafting value propositions.
pub struct GenerateValuePropHandler {
    completion: Arc<dyn CompletionProvider>,
}

impl GenerateValuePropHandler {
    pub fn new(completion: Arc<dyn CompletionProvider>) -> Self {
        Self { completion }
    }

    pub async fn handle(
        &self,
        cmd: GenerateValuePropCommand,
    ) -> Result<GeneratedValueProp, ValuePropError> {
        let content = value_prop_prompt(
            &cmd.age_group,
            &cmd.role,
            &cmd.unique_description,
            &cmd.ideal_client,
        );
        let request = CompletionRequest::new(render_prompt(&content))
            .with_session_id(cmd.user_id.as_str());

        let response = self.completion.complete(request).await?;
        let rating = PromptRating::for_text(&response.content);

        Ok(GeneratedValueProp {
            text: response.content,
            rating,
        })
    }
}
