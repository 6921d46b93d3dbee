//! GenerateAdviceHandler - advanced advice drafting.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::prompt::{advice_prompt, render_prompt};
use crate::ports::{CompletionProvider, CompletionRequest};

use super::AdvisorError;

/// Command to request advanced financial advice.
#[derive(Debug, Clone)]
pub struct GenerateAdviceCommand {
    pub user_id: UserId,
    pub financial_details: String,
}

/// Handler for generating advanced advice.
pub struct GenerateAdviceHandler {
    completion: Arc<dyn CompletionProvider>,
}

impl GenerateAdviceHandler {
    pub fn new(completion: Arc<dyn CompletionProvider>) -> Self {
        Self { completion }
    }

    pub async fn handle(&self, cmd: GenerateAdviceCommand) -> Result<String, AdvisorError> {
        let content = advice_prompt(&cmd.financial_details, cmd.user_id.as_str());
        let request = CompletionRequest::new(render_prompt(&content))
            .with_session_id(cmd.user_id.as_str());

        let response = self.completion.complete(request).await?;
        Ok(response.content)
    }
}
