//! SaveValuePropHandler - command handler for saving the pitch text.
//!
//! The store write happens first; the caller-visible record (and its
//! rating) is produced only after persistence succeeds.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::valueprop::ValueProposition;
use crate::ports::ValuePropStore;

use super::ValuePropError;

/// Command to overwrite an advisor's value proposition.
#[derive(Debug, Clone)]
pub struct SaveValuePropCommand {
    pub user_id: UserId,
    pub text: String,
}

/// Handler for saving the value proposition.
pub struct SaveValuePropHandler {
    store: Arc<dyn ValuePropStore>,
}

impl SaveValuePropHandler {
    pub fn new(store: Arc<dyn ValuePropStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: SaveValuePropCommand,
    ) -> Result<ValueProposition, ValuePropError> {
        self.store.save(&cmd.user_id, &cmd.text).await?;
        Ok(ValueProposition::new(cmd.user_id, cmd.text))
    }
}
