//! DeleteCampaignHandler - command handler for scoped deletion.
//!
//! Removes exactly one record; the advisor's other campaigns survive.

use std::sync::Arc;

use crate::domain::foundation::{CampaignId, UserId};
use crate::ports::{CampaignStore, StoreError};

use super::CampaignError;

/// Command to delete one campaign.
#[derive(Debug, Clone)]
pub struct DeleteCampaignCommand {
    pub user_id: UserId,
    pub campaign_id: CampaignId,
}

/// Handler for deleting campaigns.
pub struct DeleteCampaignHandler {
    store: Arc<dyn CampaignStore>,
}

impl DeleteCampaignHandler {
    pub fn new(store: Arc<dyn CampaignStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteCampaignCommand) -> Result<(), CampaignError> {
        match self.store.delete(&cmd.user_id, cmd.campaign_id).await {
            Ok(()) => {
                tracing::info!(campaign_id = %cmd.campaign_id, "campaign deleted");
                Ok(())
            }
            Err(StoreError::NotFound { .. }) => Err(CampaignError::NotFound(cmd.campaign_id)),
            Err(other) => Err(CampaignError::Store(other)),
        }
    }
}
