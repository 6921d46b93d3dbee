//! EditCampaignMessageHandler - command handler for message edits.
//!
//! Edits re-persist the record in full. Concurrent edits are
//! last-write-wins and a delete racing an edit is authoritative.

use std::sync::Arc;

use crate::domain::campaign::Campaign;
use crate::domain::foundation::{CampaignId, UserId};
use crate::ports::CampaignStore;

use super::CampaignError;

/// Command to replace a campaign's outreach message.
#[derive(Debug, Clone)]
pub struct EditCampaignMessageCommand {
    pub user_id: UserId,
    pub campaign_id: CampaignId,
    pub message: String,
}

/// Handler for editing campaign messages.
pub struct EditCampaignMessageHandler {
    store: Arc<dyn CampaignStore>,
}

impl EditCampaignMessageHandler {
    pub fn new(store: Arc<dyn CampaignStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: EditCampaignMessageCommand,
    ) -> Result<Campaign, CampaignError> {
        let campaigns = self.store.list(&cmd.user_id).await?;
        let mut campaign = campaigns
            .into_iter()
            .find(|c| c.id() == cmd.campaign_id)
            .ok_or(CampaignError::NotFound(cmd.campaign_id))?;

        campaign.edit_message(cmd.message);
        self.store.save(&campaign).await?;

        Ok(campaign)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryCampaignStore;
    use crate::domain::campaign::CampaignStatus;

    fn advisor() -> UserId {
        UserId::new("advisor-1").unwrap()
    }

    async fn seeded_store() -> (Arc<InMemoryCampaignStore>, Campaign) {
        let store = Arc::new(InMemoryCampaignStore::new());
        let campaign = Campaign::new(advisor(), "Q3", None, "Plan A", "45", "original");
        store.save(&campaign).await.unwrap();
        (store, campaign)
    }

    #[tokio::test]
    async fn edit_replaces_message_and_repersists() {
        let (store, campaign) = seeded_store().await;
        let handler = EditCampaignMessageHandler::new(store.clone());

        let updated = handler
            .handle(EditCampaignMessageCommand {
                user_id: advisor(),
                campaign_id: campaign.id(),
                message: "revised".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(updated.prompt(), "revised");
        assert_eq!(updated.status(), CampaignStatus::Edited);

        let listed = store.list(&advisor()).await.unwrap();
        assert_eq!(listed[0].prompt(), "revised");
    }

    #[tokio::test]
    async fn edit_of_unknown_campaign_is_not_found() {
        let (store, _) = seeded_store().await;
        let handler = EditCampaignMessageHandler::new(store);

        let err = handler
            .handle(EditCampaignMessageCommand {
                user_id: advisor(),
                campaign_id: CampaignId::new(),
                message: "revised".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CampaignError::NotFound(_)));
    }

    #[tokio::test]
    async fn edit_does_not_cross_advisors() {
        let (store, campaign) = seeded_store().await;
        let handler = EditCampaignMessageHandler::new(store);

        let err = handler
            .handle(EditCampaignMessageCommand {
                user_id: UserId::new("advisor-2").unwrap(),
                campaign_id: campaign.id(),
                message: "hijack".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CampaignError::NotFound(_)));
    }
}
