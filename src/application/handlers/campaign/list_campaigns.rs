//! ListCampaignsHandler - query handler for an advisor's campaigns.

use std::sync::Arc;

use crate::domain::campaign::Campaign;
use crate::domain::foundation::UserId;
use crate::ports::CampaignStore;

use super::CampaignError;

/// Handler for listing an advisor's campaigns.
pub struct ListCampaignsHandler {
    store: Arc<dyn CampaignStore>,
}

impl ListCampaignsHandler {
    pub fn new(store: Arc<dyn CampaignStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, user_id: &UserId) -> Result<Vec<Campaign>, CampaignError> {
        Ok(self.store.list(user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryCampaignStore;

    #[tokio::test]
    async fn lists_only_the_advisors_campaigns() {
        let store = Arc::new(InMemoryCampaignStore::new());
        let mine = UserId::new("advisor-1").unwrap();
        let theirs = UserId::new("advisor-2").unwrap();

        store
            .save(&Campaign::new(mine.clone(), "Mine", None, "Plan A", "45", "m"))
            .await
            .unwrap();
        store
            .save(&Campaign::new(theirs, "Theirs", None, "Plan B", "50", "m"))
            .await
            .unwrap();

        let handler = ListCampaignsHandler::new(store);
        let listed = handler.handle(&mine).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name(), "Mine");
    }
}
