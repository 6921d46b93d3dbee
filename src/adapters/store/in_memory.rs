//! In-memory store adapters, used by tests and key-less demo runs.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::campaign::Campaign;
use crate::domain::foundation::{CampaignId, UserId};
use crate::ports::{CampaignStore, StoreError, ValuePropStore};

/// Campaign collection held in process memory, keyed by advisor.
#[derive(Default)]
pub struct InMemoryCampaignStore {
    campaigns: RwLock<HashMap<UserId, Vec<Campaign>>>,
}

impl InMemoryCampaignStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CampaignStore for InMemoryCampaignStore {
    async fn list(&self, user_id: &UserId) -> Result<Vec<Campaign>, StoreError> {
        Ok(self
            .campaigns
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn save(&self, campaign: &Campaign) -> Result<(), StoreError> {
        let mut campaigns = self.campaigns.write().await;
        let collection = campaigns.entry(campaign.user_id().clone()).or_default();

        match collection.iter_mut().find(|c| c.id() == campaign.id()) {
            Some(existing) => *existing = campaign.clone(),
            None => collection.push(campaign.clone()),
        }
        Ok(())
    }

    async fn delete(&self, user_id: &UserId, campaign_id: CampaignId) -> Result<(), StoreError> {
        let mut campaigns = self.campaigns.write().await;
        let collection = campaigns
            .get_mut(user_id)
            .ok_or_else(|| StoreError::not_found(format!("campaigns/{}", user_id)))?;

        let before = collection.len();
        collection.retain(|c| c.id() != campaign_id);

        if collection.len() == before {
            return Err(StoreError::not_found(format!(
                "campaigns/{}/{}",
                user_id, campaign_id
            )));
        }
        Ok(())
    }
}

/// Value proposition text held in process memory, keyed by advisor.
#[derive(Default)]
pub struct InMemoryValuePropStore {
    texts: RwLock<HashMap<UserId, String>>,
}

impl InMemoryValuePropStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ValuePropStore for InMemoryValuePropStore {
    async fn load(&self, user_id: &UserId) -> Result<Option<String>, StoreError> {
        Ok(self.texts.read().await.get(user_id).cloned())
    }

    async fn save(&self, user_id: &UserId, text: &str) -> Result<(), StoreError> {
        self.texts
            .write()
            .await
            .insert(user_id.clone(), text.to_string());
        Ok(())
    }
}
