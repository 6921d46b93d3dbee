//! Realtime Store - persistence against an RTDB-style REST backend.
//!
//! The hosted store exposes every node as JSON under
//! `<base>/<path>.json`, optionally authenticated with an `auth` query
//! parameter. Records live under per-advisor paths:
//!
//! - value proposition: `advisors/<uid>/valueProp.json`
//! - campaigns: `advisors/<uid>/campaigns/<campaign-id>.json`
//!
//! Deletes address a single campaign child node, never the collection.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::collections::HashMap;
use std::time::Duration;

use crate::domain::campaign::Campaign;
use crate::domain::foundation::{CampaignId, UserId};
use crate::ports::{CampaignStore, StoreError, ValuePropStore};

/// Configuration for the realtime store client.
#[derive(Debug, Clone)]
pub struct RealtimeStoreConfig {
    /// Database base URL, e.g. `https://demo-rtdb.firebaseio.com`.
    pub base_url: String,
    /// Optional auth token appended to every request.
    pub auth_token: Option<Secret<String>>,
    /// Request timeout.
    pub timeout: Duration,
}

impl RealtimeStoreConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
            timeout: Duration::from_secs(15),
        }
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(Secret::new(token.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Store adapter for the hosted realtime database.
pub struct RealtimeStore {
    config: RealtimeStoreConfig,
    client: Client,
}

impl RealtimeStore {
    pub fn new(config: RealtimeStoreConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn node_url(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        match &self.config.auth_token {
            Some(token) => format!("{}/{}.json?auth={}", base, path, token.expose_secret()),
            None => format!("{}/{}.json", base, path),
        }
    }

    fn value_prop_path(user_id: &UserId) -> String {
        format!("advisors/{}/valueProp", user_id)
    }

    fn campaigns_path(user_id: &UserId) -> String {
        format!("advisors/{}/campaigns", user_id)
    }

    fn campaign_path(user_id: &UserId, campaign_id: CampaignId) -> String {
        format!("advisors/{}/campaigns/{}", user_id, campaign_id)
    }

    async fn read_node<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, StoreError> {
        let response = self
            .client
            .get(self.node_url(path))
            .send()
            .await
            .map_err(|e| StoreError::backend(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::backend(format!(
                "GET {} returned {}",
                path,
                response.status()
            )));
        }

        // Absent nodes read as JSON null.
        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| StoreError::payload(e.to_string()))?;

        if value.is_null() {
            return Ok(None);
        }

        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| StoreError::payload(e.to_string()))
    }

    async fn write_node<T: serde::Serialize>(
        &self,
        path: &str,
        value: &T,
    ) -> Result<(), StoreError> {
        let response = self
            .client
            .put(self.node_url(path))
            .json(value)
            .send()
            .await
            .map_err(|e| StoreError::backend(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::backend(format!(
                "PUT {} returned {}",
                path,
                response.status()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ValuePropStore for RealtimeStore {
    async fn load(&self, user_id: &UserId) -> Result<Option<String>, StoreError> {
        self.read_node(&Self::value_prop_path(user_id)).await
    }

    async fn save(&self, user_id: &UserId, text: &str) -> Result<(), StoreError> {
        self.write_node(&Self::value_prop_path(user_id), &text).await
    }
}

#[async_trait]
impl CampaignStore for RealtimeStore {
    async fn list(&self, user_id: &UserId) -> Result<Vec<Campaign>, StoreError> {
        let collection: Option<HashMap<String, Campaign>> =
            self.read_node(&Self::campaigns_path(user_id)).await?;

        let mut campaigns: Vec<Campaign> = collection
            .map(|map| map.into_values().collect())
            .unwrap_or_default();
        campaigns.sort_by_key(|c| c.created_at());
        Ok(campaigns)
    }

    async fn save(&self, campaign: &Campaign) -> Result<(), StoreError> {
        let path = Self::campaign_path(campaign.user_id(), campaign.id());
        self.write_node(&path, campaign).await
    }

    async fn delete(&self, user_id: &UserId, campaign_id: CampaignId) -> Result<(), StoreError> {
        let path = Self::campaign_path(user_id, campaign_id);

        // A delete against an absent node would silently succeed; probe
        // first so missing records surface as NotFound.
        let existing: Option<serde_json::Value> = self.read_node(&path).await?;
        if existing.is_none() {
            return Err(StoreError::not_found(path));
        }

        let response = self
            .client
            .delete(self.node_url(&path))
            .send()
            .await
            .map_err(|e| StoreError::backend(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::backend(format!(
                "DELETE {} returned {}",
                path,
                response.status()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advisor() -> UserId {
        UserId::new("advisor-1").unwrap()
    }

    fn store_for(server: &mockito::Server) -> RealtimeStore {
        RealtimeStore::new(RealtimeStoreConfig::new(server.url()))
    }

    #[test]
    fn node_url_appends_auth_token_when_configured() {
        let store = RealtimeStore::new(
            RealtimeStoreConfig::new("https://demo-rtdb.example.com/").with_auth_token("tok"),
        );
        assert_eq!(
            store.node_url("advisors/a/valueProp"),
            "https://demo-rtdb.example.com/advisors/a/valueProp.json?auth=tok"
        );
    }

    #[tokio::test]
    async fn value_prop_absent_node_reads_as_none() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/advisors/advisor-1/valueProp.json")
            .with_status(200)
            .with_body("null")
            .create_async()
            .await;

        let store = store_for(&server);
        assert_eq!(ValuePropStore::load(&store, &advisor()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn value_prop_save_puts_json_string() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/advisors/advisor-1/valueProp.json")
            .match_body(r#""my pitch""#)
            .with_status(200)
            .with_body(r#""my pitch""#)
            .create_async()
            .await;

        let store = store_for(&server);
        ValuePropStore::save(&store, &advisor(), "my pitch")
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn campaign_list_decodes_keyed_collection() {
        let campaign = Campaign::new(advisor(), "Q3", None, "Unknown Plan", "45", "msg");
        let body = serde_json::json!({ campaign.id().to_string(): campaign }).to_string();

        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/advisors/advisor-1/campaigns.json")
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let store = store_for(&server);
        let listed = CampaignStore::list(&store, &advisor()).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name(), "Q3");
    }

    #[tokio::test]
    async fn delete_addresses_the_single_child_node() {
        let campaign = Campaign::new(advisor(), "Q3", None, "Unknown Plan", "45", "msg");
        let child = format!("/advisors/advisor-1/campaigns/{}.json", campaign.id());

        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", child.as_str())
            .with_status(200)
            .with_body(serde_json::to_string(&campaign).unwrap())
            .create_async()
            .await;
        let delete_mock = server
            .mock("DELETE", child.as_str())
            .with_status(200)
            .with_body("null")
            .create_async()
            .await;

        let store = store_for(&server);
        store.delete(&advisor(), campaign.id()).await.unwrap();
        delete_mock.assert_async().await;
    }

    #[tokio::test]
    async fn delete_of_absent_record_is_not_found() {
        let id = CampaignId::new();
        let child = format!("/advisors/advisor-1/campaigns/{}.json", id);

        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", child.as_str())
            .with_status(200)
            .with_body("null")
            .create_async()
            .await;

        let store = store_for(&server);
        let err = store.delete(&advisor(), id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }
}
