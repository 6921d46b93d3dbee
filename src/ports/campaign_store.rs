//! Campaign Store Port - per-advisor campaign persistence.

use async_trait::async_trait;

use crate::domain::campaign::Campaign;
use crate::domain::foundation::{CampaignId, UserId};

/// Errors from the persistence collaborator.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The addressed record does not exist.
    #[error("record not found: {path}")]
    NotFound { path: String },

    /// Backend rejected or failed the operation.
    #[error("store backend error: {0}")]
    Backend(String),

    /// Stored payload could not be decoded.
    #[error("store payload error: {0}")]
    Payload(String),
}

impl StoreError {
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    pub fn payload(message: impl Into<String>) -> Self {
        Self::Payload(message.into())
    }
}

/// Port for the per-advisor campaign collection.
///
/// `delete` removes exactly one record; sibling campaigns for the same
/// advisor must survive. (The original client removed the whole collection;
/// that behavior is a defect and is not reproduced.)
#[async_trait]
pub trait CampaignStore: Send + Sync {
    /// Lists the advisor's campaigns in creation order.
    async fn list(&self, user_id: &UserId) -> Result<Vec<Campaign>, StoreError>;

    /// Persists a campaign in full, inserting or replacing by id.
    async fn save(&self, campaign: &Campaign) -> Result<(), StoreError>;

    /// Removes one campaign. Errors with [`StoreError::NotFound`] when the
    /// record does not exist.
    async fn delete(&self, user_id: &UserId, campaign_id: CampaignId) -> Result<(), StoreError>;
}
