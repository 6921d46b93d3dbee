//! Value Prop Store Port - one text per advisor path.

use async_trait::async_trait;

use crate::domain::foundation::UserId;

use super::StoreError;

/// Port for value proposition persistence.
///
/// One free-text string per advisor; saves overwrite in full and no history
/// is retained.
#[async_trait]
pub trait ValuePropStore: Send + Sync {
    /// Loads the advisor's saved text, `None` when never saved.
    async fn load(&self, user_id: &UserId) -> Result<Option<String>, StoreError>;

    /// Overwrites the advisor's text.
    async fn save(&self, user_id: &UserId, text: &str) -> Result<(), StoreError>;
}
