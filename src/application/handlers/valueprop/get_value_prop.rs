//! GetValuePropHandler - query handler for the saved value proposition.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::valueprop::ValueProposition;
use crate::ports::ValuePropStore;

use super::ValuePropError;

/// Handler for reading an advisor's value proposition.
///
/// An advisor who has never saved gets an empty proposition, not an error.
pub struct GetValuePropHandler {
    store: Arc<dyn ValuePropStore>,
}

impl GetValuePropHandler {
    pub fn new(store: Arc<dyn ValuePropStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, user_id: &UserId) -> Result<ValueProposition, ValuePropError> {
        let text = self.store.load(user_id).await?.unwrap_or_default();
        Ok(ValueProposition::new(user_id.clone(), text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryValuePropStore;
    use crate::domain::valueprop::PromptRating;

    fn advisor() -> UserId {
        UserId::new("advisor-1").unwrap()
    }

    #[tokio::test]
    async fn unsaved_advisor_reads_empty_poor_proposition() {
        let handler = GetValuePropHandler::new(Arc::new(InMemoryValuePropStore::new()));
        let vp = handler.handle(&advisor()).await.unwrap();
        assert_eq!(vp.text(), "");
        assert_eq!(vp.rating(), PromptRating::Poor);
    }

    #[tokio::test]
    async fn saved_text_is_returned_with_its_rating() {
        let store = Arc::new(InMemoryValuePropStore::new());
        store.save(&advisor(), &"x".repeat(160)).await.unwrap();

        let handler = GetValuePropHandler::new(store);
        let vp = handler.handle(&advisor()).await.unwrap();
        assert_eq!(vp.char_count(), 160);
        assert_eq!(vp.rating(), PromptRating::Good);
    }
}
