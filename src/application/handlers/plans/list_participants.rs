//! ListParticipantsHandler - filtered, paginated participant listing.
//!
//! The summary covers the whole filtered set; pagination only windows the
//! returned rows.

use std::sync::Arc;

use crate::domain::foundation::PlanId;
use crate::domain::participant::{Participant, ParticipantFilter, ParticipantSummary};
use crate::ports::PlanDirectory;

use super::PlansError;

/// Query for the participant table.
#[derive(Debug, Clone, Default)]
pub struct ListParticipantsQuery {
    /// Plan-scope filter; takes precedence over `search`.
    pub plan: Option<PlanId>,
    /// Free-text filter across all field values.
    pub search: Option<String>,
    /// Rows to skip.
    pub offset: usize,
    /// Maximum rows to return; `None` returns everything.
    pub limit: Option<usize>,
}

/// Filtered page plus aggregation over the filtered set.
#[derive(Debug, Clone)]
pub struct ListParticipantsResult {
    pub participants: Vec<Participant>,
    pub summary: ParticipantSummary,
}

/// Handler for listing participants.
pub struct ListParticipantsHandler {
    directory: Arc<dyn PlanDirectory>,
}

impl ListParticipantsHandler {
    pub fn new(directory: Arc<dyn PlanDirectory>) -> Self {
        Self { directory }
    }

    pub async fn handle(
        &self,
        query: ListParticipantsQuery,
    ) -> Result<ListParticipantsResult, PlansError> {
        let all = self.directory.participants().await?;

        let filter = ParticipantFilter::resolve(query.plan, query.search);
        let filtered = filter.apply(&all);
        let summary = ParticipantSummary::of(&filtered);

        let participants = filtered
            .into_iter()
            .skip(query.offset)
            .take(query.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok(ListParticipantsResult {
            participants,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::directory::InMemoryPlanDirectory;

    fn handler() -> ListParticipantsHandler {
        ListParticipantsHandler::new(Arc::new(InMemoryPlanDirectory::with_demo_data()))
    }

    #[tokio::test]
    async fn unfiltered_query_returns_everyone_with_summary() {
        let result = handler().handle(ListParticipantsQuery::default()).await.unwrap();
        assert_eq!(result.participants.len(), 3);
        assert_eq!(result.summary.count, 3);
        assert_eq!(result.summary.total_balance, 524_000.0);
    }

    #[tokio::test]
    async fn plan_filter_scopes_rows_and_summary() {
        let result = handler()
            .handle(ListParticipantsQuery {
                plan: Some(PlanId::new("plan-a").unwrap()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(result.participants.len(), 2);
        assert_eq!(result.summary.count, 2);
        assert!(result
            .participants
            .iter()
            .all(|p| p.plan.as_str() == "plan-a"));
    }

    #[tokio::test]
    async fn plan_filter_wins_over_search() {
        let result = handler()
            .handle(ListParticipantsQuery {
                plan: Some(PlanId::new("plan-b").unwrap()),
                search: Some("John".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        // "John" is in plan-a; the plan scope decides.
        assert_eq!(result.participants.len(), 1);
        assert_eq!(result.participants[0].name, "Sam Carter");
    }

    #[tokio::test]
    async fn search_filter_matches_any_field_case_insensitively() {
        let result = handler()
            .handle(ListParticipantsQuery {
                search: Some("delta corp".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(result.participants.len(), 1);
        assert_eq!(result.participants[0].name, "Sam Carter");
    }

    #[tokio::test]
    async fn pagination_windows_rows_but_not_summary() {
        let result = handler()
            .handle(ListParticipantsQuery {
                offset: 1,
                limit: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(result.participants.len(), 1);
        assert_eq!(result.participants[0].name, "Maria Alvarez");
        assert_eq!(result.summary.count, 3);
    }

    #[tokio::test]
    async fn offset_past_the_end_returns_empty_page() {
        let result = handler()
            .handle(ListParticipantsQuery {
                offset: 10,
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(result.participants.is_empty());
        assert_eq!(result.summary.count, 3);
    }
}
