//! HTTP DTOs for plan and participant endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::participant::{Participant, ParticipantSummary, ScoreBand, ScoreCategory};

/// Query parameters for the participant listing.
#[derive(Debug, Default, Deserialize)]
pub struct ParticipantListParams {
    pub offset: Option<usize>,
    pub limit: Option<usize>,
    /// Plan-scope filter; wins over `q` when both are sent.
    pub plan: Option<String>,
    /// Free-text filter.
    pub q: Option<String>,
}

/// One participant row with the derived table decorations.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantRow {
    #[serde(flatten)]
    pub participant: Participant,
    /// Maximum advisory score across categories.
    pub highest_score: f64,
    /// Display band per category, for table coloring.
    pub score_bands: BTreeMap<&'static str, ScoreBand>,
}

impl From<Participant> for ParticipantRow {
    fn from(participant: Participant) -> Self {
        let highest_score = participant.highest_score();
        let score_bands = ScoreCategory::ALL
            .iter()
            .map(|category| {
                (
                    category.key(),
                    ScoreBand::from_score(participant.scores.get(*category)),
                )
            })
            .collect();

        Self {
            participant,
            highest_score,
            score_bands,
        }
    }
}

/// Participant page plus summary of the filtered set.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantsPage {
    pub participants: Vec<ParticipantRow>,
    pub summary: ParticipantSummary,
}
