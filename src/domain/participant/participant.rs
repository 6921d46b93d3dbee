//! Participant record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ParticipantId, PlanId};

use super::ScoreSet;

/// An individual enrolled in a plan.
///
/// Demographic and balance fields mirror the plan data feed; anything the
/// feed may omit is optional and read defensively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub age: u32,
    /// Account balance; absent reads as 0 in aggregations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    /// Advisory-need label from the feed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub need: Option<String>,
    pub plan: PlanId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings_rate_percent: Option<f64>,
    #[serde(default)]
    pub scores: ScoreSet,
}

impl Participant {
    /// Maximum advisory score across categories; 0 when none are present.
    pub fn highest_score(&self) -> f64 {
        self.scores.highest()
    }
}
