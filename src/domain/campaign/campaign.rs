//! Campaign aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CampaignId, PlanId, UserId};

/// Persistence state of a campaign record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    /// Persisted as created; prompt text untouched since generation.
    Created,
    /// Prompt text edited after creation and re-persisted in full.
    Edited,
}

/// A saved outreach message tied to a plan segment and age group.
///
/// Every campaign carries its owning advisor; no campaign exists without
/// one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    id: CampaignId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    plan: Option<PlanId>,
    plan_name: String,
    age_group: String,
    /// Generated outreach message; user-editable after generation.
    prompt: String,
    user_id: UserId,
    status: CampaignStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Campaign {
    /// Creates a campaign with a generated prompt, owned by `user_id`.
    pub fn new(
        user_id: UserId,
        name: impl Into<String>,
        plan: Option<PlanId>,
        plan_name: impl Into<String>,
        age_group: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: CampaignId::new(),
            name: name.into(),
            plan,
            plan_name: plan_name.into(),
            age_group: age_group.into(),
            prompt: prompt.into(),
            user_id,
            status: CampaignStatus::Created,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> CampaignId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn plan(&self) -> Option<&PlanId> {
        self.plan.as_ref()
    }

    pub fn plan_name(&self) -> &str {
        &self.plan_name
    }

    pub fn age_group(&self) -> &str {
        &self.age_group
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn status(&self) -> CampaignStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the outreach message. The record is re-persisted in full by
    /// the caller; concurrent edits are last-write-wins.
    pub fn edit_message(&mut self, message: impl Into<String>) {
        self.prompt = message.into();
        self.status = CampaignStatus::Edited;
        self.updated_at = Utc::now();
    }

    /// Whether the record belongs to the given advisor.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advisor() -> UserId {
        UserId::new("advisor-1").unwrap()
    }

    fn campaign() -> Campaign {
        Campaign::new(
            advisor(),
            "Q3 Outreach",
            Some(PlanId::new("plan-a").unwrap()),
            "Plan A",
            "45",
            "Generated message",
        )
    }

    #[test]
    fn new_campaign_is_created_and_owned() {
        let c = campaign();
        assert_eq!(c.status(), CampaignStatus::Created);
        assert!(c.is_owned_by(&advisor()));
        assert_eq!(c.prompt(), "Generated message");
    }

    #[test]
    fn edit_message_replaces_prompt_and_marks_edited() {
        let mut c = campaign();
        c.edit_message("Revised message");
        assert_eq!(c.prompt(), "Revised message");
        assert_eq!(c.status(), CampaignStatus::Edited);
        assert!(c.updated_at() >= c.created_at());
    }

    #[test]
    fn ownership_check_rejects_other_advisors() {
        let c = campaign();
        assert!(!c.is_owned_by(&UserId::new("advisor-2").unwrap()));
    }

    #[test]
    fn campaign_serializes_camel_case() {
        let c = campaign();
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["planName"], "Plan A");
        assert_eq!(json["ageGroup"], "45");
        assert!(json["userId"].is_string());
    }

    #[test]
    fn campaign_round_trips_through_json() {
        let c = campaign();
        let json = serde_json::to_string(&c).unwrap();
        let back: Campaign = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
