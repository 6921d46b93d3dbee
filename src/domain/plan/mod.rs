//! Employer-sponsored plan aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::PlanId;
use crate::domain::participant::Participant;

/// A benefit plan and the participants enrolled in it.
///
/// A plan exclusively owns its participant list for the lifetime of a fetch
/// cycle; participants are never shared across plans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: PlanId,
    #[serde(rename = "planName")]
    pub name: String,
    /// Asset tier label from the feed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<String>,
    /// Plan health label from the feed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<String>,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl Plan {
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_serializes_name_as_plan_name() {
        let plan = Plan {
            id: PlanId::new("plan-a").unwrap(),
            name: "Plan A".to_string(),
            assets: Some("High".to_string()),
            health: Some("Good".to_string()),
            participants: vec![],
        };
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["planName"], "Plan A");
        assert_eq!(json["id"], "plan-a");
    }

    #[test]
    fn plan_deserializes_without_participants() {
        let plan: Plan =
            serde_json::from_str(r#"{"id": "plan-b", "planName": "Plan B"}"#).unwrap();
        assert_eq!(plan.participant_count(), 0);
    }
}
