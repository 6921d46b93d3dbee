//! Campaign draft and its validation.

use thiserror::Error;

use crate::domain::foundation::{ParticipantId, PlanId, ValidationError};

/// Form fields for a campaign before submission.
///
/// The plan selection is optional; the other fields are required and are
/// checked before any collaborator is contacted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignDraft {
    pub name: String,
    pub plan_id: Option<PlanId>,
    pub participant_id: Option<ParticipantId>,
    pub scenario: String,
    pub message_content: String,
}

/// Validation failure listing every missing field.
#[derive(Debug, Clone, Error)]
#[error("Missing required fields: {}", self.field_list())]
pub struct DraftError {
    pub missing: Vec<ValidationError>,
}

impl DraftError {
    fn field_list(&self) -> String {
        self.missing
            .iter()
            .map(|e| e.field().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Names of the missing fields.
    pub fn fields(&self) -> Vec<&str> {
        self.missing.iter().map(|e| e.field()).collect()
    }
}

impl CampaignDraft {
    /// Checks the required fields, reporting every missing one.
    ///
    /// Must be called before the completion provider or the store is
    /// touched; a failed validation is side-effect free.
    pub fn validate(&self) -> Result<(), DraftError> {
        let mut missing = Vec::new();

        if self.name.trim().is_empty() {
            missing.push(ValidationError::empty_field("name"));
        }
        if self.participant_id.is_none() {
            missing.push(ValidationError::empty_field("participant"));
        }
        if self.scenario.trim().is_empty() {
            missing.push(ValidationError::empty_field("scenario"));
        }
        if self.message_content.trim().is_empty() {
            missing.push(ValidationError::empty_field("message_content"));
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DraftError { missing })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> CampaignDraft {
        CampaignDraft {
            name: "Q3 Outreach".to_string(),
            plan_id: Some(PlanId::new("plan-a").unwrap()),
            participant_id: Some(ParticipantId::new("p-1").unwrap()),
            scenario: "Opportunity to save more".to_string(),
            message_content: "Let's talk about your savings rate.".to_string(),
        }
    }

    #[test]
    fn complete_draft_validates() {
        assert!(complete_draft().validate().is_ok());
    }

    #[test]
    fn plan_selection_is_optional() {
        let draft = CampaignDraft {
            plan_id: None,
            ..complete_draft()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn each_required_field_is_reported_when_missing() {
        let draft = CampaignDraft {
            name: "  ".to_string(),
            participant_id: None,
            ..complete_draft()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.fields(), vec!["name", "participant"]);
    }

    #[test]
    fn empty_draft_reports_all_required_fields() {
        let err = CampaignDraft::default().validate().unwrap_err();
        assert_eq!(
            err.fields(),
            vec!["name", "participant", "scenario", "message_content"]
        );
    }

    #[test]
    fn error_message_lists_fields() {
        let err = CampaignDraft::default().validate().unwrap_err();
        assert!(err.to_string().contains("name"));
        assert!(err.to_string().contains("message_content"));
    }
}
