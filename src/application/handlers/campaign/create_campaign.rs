//! CreateCampaignHandler - command handler for campaign creation.
//!
//! Order of effects matters: validation runs before any collaborator is
//! contacted, and the campaign is appended to caller-visible state only
//! after persistence succeeds.

use std::sync::Arc;

use crate::domain::campaign::{is_known_scenario, Campaign, CampaignDraft, PARTICIPANT_SCENARIOS};
use crate::domain::foundation::UserId;
use crate::domain::prompt::{campaign_prompt, render_prompt};
use crate::ports::{CampaignStore, CompletionProvider, CompletionRequest, PlanDirectory};

use super::CampaignError;

/// Command to create a campaign from a submitted draft.
#[derive(Debug, Clone)]
pub struct CreateCampaignCommand {
    pub user_id: UserId,
    pub draft: CampaignDraft,
}

/// Result of successful campaign creation.
#[derive(Debug, Clone)]
pub struct CreateCampaignResult {
    pub campaign: Campaign,
}

/// Handler for creating campaigns.
pub struct CreateCampaignHandler {
    directory: Arc<dyn PlanDirectory>,
    completion: Arc<dyn CompletionProvider>,
    store: Arc<dyn CampaignStore>,
}

impl CreateCampaignHandler {
    pub fn new(
        directory: Arc<dyn PlanDirectory>,
        completion: Arc<dyn CompletionProvider>,
        store: Arc<dyn CampaignStore>,
    ) -> Self {
        Self {
            directory,
            completion,
            store,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateCampaignCommand,
    ) -> Result<CreateCampaignResult, CampaignError> {
        // 1. Validate before touching any collaborator.
        cmd.draft.validate()?;

        if !is_known_scenario(&cmd.draft.scenario) {
            tracing::warn!(scenario = %cmd.draft.scenario, "scenario not in the catalogue");
        }

        // 2. Resolve the selected plan and participant.
        let (plan_name, age_group) = self.resolve_selection(&cmd.draft).await?;

        // 3. Generate the outreach message.
        let scenarios: Vec<String> = PARTICIPANT_SCENARIOS
            .iter()
            .map(|s| s.to_string())
            .collect();
        let content = campaign_prompt(&cmd.draft.name, &plan_name, &scenarios, &age_group);
        let request = CompletionRequest::new(render_prompt(&content))
            .with_session_id(cmd.user_id.as_str());
        let generated = self.completion.complete(request).await?;

        // 4. Persist, then hand the record back.
        let campaign = Campaign::new(
            cmd.user_id,
            cmd.draft.name,
            cmd.draft.plan_id,
            plan_name,
            age_group,
            generated.content,
        );
        self.store.save(&campaign).await?;

        tracing::info!(campaign_id = %campaign.id(), "campaign created");
        Ok(CreateCampaignResult { campaign })
    }

    /// Resolves plan name and age-group label from the directory, with the
    /// feed's fallback labels when the selection cannot be found.
    async fn resolve_selection(
        &self,
        draft: &CampaignDraft,
    ) -> Result<(String, String), CampaignError> {
        let plan_name = match &draft.plan_id {
            Some(plan_id) => self
                .directory
                .plans()
                .await?
                .into_iter()
                .find(|plan| &plan.id == plan_id)
                .map(|plan| plan.name)
                .unwrap_or_else(|| "Unknown Plan".to_string()),
            None => "Unknown Plan".to_string(),
        };

        let age_group = match &draft.participant_id {
            Some(participant_id) => self
                .directory
                .participants()
                .await?
                .into_iter()
                .find(|p| &p.id == participant_id)
                .map(|p| p.age.to_string())
                .unwrap_or_else(|| "Unknown Age Group".to_string()),
            None => "Unknown Age Group".to_string(),
        };

        Ok((plan_name, age_group))
    }
}
