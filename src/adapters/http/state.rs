//! Shared application state for HTTP handlers.

use std::sync::Arc;

use crate::application::handlers::{
    CreateCampaignHandler, DeleteCampaignHandler, EditCampaignMessageHandler,
    GenerateAdviceHandler, GenerateValuePropHandler, GetAdvisorProfileHandler,
    GetValuePropHandler, ListCampaignsHandler, ListParticipantsHandler, ListPlansHandler,
    SaveValuePropHandler,
};
use crate::ports::{
    CampaignStore, CompletionProvider, IdentityReader, PlanDirectory, ValuePropStore,
};

/// Port implementations shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn CompletionProvider>,
    pub campaign_store: Arc<dyn CampaignStore>,
    pub value_prop_store: Arc<dyn ValuePropStore>,
    pub directory: Arc<dyn PlanDirectory>,
    pub identity: Arc<dyn IdentityReader>,
}

impl AppState {
    pub fn list_plans_handler(&self) -> ListPlansHandler {
        ListPlansHandler::new(self.directory.clone())
    }

    pub fn list_participants_handler(&self) -> ListParticipantsHandler {
        ListParticipantsHandler::new(self.directory.clone())
    }

    pub fn get_value_prop_handler(&self) -> GetValuePropHandler {
        GetValuePropHandler::new(self.value_prop_store.clone())
    }

    pub fn save_value_prop_handler(&self) -> SaveValuePropHandler {
        SaveValuePropHandler::new(self.value_prop_store.clone())
    }

    pub fn generate_value_prop_handler(&self) -> GenerateValuePropHandler {
        GenerateValuePropHandler::new(self.completion.clone())
    }

    pub fn list_campaigns_handler(&self) -> ListCampaignsHandler {
        ListCampaignsHandler::new(self.campaign_store.clone())
    }

    pub fn create_campaign_handler(&self) -> CreateCampaignHandler {
        CreateCampaignHandler::new(
            self.directory.clone(),
            self.completion.clone(),
            self.campaign_store.clone(),
        )
    }

    pub fn edit_campaign_message_handler(&self) -> EditCampaignMessageHandler {
        EditCampaignMessageHandler::new(self.campaign_store.clone())
    }

    pub fn delete_campaign_handler(&self) -> DeleteCampaignHandler {
        DeleteCampaignHandler::new(self.campaign_store.clone())
    }

    pub fn get_advisor_profile_handler(&self) -> GetAdvisorProfileHandler {
        GetAdvisorProfileHandler::new(self.identity.clone())
    }

    pub fn generate_advice_handler(&self) -> GenerateAdviceHandler {
        GenerateAdviceHandler::new(self.completion.clone())
    }
}
