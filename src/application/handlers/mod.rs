//! Command and query handlers, one module per feature.

pub mod advisor;
pub mod campaign;
pub mod plans;
pub mod valueprop;

pub use advisor::{
    AdvisorError, AdvisorProfile, GenerateAdviceCommand, GenerateAdviceHandler,
    GetAdvisorProfileHandler,
};
pub use campaign::{
    CampaignError, CreateCampaignCommand, CreateCampaignHandler, DeleteCampaignCommand,
    DeleteCampaignHandler, EditCampaignMessageCommand, EditCampaignMessageHandler,
    ListCampaignsHandler,
};
pub use plans::{
    ListParticipantsHandler, ListParticipantsQuery, ListParticipantsResult, ListPlansHandler,
    PlansError,
};
pub use valueprop::{
    GenerateValuePropCommand, GenerateValuePropHandler, GeneratedValueProp, GetValuePropHandler,
    SaveValuePropCommand, SaveValuePropHandler, ValuePropError,
};
