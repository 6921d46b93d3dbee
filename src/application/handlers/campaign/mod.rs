//! Campaign lifecycle handlers.

mod create_campaign;
mod delete_campaign;
mod edit_campaign_message;
mod list_campaigns;

pub use create_campaign::{CreateCampaignCommand, CreateCampaignHandler, CreateCampaignResult};
pub use delete_campaign::{DeleteCampaignCommand, DeleteCampaignHandler};
pub use edit_campaign_message::{EditCampaignMessageCommand, EditCampaignMessageHandler};
pub use list_campaigns::ListCampaignsHandler;

use crate::domain::campaign::DraftError;
use crate::domain::foundation::CampaignId;
use crate::ports::{CompletionError, DirectoryError, StoreError};

/// Errors from campaign operations.
#[derive(Debug, thiserror::Error)]
pub enum CampaignError {
    /// Draft failed validation; no collaborator was contacted.
    #[error(transparent)]
    Validation(#[from] DraftError),

    #[error("campaign {0} not found")]
    NotFound(CampaignId),

    #[error("message generation failed: {0}")]
    Completion(#[from] CompletionError),

    #[error("campaign persistence failed: {0}")]
    Store(#[from] StoreError),

    #[error("plan directory failed: {0}")]
    Directory(#[from] DirectoryError),
}
