//! GetAdvisorProfileHandler - banner profile with the derived CommsID.

use std::sync::Arc;

use crate::domain::foundation::{CommsId, UserId};
use crate::ports::IdentityReader;

use super::AdvisorError;

/// Display profile for the advisor banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorProfile {
    pub email: Option<String>,
    pub comms_id: CommsId,
}

/// Handler for reading the advisor profile.
pub struct GetAdvisorProfileHandler {
    identity: Arc<dyn IdentityReader>,
}

impl GetAdvisorProfileHandler {
    pub fn new(identity: Arc<dyn IdentityReader>) -> Self {
        Self { identity }
    }

    pub async fn handle(&self, user_id: &UserId) -> Result<AdvisorProfile, AdvisorError> {
        let identity = self.identity.advisor(user_id).await?;
        Ok(AdvisorProfile {
            email: identity.email,
            comms_id: CommsId::derive(&identity.user_id),
        })
    }
}
