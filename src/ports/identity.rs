//! Identity Reader Port - current-advisor identity lookup.

use async_trait::async_trait;

use crate::domain::foundation::UserId;

/// What the identity collaborator exposes about an advisor: the opaque
/// unique identifier plus an email for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorIdentity {
    pub user_id: UserId,
    pub email: Option<String>,
}

/// Errors from the identity collaborator.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("unknown advisor: {0}")]
    UnknownAdvisor(String),

    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}

/// Port for resolving advisor identity.
#[async_trait]
pub trait IdentityReader: Send + Sync {
    /// Resolves the identity behind an authenticated user id.
    async fn advisor(&self, user_id: &UserId) -> Result<AdvisorIdentity, IdentityError>;
}
