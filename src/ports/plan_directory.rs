//! Plan Directory Port - read API for plan and participant records.

use async_trait::async_trait;

use crate::domain::participant::Participant;
use crate::domain::plan::Plan;

/// Errors from the plan data feed.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// Feed unavailable or failed.
    #[error("plan directory unavailable: {0}")]
    Unavailable(String),

    /// Feed payload could not be decoded.
    #[error("plan directory payload error: {0}")]
    Payload(String),
}

/// Port for reading plans and participants.
///
/// Filtering and pagination are applied by the caller; the directory
/// returns the full data set of the current fetch cycle.
#[async_trait]
pub trait PlanDirectory: Send + Sync {
    /// All plans, each exclusively owning its participant list.
    async fn plans(&self) -> Result<Vec<Plan>, DirectoryError>;

    /// All participants across plans, in feed order.
    async fn participants(&self) -> Result<Vec<Participant>, DirectoryError>;
}
