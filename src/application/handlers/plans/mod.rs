//! Plan and participant query handlers.

mod list_participants;
mod list_plans;

pub use list_participants::{
    ListParticipantsHandler, ListParticipantsQuery, ListParticipantsResult,
};
pub use list_plans::ListPlansHandler;

use crate::ports::DirectoryError;

/// Errors from plan directory queries.
#[derive(Debug, thiserror::Error)]
pub enum PlansError {
    #[error("plan directory failed: {0}")]
    Directory(#[from] DirectoryError),
}
