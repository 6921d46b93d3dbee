//! ListPlansHandler - query handler for the plan table.

use std::sync::Arc;

use crate::domain::plan::Plan;
use crate::ports::PlanDirectory;

use super::PlansError;

/// Handler for listing plans.
pub struct ListPlansHandler {
    directory: Arc<dyn PlanDirectory>,
}

impl ListPlansHandler {
    pub fn new(directory: Arc<dyn PlanDirectory>) -> Self {
        Self { directory }
    }

    pub async fn handle(&self) -> Result<Vec<Plan>, PlansError> {
        Ok(self.directory.plans().await?)
    }
}
