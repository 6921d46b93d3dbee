//! Stub identity reader for demo runs and tests.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::foundation::UserId;
use crate::ports::{AdvisorIdentity, IdentityError, IdentityReader};

/// Identity reader answering from a fixed uid-to-email table.
///
/// Unknown advisors still resolve, with no email on file, mirroring the
/// hosted identity provider's nullable email.
#[derive(Default)]
pub struct StubIdentityReader {
    emails: HashMap<UserId, String>,
}

impl StubIdentityReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an email for an advisor.
    pub fn with_email(mut self, user_id: UserId, email: impl Into<String>) -> Self {
        self.emails.insert(user_id, email.into());
        self
    }
}

#[async_trait]
impl IdentityReader for StubIdentityReader {
    async fn advisor(&self, user_id: &UserId) -> Result<AdvisorIdentity, IdentityError> {
        Ok(AdvisorIdentity {
            user_id: user_id.clone(),
            email: self.emails.get(user_id).cloned(),
        })
    }
}
