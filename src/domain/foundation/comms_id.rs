//! CommsId - display identifier derived from an advisor's opaque uid.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::UserId;

/// Five-character display identifier shown in the advisor banner.
///
/// Derived from the trailing five characters of the opaque user identifier,
/// uppercased and left-padded with `0` to a fixed width of five.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommsId(String);

const COMMS_ID_LEN: usize = 5;

impl CommsId {
    /// Derives the CommsId for a user.
    pub fn derive(user_id: &UserId) -> Self {
        let chars: Vec<char> = user_id.as_str().chars().collect();
        let start = chars.len().saturating_sub(COMMS_ID_LEN);
        let tail: String = chars[start..].iter().collect::<String>().to_uppercase();
        Self(format!("{:0>width$}", tail, width = COMMS_ID_LEN))
    }

    /// Returns the display string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
