//! Realtime store configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Realtime store configuration.
///
/// Without a database URL the service keeps records in process memory,
/// which is enough for single-tenant demo runs.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Realtime database base URL, e.g. `https://demo-rtdb.firebaseio.com`
    pub database_url: Option<String>,

    /// Optional auth token appended to store requests
    pub auth_token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl StoreConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if a hosted store is configured
    pub fn has_database_url(&self) -> bool {
        self.database_url.as_ref().is_some_and(|u| !u.is_empty())
    }

    /// Validate store configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(url) = &self.database_url {
            if !url.is_empty() && !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::invalid_url("store.database_url", url));
            }
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            auth_token: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    15
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_have_no_database() {
        let config = StoreConfig::default();
        assert!(!config.has_database_url());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_url() {
        let config = StoreConfig {
            database_url: Some("demo-rtdb.firebaseio.com".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
