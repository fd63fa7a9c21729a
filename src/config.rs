//! Configuration for the fetch boundary.
//!
//! The parsing pipeline itself performs no I/O; the only tunable behavior
//! lives at the boundary where a remote CSV body is fetched before the
//! pipeline runs.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::{Error, Result};

/// Runtime configuration for loading CSV sources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Timeout for fetching a remote CSV body, in seconds
    pub fetch_timeout_secs: u64,

    /// User-Agent header sent with remote fetches
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Validate configuration values for consistency
    pub fn validate(&self) -> Result<()> {
        if self.fetch_timeout_secs == 0 {
            return Err(Error::configuration(
                "fetch timeout must be greater than 0 seconds",
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err(Error::configuration("user agent must not be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fetch_timeout_secs, DEFAULT_FETCH_TIMEOUT_SECS);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = Config {
            fetch_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_user_agent_rejected() {
        let config = Config {
            user_agent: "   ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
