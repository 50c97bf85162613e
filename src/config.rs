use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::{error::invalid_config, Result};

/// Default bound on how long a `pop` waits for an item.
pub const POP_TIMEOUT: Duration = Duration::from_millis(400);

/// Wait policy shared by a queue and, through a registry, by every queue the
/// registry provisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueConfig {
    pop_timeout: Duration,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawQueueConfig {
    pop_timeout_ms: Option<u64>,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            pop_timeout: POP_TIMEOUT,
        }
    }
}

impl QueueConfig {
    pub fn with_pop_timeout(mut self, pop_timeout: Duration) -> Self {
        self.pop_timeout = pop_timeout;
        self
    }

    pub fn pop_timeout(&self) -> Duration {
        self.pop_timeout
    }

    /// Parse a config from TOML text.
    ///
    /// ```toml
    /// pop_timeout_ms = 250
    /// ```
    ///
    /// A missing `pop_timeout_ms` keeps the default.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let raw: RawQueueConfig = toml::from_str(text)?;
        let config = match raw.pop_timeout_ms {
            Some(ms) => Self::default().with_pop_timeout(Duration::from_millis(ms)),
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.pop_timeout.is_zero() {
            warn!("rejecting queue config with zero pop timeout");
            return Err(invalid_config("pop timeout must be non-zero"));
        }
        Ok(())
    }
}
