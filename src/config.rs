//! Configuration management for Floodgate.

use serde::{Deserialize, Serialize};

/// Admission control configuration.
///
/// All values are fixed at process start; nothing here is reloaded at
/// runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimiterConfig {
    /// Duration of the trailing window in milliseconds
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,

    /// Maximum admitted requests per client key within one window
    #[serde(default = "default_max_requests")]
    pub max_requests: usize,

    /// Tracked-key count above which a full compaction pass runs
    #[serde(default = "default_compaction_threshold")]
    pub compaction_threshold: usize,
}

impl Default for LimiterConfig {
    fn default() -> Self {
        Self {
            window_ms: default_window_ms(),
            max_requests: default_max_requests(),
            compaction_threshold: default_compaction_threshold(),
        }
    }
}

fn default_window_ms() -> u64 {
    60_000
}

fn default_max_requests() -> usize {
    60
}

fn default_compaction_threshold() -> usize {
    10_000
}

impl LimiterConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: &str) -> crate::error::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: LimiterConfig = serde_yaml::from_str(&contents)
            .map_err(|e| crate::error::FloodgateError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would make every check degenerate.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.window_ms == 0 {
            return Err(crate::error::FloodgateError::Config(
                "window_ms must be greater than zero".to_string(),
            ));
        }
        if self.max_requests == 0 {
            return Err(crate::error::FloodgateError::Config(
                "max_requests must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
