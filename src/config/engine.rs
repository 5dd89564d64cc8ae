//! Matching engine configuration.

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use crate::matching::Algorithm;

/// Settings for the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Algorithm used when a request does not name one
    pub default_algorithm: Algorithm,

    /// Maximum text length in characters accepted for analysis (0 disables the check)
    pub max_text_length: usize,

    /// Number of threads used to search patterns in parallel
    pub workers: usize,

    /// Minimum catalog size before patterns are searched in parallel
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_algorithm: Algorithm::Linear,
            max_text_length: 5000,
            workers: num_cpus::get(),
            parallel_threshold: 64,
        }
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.workers == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "engine.workers".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if self.parallel_threshold == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "engine.parallel_threshold".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}
