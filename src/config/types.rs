//! Configuration types for anomaly detection.

use serde::Deserialize;

use crate::detection::DEFAULT_CONSECUTIVE_DAYS_THRESHOLD;
use crate::error::{EngineError, EngineResult};

/// Detection settings, deserialized from a YAML configuration file.
///
/// Only the consecutive-days threshold is configurable; the short-break
/// window and the long-shift threshold are fixed properties of the rules.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectionConfig {
    /// Minimum run length of adjacent same-employee records that triggers
    /// the consecutive-days rule. Defaults to 7.
    #[serde(default = "default_threshold")]
    pub consecutive_days_threshold: u32,
}

fn default_threshold() -> u32 {
    DEFAULT_CONSECUTIVE_DAYS_THRESHOLD
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            consecutive_days_threshold: DEFAULT_CONSECUTIVE_DAYS_THRESHOLD,
        }
    }
}

impl DetectionConfig {
    /// Checks that the configured threshold is usable.
    pub fn validate(&self) -> EngineResult<()> {
        if self.consecutive_days_threshold == 0 {
            return Err(EngineError::InvalidThreshold {
                value: self.consecutive_days_threshold,
            });
        }
        Ok(())
    }
}
