use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::HumanDuration;

/// Background refresh loop settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PollerConfig {
    /// Interval between two regenerations of the live series.
    pub interval: HumanDuration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: HumanDuration::from(Duration::from_secs(45)),
        }
    }
}
