use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::HumanDuration;

/// Simulated-latency and session settings for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Delay for cheap lookups (session, summary counters).
    pub light_latency: HumanDuration,
    /// Delay for ordinary snapshot calls.
    pub standard_latency: HumanDuration,
    /// Delay for roster, prediction and export calls.
    pub heavy_latency: HumanDuration,
    /// JSON file backing the session keys. Relative paths are resolved
    /// against the config file's parent directory. `None` keeps the session
    /// in memory.
    pub session_file: Option<PathBuf>,
}

impl GatewayConfig {
    /// A configuration with every latency set to zero, for tests and batch use.
    pub fn instant() -> Self {
        let zero = HumanDuration::from(Duration::ZERO);
        Self {
            light_latency: zero,
            standard_latency: zero,
            heavy_latency: zero,
            session_file: None,
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            light_latency: HumanDuration::from(Duration::from_millis(150)),
            standard_latency: HumanDuration::from(Duration::from_millis(400)),
            heavy_latency: HumanDuration::from(Duration::from_secs(1)),
            session_file: None,
        }
    }
}
