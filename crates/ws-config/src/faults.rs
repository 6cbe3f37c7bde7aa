use serde::{Deserialize, Serialize};

/// Opt-in failure injection for gateway calls. The default never fails.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FaultConfig {
    /// Probability in `[0, 1]` that any single gateway call fails.
    pub failure_rate: f64,
}
