use serde::{Deserialize, Serialize};

/// Random-source settings for the snapshot builders.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible datasets. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}
