use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::faults::FaultConfig;
use crate::gateway::GatewayConfig;
use crate::generator::GeneratorConfig;
use crate::logging::LoggingConfig;
use crate::poller::PollerConfig;
use crate::validate;

/// Top-level `wsim.toml` configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub generator: GeneratorConfig,
    pub gateway: GatewayConfig,
    pub poller: PollerConfig,
    pub faults: FaultConfig,
    pub logging: LoggingConfig,
}

impl SimConfig {
    /// Read and parse a `wsim.toml` file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.as_ref().display()))?;
        content.parse()
    }

    /// Resolve the session file against `base_dir` when it is relative.
    pub fn session_path(&self, base_dir: &Path) -> Option<PathBuf> {
        self.gateway.session_file.as_ref().map(|p| {
            if p.is_relative() {
                base_dir.join(p)
            } else {
                p.clone()
            }
        })
    }
}

impl FromStr for SimConfig {
    type Err = anyhow::Error;

    /// Parse a TOML string into a validated [`SimConfig`].
    fn from_str(toml_str: &str) -> anyhow::Result<Self> {
        let config: SimConfig = toml::from_str(toml_str)?;
        validate::validate(&config)?;
        Ok(config)
    }
}
