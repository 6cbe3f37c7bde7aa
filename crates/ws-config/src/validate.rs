use crate::sim::SimConfig;

/// Internal validation, called automatically by `SimConfig::from_str` / `load`.
pub(crate) fn validate(config: &SimConfig) -> anyhow::Result<()> {
    let rate = config.faults.failure_rate;
    if !(0.0..=1.0).contains(&rate) {
        anyhow::bail!("faults.failure_rate must be within [0, 1], got {rate}");
    }

    if config.poller.interval.is_zero() {
        anyhow::bail!("poller.interval must be > 0");
    }

    if config.logging.level.trim().is_empty() {
        anyhow::bail!("logging.level must not be empty");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&SimConfig::default()).is_ok());
    }

    #[test]
    fn nan_failure_rate_is_rejected() {
        let mut cfg = SimConfig::default();
        cfg.faults.failure_rate = f64::NAN;
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn blank_level_is_rejected() {
        let mut cfg = SimConfig::default();
        cfg.logging.level = "  ".into();
        let err = validate(&cfg).unwrap_err();
        assert!(err.to_string().contains("logging.level"));
    }
}
