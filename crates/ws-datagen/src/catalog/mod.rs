//! Fixture catalogs standing in for model output.
//!
//! Each catalog is a static table; every call re-jitters the numbers so the
//! dashboard looks alive. Confidence moves by at most ±0.05 and stays in
//! `[0, 1]`; savings move by at most ±10 %.

pub mod alerts;
pub mod anomalies;
pub mod conflicts;
pub mod optimizations;
pub mod predictions;
pub mod recommendations;


pub use alerts::{alert_page, build_alerts};
pub use anomalies::build_anomalies;
pub use conflicts::detect_conflicts;
pub use optimizations::build_optimizations;
pub use predictions::build_ai_predictions;
pub use recommendations::build_recommendations;

use crate::random::RandomSource;

pub(crate) const CONFIDENCE_JITTER: f64 = 0.05;
pub(crate) const SAVINGS_JITTER: f64 = 0.10;

pub(crate) fn jitter_confidence(base: f64, rng: &mut dyn RandomSource) -> f64 {
    (base + rng.jitter(CONFIDENCE_JITTER)).clamp(0.0, 1.0)
}

pub(crate) fn jitter_savings(base: f64, rng: &mut dyn RandomSource) -> f64 {
    (base * (1.0 + rng.jitter(SAVINGS_JITTER))).max(0.0)
}
