pub mod classify;
pub mod error;
pub mod model;

pub use classify::{ConfidenceTier, EnvironmentLimits, Severity, SpaceStatus, comfort_score};
pub use error::{CoreError, CoreReason, CoreResult};
