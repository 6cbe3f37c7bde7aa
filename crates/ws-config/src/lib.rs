pub mod faults;
pub mod gateway;
pub mod generator;
pub mod logging;
pub mod poller;
pub mod sim;
pub mod types;
pub mod validate;

pub use faults::FaultConfig;
pub use gateway::GatewayConfig;
pub use generator::GeneratorConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use poller::PollerConfig;
pub use sim::SimConfig;
pub use types::HumanDuration;
