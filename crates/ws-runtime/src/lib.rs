#[macro_use]
mod log_macros;

pub mod clock;
pub mod error;
pub mod faults;
pub mod gateway;
pub mod hub;
pub mod lifecycle;
mod poller;
mod roster;
pub mod session;
pub mod tracing_init;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{RuntimeError, RuntimeReason, RuntimeResult};
pub use gateway::{Gateway, GatewayBuilder};
pub use hub::{PollUpdate, Subscription, SubscriptionHub};
pub use session::{FileStore, MemoryStore, SessionState, SessionStore};
