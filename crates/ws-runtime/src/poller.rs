use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use ws_core::model::DataEnvelope;
use ws_datagen::Generator;

use crate::clock::Clock;
use crate::hub::{PollUpdate, SubscriptionHub};

/// Regenerate the three live series every `interval` and publish them until
/// cancelled. The first tick fires one full interval after start.
#[tracing::instrument(name = "poller", skip_all, fields(interval = ?interval))]
pub(crate) async fn run_poller(
    generator: Arc<Mutex<Generator>>,
    hub: SubscriptionHub,
    clock: Arc<dyn Clock>,
    interval: Duration,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut tick = tokio::time::interval_at(Instant::now() + interval, interval);
    tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ws_info!(poll, "poller started");

    loop {
        tokio::select! {
            _ = tick.tick() => {
                let updates = poll_once(&generator, clock.as_ref());
                for update in &updates {
                    let delivered = hub.publish(update);
                    ws_debug!(poll,
                        topic = update.domain().topic(),
                        readings = update.len(),
                        subscribers = delivered,
                        "published update"
                    );
                }
            }
            _ = cancel.cancelled() => break,
        }
    }

    ws_info!(poll, "poller stopped");
    Ok(())
}

fn poll_once(generator: &Mutex<Generator>, clock: &dyn Clock) -> [PollUpdate; 3] {
    let now = clock.now();
    let mut generator = generator.lock().expect("generator lock poisoned");
    [
        PollUpdate::Occupancy(DataEnvelope::new(generator.occupancy(now), now)),
        PollUpdate::Environmental(DataEnvelope::new(generator.environmental(now), now)),
        PollUpdate::Energy(DataEnvelope::new(generator.energy(now), now)),
    ]
}
