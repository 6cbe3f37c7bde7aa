//! Opt-in failure injection for gateway calls.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use orion_error::prelude::*;
use ws_datagen::{RandomSource, SeededSource};

use crate::error::{RuntimeReason, RuntimeResult};

/// Decides, per call, whether the gateway should fail.
///
/// Forced failures queued with [`force_next`](Self::force_next) are consumed
/// first. Otherwise each call fails with probability `failure_rate`; a rate of
/// zero never draws from the RNG.
pub struct FaultInjector {
    failure_rate: f64,
    forced: AtomicU32,
    rng: Mutex<SeededSource>,
}

impl FaultInjector {
    pub fn new(failure_rate: f64, seed: Option<u64>) -> Self {
        Self {
            failure_rate: failure_rate.clamp(0.0, 1.0),
            forced: AtomicU32::new(0),
            rng: Mutex::new(SeededSource::from_config(seed)),
        }
    }

    /// Never fails unless forced.
    pub fn disabled() -> Self {
        Self::new(0.0, Some(0))
    }

    pub fn failure_rate(&self) -> f64 {
        self.failure_rate
    }

    /// Make the next `n` checks fail regardless of the rate.
    pub fn force_next(&self, n: u32) {
        self.forced.fetch_add(n, Ordering::SeqCst);
    }

    pub fn pending_forced(&self) -> u32 {
        self.forced.load(Ordering::SeqCst)
    }

    pub fn check(&self, op: &'static str) -> RuntimeResult<()> {
        let forced = self
            .forced
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if forced {
            return Err(StructError::from(RuntimeReason::InjectedFault)
                .with_detail(format!("{op}: forced failure")));
        }

        if self.failure_rate > 0.0 {
            let hit = self
                .rng
                .lock()
                .expect("fault rng lock poisoned")
                .chance(self.failure_rate);
            if hit {
                return Err(StructError::from(RuntimeReason::InjectedFault).with_detail(format!(
                    "{op}: random failure (rate {})",
                    self.failure_rate
                )));
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for FaultInjector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaultInjector")
            .field("failure_rate", &self.failure_rate)
            .field("forced", &self.pending_forced())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_never_fails() {
        let faults = FaultInjector::disabled();
        for _ in 0..1_000 {
            assert!(faults.check("get_space_data").is_ok());
        }
    }

    #[test]
    fn forced_failures_are_consumed_in_order() {
        let faults = FaultInjector::disabled();
        faults.force_next(2);
        assert!(faults.check("a").is_err());
        assert_eq!(faults.pending_forced(), 1);
        assert!(faults.check("b").is_err());
        assert!(faults.check("c").is_ok());
        assert_eq!(faults.pending_forced(), 0);
    }

    #[test]
    fn full_rate_always_fails() {
        let faults = FaultInjector::new(1.0, Some(9));
        assert!((0..50).all(|_| faults.check("x").is_err()));
    }

    #[test]
    fn partial_rate_fails_sometimes() {
        let faults = FaultInjector::new(0.5, Some(3));
        let failures = (0..400).filter(|_| faults.check("x").is_err()).count();
        assert!((100..300).contains(&failures), "failures = {failures}");
    }

    #[test]
    fn rate_is_clamped() {
        assert_eq!(FaultInjector::new(4.0, None).failure_rate(), 1.0);
        assert_eq!(FaultInjector::new(-1.0, None).failure_rate(), 0.0);
    }
}
