//! Artificial delay sampling for the greeting handler.
//!
//! One `DelaySampler` is constructed at startup, seeded from the wall
//! clock, and shared across all request tasks. Draws are synchronized
//! through a mutex; the critical section is a single RNG step, so there
//! is nothing to contend on at demo traffic levels.

use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Upper bound (exclusive) of the sampled delay, in milliseconds.
pub const MAX_DELAY_MS: u64 = 100;

/// Process-wide pseudo-random delay source.
///
/// Every draw yields a uniform duration in `[0, MAX_DELAY_MS)`
/// milliseconds.
pub struct DelaySampler {
    rng: Mutex<SmallRng>,
}

impl DelaySampler {
    /// Build a sampler seeded from the current wall-clock time.
    pub fn seeded_from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::seeded(seed)
    }

    /// Build a sampler from an explicit seed (deterministic, for tests).
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }

    /// Draw one delay. Safe to call from any number of tasks.
    pub fn sample(&self) -> Duration {
        // A draw cannot leave the RNG in a broken state, so a poisoned
        // lock is recovered rather than propagated.
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        Duration::from_millis(rng.gen_range(0..MAX_DELAY_MS))
    }
}
