//! Random source used by mock generators.
//!
//! Post shuffling, participation figures, local statistics and tracking ids
//! all draw from a `RandomSource`, so tests can pin them with a seed or a
//! stub sequence.

use std::sync::Mutex;

const BASE36_UPPER: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub trait RandomSource: Send + Sync {
    /// Uniform value in `0..upper`. Returns 0 when `upper` is 0.
    fn next_below(&self, upper: u64) -> u64;
}

/// `fastrand`-backed source.
pub struct FastRandom {
    rng: Mutex<fastrand::Rng>,
}

impl FastRandom {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }
}

impl Default for FastRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for FastRandom {
    fn next_below(&self, upper: u64) -> u64 {
        if upper == 0 {
            return 0;
        }
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.u64(..upper)
    }
}

/// Fisher-Yates shuffle in place.
pub fn shuffle<T>(random: &dyn RandomSource, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = random.next_below(i as u64 + 1) as usize;
        items.swap(i, j);
    }
}

/// Uniform value in `low..=high`.
pub fn between(random: &dyn RandomSource, low: u64, high: u64) -> u64 {
    if high <= low {
        return low;
    }
    low + random.next_below(high - low + 1)
}

/// Uppercase base-36 token of exactly `len` characters.
pub fn base36_token(random: &dyn RandomSource, len: usize) -> String {
    (0..len)
        .map(|_| {
            let idx = random.next_below(BASE36_UPPER.len() as u64) as usize;
            BASE36_UPPER[idx] as char
        })
        .collect()
}
