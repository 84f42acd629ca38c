// Shared dependencies of the mock generators: a random source and a
// latency simulator. Cloned into each domain API.

use std::sync::Arc;
use std::time::Duration;

use crate::random::{FastRandom, RandomSource};

/// Sleeps before a mock result is returned so callers see realistic
/// loading states. Disabled in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencySimulator {
    enabled: bool,
}

impl LatencySimulator {
    pub fn simulated() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub async fn wait(&self, delay: Duration) {
        if self.enabled {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for LatencySimulator {
    fn default() -> Self {
        Self::simulated()
    }
}

#[derive(Clone)]
pub struct MockContext {
    pub random: Arc<dyn RandomSource>,
    pub latency: LatencySimulator,
}

impl MockContext {
    pub fn new(random: Arc<dyn RandomSource>, latency: LatencySimulator) -> Self {
        Self { random, latency }
    }

    /// Seeded randomness, no artificial delay.
    pub fn deterministic(seed: u64) -> Self {
        Self::new(
            Arc::new(FastRandom::with_seed(seed)),
            LatencySimulator::disabled(),
        )
    }

    pub fn random(&self) -> &dyn RandomSource {
        self.random.as_ref()
    }
}

impl Default for MockContext {
    fn default() -> Self {
        Self::new(Arc::new(FastRandom::new()), LatencySimulator::simulated())
    }
}
