//! Simulated network round-trip applied before every store operation.

use std::time::Duration;

/// Fixed delay awaited before each store operation.
///
/// A zero delay skips the timer entirely so tests stay fast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency(Duration);

impl SimulatedLatency {
    /// Round-trip time used when nothing else is configured.
    pub const DEFAULT: Self = Self(Duration::from_millis(300));

    /// No delay at all.
    pub const NONE: Self = Self(Duration::ZERO);

    /// Wrap an arbitrary delay.
    pub const fn new(delay: Duration) -> Self {
        Self(delay)
    }

    /// Delay expressed in milliseconds.
    pub const fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    /// Configured delay; zero means operations complete without waiting.
    pub const fn delay(self) -> Duration {
        self.0
    }

    /// Suspend the caller for the configured delay.
    pub async fn wait(self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::DEFAULT
    }
}
