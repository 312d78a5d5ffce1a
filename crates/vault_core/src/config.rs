//! Tunables for the simulated upload and notice lifetimes.

use std::time::Duration;

/// Interval between simulated upload ticks.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 400;
/// Upper bound of one simulated progress increment, in percent.
pub const DEFAULT_MAX_PROGRESS_STEP: f64 = 20.0;
/// How long a notice stays on screen before dismissing itself.
pub const DEFAULT_NOTICE_LIFETIME_MS: u64 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Runtime configuration for the file registry and its presentation runtime.
pub struct VaultConfig {
    /// Milliseconds between progress ticks for each uploading file.
    pub tick_interval_ms: u64,
    /// Largest increment a single tick may add, in percent. Increments fall in `(0, max]`.
    pub max_progress_step: f64,
    /// Milliseconds a notice remains visible.
    pub notice_lifetime_ms: u64,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            max_progress_step: DEFAULT_MAX_PROGRESS_STEP,
            notice_lifetime_ms: DEFAULT_NOTICE_LIFETIME_MS,
        }
    }
}

impl VaultConfig {
    /// Tick interval as a [`Duration`].
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Notice lifetime as a [`Duration`].
    pub fn notice_lifetime(&self) -> Duration {
        Duration::from_millis(self.notice_lifetime_ms)
    }
}
