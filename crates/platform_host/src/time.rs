//! Clock helpers used to stamp intake times.

use std::cell::Cell;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

thread_local! {
    static LAST_ISSUED_TIMESTAMP_MS: Cell<u64> = const { Cell::new(0) };
}

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Returns a strictly increasing unix millisecond timestamp.
///
/// Files dropped in one batch land within the same millisecond; issuing distinct stamps keeps
/// date ordering meaningful for them.
pub fn next_monotonic_timestamp_ms() -> u64 {
    let now = unix_time_ms_now();
    LAST_ISSUED_TIMESTAMP_MS.with(|last| {
        let next = now.max(last.get().saturating_add(1));
        last.set(next);
        next
    })
}

/// Source of unix millisecond timestamps.
pub trait Clock {
    /// Current timestamp in unix milliseconds.
    fn now_unix_ms(&self) -> u64;
}

#[derive(Debug, Clone, Copy, Default)]
/// Wall clock backed by [`next_monotonic_timestamp_ms`].
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix_ms(&self) -> u64 {
        next_monotonic_timestamp_ms()
    }
}

#[derive(Debug, Clone, Default)]
/// Clock that only moves when told to; each read advances by `step_ms`.
pub struct ManualClock {
    now_ms: Cell<u64>,
    step_ms: u64,
}

impl ManualClock {
    /// Starts at `start_ms` and advances `step_ms` after every read.
    pub fn new(start_ms: u64, step_ms: u64) -> Self {
        Self {
            now_ms: Cell::new(start_ms),
            step_ms,
        }
    }

    /// Moves the clock to `now_ms`.
    pub fn set(&self, now_ms: u64) {
        self.now_ms.set(now_ms);
    }
}

impl Clock for ManualClock {
    fn now_unix_ms(&self) -> u64 {
        let now = self.now_ms.get();
        self.now_ms.set(now.saturating_add(self.step_ms));
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotonic_timestamps_strictly_increase() {
        let a = next_monotonic_timestamp_ms();
        let b = next_monotonic_timestamp_ms();
        let c = SystemClock.now_unix_ms();
        assert!(a < b && b < c);
    }

    #[test]
    fn manual_clock_steps_after_each_read() {
        let clock = ManualClock::new(1_000, 10);
        assert_eq!(clock.now_unix_ms(), 1_000);
        assert_eq!(clock.now_unix_ms(), 1_010);
        clock.set(5);
        assert_eq!(clock.now_unix_ms(), 5);
    }
}
