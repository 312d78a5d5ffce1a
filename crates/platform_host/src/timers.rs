//! Repeating tick scheduler contracts and host-neutral adapters.

use std::{cell::RefCell, rc::Rc, time::Duration};

/// Cancellable handle for a scheduled repeating task.
pub trait TaskHandle {
    /// Stops further ticks. Calling it more than once is harmless.
    fn cancel(&mut self);
}

/// Host service that fires a keyed tick on a fixed interval until the returned handle is
/// cancelled.
///
/// The scheduler owns the routing of ticks back into the application; callers only supply the
/// key they want to see again.
pub trait TickScheduler {
    /// Starts delivering ticks for `key` every `interval`.
    fn schedule_repeating(&self, key: u64, interval: Duration) -> Box<dyn TaskHandle>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One schedule request observed by [`ManualTickScheduler`].
pub struct ScheduledTick {
    /// Key passed to [`TickScheduler::schedule_repeating`].
    pub key: u64,
    /// Requested interval.
    pub interval: Duration,
    /// Whether the handle has been cancelled.
    pub cancelled: bool,
}

#[derive(Debug, Clone, Default)]
/// Scheduler that records requests instead of firing; callers drive ticks by hand.
///
/// Cancellation through a handle is visible through [`ManualTickScheduler::is_cancelled`], and a
/// dropped handle counts as cancelled.
pub struct ManualTickScheduler {
    scheduled: Rc<RefCell<Vec<ScheduledTick>>>,
}

impl ManualTickScheduler {
    /// Snapshot of every schedule request seen so far.
    pub fn scheduled(&self) -> Vec<ScheduledTick> {
        self.scheduled.borrow().clone()
    }

    /// Keys whose handles are still live.
    pub fn active_keys(&self) -> Vec<u64> {
        self.scheduled
            .borrow()
            .iter()
            .filter(|tick| !tick.cancelled)
            .map(|tick| tick.key)
            .collect()
    }

    /// Returns `true` when every handle issued for `key` has been cancelled or dropped.
    ///
    /// Returns `false` for keys that were never scheduled.
    pub fn is_cancelled(&self, key: u64) -> bool {
        let scheduled = self.scheduled.borrow();
        let mut matching = scheduled.iter().filter(|tick| tick.key == key).peekable();
        matching.peek().is_some() && matching.all(|tick| tick.cancelled)
    }
}

struct ManualTaskHandle {
    index: usize,
    scheduled: Rc<RefCell<Vec<ScheduledTick>>>,
}

impl TaskHandle for ManualTaskHandle {
    fn cancel(&mut self) {
        if let Some(tick) = self.scheduled.borrow_mut().get_mut(self.index) {
            tick.cancelled = true;
        }
    }
}

impl Drop for ManualTaskHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl TickScheduler for ManualTickScheduler {
    fn schedule_repeating(&self, key: u64, interval: Duration) -> Box<dyn TaskHandle> {
        let mut scheduled = self.scheduled.borrow_mut();
        scheduled.push(ScheduledTick {
            key,
            interval,
            cancelled: false,
        });
        Box::new(ManualTaskHandle {
            index: scheduled.len() - 1,
            scheduled: self.scheduled.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_scheduler_tracks_cancel_and_drop() {
        let scheduler = ManualTickScheduler::default();
        let mut first = scheduler.schedule_repeating(1, Duration::from_millis(400));
        let second = scheduler.schedule_repeating(2, Duration::from_millis(400));

        assert_eq!(scheduler.active_keys(), vec![1, 2]);
        assert!(!scheduler.is_cancelled(1));

        first.cancel();
        first.cancel();
        assert!(scheduler.is_cancelled(1));
        assert_eq!(scheduler.active_keys(), vec![2]);

        drop(second);
        assert!(scheduler.is_cancelled(2));
        assert!(scheduler.active_keys().is_empty());
        assert!(!scheduler.is_cancelled(99));
    }
}
