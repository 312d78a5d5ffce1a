//! `setInterval`-backed tick scheduler.

use std::{fmt, rc::Rc, time::Duration};

use platform_host::{TaskHandle, TickScheduler};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

type TickCallback = Rc<dyn Fn(u64)>;

/// Browser tick scheduler that routes every interval tick to one callback.
///
/// Each interval callback re-queues the tick with `spawn_local` before calling `on_tick`, so the
/// tick may cancel and drop its own handle without freeing the running closure.
#[derive(Clone)]
pub struct IntervalTickScheduler {
    on_tick: TickCallback,
}

impl IntervalTickScheduler {
    /// Creates a scheduler that calls `on_tick(key)` for every tick of every live handle.
    pub fn new(on_tick: impl Fn(u64) + 'static) -> Self {
        Self {
            on_tick: Rc::new(on_tick),
        }
    }
}

impl fmt::Debug for IntervalTickScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalTickScheduler").finish_non_exhaustive()
    }
}

impl TickScheduler for IntervalTickScheduler {
    fn schedule_repeating(&self, key: u64, interval: Duration) -> Box<dyn TaskHandle> {
        #[cfg(target_arch = "wasm32")]
        {
            let on_tick = self.on_tick.clone();
            let callback = Closure::<dyn FnMut()>::new(move || {
                let on_tick = on_tick.clone();
                wasm_bindgen_futures::spawn_local(async move { on_tick(key) });
            });
            let timeout_ms = i32::try_from(interval.as_millis()).unwrap_or(i32::MAX);
            let interval_id = web_sys::window().and_then(|window| {
                window
                    .set_interval_with_callback_and_timeout_and_arguments_0(
                        callback.as_ref().unchecked_ref::<js_sys::Function>(),
                        timeout_ms,
                    )
                    .ok()
            });
            Box::new(IntervalHandle {
                interval_id,
                callback: Some(callback),
            })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, interval, &self.on_tick);
            Box::new(IntervalHandle {})
        }
    }
}

struct IntervalHandle {
    #[cfg(target_arch = "wasm32")]
    interval_id: Option<i32>,
    #[cfg(target_arch = "wasm32")]
    callback: Option<Closure<dyn FnMut()>>,
}

impl TaskHandle for IntervalHandle {
    fn cancel(&mut self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(interval_id) = self.interval_id.take() {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(interval_id);
                }
            }
            self.callback = None;
        }
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn native_scheduler_never_fires_and_cancels_cleanly() {
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let scheduler = IntervalTickScheduler::new(move |_| counter.set(counter.get() + 1));

        let mut handle = scheduler.schedule_repeating(1, Duration::from_millis(400));
        handle.cancel();
        handle.cancel();
        drop(handle);
        assert_eq!(fired.get(), 0);
    }
}
