//! Host-neutral contracts shared by the file registry and its browser adapters.
//!
//! This crate owns the seams between the application core and the host: raw file intake,
//! repeating tick scheduling, clocks and randomness, and lightweight preference storage. Concrete
//! browser implementations live in `platform_host_web`; the in-memory adapters here back
//! non-browser targets and tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod intake;
pub mod prefs;
pub mod random;
pub mod time;
pub mod timers;

pub use intake::{ContentRef, MemoryRawFile, RawFile};
pub use prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, PrefsStore, PrefsStoreFuture, ThemeMode,
    THEME_PREF_KEY,
};
pub use random::random_unit;
pub use time::{next_monotonic_timestamp_ms, unix_time_ms_now, Clock, ManualClock, SystemClock};
pub use timers::{ManualTickScheduler, ScheduledTick, TaskHandle, TickScheduler};
