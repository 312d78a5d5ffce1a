//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring for file intake (object URLs over
//! `web_sys::File`), repeating interval ticks, anchor-driven downloads, the color-scheme class on
//! the document element, and `localStorage` preferences. Non-wasm builds compile to inert
//! fallbacks so the workspace tests run natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod download;
pub mod intake;
pub mod storage;
pub mod theme;
pub mod timers;

pub use download::trigger_download;
pub use intake::{raw_files_from_list, BrowserFile};
pub use storage::local_prefs::WebPrefsStore;
pub use theme::{apply_theme_class, system_prefers_dark};
pub use timers::IntervalTickScheduler;
