//! Headless file registry for the DropVault shell.
//!
//! Everything the UI shows about files is derived from [`FileRegistry`]: the records, their
//! simulated upload progress, and the filtered/sorted projections computed by [`derive_view`].
//! User intents flow through [`reduce_vault`], which returns [`VaultEffect`] values for the
//! presentation runtime to execute.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod notice;
pub mod progress;
pub mod reducer;
pub mod registry;
pub mod view;

pub use config::VaultConfig;
pub use error::RegistryError;
pub use format::{
    classify_file, file_count_heading, format_byte_size, format_upload_date, pluralize_files,
    FileKind,
};
pub use model::{
    CategoryFilter, DownloadHandle, FileCategory, FileId, FileManagerPrefs, FileRecord, SortField,
    SortOrder, ViewMode, ViewState, FILES_PREFS_KEY,
};
pub use notice::{Notice, NoticeLevel};
pub use progress::{ProgressStepSource, RandomSteps, ScriptedSteps, UploadProgress};
pub use reducer::{reduce_vault, VaultAction, VaultEffect};
pub use registry::{AddFilesOutcome, FileRegistry, IntakeFailure};
pub use view::derive_view;
