//! Reducer actions, side-effect intents, and transition logic for the file registry.

use platform_host::{RawFile, TickScheduler};

use crate::{
    error::RegistryError,
    format::pluralize_files,
    model::{DownloadHandle, FileId},
    notice::Notice,
    registry::FileRegistry,
};

#[derive(Debug)]
/// Actions accepted by [`reduce_vault`] to mutate a [`FileRegistry`].
pub enum VaultAction {
    /// Register files supplied by drop or picker.
    AddFiles(Vec<Box<dyn RawFile>>),
    /// Delete a file.
    RemoveFile {
        /// File to delete.
        file_id: FileId,
    },
    /// Save a file's bytes under its original name.
    DownloadFile {
        /// File to save.
        file_id: FileId,
    },
    /// Advance a simulated upload by one step.
    ProgressTick {
        /// File whose timer fired.
        file_id: FileId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side effects requested by the reducer and executed by the presentation runtime.
pub enum VaultEffect {
    /// Show a toast.
    Notify(Notice),
    /// Hand the bytes to the host's save mechanism.
    StartDownload(DownloadHandle),
}

/// Applies a [`VaultAction`] to the registry and collects resulting side effects.
///
/// # Errors
///
/// Returns [`RegistryError::NotFound`] when a download references a file that is not present.
pub fn reduce_vault(
    registry: &mut FileRegistry,
    scheduler: &dyn TickScheduler,
    action: VaultAction,
) -> Result<Vec<VaultEffect>, RegistryError> {
    let mut effects = Vec::new();
    match action {
        VaultAction::AddFiles(raw_files) => {
            let outcome = registry.add_files(raw_files, scheduler);
            if !outcome.added.is_empty() {
                effects.push(VaultEffect::Notify(Notice::success(format!(
                    "{} added successfully",
                    pluralize_files(outcome.added.len())
                ))));
            }
            for failure in outcome.failed {
                effects.push(VaultEffect::Notify(Notice::error(format!(
                    "Could not add {}: {}",
                    failure.name, failure.reason
                ))));
            }
        }
        VaultAction::RemoveFile { file_id } => {
            if registry.remove_file(file_id) {
                effects.push(VaultEffect::Notify(Notice::info("File removed")));
            }
        }
        VaultAction::DownloadFile { file_id } => {
            let handle = registry.download_handle(file_id)?;
            effects.push(VaultEffect::StartDownload(handle));
            effects.push(VaultEffect::Notify(Notice::success("File download started")));
        }
        VaultAction::ProgressTick { file_id } => {
            registry.tick(file_id);
        }
    }
    Ok(effects)
}
