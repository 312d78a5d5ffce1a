//! The file registry: records, their content references, and simulated upload progress.

use std::{collections::HashMap, fmt};

use platform_host::{Clock, ContentRef, RawFile, SystemClock, TaskHandle, TickScheduler};

use crate::{
    config::VaultConfig,
    error::RegistryError,
    model::{DownloadHandle, FileId, FileRecord, ViewState},
    progress::{sanitize_step, ProgressStepSource, RandomSteps, UploadProgress},
    view::derive_view,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A raw file that could not be registered.
pub struct IntakeFailure {
    /// Name reported by the host.
    pub name: String,
    /// Host error text.
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Result of one [`FileRegistry::add_files`] batch.
pub struct AddFilesOutcome {
    /// Ids issued for the files that were registered, in batch order.
    pub added: Vec<FileId>,
    /// Files whose content could not be opened.
    pub failed: Vec<IntakeFailure>,
}

/// Authoritative collection of file records.
///
/// Every record owns one [`ContentRef`] and, while uploading, one progress entry plus one
/// scheduled tick handle. All of them are created by [`FileRegistry::add_files`] and released
/// together by [`FileRegistry::remove_file`].
pub struct FileRegistry {
    config: VaultConfig,
    next_file_id: u64,
    records: Vec<FileRecord>,
    contents: HashMap<FileId, ContentRef>,
    progress: HashMap<FileId, UploadProgress>,
    timers: HashMap<FileId, Box<dyn TaskHandle>>,
    steps: Box<dyn ProgressStepSource>,
    clock: Box<dyn Clock>,
}

impl fmt::Debug for FileRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileRegistry")
            .field("config", &self.config)
            .field("next_file_id", &self.next_file_id)
            .field("records", &self.records)
            .field("progress", &self.progress)
            .field("active_timers", &self.timers.len())
            .finish()
    }
}

impl Default for FileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FileRegistry {
    /// Creates an empty registry using random increments and the system clock.
    pub fn new() -> Self {
        Self {
            config: VaultConfig::default(),
            next_file_id: 1,
            records: Vec::new(),
            contents: HashMap::new(),
            progress: HashMap::new(),
            timers: HashMap::new(),
            steps: Box::new(RandomSteps),
            clock: Box::new(SystemClock),
        }
    }

    /// Replaces the progress increment source.
    pub fn with_step_source(mut self, steps: impl ProgressStepSource + 'static) -> Self {
        self.steps = Box::new(steps);
        self
    }

    /// Replaces the clock used to stamp intake times.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replaces the runtime configuration.
    pub fn with_config(mut self, config: VaultConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    /// Registers a batch of user-supplied files and starts their simulated uploads.
    ///
    /// Files whose content cannot be opened are reported in [`AddFilesOutcome::failed`] and
    /// leave no trace in the registry; the rest of the batch proceeds.
    pub fn add_files(
        &mut self,
        raw_files: Vec<Box<dyn RawFile>>,
        scheduler: &dyn TickScheduler,
    ) -> AddFilesOutcome {
        let mut outcome = AddFilesOutcome::default();

        for raw in raw_files {
            let content = match raw.open_content() {
                Ok(content) => content,
                Err(reason) => {
                    outcome.failed.push(IntakeFailure {
                        name: raw.name(),
                        reason,
                    });
                    continue;
                }
            };

            let id = FileId(self.next_file_id);
            self.next_file_id = self.next_file_id.saturating_add(1);

            self.records.push(FileRecord {
                id,
                name: raw.name(),
                size: raw.size(),
                mime_type: raw.mime_type(),
                uploaded_at_unix_ms: self.clock.now_unix_ms(),
            });
            self.contents.insert(id, content);
            self.progress.insert(id, UploadProgress::START);
            let handle = scheduler.schedule_repeating(id.0, self.config.tick_interval());
            self.timers.insert(id, handle);
            outcome.added.push(id);
        }

        outcome
    }

    /// Removes a file and everything it owns. Returns `false` for unknown ids.
    pub fn remove_file(&mut self, id: FileId) -> bool {
        if let Some(mut handle) = self.timers.remove(&id) {
            handle.cancel();
        }
        self.progress.remove(&id);
        let content = self.contents.remove(&id);

        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        drop(content);
        self.records.len() != before
    }

    /// Advances the simulated upload of `id` by one increment.
    ///
    /// Returns the new state, or `None` when the id is unknown or already complete. A tick never
    /// creates a progress entry.
    pub fn tick(&mut self, id: FileId) -> Option<UploadProgress> {
        let current = match self.progress.get(&id) {
            Some(UploadProgress::Uploading(percent)) => UploadProgress::Uploading(*percent),
            Some(UploadProgress::Complete) | None => return None,
        };

        let max_step = self.config.max_progress_step;
        let step = sanitize_step(self.steps.next_step(max_step), max_step);
        let next = current.advanced(step);
        self.progress.insert(id, next);

        if next.is_complete() {
            if let Some(mut handle) = self.timers.remove(&id) {
                handle.cancel();
            }
        }
        Some(next)
    }

    /// Upload state of `id`. Files without an entry read as complete.
    pub fn progress(&self, id: FileId) -> UploadProgress {
        self.progress
            .get(&id)
            .copied()
            .unwrap_or(UploadProgress::Complete)
    }

    /// Number of files still uploading.
    pub fn uploading_count(&self) -> usize {
        self.progress
            .values()
            .filter(|progress| !progress.is_complete())
            .count()
    }

    /// Save/preview reference for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when no record has that id.
    pub fn download_handle(&self, id: FileId) -> Result<DownloadHandle, RegistryError> {
        let record = self.get(id).ok_or(RegistryError::NotFound(id))?;
        let content = self.contents.get(&id).ok_or(RegistryError::NotFound(id))?;
        Ok(DownloadHandle {
            file_id: id,
            file_name: record.name.clone(),
            href: content.href().to_string(),
        })
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    /// Looks up one record.
    pub fn get(&self, id: FileId) -> Option<&FileRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when no files are registered.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Shorthand for [`derive_view`] over this registry's records.
    pub fn view(&self, view_state: &ViewState) -> Vec<FileRecord> {
        derive_view(&self.records, view_state)
    }
}
