//! Runtime provider and context wiring for the file registry.
//!
//! This module owns the long-lived registry signal, the browser tick scheduler, the reducer
//! effect queue, and the toast queue. Page composition stays in [`crate::pages`].

use leptos::*;
use platform_host_web::IntervalTickScheduler;
use vault_core::{
    reduce_vault, FileId, FileRegistry, Notice, VaultAction, VaultConfig, VaultEffect,
};

use crate::{
    effect_executor,
    toasts::{show_notice, ToastQueue},
};

#[derive(Clone, Copy)]
/// Leptos context for reading registry state and dispatching [`VaultAction`] values.
pub struct VaultRuntimeContext {
    /// Runtime configuration shared with the registry.
    pub config: StoredValue<VaultConfig>,
    /// Reactive registry signal. Every mutation runs inside one `update`.
    pub registry: RwSignal<FileRegistry>,
    /// Queue of effects emitted by the reducer and drained by the effect executor.
    pub effects: RwSignal<Vec<VaultEffect>>,
    /// Visible toasts, newest first.
    pub(crate) toasts: RwSignal<ToastQueue>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<VaultAction>,
}

impl VaultRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: VaultAction) {
        self.dispatch.call(action);
    }

    /// Shows a toast for the configured notice lifetime.
    pub fn notify(&self, notice: Notice) {
        let lifetime = self.config.with_value(VaultConfig::notice_lifetime);
        show_notice(self.toasts, notice, lifetime);
    }
}

/// Action for a scheduler tick. Scheduler keys are the raw file id.
fn tick_action(key: u64) -> VaultAction {
    VaultAction::ProgressTick {
        file_id: FileId(key),
    }
}

#[component]
/// Provides [`VaultRuntimeContext`] to descendant components.
pub fn VaultProvider(
    /// Registry tunables.
    #[prop(optional)]
    config: Option<VaultConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let registry = create_rw_signal(FileRegistry::new().with_config(config));
    let effects = create_rw_signal(Vec::<VaultEffect>::new());
    let toasts = create_rw_signal(ToastQueue::default());
    let config = store_value(config);

    // Ticks route back through dispatch, which does not exist until the scheduler does.
    let dispatch_slot = store_value(None::<Callback<VaultAction>>);
    let scheduler = store_value(IntervalTickScheduler::new(move |key| {
        if let Some(dispatch) = dispatch_slot.try_get_value().flatten() {
            dispatch.call(tick_action(key));
        }
    }));

    let dispatch = Callback::new(move |action: VaultAction| {
        let result = scheduler.with_value(|scheduler| {
            registry.try_update(|registry| reduce_vault(registry, scheduler, action))
        });

        match result {
            Some(Ok(new_effects)) => {
                if !new_effects.is_empty() {
                    effects.update(|queue| queue.extend(new_effects));
                }
            }
            Some(Err(err)) => {
                logging::warn!("vault reducer error: {err}");
                let lifetime = config.with_value(VaultConfig::notice_lifetime);
                show_notice(toasts, Notice::error(err.user_message()), lifetime);
            }
            None => logging::warn!("vault registry disposed; action dropped"),
        }
    });
    dispatch_slot.set_value(Some(dispatch));

    let runtime = VaultRuntimeContext {
        config,
        registry,
        effects,
        toasts,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`VaultRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`VaultProvider`].
pub fn use_vault_runtime() -> VaultRuntimeContext {
    use_context::<VaultRuntimeContext>().expect("VaultRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use platform_host::{ManualClock, ManualTickScheduler, MemoryRawFile, RawFile};
    use pretty_assertions::assert_eq;
    use vault_core::{ScriptedSteps, UploadProgress};

    use super::*;

    #[test]
    fn scheduled_keys_route_back_to_their_file() {
        let scheduler = ManualTickScheduler::default();
        let mut registry = FileRegistry::new()
            .with_step_source(ScriptedSteps::cycle(vec![10.0]))
            .with_clock(ManualClock::new(0, 1));
        let files = vec![
            Box::new(MemoryRawFile::zeroed("a.png", "image/png", 2048)) as Box<dyn RawFile>,
            Box::new(MemoryRawFile::zeroed("b.txt", "text/plain", 500)) as Box<dyn RawFile>,
        ];
        let outcome = registry.add_files(files, &scheduler);
        let keys = scheduler.active_keys();
        assert_eq!(keys.len(), 2);

        let effects = reduce_vault(&mut registry, &scheduler, tick_action(keys[1])).expect("tick");
        assert!(effects.is_empty());
        assert_eq!(registry.progress(outcome.added[0]), UploadProgress::START);
        assert_eq!(
            registry.progress(outcome.added[1]),
            UploadProgress::Uploading(10.0)
        );
    }
}
