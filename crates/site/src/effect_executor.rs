//! Runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;
use platform_host_web::trigger_download;
use vault_core::{Notice, VaultEffect};

use crate::runtime_context::VaultRuntimeContext;

/// Installs the effect executor that drains reducer-emitted effects in order.
pub fn install(runtime: VaultRuntimeContext) {
    // Take the queue before running it so notices raised while draining start a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_effect(runtime, effect);
        }
    });
}

fn run_effect(runtime: VaultRuntimeContext, effect: VaultEffect) {
    match effect {
        VaultEffect::Notify(notice) => runtime.notify(notice),
        VaultEffect::StartDownload(handle) => {
            if let Err(err) = trigger_download(&handle.href, &handle.file_name) {
                logging::warn!("download of {} failed: {err}", handle.file_id);
                runtime.notify(Notice::error("Download failed"));
            }
        }
    }
}
