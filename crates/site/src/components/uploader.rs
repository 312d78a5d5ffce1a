use leptos::{html, *};
use platform_host_web::raw_files_from_list;
use vault_core::{pluralize_files, VaultAction};

use crate::{
    icons::{Icon, IconName, IconSize},
    runtime_context::use_vault_runtime,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Size of the upload panel.
pub(crate) enum DropZoneVariant {
    /// Large panel on the home page.
    #[default]
    Hero,
    /// Compact panel above the file manager.
    Compact,
}

impl DropZoneVariant {
    const fn token(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Compact => "compact",
        }
    }

    const fn idle_title(self) -> &'static str {
        match self {
            Self::Hero => "Drag & Drop Files Here",
            Self::Compact => "Drag & Drop Files",
        }
    }
}

/// Drop target plus hidden multi-file picker. Both feed `AddFiles`.
#[component]
pub(crate) fn DropZone(#[prop(optional)] variant: DropZoneVariant) -> impl IntoView {
    let runtime = use_vault_runtime();
    let dragging = create_rw_signal(false);
    let input_ref = create_node_ref::<html::Input>();

    let add_list = move |list: Option<web_sys::FileList>| {
        let Some(list) = list else {
            return;
        };
        let raw_files = raw_files_from_list(&list);
        if !raw_files.is_empty() {
            runtime.dispatch_action(VaultAction::AddFiles(raw_files));
        }
    };

    let uploading = create_memo(move |_| {
        runtime
            .registry
            .with(|registry| registry.uploading_count())
    });

    let icon_size = match variant {
        DropZoneVariant::Hero => IconSize::Xl,
        DropZoneVariant::Compact => IconSize::Lg,
    };

    view! {
        <div
            class="drop-zone"
            class:dragging=move || dragging.get()
            data-variant=variant.token()
            on:dragenter=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                dragging.set(true);
            }
            on:dragover=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                if !dragging.get_untracked() {
                    dragging.set(true);
                }
            }
            on:dragleave=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                dragging.set(false);
            }
            on:drop=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                dragging.set(false);
                add_list(ev.data_transfer().and_then(|transfer| transfer.files()));
            }
        >
            <input
                type="file"
                multiple=true
                hidden=true
                node_ref=input_ref
                on:change=move |ev| {
                    let input = event_target::<web_sys::HtmlInputElement>(&ev);
                    add_list(input.files());
                    // Reset so picking the same file again still fires `change`.
                    input.set_value("");
                }
            />
            <span class="drop-zone-icon">
                <Icon icon=IconName::CloudUpload size=icon_size />
            </span>
            <h3>
                {move || if dragging.get() { "Drop Files Here" } else { variant.idle_title() }}
            </h3>
            <p class="muted">"or select files from your device"</p>
            <Show when=move || { uploading.get() > 0 }>
                <p class="upload-status" role="status">
                    {move || format!("Uploading {}...", pluralize_files(uploading.get()))}
                </p>
            </Show>
            <button
                type="button"
                class="btn btn-primary"
                on:click=move |_| {
                    if let Some(input) = input_ref.get() {
                        input.click();
                    }
                }
            >
                "Select Files"
            </button>
        </div>
    }
}
