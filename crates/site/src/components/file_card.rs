use leptos::*;
use vault_core::{
    format_byte_size, format_upload_date, FileRecord, UploadProgress, VaultAction, ViewMode,
};

use crate::{
    icons::{file_kind_icon, Icon, IconName, IconSize},
    runtime_context::use_vault_runtime,
};

fn size_line(record: &FileRecord, show_date: bool) -> String {
    let size = format_byte_size(record.size);
    if show_date {
        format!("{size} • {}", format_upload_date(record.uploaded_at_unix_ms))
    } else {
        size
    }
}

#[component]
pub(super) fn FileCard(
    record: FileRecord,
    #[prop(into)] view_mode: Signal<ViewMode>,
    show_date: bool,
) -> impl IntoView {
    let runtime = use_vault_runtime();
    let file_id = record.id;

    let preview_href = if record.is_image() {
        runtime
            .registry
            .with_untracked(|registry| registry.download_handle(file_id).ok())
            .map(|handle| handle.href)
    } else {
        None
    };
    let progress = create_memo(move |_| {
        runtime
            .registry
            .with(|registry| registry.progress(file_id))
    });

    let preview = match preview_href {
        Some(href) => view! { <img src=href alt=record.name.clone() loading="lazy" /> }.into_view(),
        None => view! { <Icon icon=file_kind_icon(record.kind()) size=IconSize::Lg /> }.into_view(),
    };
    let details = size_line(&record, show_date);

    view! {
        <article class="file-card" data-view=move || view_mode.get().token()>
            <div class="file-preview">
                {preview}
                {move || match progress.get() {
                    current @ UploadProgress::Uploading(_) => {
                        let percent = current.display_percent();
                        Some(view! {
                            <div class="progress-overlay" aria-label="Uploading">
                                <div
                                    class="progress-track"
                                    role="progressbar"
                                    aria-valuemin="0"
                                    aria-valuemax="100"
                                    aria-valuenow=percent
                                >
                                    <div class="progress-fill" style:width=format!("{percent}%") />
                                </div>
                            </div>
                        })
                    }
                    UploadProgress::Complete => None,
                }}
            </div>
            <div class="file-body">
                <div class="file-meta">
                    <h4 class="file-name" title=record.name.clone()>{record.name.clone()}</h4>
                    <p class="muted">{details}</p>
                </div>
                <div class="file-actions">
                    <button
                        type="button"
                        class="icon-button"
                        aria-label="Download file"
                        on:click=move |_| {
                            runtime.dispatch_action(VaultAction::DownloadFile { file_id })
                        }
                    >
                        <Icon icon=IconName::Download size=IconSize::Md />
                    </button>
                    <button
                        type="button"
                        class="icon-button danger"
                        aria-label="Delete file"
                        on:click=move |_| runtime.dispatch_action(VaultAction::RemoveFile { file_id })
                    >
                        <Icon icon=IconName::Trash size=IconSize::Md />
                    </button>
                </div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vault_core::FileId;

    use super::*;

    #[test]
    fn size_line_appends_upload_date_when_requested() {
        let record = FileRecord {
            id: FileId(1),
            name: "a.png".to_string(),
            size: 1536,
            mime_type: "image/png".to_string(),
            uploaded_at_unix_ms: 1_792_324_800_000,
        };
        assert_eq!(size_line(&record, false), "1.5 KB");
        assert_eq!(size_line(&record, true), "1.5 KB • Oct 18, 2026");
    }
}
