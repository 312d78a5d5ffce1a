use leptos::*;
use vault_core::{FileRecord, ViewMode};

use super::file_card::FileCard;

/// Grid or list of file cards, keyed by file id.
#[component]
pub(crate) fn FileGrid(
    #[prop(into)] files: Signal<Vec<FileRecord>>,
    #[prop(into)] view_mode: Signal<ViewMode>,
    /// Append the upload date to each card's size line.
    #[prop(optional)]
    show_date: bool,
) -> impl IntoView {
    view! {
        <div class="file-grid" data-view=move || view_mode.get().token()>
            <For
                each=move || files.get()
                key=|record| record.id
                children=move |record| {
                    view! { <FileCard record=record view_mode=view_mode show_date=show_date /> }
                }
            />
        </div>
    }
}
