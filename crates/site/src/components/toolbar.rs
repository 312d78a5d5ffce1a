use leptos::*;
use vault_core::{SortOrder, ViewMode};

use crate::icons::{Icon, IconName};

/// Ascending/descending switch. With `dated` set, the text reads "Newest"/"Oldest".
#[component]
pub(crate) fn SortOrderToggle(
    sort_order: RwSignal<SortOrder>,
    #[prop(optional)] dated: bool,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="btn btn-outline"
            aria-label=move || match sort_order.get() {
                SortOrder::Descending => "Sort ascending",
                SortOrder::Ascending => "Sort descending",
            }
            on:click=move |_| sort_order.update(|order| *order = order.toggled())
        >
            {move || match sort_order.get() {
                SortOrder::Descending => {
                    view! {
                        <Icon icon=IconName::SortDescending />
                        <span>{if dated { "Newest" } else { "Descending" }}</span>
                    }
                }
                SortOrder::Ascending => {
                    view! {
                        <Icon icon=IconName::SortAscending />
                        <span>{if dated { "Oldest" } else { "Ascending" }}</span>
                    }
                }
            }}
        </button>
    }
}

#[component]
pub(crate) fn ViewModeToggle(view_mode: RwSignal<ViewMode>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="btn btn-outline"
            aria-label=move || match view_mode.get() {
                ViewMode::Grid => "View as list",
                ViewMode::List => "View as grid",
            }
            on:click=move |_| view_mode.update(|mode| *mode = mode.toggled())
        >
            {move || match view_mode.get() {
                ViewMode::Grid => {
                    view! {
                        <Icon icon=IconName::Grid />
                        <span>"Grid"</span>
                    }
                }
                ViewMode::List => {
                    view! {
                        <Icon icon=IconName::List />
                        <span>"List"</span>
                    }
                }
            }}
        </button>
    }
}
