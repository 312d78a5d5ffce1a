use leptos::*;
use platform_host::{load_pref_with, save_pref_with, PrefsStore};
use platform_host_web::WebPrefsStore;
use vault_core::{CategoryFilter, FileManagerPrefs, SortField, ViewState, FILES_PREFS_KEY};

use crate::{
    components::{DropZone, DropZoneVariant, FileGrid, SortOrderToggle, ViewModeToggle},
    icons::{Icon, IconName, IconSize},
    runtime_context::use_vault_runtime,
};

fn empty_hint(search_query: &str) -> &'static str {
    if search_query.trim().is_empty() {
        "Upload files to get started"
    } else {
        "Try a different search query"
    }
}

/// Returns the prefs to write, or `None` on the first run and when nothing changed.
fn prefs_to_persist(
    previous: Option<FileManagerPrefs>,
    current: FileManagerPrefs,
) -> Option<FileManagerPrefs> {
    previous
        .filter(|previous| *previous != current)
        .map(|_| current)
}

/// Stored display prefs. Malformed values are logged and read as absent.
async fn restore_prefs<S: PrefsStore + ?Sized>(store: &S) -> Option<FileManagerPrefs> {
    match load_pref_with(store, FILES_PREFS_KEY).await {
        Ok(prefs) => prefs,
        Err(err) => {
            logging::warn!("file manager prefs load failed: {err}");
            None
        }
    }
}

fn persist_prefs(prefs: FileManagerPrefs) {
    spawn_local(async move {
        if let Err(err) = save_pref_with(&WebPrefsStore, FILES_PREFS_KEY, &prefs).await {
            logging::warn!("file manager prefs persist failed: {err}");
        }
    });
}

/// Full file manager: search, category filter, sort controls and layout switch.
#[component]
pub(crate) fn MyFilesPage() -> impl IntoView {
    let runtime = use_vault_runtime();
    let initial = ViewState::default();

    let search_query = create_rw_signal(initial.search_query);
    let category = create_rw_signal(initial.category);
    let sort_field = create_rw_signal(initial.sort_field);
    let sort_order = create_rw_signal(initial.sort_order);
    let view_mode = create_rw_signal(initial.view_mode);

    spawn_local(async move {
        if let Some(prefs) = restore_prefs(&WebPrefsStore).await {
            batch(|| {
                sort_field.set(prefs.sort_field);
                sort_order.set(prefs.sort_order);
                view_mode.set(prefs.view_mode);
            });
        }
    });

    let view_state = create_memo(move |_| ViewState {
        sort_field: sort_field.get(),
        sort_order: sort_order.get(),
        view_mode: view_mode.get(),
        category: category.get(),
        search_query: search_query.get(),
    });
    let files = create_memo(move |_| {
        view_state.with(|state| runtime.registry.with(|registry| registry.view(state)))
    });

    create_effect(move |previous: Option<FileManagerPrefs>| {
        let prefs = view_state.with(ViewState::prefs);
        if let Some(changed) = prefs_to_persist(previous, prefs) {
            persist_prefs(changed);
        }
        prefs
    });

    view! {
        <div class="page page-files">
            <header class="page-header">
                <h1>"My Files"</h1>
            </header>

            <DropZone variant=DropZoneVariant::Compact />

            <div class="file-toolbar">
                <label class="search-field">
                    <Icon icon=IconName::Search />
                    <input
                        type="search"
                        placeholder="Search files..."
                        aria-label="Search files"
                        prop:value=move || search_query.get()
                        on:input=move |ev| search_query.set(event_target_value(&ev))
                    />
                </label>

                <div class="toolbar-actions">
                    <select
                        aria-label="Filter by category"
                        on:change=move |ev| {
                            if let Some(filter) = CategoryFilter::from_token(&event_target_value(&ev)) {
                                category.set(filter);
                            }
                        }
                    >
                        {CategoryFilter::ALL
                            .into_iter()
                            .map(|filter| {
                                view! {
                                    <option
                                        value=filter.token()
                                        selected=move || category.get() == filter
                                    >
                                        {filter.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>

                    <select
                        aria-label="Sort files"
                        on:change=move |ev| {
                            if let Some(field) = SortField::from_token(&event_target_value(&ev)) {
                                sort_field.set(field);
                            }
                        }
                    >
                        {SortField::ALL
                            .into_iter()
                            .map(|field| {
                                view! {
                                    <option value=field.token() selected=move || sort_field.get() == field>
                                        {field.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>

                    <SortOrderToggle sort_order=sort_order />
                    <ViewModeToggle view_mode=view_mode />
                </div>
            </div>

            <Show
                when=move || files.with(|files| !files.is_empty())
                fallback=move || {
                    view! {
                        <div class="empty-state">
                            <Icon icon=IconName::Folder size=IconSize::Xl />
                            <h3>"No Files Found"</h3>
                            <p class="muted">{move || search_query.with(|query| empty_hint(query))}</p>
                        </div>
                    }
                }
            >
                <FileGrid files=files view_mode=view_mode show_date=true />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;
    use vault_core::{SortOrder, ViewMode};

    use super::*;

    fn list_by_name() -> FileManagerPrefs {
        FileManagerPrefs {
            view_mode: ViewMode::List,
            sort_field: SortField::Name,
            sort_order: SortOrder::Ascending,
        }
    }

    #[test]
    fn prefs_are_written_only_after_a_change() {
        let defaults = FileManagerPrefs::default();
        assert_eq!(prefs_to_persist(None, defaults), None);
        assert_eq!(prefs_to_persist(Some(defaults), defaults), None);
        assert_eq!(
            prefs_to_persist(Some(defaults), list_by_name()),
            Some(list_by_name())
        );
    }

    #[test]
    fn restore_reads_saved_prefs_and_ignores_malformed_ones() {
        let store = MemoryPrefsStore::default();
        assert_eq!(block_on(restore_prefs(&store)), None);

        block_on(save_pref_with(&store, FILES_PREFS_KEY, &list_by_name())).expect("save");
        assert_eq!(block_on(restore_prefs(&store)), Some(list_by_name()));

        block_on(store.save_pref(FILES_PREFS_KEY, "{\"view_mode\":\"tiles\"}")).expect("save");
        assert_eq!(block_on(restore_prefs(&store)), None);
    }

    #[test]
    fn empty_hint_depends_on_the_search_query() {
        assert_eq!(empty_hint(""), "Upload files to get started");
        assert_eq!(empty_hint("   "), "Upload files to get started");
        assert_eq!(empty_hint("report"), "Try a different search query");
    }
}
