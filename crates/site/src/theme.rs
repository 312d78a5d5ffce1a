//! Color scheme state for the shell.

use leptos::*;
use platform_host::{save_pref_with, ThemeMode, THEME_PREF_KEY};
use platform_host_web::{apply_theme_class, system_prefers_dark, WebPrefsStore};

use crate::icons::{Icon, IconName, IconSize};

/// Resolves the boot theme and keeps the document class in sync with it.
pub(crate) fn install_theme() -> RwSignal<ThemeMode> {
    let stored = WebPrefsStore.load_theme();
    let theme = create_rw_signal(ThemeMode::resolve(stored, system_prefers_dark()));

    create_effect(move |_| {
        if let Err(err) = apply_theme_class(theme.get()) {
            logging::warn!("theme class update failed: {err}");
        }
    });

    theme
}

fn persist_theme(mode: ThemeMode) {
    spawn_local(async move {
        if let Err(err) = save_pref_with(&WebPrefsStore, THEME_PREF_KEY, &mode).await {
            logging::warn!("theme persist failed: {err}");
        }
    });
}

#[component]
pub(crate) fn ThemeToggle(theme: RwSignal<ThemeMode>) -> impl IntoView {
    let toggle = move |_| {
        let next = theme.get_untracked().toggled();
        theme.set(next);
        persist_theme(next);
    };

    view! {
        <button
            type="button"
            class="icon-button theme-toggle"
            aria-label=move || {
                if theme.get().is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            }
            on:click=toggle
        >
            {move || {
                let icon = if theme.get().is_dark() { IconName::Sun } else { IconName::Moon };
                view! { <Icon icon=icon size=IconSize::Md /> }
            }}
        </button>
    }
}
