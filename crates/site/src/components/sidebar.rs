use leptos::*;
use leptos_router::use_location;

use crate::icons::{Icon, IconName, IconSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NavItem {
    label: &'static str,
    icon: IconName,
    path: &'static str,
    aliases: &'static [&'static str],
}

const NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        label: "Home",
        icon: IconName::Home,
        path: "/",
        aliases: &[],
    },
    NavItem {
        label: "My Files",
        icon: IconName::Folder,
        path: "/files",
        aliases: &["/myfiles"],
    },
    NavItem {
        label: "Favorites",
        icon: IconName::Star,
        path: "/favorites",
        aliases: &[],
    },
    NavItem {
        label: "Shared",
        icon: IconName::Share,
        path: "/shared",
        aliases: &[],
    },
    NavItem {
        label: "Trash",
        icon: IconName::Trash,
        path: "/trash",
        aliases: &[],
    },
    NavItem {
        label: "Settings",
        icon: IconName::Settings,
        path: "/settings",
        aliases: &[],
    },
];

impl NavItem {
    fn is_active(&self, pathname: &str) -> bool {
        let pathname = match pathname.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        self.path == pathname || self.aliases.contains(&pathname)
    }
}

#[component]
pub(crate) fn Sidebar() -> impl IntoView {
    let location = use_location();
    let collapsed = create_rw_signal(false);

    view! {
        <aside class="sidebar" class:collapsed=move || collapsed.get()>
            <div class="sidebar-brand">
                <span class="brand-mark">
                    <Icon icon=IconName::Layers size=IconSize::Md />
                </span>
                <Show when=move || !collapsed.get()>
                    <span class="brand-name">"DropVault"</span>
                </Show>
            </div>

            <nav class="sidebar-nav" aria-label="Primary">
                <ul>
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let item = *item;
                            let active = move || location.pathname.with(|path| item.is_active(path));
                            view! {
                                <li>
                                    <a
                                        href=item.path
                                        class="nav-link"
                                        class:active=active
                                        title=item.label
                                        aria-current=move || active().then_some("page")
                                    >
                                        <Icon icon=item.icon size=IconSize::Md />
                                        <Show when=move || !collapsed.get()>
                                            <span class="nav-label">{item.label}</span>
                                        </Show>
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>

            <button
                type="button"
                class="icon-button sidebar-toggle"
                aria-label=move || {
                    if collapsed.get() { "Expand sidebar" } else { "Collapse sidebar" }
                }
                on:click=move |_| collapsed.update(|value| *value = !*value)
            >
                {move || {
                    let icon = if collapsed.get() {
                        IconName::ChevronRight
                    } else {
                        IconName::ChevronLeft
                    };
                    view! { <Icon icon=icon size=IconSize::Sm /> }
                }}
            </button>
        </aside>
    }
}
