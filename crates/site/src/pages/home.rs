use leptos::*;
use vault_core::{file_count_heading, SortField, SortOrder, ViewMode, ViewState};

use crate::{
    components::{DropZone, DropZoneVariant, FileGrid, SortOrderToggle, ViewModeToggle},
    icons::{Icon, IconName, IconSize},
    runtime_context::use_vault_runtime,
};

struct Feature {
    icon: IconName,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: IconName::Layers,
        title: "Intuitive Organization",
        description: "Easily organize your files with folders, tags, and smart search capabilities.",
    },
    Feature {
        icon: IconName::Shield,
        title: "Bank-Level Security",
        description:
            "Your files are encrypted and protected with enterprise-grade security measures.",
    },
    Feature {
        icon: IconName::Share,
        title: "Flexible Sharing",
        description: "Share files safely with customizable permissions and expiring links.",
    },
];

const SECURITY_POINTS: [&str; 3] = [
    "End-to-end encryption for all your files",
    "Password protection for shared files",
    "Granular access controls",
];

const COLLABORATION_POINTS: [&str; 3] = [
    "Create shareable links instantly",
    "Set expiration dates for temporary access",
    "Track who accessed your shared files",
];

#[component]
pub(crate) fn HomePage() -> impl IntoView {
    view! {
        <div class="page page-home">
            <header class="hero">
                <div class="hero-mark">
                    <Icon icon=IconName::Layers size=IconSize::Xl />
                </div>
                <h1 class="hero-title">"DropVault"</h1>
                <p class="hero-tagline">
                    "A simple and secure way to upload, store, and manage your files online."
                </p>
            </header>

            <section class="vault-panel">
                <VaultPanel />
            </section>

            <FeatureSection />

            <footer class="page-footer muted">
                <p>"© DropVault. All rights reserved."</p>
                <p>"Your files, your control. Always."</p>
            </footer>
        </div>
    }
}

/// Upload panel with a newest/oldest toggle and a grid/list toggle.
#[component]
fn VaultPanel() -> impl IntoView {
    let runtime = use_vault_runtime();
    let sort_order = create_rw_signal(SortOrder::Descending);
    let view_mode = create_rw_signal(ViewMode::Grid);

    let file_count = create_memo(move |_| runtime.registry.with(|registry| registry.len()));
    let files = create_memo(move |_| {
        let view_state = ViewState {
            sort_field: SortField::Date,
            sort_order: sort_order.get(),
            ..ViewState::default()
        };
        runtime.registry.with(|registry| registry.view(&view_state))
    });

    view! {
        <div class="vault-intro">
            <h2>"Your File Vault"</h2>
            <p class="muted">"Upload, manage, and organize your files in one secure place."</p>
        </div>

        <DropZone variant=DropZoneVariant::Hero />

        <Show
            when=move || { file_count.get() > 0 }
            fallback=|| {
                view! {
                    <div class="empty-state">
                        <Icon icon=IconName::File size=IconSize::Xl />
                        <h3>"No Files Yet"</h3>
                        <p class="muted">"Upload files to get started"</p>
                    </div>
                }
            }
        >
            <div class="file-toolbar">
                <h3>{move || file_count_heading(file_count.get())}</h3>
                <div class="toolbar-actions">
                    <SortOrderToggle sort_order=sort_order dated=true />
                    <ViewModeToggle view_mode=view_mode />
                </div>
            </div>
            <FileGrid files=files view_mode=view_mode />
        </Show>
    }
}

#[component]
fn FeatureSection() -> impl IntoView {
    let details_open = create_rw_signal(false);

    view! {
        <section class="features">
            <div class="features-intro">
                <h2>"Powerful Features"</h2>
                <p class="muted">
                    "DropVault combines simplicity with powerful capabilities to give you the best file management experience."
                </p>
            </div>

            <div class="feature-grid">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="card feature-card">
                                <span class="feature-icon">
                                    <Icon icon=feature.icon size=IconSize::Lg />
                                </span>
                                <h3>{feature.title}</h3>
                                <p class="muted">{feature.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <button
                type="button"
                class="btn btn-outline features-toggle"
                aria-expanded=move || details_open.get().to_string()
                on:click=move |_| details_open.update(|open| *open = !*open)
            >
                {move || if details_open.get() { "Hide Details" } else { "Learn More" }}
            </button>

            <Show when=move || details_open.get()>
                <div class="feature-details">
                    <DetailCard title="Advanced Security" points=&SECURITY_POINTS />
                    <DetailCard title="Easy Collaboration" points=&COLLABORATION_POINTS />
                </div>
            </Show>
        </section>
    }
}

#[component]
fn DetailCard(title: &'static str, points: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="card detail-card">
            <h3>{title}</h3>
            <ul>
                {points
                    .iter()
                    .map(|point| {
                        view! {
                            <li>
                                <Icon icon=IconName::Check />
                                <span>{*point}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
