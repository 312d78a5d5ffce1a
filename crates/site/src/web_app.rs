use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    components::Sidebar,
    pages::{HomePage, MyFilesPage, NotFoundPage},
    runtime_context::VaultProvider,
    theme::{install_theme, ThemeToggle},
    toasts::ToastHost,
};

/// Root component: meta tags, router, vault runtime and the sidebar layout.
#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let theme = install_theme();

    view! {
        <Title text="DropVault" />
        <Meta name="description" content="Upload, store, and manage your files in the browser." />

        <Router>
            <VaultProvider>
                <div class="app-shell">
                    <Sidebar />
                    <div class="app-main">
                        <header class="app-header">
                            <ThemeToggle theme=theme />
                        </header>
                        <main class="app-content">
                            <Routes>
                                <Route path="/" view=HomePage />
                                <Route path="/files" view=MyFilesPage />
                                <Route path="/myfiles" view=MyFilesPage />
                                <Route path="/*any" view=NotFoundPage />
                            </Routes>
                        </main>
                    </div>
                </div>
                <ToastHost />
            </VaultProvider>
        </Router>
    }
}
