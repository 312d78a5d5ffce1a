//! Browser shell for DropVault: routing, layout, theme, toasts, and the file manager pages.

mod components;
mod effect_executor;
mod icons;
mod pages;
mod runtime_context;
mod theme;
mod toasts;
mod web_app;

pub use runtime_context::{use_vault_runtime, VaultProvider, VaultRuntimeContext};
pub use web_app::SiteApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
