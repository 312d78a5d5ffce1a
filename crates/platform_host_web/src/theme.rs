//! Document color-scheme hooks.

use platform_host::ThemeMode;

/// Class toggled on the document element while the dark scheme is active.
pub const DARK_CLASS: &str = "dark";

/// Returns `true` when the user agent reports `prefers-color-scheme: dark`.
pub fn system_prefers_dark() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Adds or removes [`DARK_CLASS`] on the document element.
///
/// # Errors
///
/// Returns an error when the document element is unavailable or the class list rejects the
/// update.
pub fn apply_theme_class(mode: ThemeMode) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
            .ok_or_else(|| "document element unavailable".to_string())?;
        root.class_list()
            .toggle_with_force(DARK_CLASS, mode.is_dark())
            .map(|_| ())
            .map_err(|err| format!("failed to toggle `{DARK_CLASS}` class: {err:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mode;
        Ok(())
    }
}
