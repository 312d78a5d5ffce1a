//! `localStorage`-backed preference store.
//!
//! The theme is read synchronously at boot so the first paint already has the right color
//! scheme. Everything else goes through the async [`PrefsStore`] surface.

use platform_host::{PrefsStore, PrefsStoreFuture, ThemeMode, THEME_PREF_KEY};

#[derive(Debug, Clone, Copy, Default)]
/// Browser preference store backed by `window.localStorage`.
pub struct WebPrefsStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or_else(|| "localStorage unavailable".to_string())
}

impl WebPrefsStore {
    fn read(self, key: &str) -> Result<Option<String>, String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|err| format!("localStorage get_item failed: {err:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn write(self, key: &str, raw_json: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .set_item(key, raw_json)
                .map_err(|err| format!("localStorage set_item failed: {err:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw_json);
            Ok(())
        }
    }

    /// Stored color scheme, if the user ever chose one. Unreadable or malformed values read as
    /// absent.
    pub fn load_theme(self) -> Option<ThemeMode> {
        let raw = self.read(THEME_PREF_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
}

impl PrefsStore for WebPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        let store = *self;
        Box::pin(async move { store.read(key) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.write(key, raw_json) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{load_pref_with, save_pref_with};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn native_store_is_empty_and_accepts_writes() {
        let store = WebPrefsStore;
        assert_eq!(store.load_theme(), None);
        block_on(save_pref_with(&store, THEME_PREF_KEY, &ThemeMode::Dark)).expect("save");
        let loaded: Option<ThemeMode> =
            block_on(load_pref_with(&store, THEME_PREF_KEY)).expect("load");
        assert_eq!(loaded, None);
    }
}
