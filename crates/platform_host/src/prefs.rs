//! Lightweight preference storage contracts and adapters.
//!
//! Preferences are JSON text stored per key. The shell keeps its theme and the file manager's
//! display choices here; registry contents are never persisted.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Preference key for the shell color scheme.
pub const THEME_PREF_KEY: &str = "dropvault.theme.v1";

/// Object-safe boxed future used by [`PrefsStore`] async methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for lightweight preference values (JSON stored as text per key).
pub trait PrefsStore {
    /// Loads a raw JSON string for a preference key.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;

    /// Saves a raw JSON string for a preference key.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Color scheme chosen for the shell.
pub enum ThemeMode {
    /// Light surfaces.
    Light,
    /// Dark surfaces (`dark` class on the document element).
    Dark,
}

impl ThemeMode {
    /// Resolves the boot theme: an explicit stored choice wins over the system preference.
    pub fn resolve(stored: Option<Self>, system_prefers_dark: bool) -> Self {
        match stored {
            Some(mode) => mode,
            None if system_prefers_dark => Self::Dark,
            None => Self::Light,
        }
    }

    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns `true` for [`ThemeMode::Dark`].
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.inner.borrow().get(key).cloned()) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), raw_json.to_string());
            Ok(())
        })
    }
}

/// Loads and deserializes a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when the store or JSON deserialization fails.
pub async fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_pref(key).await? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| e.to_string())?;
    Ok(Some(value))
}

/// Serializes and saves a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when serialization or store save fails.
pub async fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save_pref(key, &raw).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn typed_prefs_are_stored_as_json_text() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        let missing: Option<ThemeMode> =
            block_on(load_pref_with(store_obj, THEME_PREF_KEY)).expect("load empty");
        assert_eq!(missing, None);

        block_on(save_pref_with(store_obj, THEME_PREF_KEY, &ThemeMode::Dark)).expect("save");
        assert_eq!(
            block_on(store_obj.load_pref(THEME_PREF_KEY)).expect("load raw"),
            Some("\"dark\"".to_string())
        );
        let loaded: Option<ThemeMode> =
            block_on(load_pref_with(store_obj, THEME_PREF_KEY)).expect("load typed");
        assert_eq!(loaded, Some(ThemeMode::Dark));
    }

    #[test]
    fn malformed_pref_surfaces_an_error() {
        let store = MemoryPrefsStore::default();
        block_on(store.save_pref(THEME_PREF_KEY, "\"sepia\"")).expect("save");
        let loaded = block_on(load_pref_with::<_, ThemeMode>(&store, THEME_PREF_KEY));
        assert!(loaded.is_err());
    }

    #[test]
    fn stored_theme_wins_over_system_preference() {
        assert_eq!(ThemeMode::resolve(Some(ThemeMode::Light), true), ThemeMode::Light);
        assert_eq!(ThemeMode::resolve(None, true), ThemeMode::Dark);
        assert_eq!(ThemeMode::resolve(None, false), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert!(ThemeMode::Light.toggled().is_dark());
    }
}
