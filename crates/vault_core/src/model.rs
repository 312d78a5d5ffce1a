//! File records and the UI-local view configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::{classify_file, FileKind};

/// Preference key for the file manager's display settings.
pub const FILES_PREFS_KEY: &str = "dropvault.files.prefs.v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Registry-issued file identifier. Never reused within a registry.
pub struct FileId(pub u64);

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Metadata for one user-supplied file.
pub struct FileRecord {
    /// Registry-issued id.
    pub id: FileId,
    /// Original file name.
    pub name: String,
    /// Byte count.
    pub size: u64,
    /// Host-reported MIME type (may be empty).
    pub mime_type: String,
    /// Intake time in unix milliseconds.
    pub uploaded_at_unix_ms: u64,
}

impl FileRecord {
    /// Category used by the category filter.
    pub fn category(&self) -> FileCategory {
        classify_file(&self.mime_type, &self.name)
    }

    /// Finer classification used for icons.
    pub fn kind(&self) -> FileKind {
        FileKind::from_mime(&self.mime_type)
    }

    /// Returns `true` when the content can be shown as an `<img>` preview.
    pub fn is_image(&self) -> bool {
        self.category() == FileCategory::Images
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Reference the presentation layer uses to save or preview a file's bytes.
pub struct DownloadHandle {
    /// File the handle belongs to.
    pub file_id: FileId,
    /// Name to save the bytes under.
    pub file_name: String,
    /// Host URL of the bytes, valid while the file is in the registry.
    pub href: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Coarse file category.
pub enum FileCategory {
    /// Text and office documents.
    Documents,
    /// Images.
    Images,
    /// Compressed archives.
    Archives,
    /// Everything else.
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Category selection in the file manager.
pub enum CategoryFilter {
    /// No filtering.
    #[default]
    All,
    /// Only [`FileCategory::Documents`].
    Documents,
    /// Only [`FileCategory::Images`].
    Images,
    /// Only [`FileCategory::Archives`].
    Archives,
    /// Only [`FileCategory::Other`].
    Other,
}

impl CategoryFilter {
    /// Every filter, in menu order.
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Documents,
        Self::Images,
        Self::Archives,
        Self::Other,
    ];

    /// Returns `true` when a file of `category` passes the filter.
    pub fn matches(self, category: FileCategory) -> bool {
        match self {
            Self::All => true,
            Self::Documents => category == FileCategory::Documents,
            Self::Images => category == FileCategory::Images,
            Self::Archives => category == FileCategory::Archives,
            Self::Other => category == FileCategory::Other,
        }
    }

    /// Stable token used as the `<option>` value.
    pub const fn token(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Documents => "documents",
            Self::Images => "images",
            Self::Archives => "archives",
            Self::Other => "other",
        }
    }

    /// Menu label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Files",
            Self::Documents => "Documents",
            Self::Images => "Images",
            Self::Archives => "Archives",
            Self::Other => "Other",
        }
    }

    /// Parses a token produced by [`CategoryFilter::token`].
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|filter| filter.token() == token)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Field the derived view is ordered by.
pub enum SortField {
    /// Intake timestamp.
    #[default]
    Date,
    /// File name, case-insensitive.
    Name,
    /// Byte count.
    Size,
}

impl SortField {
    /// Every field, in menu order.
    pub const ALL: [Self; 3] = [Self::Date, Self::Name, Self::Size];

    /// Stable token used as the `<option>` value.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Name => "name",
            Self::Size => "size",
        }
    }

    /// Menu label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Date => "Sort by Date",
            Self::Name => "Sort by Name",
            Self::Size => "Sort by Size",
        }
    }

    /// Parses a token produced by [`SortField::token`].
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.token() == token)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Sort direction.
pub enum SortOrder {
    /// Smallest / oldest / A first.
    Ascending,
    /// Largest / newest / Z first.
    #[default]
    Descending,
}

impl SortOrder {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// File list layout.
pub enum ViewMode {
    /// Card grid.
    #[default]
    Grid,
    /// Compact rows.
    List,
}

impl ViewMode {
    /// Returns the other layout.
    pub fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }

    /// Stable token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Sort, filter, search and layout chosen by the user. Owned by the page, never by the registry.
pub struct ViewState {
    /// Sort key.
    pub sort_field: SortField,
    /// Sort direction.
    pub sort_order: SortOrder,
    /// Grid or list.
    pub view_mode: ViewMode,
    /// Category filter.
    pub category: CategoryFilter,
    /// Case-insensitive name substring; empty matches everything.
    pub search_query: String,
}

impl ViewState {
    /// Display preferences worth remembering between visits.
    pub fn prefs(&self) -> FileManagerPrefs {
        FileManagerPrefs {
            sort_field: self.sort_field,
            sort_order: self.sort_order,
            view_mode: self.view_mode,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Persisted subset of [`ViewState`] for the file manager page.
pub struct FileManagerPrefs {
    /// Preferred layout.
    pub view_mode: ViewMode,
    /// Preferred sort key.
    pub sort_field: SortField,
    /// Preferred sort direction.
    pub sort_order: SortOrder,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn view_enums_serialize_as_kebab_case_tokens() {
        assert_eq!(
            serde_json::to_string(&SortOrder::Descending).expect("serialize"),
            "\"descending\""
        );
        assert_eq!(
            serde_json::to_string(&CategoryFilter::Archives).expect("serialize"),
            "\"archives\""
        );
        let prefs: FileManagerPrefs = serde_json::from_str(
            r#"{"view_mode":"list","sort_field":"size","sort_order":"ascending"}"#,
        )
        .expect("deserialize");
        assert_eq!(
            prefs,
            FileManagerPrefs {
                view_mode: ViewMode::List,
                sort_field: SortField::Size,
                sort_order: SortOrder::Ascending,
            }
        );
    }

    #[test]
    fn tokens_parse_back_and_unknown_tokens_are_rejected() {
        for filter in CategoryFilter::ALL {
            assert_eq!(CategoryFilter::from_token(filter.token()), Some(filter));
        }
        for field in SortField::ALL {
            assert_eq!(SortField::from_token(field.token()), Some(field));
        }
        assert_eq!(CategoryFilter::from_token("videos"), None);
        assert_eq!(SortField::from_token(""), None);
    }

    #[test]
    fn default_view_is_newest_first_grid_of_everything() {
        let view = ViewState::default();
        assert_eq!(view.sort_field, SortField::Date);
        assert_eq!(view.sort_order, SortOrder::Descending);
        assert_eq!(view.view_mode, ViewMode::Grid);
        assert_eq!(view.category, CategoryFilter::All);
        assert!(view.search_query.is_empty());
    }

    #[test]
    fn prefs_keep_display_settings_but_not_filters() {
        let view = ViewState {
            sort_field: SortField::Name,
            sort_order: SortOrder::Ascending,
            view_mode: ViewMode::List,
            category: CategoryFilter::Images,
            search_query: "cat".to_string(),
        };
        assert_eq!(
            view.prefs(),
            FileManagerPrefs {
                view_mode: ViewMode::List,
                sort_field: SortField::Name,
                sort_order: SortOrder::Ascending,
            }
        );
    }

    #[test]
    fn file_id_displays_with_prefix() {
        assert_eq!(FileId(42).to_string(), "file-42");
    }
}
