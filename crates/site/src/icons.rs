//! Centralized stroke-icon catalog for the shell.
//!
//! Components refer to icons by semantic [`IconName`] and render them through [`Icon`], so no
//! component embeds raw SVG. The glyphs follow the 24px outline style of the Lucide set.

use leptos::*;
use vault_core::FileKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by shell components.
pub enum IconName {
    /// Brand mark and upload affordance.
    CloudUpload,
    /// Home navigation entry.
    Home,
    /// My Files navigation entry.
    Folder,
    /// Favorites navigation entry.
    Star,
    /// Shared navigation entry.
    Share,
    /// Trash navigation entry and delete action.
    Trash,
    /// Settings navigation entry.
    Settings,
    /// Collapse sidebar.
    ChevronLeft,
    /// Expand sidebar.
    ChevronRight,
    /// Light theme active.
    Sun,
    /// Dark theme active.
    Moon,
    /// Download action.
    Download,
    /// Search box.
    Search,
    /// Grid layout.
    Grid,
    /// List layout.
    List,
    /// Ascending order.
    SortAscending,
    /// Descending order.
    SortDescending,
    /// Image file.
    FileImage,
    /// Spreadsheet file.
    FileSpreadsheet,
    /// Slide deck.
    Presentation,
    /// Text or document file.
    FileText,
    /// Audio file.
    FileAudio,
    /// Video file.
    FileVideo,
    /// PDF file.
    FilePdf,
    /// Compressed archive.
    FileArchive,
    /// Any other file.
    File,
    /// Security feature.
    Shield,
    /// Organization feature.
    Layers,
    /// Success notice.
    Check,
    /// Informational notice.
    Info,
    /// Error notice and 404 page.
    Alert,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::CloudUpload => "cloud-upload",
            Self::Home => "home",
            Self::Folder => "folder",
            Self::Star => "star",
            Self::Share => "share",
            Self::Trash => "trash",
            Self::Settings => "settings",
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Download => "download",
            Self::Search => "search",
            Self::Grid => "grid",
            Self::List => "list",
            Self::SortAscending => "sort-ascending",
            Self::SortDescending => "sort-descending",
            Self::FileImage => "file-image",
            Self::FileSpreadsheet => "file-spreadsheet",
            Self::Presentation => "presentation",
            Self::FileText => "file-text",
            Self::FileAudio => "file-audio",
            Self::FileVideo => "file-video",
            Self::FilePdf => "file-pdf",
            Self::FileArchive => "file-archive",
            Self::File => "file",
            Self::Shield => "shield",
            Self::Layers => "layers",
            Self::Check => "check",
            Self::Info => "info",
            Self::Alert => "alert",
        }
    }

    fn svg_body(self) -> &'static str {
        const FILE_OUTLINE: &str =
            r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/><path d="M14 2v4a2 2 0 0 0 2 2h4"/>"#;

        match self {
            Self::CloudUpload => {
                r#"<path d="M4 14.9A7 7 0 1 1 15.7 8h1.8a4.5 4.5 0 0 1 2.5 8.2"/><path d="M12 12v9"/><path d="m16 16-4-4-4 4"/>"#
            }
            Self::Home => {
                r#"<path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/><path d="M9 22V12h6v10"/>"#
            }
            Self::Folder => {
                r#"<path d="M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2Z"/>"#
            }
            Self::Star => {
                r#"<path d="m12 2 3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01z"/>"#
            }
            Self::Share => {
                r#"<circle cx="18" cy="5" r="3"/><circle cx="6" cy="12" r="3"/><circle cx="18" cy="19" r="3"/><path d="m8.59 13.51 6.83 3.98"/><path d="m15.41 6.51-6.82 3.98"/>"#
            }
            Self::Trash => {
                r#"<path d="M3 6h18"/><path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6"/><path d="M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"/>"#
            }
            Self::Settings => {
                r#"<circle cx="12" cy="12" r="3"/><path d="M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 1 1-4 0v-.09a1.65 1.65 0 0 0-1-1.51 1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06a1.65 1.65 0 0 0 .33-1.82 1.65 1.65 0 0 0-1.51-1H3a2 2 0 1 1 0-4h.09a1.65 1.65 0 0 0 1.51-1 1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06a1.65 1.65 0 0 0 1.82.33H9a1.65 1.65 0 0 0 1-1.51V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06a1.65 1.65 0 0 0-.33 1.82V9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z"/>"#
            }
            Self::ChevronLeft => r#"<path d="m15 18-6-6 6-6"/>"#,
            Self::ChevronRight => r#"<path d="m9 18 6-6-6-6"/>"#,
            Self::Sun => {
                r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#
            }
            Self::Moon => r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#,
            Self::Download => {
                r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><path d="m7 10 5 5 5-5"/><path d="M12 15V3"/>"#
            }
            Self::Search => r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#,
            Self::Grid => {
                r#"<rect width="7" height="7" x="3" y="3" rx="1"/><rect width="7" height="7" x="14" y="3" rx="1"/><rect width="7" height="7" x="14" y="14" rx="1"/><rect width="7" height="7" x="3" y="14" rx="1"/>"#
            }
            Self::List => {
                r#"<path d="M8 6h13"/><path d="M8 12h13"/><path d="M8 18h13"/><path d="M3 6h.01"/><path d="M3 12h.01"/><path d="M3 18h.01"/>"#
            }
            Self::SortAscending => {
                r#"<path d="m3 8 4-4 4 4"/><path d="M7 4v16"/><path d="M11 12h4"/><path d="M11 16h7"/><path d="M11 20h10"/>"#
            }
            Self::SortDescending => {
                r#"<path d="m3 16 4 4 4-4"/><path d="M7 20V4"/><path d="M11 4h10"/><path d="M11 8h7"/><path d="M11 12h4"/>"#
            }
            Self::FileImage => {
                r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/><circle cx="10" cy="12" r="2"/><path d="m20 17-1.3-1.3a2.4 2.4 0 0 0-3.4 0L9 22"/>"#
            }
            Self::FileSpreadsheet => {
                r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/><path d="M8 13h2"/><path d="M14 13h2"/><path d="M8 17h2"/><path d="M14 17h2"/>"#
            }
            Self::Presentation => {
                r#"<path d="M2 3h20"/><path d="M21 3v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V3"/><path d="m7 21 5-5 5 5"/>"#
            }
            Self::FileText => {
                r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/><path d="M14 2v4a2 2 0 0 0 2 2h4"/><path d="M10 9H8"/><path d="M16 13H8"/><path d="M16 17H8"/>"#
            }
            Self::FileAudio => {
                r#"<path d="M9 18V5l12-2v13"/><circle cx="6" cy="18" r="3"/><circle cx="18" cy="16" r="3"/>"#
            }
            Self::FileVideo => {
                r#"<path d="m16 13 5.22 3.48a.5.5 0 0 0 .78-.42V7.87a.5.5 0 0 0-.75-.43L16 10.5"/><rect x="2" y="6" width="14" height="12" rx="2"/>"#
            }
            Self::FilePdf => {
                r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/><path d="M14 2v4a2 2 0 0 0 2 2h4"/><path d="M9 15v-4h1.5a1.5 1.5 0 0 1 0 3H9"/>"#
            }
            Self::FileArchive => {
                r#"<rect width="20" height="5" x="2" y="3" rx="1"/><path d="M4 8v11a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8"/><path d="M10 12h4"/>"#
            }
            Self::File => FILE_OUTLINE,
            Self::Shield => {
                r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/>"#
            }
            Self::Layers => {
                r#"<path d="m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z"/><path d="m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65"/><path d="m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65"/>"#
            }
            Self::Check => r#"<path d="M20 6 9 17l-5-5"/>"#,
            Self::Info => {
                r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#
            }
            Self::Alert => {
                r#"<path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3"/><path d="M12 9v4"/><path d="M12 17h.01"/>"#
            }
        }
    }
}

/// Icon for a file of the given kind.
pub fn file_kind_icon(kind: FileKind) -> IconName {
    match kind {
        FileKind::Image => IconName::FileImage,
        FileKind::Spreadsheet => IconName::FileSpreadsheet,
        FileKind::Presentation => IconName::Presentation,
        FileKind::Text => IconName::FileText,
        FileKind::Audio => IconName::FileAudio,
        FileKind::Video => IconName::FileVideo,
        FileKind::Pdf => IconName::FilePdf,
        FileKind::Archive => IconName::FileArchive,
        FileKind::Generic => IconName::File,
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 16px, inline with text.
    #[default]
    Sm,
    /// 20px, buttons and navigation.
    Md,
    /// 32px, file tiles.
    Lg,
    /// 48px, empty states and hero.
    Xl,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 32,
            Self::Xl => 48,
        }
    }

    /// Stable size token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[component]
/// Renders an icon from the catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    const ALL_KINDS: [FileKind; 9] = [
        FileKind::Image,
        FileKind::Spreadsheet,
        FileKind::Presentation,
        FileKind::Text,
        FileKind::Audio,
        FileKind::Video,
        FileKind::Pdf,
        FileKind::Archive,
        FileKind::Generic,
    ];

    #[test]
    fn every_file_kind_has_a_distinct_icon() {
        let icons: HashSet<IconName> = ALL_KINDS.into_iter().map(file_kind_icon).collect();
        assert_eq!(icons.len(), ALL_KINDS.len());
    }

    #[test]
    fn icon_bodies_are_svg_fragments() {
        for kind in ALL_KINDS {
            let icon = file_kind_icon(kind);
            let body = icon.svg_body();
            assert!(body.starts_with('<'), "{} body is not markup", icon.token());
            assert!(body.ends_with("/>"), "{} body is not closed", icon.token());
        }
    }
}
