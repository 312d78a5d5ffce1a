//! Pure formatting and classification helpers.

use chrono::{DateTime, Utc};

use crate::model::FileCategory;

const BYTE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Formats a byte count with a binary unit, e.g. `1536` → `"1.5 KB"`.
///
/// The unit is `floor(log1024(bytes))` clamped to the unit table; the value keeps at most two
/// decimals with trailing zeros dropped.
pub fn format_byte_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut scale: u64 = 1;
    while unit + 1 < BYTE_UNITS.len() && bytes / scale >= 1024 {
        scale *= 1024;
        unit += 1;
    }

    let value = bytes as f64 / scale as f64;
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded} {}", BYTE_UNITS[unit])
}

/// Maps a file to its [`FileCategory`].
///
/// Rules apply in order: `image/*`; `text/*` or a MIME type mentioning "document"; a MIME type
/// mentioning "zip", "archive" or "compressed"; otherwise other. Hosts report an empty MIME type
/// for unknown files, in which case the name's extension decides.
pub fn classify_file(mime_type: &str, name: &str) -> FileCategory {
    let mime = mime_type.trim().to_ascii_lowercase();
    if mime.is_empty() {
        return classify_extension(name);
    }

    if mime.starts_with("image/") {
        FileCategory::Images
    } else if mime.starts_with("text/") || mime.contains("document") {
        FileCategory::Documents
    } else if ["zip", "archive", "compressed"]
        .iter()
        .any(|needle| mime.contains(needle))
    {
        FileCategory::Archives
    } else {
        FileCategory::Other
    }
}

fn classify_extension(name: &str) -> FileCategory {
    let Some((_, extension)) = name.rsplit_once('.') else {
        return FileCategory::Other;
    };
    match extension.to_ascii_lowercase().as_str() {
        "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "bmp" | "ico" | "avif" => {
            FileCategory::Images
        }
        "txt" | "md" | "csv" | "log" | "doc" | "docx" | "odt" | "rtf" => FileCategory::Documents,
        "zip" | "rar" | "7z" | "tar" | "gz" | "tgz" | "bz2" | "xz" => FileCategory::Archives,
        _ => FileCategory::Other,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Icon-level classification of a MIME type.
pub enum FileKind {
    /// `image/*`.
    Image,
    /// Spreadsheets.
    Spreadsheet,
    /// Slide decks.
    Presentation,
    /// Plain text and word-processing documents.
    Text,
    /// Audio.
    Audio,
    /// Video.
    Video,
    /// PDF.
    Pdf,
    /// Compressed archives.
    Archive,
    /// Anything else.
    Generic,
}

impl FileKind {
    /// Classifies a MIME type. Order matters: office formats are checked before the generic
    /// "document" rule.
    pub fn from_mime(mime_type: &str) -> Self {
        let mime = mime_type.to_ascii_lowercase();
        let has = |needle: &str| mime.contains(needle);

        if mime.starts_with("image/") {
            Self::Image
        } else if has("spreadsheet") || has("excel") {
            Self::Spreadsheet
        } else if has("presentation") || has("powerpoint") {
            Self::Presentation
        } else if mime.starts_with("text/") || has("document") {
            Self::Text
        } else if has("audio") {
            Self::Audio
        } else if has("video") {
            Self::Video
        } else if has("pdf") {
            Self::Pdf
        } else if has("zip") || has("archive") || has("compressed") {
            Self::Archive
        } else {
            Self::Generic
        }
    }
}

/// Formats an intake timestamp as a short calendar date, e.g. `"Oct 18, 2026"`.
///
/// Out-of-range timestamps render as an empty string.
pub fn format_upload_date(unix_ms: u64) -> String {
    i64::try_from(unix_ms)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|at| at.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}

/// `"1 file"` / `"3 files"`.
pub fn pluralize_files(count: usize) -> String {
    if count == 1 {
        "1 file".to_string()
    } else {
        format!("{count} files")
    }
}

/// `"1 File"` / `"3 Files"` for list headings.
pub fn file_count_heading(count: usize) -> String {
    if count == 1 {
        "1 File".to_string()
    } else {
        format!("{count} Files")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn byte_sizes_pick_binary_units_and_trim_decimals() {
        assert_eq!(format_byte_size(0), "0 Bytes");
        assert_eq!(format_byte_size(1), "1 Bytes");
        assert_eq!(format_byte_size(500), "500 Bytes");
        assert_eq!(format_byte_size(1023), "1023 Bytes");
        assert_eq!(format_byte_size(1024), "1 KB");
        assert_eq!(format_byte_size(1536), "1.5 KB");
        assert_eq!(format_byte_size(1_260), "1.23 KB");
        assert_eq!(format_byte_size(10_240), "10 KB");
        assert_eq!(format_byte_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_byte_size(3 * 1024 * 1024 * 1024), "3 GB");
        assert_eq!(format_byte_size(1024_u64.pow(4)), "1 TB");
    }

    #[test]
    fn byte_sizes_beyond_the_table_stay_in_terabytes() {
        assert_eq!(format_byte_size(2048 * 1024_u64.pow(4)), "2048 TB");
    }

    #[test]
    fn rounding_up_to_the_next_unit_boundary_keeps_the_smaller_unit() {
        assert_eq!(format_byte_size(1024 * 1024 - 1), "1024 KB");
    }

    #[test]
    fn classification_follows_rule_order() {
        assert_eq!(classify_file("image/png", "a.png"), FileCategory::Images);
        assert_eq!(classify_file("text/plain", "b.txt"), FileCategory::Documents);
        assert_eq!(
            classify_file(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                "report.docx"
            ),
            FileCategory::Documents
        );
        assert_eq!(classify_file("application/zip", "c.zip"), FileCategory::Archives);
        assert_eq!(
            classify_file("application/x-zip-compressed", "c.zip"),
            FileCategory::Archives
        );
        assert_eq!(classify_file("application/pdf", "d.pdf"), FileCategory::Other);
        assert_eq!(classify_file("IMAGE/JPEG", "e.jpg"), FileCategory::Images);
    }

    #[test]
    fn empty_mime_type_falls_back_to_extension() {
        assert_eq!(classify_file("", "photo.JPG"), FileCategory::Images);
        assert_eq!(classify_file("", "notes.md"), FileCategory::Documents);
        assert_eq!(classify_file("", "backup.tar.gz"), FileCategory::Archives);
        assert_eq!(classify_file("", "Makefile"), FileCategory::Other);
        assert_eq!(classify_file("", "data.bin"), FileCategory::Other);
    }

    #[test]
    fn file_kind_checks_office_formats_before_documents() {
        assert_eq!(
            FileKind::from_mime(
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            ),
            FileKind::Spreadsheet
        );
        assert_eq!(
            FileKind::from_mime("application/vnd.ms-powerpoint"),
            FileKind::Presentation
        );
        assert_eq!(FileKind::from_mime("text/markdown"), FileKind::Text);
        assert_eq!(FileKind::from_mime("audio/mpeg"), FileKind::Audio);
        assert_eq!(FileKind::from_mime("video/mp4"), FileKind::Video);
        assert_eq!(FileKind::from_mime("application/pdf"), FileKind::Pdf);
        assert_eq!(FileKind::from_mime("application/zip"), FileKind::Archive);
        assert_eq!(FileKind::from_mime("image/webp"), FileKind::Image);
        assert_eq!(FileKind::from_mime(""), FileKind::Generic);
    }

    #[test]
    fn upload_dates_render_as_short_calendar_dates() {
        // 2026-10-18T12:00:00Z
        assert_eq!(format_upload_date(1_792_324_800_000), "Oct 18, 2026");
        assert_eq!(format_upload_date(0), "Jan 1, 1970");
        assert_eq!(format_upload_date(u64::MAX), "");
    }

    #[test]
    fn counts_pluralize() {
        assert_eq!(pluralize_files(1), "1 file");
        assert_eq!(pluralize_files(0), "0 files");
        assert_eq!(file_count_heading(3), "3 Files");
        assert_eq!(file_count_heading(1), "1 File");
    }
}
