//! Pure projections of registry records for display.

use std::cmp::Ordering;

use crate::model::{FileRecord, SortField, SortOrder, ViewState};

/// Filters, searches and sorts `records` for display.
///
/// Records pass when their category matches the view's category filter and their name contains
/// the search query case-insensitively. The sort is stable, so records that compare equal keep
/// their registry order in both directions.
pub fn derive_view(records: &[FileRecord], view_state: &ViewState) -> Vec<FileRecord> {
    let query = view_state.search_query.to_lowercase();

    let mut visible: Vec<FileRecord> = records
        .iter()
        .filter(|record| view_state.category.matches(record.category()))
        .filter(|record| query.is_empty() || record.name.to_lowercase().contains(&query))
        .cloned()
        .collect();

    visible.sort_by(|a, b| {
        let ord = compare_by(view_state.sort_field, a, b);
        match view_state.sort_order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
    visible
}

fn compare_by(field: SortField, a: &FileRecord, b: &FileRecord) -> Ordering {
    match field {
        SortField::Date => a.uploaded_at_unix_ms.cmp(&b.uploaded_at_unix_ms),
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Size => a.size.cmp(&b.size),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{CategoryFilter, FileId};

    fn record(id: u64, name: &str, mime_type: &str, size: u64, at: u64) -> FileRecord {
        FileRecord {
            id: FileId(id),
            name: name.to_string(),
            size,
            mime_type: mime_type.to_string(),
            uploaded_at_unix_ms: at,
        }
    }

    fn sample() -> Vec<FileRecord> {
        vec![
            record(1, "a.png", "image/png", 2048, 100),
            record(2, "b.txt", "text/plain", 500, 200),
            record(3, "c.zip", "application/zip", 10240, 300),
        ]
    }

    fn names(records: &[FileRecord]) -> Vec<&str> {
        records.iter().map(|record| record.name.as_str()).collect()
    }

    fn view(field: SortField, order: SortOrder) -> ViewState {
        ViewState {
            sort_field: field,
            sort_order: order,
            ..ViewState::default()
        }
    }

    #[test]
    fn category_filter_keeps_matching_files() {
        let state = ViewState {
            category: CategoryFilter::Images,
            ..ViewState::default()
        };
        assert_eq!(names(&derive_view(&sample(), &state)), vec!["a.png"]);

        let state = ViewState {
            category: CategoryFilter::Other,
            ..ViewState::default()
        };
        assert!(derive_view(&sample(), &state).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let state = ViewState {
            search_query: "b".to_string(),
            ..ViewState::default()
        };
        assert_eq!(names(&derive_view(&sample(), &state)), vec!["b.txt"]);

        let state = ViewState {
            search_query: "ZIP".to_string(),
            ..ViewState::default()
        };
        assert_eq!(names(&derive_view(&sample(), &state)), vec!["c.zip"]);

        let state = ViewState {
            search_query: "nothing".to_string(),
            ..ViewState::default()
        };
        assert!(derive_view(&sample(), &state).is_empty());
    }

    #[test]
    fn filters_combine() {
        let state = ViewState {
            category: CategoryFilter::Documents,
            search_query: "a".to_string(),
            ..ViewState::default()
        };
        assert!(derive_view(&sample(), &state).is_empty());
    }

    #[test]
    fn sorts_by_each_field_in_both_directions() {
        let records = sample();
        assert_eq!(
            names(&derive_view(&records, &view(SortField::Size, SortOrder::Descending))),
            vec!["c.zip", "a.png", "b.txt"]
        );
        assert_eq!(
            names(&derive_view(&records, &view(SortField::Size, SortOrder::Ascending))),
            vec!["b.txt", "a.png", "c.zip"]
        );
        assert_eq!(
            names(&derive_view(&records, &view(SortField::Date, SortOrder::Descending))),
            vec!["c.zip", "b.txt", "a.png"]
        );
        assert_eq!(
            names(&derive_view(&records, &view(SortField::Name, SortOrder::Descending))),
            vec!["c.zip", "b.txt", "a.png"]
        );
    }

    #[test]
    fn name_sort_ignores_case() {
        let records = vec![
            record(1, "beta.txt", "text/plain", 1, 1),
            record(2, "Alpha.txt", "text/plain", 1, 2),
            record(3, "gamma.txt", "text/plain", 1, 3),
        ];
        assert_eq!(
            names(&derive_view(&records, &view(SortField::Name, SortOrder::Ascending))),
            vec!["Alpha.txt", "beta.txt", "gamma.txt"]
        );
    }

    #[test]
    fn equal_keys_keep_registry_order_in_both_directions() {
        let records = vec![
            record(1, "one.txt", "text/plain", 10, 1),
            record(2, "two.txt", "text/plain", 50, 2),
            record(3, "three.txt", "text/plain", 10, 3),
        ];
        assert_eq!(
            names(&derive_view(&records, &view(SortField::Size, SortOrder::Ascending))),
            vec!["one.txt", "three.txt", "two.txt"]
        );
        assert_eq!(
            names(&derive_view(&records, &view(SortField::Size, SortOrder::Descending))),
            vec!["two.txt", "one.txt", "three.txt"]
        );
    }

    #[test]
    fn derive_view_is_pure() {
        let records = sample();
        let snapshot = records.clone();
        let state = view(SortField::Size, SortOrder::Descending);

        let first = derive_view(&records, &state);
        let second = derive_view(&records, &state);
        assert_eq!(first, second);
        assert_eq!(records, snapshot);
    }
}
