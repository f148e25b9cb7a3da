//! Newest-first ordering of note summaries.

use crate::model::note_summary::NoteSummary;
use std::cmp::Ordering;

/// Total order used to sort summaries for display.
///
/// - Dated summaries come before undated ones.
/// - Between dated summaries the greater ISO string (more recent) comes first.
/// - Undated summaries compare equal so a stable sort keeps their input order.
pub fn compare_by_date(a: &NoteSummary, b: &NoteSummary) -> Ordering {
    match (a.date.as_deref(), b.date.as_deref()) {
        (Some(left), Some(right)) => right.cmp(left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorts summaries newest-first with [`compare_by_date`]; the sort is stable.
pub fn sort_by_date(notes: &mut [NoteSummary]) {
    notes.sort_by(compare_by_date);
}

#[cfg(test)]
mod tests {
    use super::{compare_by_date, sort_by_date};
    use crate::model::note_summary::NoteSummary;
    use std::cmp::Ordering;

    fn note(label: &str, date: Option<&str>) -> NoteSummary {
        NoteSummary {
            label: label.to_string(),
            href: format!("/{label}"),
            document_id: None,
            category: "Notes".to_string(),
            date: date.map(str::to_string),
        }
    }

    #[test]
    fn comparator_covers_all_branches() {
        let old = note("old", Some("2023-01-01"));
        let new = note("new", Some("2024-01-01"));
        let undated = note("undated", None);

        assert_eq!(compare_by_date(&new, &old), Ordering::Less);
        assert_eq!(compare_by_date(&old, &new), Ordering::Greater);
        assert_eq!(compare_by_date(&old, &undated), Ordering::Less);
        assert_eq!(compare_by_date(&undated, &old), Ordering::Greater);
        assert_eq!(compare_by_date(&undated, &undated), Ordering::Equal);
        assert_eq!(compare_by_date(&old, &old), Ordering::Equal);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let mut notes = vec![
            note("u1", None),
            note("d1", Some("2024-02-02")),
            note("u2", None),
            note("d2", Some("2024-02-02")),
            note("d3", Some("2025-01-01")),
            note("u3", None),
        ];

        sort_by_date(&mut notes);
        let labels: Vec<&str> = notes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["d3", "d1", "d2", "u1", "u2", "u3"]);
    }
}
