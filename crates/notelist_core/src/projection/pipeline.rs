//! End-to-end projection: flatten, sort, filter.
//!
//! # Invariants
//! - The filter compares each note's own `label` against the excluded set,
//!   not its derived `category`.
//! - Filtering runs after sorting, so removal never changes relative order.

use crate::model::navigation::NavigationNode;
use crate::model::note_summary::{NoteSummary, UNCATEGORIZED};
use crate::projection::flatten::flatten;
use crate::projection::ordering::sort_by_date;
use std::collections::HashSet;

/// Labels excluded by default, as published on the original site.
pub const DEFAULT_EXCLUDED_LABELS: &[&str] = &["Tutorial"];

/// Tunables for one projection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionOptions {
    /// Category assigned to links with no category ancestor.
    pub root_category: String,
    /// Notes whose title equals one of these values are dropped.
    pub excluded_labels: HashSet<String>,
}

impl ProjectionOptions {
    /// Creates options with the default sentinel and the given exclusions.
    pub fn with_excluded<I, S>(excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            root_category: UNCATEGORIZED.to_string(),
            excluded_labels: excluded.into_iter().map(Into::into).collect(),
        }
    }

    /// Replaces the root sentinel category.
    pub fn root_category(mut self, value: impl Into<String>) -> Self {
        self.root_category = value.into();
        self
    }
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self::with_excluded(DEFAULT_EXCLUDED_LABELS.iter().copied())
    }
}

/// Projects `tree` into a flat newest-first list, dropping excluded titles.
///
/// Links at the root are categorized as [`UNCATEGORIZED`].
pub fn project(tree: &[NavigationNode], excluded: &HashSet<String>) -> Vec<NoteSummary> {
    run(tree, UNCATEGORIZED, excluded)
}

/// Same as [`project`] with a caller-provided root sentinel.
pub fn project_with(tree: &[NavigationNode], options: &ProjectionOptions) -> Vec<NoteSummary> {
    run(tree, options.root_category.as_str(), &options.excluded_labels)
}

fn run(
    tree: &[NavigationNode],
    root_category: &str,
    excluded: &HashSet<String>,
) -> Vec<NoteSummary> {
    let mut notes = flatten(tree, root_category);
    sort_by_date(&mut notes);
    notes.retain(|note| !excluded.contains(&note.label));
    notes
}
