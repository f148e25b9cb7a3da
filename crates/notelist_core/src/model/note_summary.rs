//! Flattened note projection model.
//!
//! # Responsibility
//! - Carry the display-ready fields of one navigation link.
//! - Define the wire shape used by JSON output.
//!
//! # Invariants
//! - `category` is the nearest enclosing category label or the root sentinel.
//! - `date`, when present, is the verbatim `YYYY-MM-DD` substring of `href`.

use crate::model::navigation::DocumentId;
use serde::{Deserialize, Serialize};

/// Sentinel category for links that have no enclosing category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Display-ready projection of one navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSummary {
    /// Display title, copied from the link.
    pub label: String,
    /// Link target, copied from the link.
    pub href: String,
    /// Serialized as `doc_id` to match the sidebar's `docId` meaning.
    #[serde(rename = "doc_id")]
    pub document_id: Option<DocumentId>,
    /// Nearest enclosing category label.
    pub category: String,
    /// ISO date string found in `href`. Not validated as a calendar date.
    pub date: Option<String>,
}

impl NoteSummary {
    /// Returns whether a date was found in the link target.
    pub fn is_dated(&self) -> bool {
        self.date.is_some()
    }
}
