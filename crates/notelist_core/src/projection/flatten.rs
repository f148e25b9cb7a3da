//! Depth-first flattening of the navigation tree.
//!
//! # Invariants
//! - Pre-order traversal; sibling order is preserved.
//! - Only the nearest enclosing category is recorded, never a breadcrumb.

use crate::model::navigation::NavigationNode;
use crate::model::note_summary::NoteSummary;
use crate::projection::date::extract_date;

/// Flattens `nodes` into one summary per link, in pre-order.
///
/// `root_category` is the category given to links with no category ancestor.
pub fn flatten(nodes: &[NavigationNode], root_category: &str) -> Vec<NoteSummary> {
    let mut out = Vec::new();
    flatten_into(nodes, root_category, &mut out);
    out
}

fn flatten_into(nodes: &[NavigationNode], category: &str, out: &mut Vec<NoteSummary>) {
    for node in nodes {
        match node {
            NavigationNode::Link {
                label,
                href,
                document_id,
            } => out.push(NoteSummary {
                label: label.clone(),
                href: href.clone(),
                document_id: document_id.clone(),
                category: category.to_string(),
                date: extract_date(href),
            }),
            NavigationNode::Category { label, children } => {
                flatten_into(children, label.as_str(), out);
            }
        }
    }
}
