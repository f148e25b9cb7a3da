//! Navigation tree model.
//!
//! # Responsibility
//! - Represent the site content hierarchy as categories and leaf links.
//! - Provide small constructors used by sidebar decoding and tests.
//!
//! # Invariants
//! - Only two node kinds exist: `Category` and `Link`.
//! - Child order is the author's order and is preserved by every consumer.

/// Opaque document identifier copied from the content index.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type DocumentId = String;

/// One node of the navigation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationNode {
    /// Grouping node. Its `label` becomes the category of direct link children.
    Category {
        label: String,
        children: Vec<NavigationNode>,
    },
    /// Leaf node pointing to one document.
    Link {
        label: String,
        /// Externally-controlled URL or path; may embed a `YYYY-MM-DD` date.
        href: String,
        /// `None` for links that do not target an indexed document.
        document_id: Option<DocumentId>,
    },
}

impl NavigationNode {
    /// Creates a category node.
    pub fn category(label: impl Into<String>, children: Vec<NavigationNode>) -> Self {
        Self::Category {
            label: label.into(),
            children,
        }
    }

    /// Creates a link node with a document id.
    pub fn link(
        label: impl Into<String>,
        href: impl Into<String>,
        document_id: impl Into<DocumentId>,
    ) -> Self {
        Self::Link {
            label: label.into(),
            href: href.into(),
            document_id: Some(document_id.into()),
        }
    }

    /// Creates a link node that targets no indexed document.
    pub fn external_link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            href: href.into(),
            document_id: None,
        }
    }

    /// Returns the user-facing label of either node kind.
    pub fn label(&self) -> &str {
        match self {
            Self::Category { label, .. } | Self::Link { label, .. } => label,
        }
    }

    /// Returns whether this node is a leaf link.
    pub fn is_link(&self) -> bool {
        matches!(self, Self::Link { .. })
    }

    /// Counts link nodes in this subtree, including `self`.
    pub fn link_count(&self) -> usize {
        match self {
            Self::Link { .. } => 1,
            Self::Category { children, .. } => count_links(children),
        }
    }
}

/// Counts link nodes across a forest of navigation nodes.
pub fn count_links(nodes: &[NavigationNode]) -> usize {
    nodes.iter().map(NavigationNode::link_count).sum()
}
