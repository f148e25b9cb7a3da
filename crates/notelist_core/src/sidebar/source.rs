//! Sidebar source contracts and implementations.
//!
//! # Responsibility
//! - Define where the projector's navigation tree is loaded from.
//! - Map file-system and decoding failures to semantic errors.
//!
//! # Invariants
//! - A missing sidebar file is reported as `Ok(None)`, not as an error.
//! - Sources never mutate the tree they hand out.

use crate::model::navigation::NavigationNode;
use crate::sidebar::wire::parse_sidebar;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Result type used by sidebar loading operations.
pub type SidebarResult<T> = Result<T, SidebarError>;

/// Errors from sidebar loading and decoding.
#[derive(Debug)]
pub enum SidebarError {
    /// Sidebar file exists but cannot be read.
    Io { path: PathBuf, message: String },
    /// Sidebar content is not valid sidebar JSON.
    Malformed(String),
}

impl Display for SidebarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, message } => {
                write!(f, "failed to read sidebar `{}`: {message}", path.display())
            }
            Self::Malformed(message) => write!(f, "malformed sidebar: {message}"),
        }
    }
}

impl Error for SidebarError {}

/// Supplies the navigation tree to be projected.
pub trait SidebarSource {
    /// Loads the current tree. `None` means no sidebar is bound.
    fn load(&self) -> SidebarResult<Option<Vec<NavigationNode>>>;
}

/// Reads a sidebar JSON file on every `load`.
#[derive(Debug, Clone)]
pub struct JsonFileSidebarSource {
    path: PathBuf,
}

impl JsonFileSidebarSource {
    /// Creates a source bound to `path`. The file is not touched until `load`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the bound file path.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
}

impl SidebarSource for JsonFileSidebarSource {
    fn load(&self) -> SidebarResult<Option<Vec<NavigationNode>>> {
        load_sidebar(self.path.as_path())
    }
}

/// In-memory source, used when the tree is already built by the caller.
#[derive(Debug, Clone, Default)]
pub struct StaticSidebarSource {
    tree: Option<Vec<NavigationNode>>,
}

impl StaticSidebarSource {
    /// Creates a source that always returns `tree`.
    pub fn new(tree: Vec<NavigationNode>) -> Self {
        Self { tree: Some(tree) }
    }

    /// Creates a source with no sidebar bound.
    pub fn unbound() -> Self {
        Self { tree: None }
    }
}

impl SidebarSource for StaticSidebarSource {
    fn load(&self) -> SidebarResult<Option<Vec<NavigationNode>>> {
        Ok(self.tree.clone())
    }
}

/// Loads and decodes a sidebar JSON file.
///
/// # Errors
/// - Returns `SidebarError::Io` when the file exists but cannot be read.
/// - Returns `SidebarError::Malformed` when decoding fails.
pub fn load_sidebar(path: &Path) -> SidebarResult<Option<Vec<NavigationNode>>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(SidebarError::Io {
                path: path.to_path_buf(),
                message: err.to_string(),
            })
        }
    };
    parse_sidebar(contents.as_str())
}

#[cfg(test)]
mod tests {
    use super::{SidebarSource, StaticSidebarSource};
    use crate::model::navigation::NavigationNode;

    #[test]
    fn static_source_returns_clone_each_time() {
        let source = StaticSidebarSource::new(vec![NavigationNode::link("A", "/a", "a")]);
        let first = source.load().unwrap();
        let second = source.load().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.map(|tree| tree.len()), Some(1));
    }

    #[test]
    fn unbound_source_returns_none() {
        assert_eq!(StaticSidebarSource::unbound().load().unwrap(), None);
    }
}
