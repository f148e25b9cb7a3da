//! "All notes" list use-case.
//!
//! # Invariants
//! - An absent sidebar yields an empty list with `sidebar_bound == false`.
//! - The projection is recomputed on every call; nothing is cached.

use crate::model::navigation::count_links;
use crate::model::note_summary::NoteSummary;
use crate::projection::pipeline::{project_with, ProjectionOptions};
use crate::sidebar::source::{SidebarError, SidebarSource};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for the notes list use-case.
#[derive(Debug)]
pub enum NoteListServiceError {
    /// Sidebar could not be loaded or decoded.
    Sidebar(SidebarError),
}

impl Display for NoteListServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sidebar(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteListServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sidebar(err) => Some(err),
        }
    }
}

impl From<SidebarError> for NoteListServiceError {
    fn from(value: SidebarError) -> Self {
        Self::Sidebar(value)
    }
}

/// List result envelope used by presentation callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesListResult {
    /// Newest-first summaries after exclusion.
    pub items: Vec<NoteSummary>,
    /// `false` when the source had no sidebar at all.
    pub sidebar_bound: bool,
}

impl NotesListResult {
    /// Returns whether the caller should render the empty-state message.
    pub fn is_empty_state(&self) -> bool {
        !self.sidebar_bound || self.items.is_empty()
    }
}

/// Notes list service facade.
pub struct NoteListService<S: SidebarSource> {
    source: S,
    options: ProjectionOptions,
}

impl<S: SidebarSource> NoteListService<S> {
    /// Creates a service over `source` with projection `options`.
    pub fn new(source: S, options: ProjectionOptions) -> Self {
        Self { source, options }
    }

    /// Returns the options applied on every projection.
    pub fn options(&self) -> &ProjectionOptions {
        &self.options
    }

    /// Loads the current sidebar and projects it.
    pub fn all_notes(&self) -> Result<NotesListResult, NoteListServiceError> {
        let Some(tree) = self.source.load()? else {
            info!("event=notes_projected module=service status=unbound items=0");
            return Ok(NotesListResult {
                items: Vec::new(),
                sidebar_bound: false,
            });
        };

        let links = count_links(&tree);
        let items = project_with(&tree, &self.options);
        let dated = items.iter().filter(|note| note.is_dated()).count();
        debug!(
            "event=notes_projected module=service links={} excluded={}",
            links,
            links - items.len()
        );
        info!(
            "event=notes_projected module=service status=ok items={} dated={}",
            items.len(),
            dated
        );

        Ok(NotesListResult {
            items,
            sidebar_bound: true,
        })
    }
}
