//! Core logic for the "all notes" list.
//! Turns a docs sidebar tree into a flat, newest-first list of note summaries.

pub mod config;
pub mod logging;
pub mod model;
pub mod projection;
pub mod service;
pub mod sidebar;

pub use config::{load_config, parse_config, ConfigError, LoggingConfig, ProjectionConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::navigation::{count_links, DocumentId, NavigationNode};
pub use model::note_summary::{NoteSummary, UNCATEGORIZED};
pub use projection::date::extract_date;
pub use projection::flatten::flatten;
pub use projection::ordering::{compare_by_date, sort_by_date};
pub use projection::pipeline::{
    project, project_with, ProjectionOptions, DEFAULT_EXCLUDED_LABELS,
};
pub use service::note_list_service::{NoteListService, NoteListServiceError, NotesListResult};
pub use sidebar::source::{
    load_sidebar, JsonFileSidebarSource, SidebarError, SidebarResult, SidebarSource,
    StaticSidebarSource,
};
pub use sidebar::wire::{parse_sidebar, parse_sidebar_value};

/// Message shown when no sidebar is bound or no notes remain.
pub const EMPTY_STATE_MESSAGE: &str = "No docs sidebar is bound, or there are no notes to show.";

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
