//! Navigation tree to note list projection.
//!
//! # Responsibility
//! - Flatten the navigation tree into `NoteSummary` values.
//! - Extract dates, order newest-first, and drop excluded titles.
//!
//! # Invariants
//! - Projection is pure: no I/O, no logging, no shared mutable state.
//! - Phases run in a fixed order: flatten, date extraction, sort, filter.

pub mod date;
pub mod flatten;
pub mod ordering;
pub mod pipeline;
