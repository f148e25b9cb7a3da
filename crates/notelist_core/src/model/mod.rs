//! Domain model for the navigation tree and its flattened note projection.
//!
//! # Responsibility
//! - Define the read-only navigation tree consumed by the projector.
//! - Define the display-ready `NoteSummary` produced by the projector.
//!
//! # Invariants
//! - The navigation tree is owned and acyclic (`Vec` children, no back links).
//! - `NoteSummary` is a derived value and is never persisted.

pub mod navigation;
pub mod note_summary;
