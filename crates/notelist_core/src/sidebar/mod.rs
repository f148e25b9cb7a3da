//! Sidebar decoding and source abstraction.
//!
//! # Responsibility
//! - Decode Docusaurus-shaped sidebar JSON into the navigation tree.
//! - Abstract where the tree comes from behind `SidebarSource`.
//!
//! # Invariants
//! - An absent sidebar (`None`) is distinct from an empty one (`Some(vec![])`).
//! - Item kinds other than `link` and `category` are skipped, never rejected.

pub mod source;
pub mod wire;
