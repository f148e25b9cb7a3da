//! Notes list use-case service.
//!
//! # Responsibility
//! - Pull the navigation tree from a `SidebarSource` and project it.
//! - Keep the CLI decoupled from sidebar decoding details.

pub mod note_list_service;
