//! Layout components with an insertion point.
//!
//! # Design Decisions
//! - Layout chrome never depends on which child is mounted, so the router can
//!   swap the child without touching layout state
//! - The not-found page lives here because the shell owns it, not the pages

pub mod main_layout;
pub mod not_found;

pub use main_layout::MainLayout;
pub use not_found::NotFoundPage;
