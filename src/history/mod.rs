//! Browser history abstraction.
//!
//! # Data Flow
//! ```text
//! Programmatic navigation:
//!     Router::navigate → History::push / replace   (no event, like pushState)
//!
//! User navigation (back/forward):
//!     History::back / forward
//!     → HistoryEvent broadcast                      (like popstate)
//!     → App event loop → Router::sync
//! ```
//!
//! # Design Decisions
//! - The router only sees the `History` trait, so tests and the binary run
//!   against `MemoryHistory` and several routers can coexist
//! - Events are broadcast; a lagging listener resynchronises from
//!   `location()` instead of replaying every entry

pub mod location;
pub mod memory;

use std::fmt;

use tokio::sync::broadcast;

pub use location::{Location, LocationError};
pub use memory::MemoryHistory;

/// A location change the application did not initiate itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEvent {
    /// Path of the entry that became current.
    pub path: String,
}

/// Session history of the host environment.
pub trait History: Send + Sync + fmt::Debug {
    /// Path of the current entry.
    fn location(&self) -> String;

    /// Add an entry and make it current. Emits no event.
    fn push(&self, path: &str);

    /// Overwrite the current entry. Emits no event.
    fn replace(&self, path: &str);

    /// Move one entry back. Returns false at the start of history.
    fn back(&self) -> bool;

    /// Move one entry forward. Returns false at the end of history.
    fn forward(&self) -> bool;

    /// Subscribe to back/forward notifications.
    fn subscribe(&self) -> broadcast::Receiver<HistoryEvent>;
}
