//! Navigation shell for the WireGuard dashboard.
//!
//! A compiled route tree decides which component chain is mounted for the
//! current location; layouts receive the matched child through an explicit
//! slot; the composition root renders the chain into a host element.

pub mod app;
pub mod config;
pub mod history;
pub mod host;
pub mod layout;
pub mod lifecycle;
pub mod observability;
pub mod pages;
pub mod routing;
pub mod view;

pub use app::{App, Navigator};
pub use config::ShellConfig;
pub use lifecycle::Shutdown;
pub use routing::{Router, RouteTree};
