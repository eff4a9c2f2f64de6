//! Placeholder page leaves.
//!
//! The real peers and logs pages are supplied by their own modules; the shell
//! only needs something mountable at each route position.

use crate::view::{Mountable, Slot, View};

/// Peers overview, mounted at the index route.
#[derive(Debug, Default)]
pub struct PeersPage;

impl Mountable for PeersPage {
    fn name(&self) -> &str {
        "PeersPage"
    }

    fn render(&self, _slot: Slot) -> View {
        page("peers", "Peers")
    }
}

/// Server log viewer, mounted at `/logs`.
#[derive(Debug, Default)]
pub struct LogsPage;

impl Mountable for LogsPage {
    fn name(&self) -> &str {
        "LogsPage"
    }

    fn render(&self, _slot: Slot) -> View {
        page("logs", "Logs")
    }
}

fn page(id: &str, title: &str) -> View {
    View::element("section")
        .attr("data-page", id)
        .child(View::element("h1").child(View::text(title)))
}
