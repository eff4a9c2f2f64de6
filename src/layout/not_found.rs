//! Fallback page for unmatched locations.

use crate::view::{Mountable, Slot, View};

/// Visible "not found" state mounted when no route matches.
#[derive(Debug, Default)]
pub struct NotFoundPage;

impl Mountable for NotFoundPage {
    fn name(&self) -> &str {
        "NotFoundPage"
    }

    fn render(&self, _slot: Slot) -> View {
        View::element("section")
            .attr("data-page", "not-found")
            .child(View::element("h1").child(View::text("404")))
            .child(View::element("p").child(View::text("Page not found")))
            .child(View::element("a").attr("href", "/").child(View::text("Go home")))
    }
}
