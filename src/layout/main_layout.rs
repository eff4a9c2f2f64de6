//! Dashboard frame wrapping the peers and logs pages.

use crate::view::{Mountable, Slot, View};

/// Fixed dashboard chrome plus a single insertion point.
#[derive(Debug, Default)]
pub struct MainLayout;

impl MainLayout {
    pub fn new() -> Self {
        Self
    }

    fn nav() -> View {
        View::element("nav")
            .attr("class", "main-nav")
            .child(View::element("a").attr("href", "/").child(View::text("Peers")))
            .child(View::element("a").attr("href", "/logs").child(View::text("Logs")))
    }
}

impl Mountable for MainLayout {
    fn name(&self) -> &str {
        "MainLayout"
    }

    fn render(&self, slot: Slot) -> View {
        View::element("div")
            .attr("class", "main-layout")
            .child(Self::nav())
            .child(
                View::element("main")
                    .attr("data-outlet", "main")
                    .child(slot.into_view()),
            )
    }
}
