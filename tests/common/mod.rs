//! Shared utilities for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use dashboard_shell::config::ShellConfig;
use dashboard_shell::history::{History, MemoryHistory};
use dashboard_shell::host::{Host, MemoryHost};
use dashboard_shell::routing::{dashboard_routes, DashboardPages, RouteTree};
use dashboard_shell::view::{Element, Mountable, Slot, View};

/// Ordered record of mount/unmount calls across all recording components.
#[derive(Debug, Default, Clone)]
pub struct Journal {
    events: Arc<Mutex<Vec<String>>>,
    live_leaves: Arc<AtomicUsize>,
    max_live_leaves: Arc<AtomicUsize>,
}

impl Journal {
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }

    /// Highest number of leaves ever mounted at the same time.
    #[allow(dead_code)]
    pub fn max_live_leaves(&self) -> usize {
        self.max_live_leaves.load(Ordering::SeqCst)
    }

    fn record(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

/// A component that records its lifecycle into a `Journal`.
#[derive(Debug)]
pub struct Recording {
    name: &'static str,
    layout: bool,
    journal: Journal,
}

impl Mountable for Recording {
    fn name(&self) -> &str {
        self.name
    }

    fn render(&self, slot: Slot) -> View {
        let view = View::element("div").attr("data-component", self.name);
        if self.layout {
            view.child(slot.into_view())
        } else {
            view.child(View::text(self.name))
        }
    }

    fn mounted(&self) {
        if !self.layout {
            let live = self.journal.live_leaves.fetch_add(1, Ordering::SeqCst) + 1;
            self.journal.max_live_leaves.fetch_max(live, Ordering::SeqCst);
        }
        self.journal.record(format!("mount {}", self.name));
    }

    fn unmounted(&self) {
        if !self.layout {
            self.journal.live_leaves.fetch_sub(1, Ordering::SeqCst);
        }
        self.journal.record(format!("unmount {}", self.name));
    }
}

fn recording(name: &'static str, layout: bool, journal: &Journal) -> Element {
    Arc::new(Recording {
        name,
        layout,
        journal: journal.clone(),
    })
}

/// The dashboard route table with recording components in every position.
pub fn recording_routes() -> (Arc<RouteTree>, Journal) {
    let journal = Journal::default();
    let pages = DashboardPages {
        layout: recording("Main", true, &journal),
        peers: recording("Peers", false, &journal),
        logs: recording("Logs", false, &journal),
    };
    (Arc::new(dashboard_routes(pages).unwrap()), journal)
}

/// In-memory history and host with the default attachment point.
pub struct Harness {
    pub config: ShellConfig,
    pub history: Arc<MemoryHistory>,
    pub host: Arc<MemoryHost>,
}

impl Harness {
    pub fn new(initial: &str) -> Self {
        let config = ShellConfig::default();
        let host = Arc::new(MemoryHost::with_elements([config.mount.element_id.clone()]));
        Self {
            config,
            history: Arc::new(MemoryHistory::new(initial)),
            host,
        }
    }

    pub fn history(&self) -> Arc<dyn History> {
        self.history.clone()
    }

    pub fn host(&self) -> Arc<dyn Host> {
        self.host.clone()
    }

    /// Current content of the attachment point.
    pub fn mounted(&self) -> View {
        self.host
            .content(&self.config.mount.element_id)
            .unwrap_or(View::Empty)
    }
}
