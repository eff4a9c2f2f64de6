//! Composition root.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Host attachment point check → Router::sync(Initial) → commit
//!
//! Event loop (App::run):
//!     Navigator request  → Router::navigate / replace / back / forward
//!     History pop event  → Router::sync(Pop)
//!     Shutdown signal    → Router::teardown → Host::unmount
//!     each cycle         → render with chrome → Host::mount
//! ```
//!
//! # Design Decisions
//! - The App owns its Router; nothing routes through globals
//! - Events are handled one at a time on one task, in arrival order, so a
//!   newer navigation always starts after the previous cycle finished
//! - Bad navigation requests are logged and dropped, never fatal

pub mod navigator;

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};

use crate::config::MountConfig;
use crate::history::HistoryEvent;
use crate::host::{Host, HostError};
use crate::lifecycle::startup::StartupError;
use crate::routing::{NavigationSource, NavigationState, Router};
use crate::view::View;

pub use navigator::{NavigationRequest, Navigator};

/// The running application: router, host and the event sources feeding them.
#[derive(Debug)]
pub struct App {
    router: Router,
    host: Arc<dyn Host>,
    mount_id: String,
    requests_tx: mpsc::UnboundedSender<NavigationRequest>,
    requests: mpsc::UnboundedReceiver<NavigationRequest>,
    history_events: broadcast::Receiver<HistoryEvent>,
}

impl App {
    /// Bind a router to the host attachment point.
    ///
    /// Fails without mounting anything when the attachment point is missing.
    pub fn new(router: Router, host: Arc<dyn Host>, mount: &MountConfig) -> Result<Self, StartupError> {
        if !host.has_element(&mount.element_id) {
            tracing::error!(element_id = %mount.element_id, "Attachment point not found");
            return Err(StartupError::MissingAttachmentPoint {
                id: mount.element_id.clone(),
            });
        }

        let history_events = router.history().subscribe();
        let (requests_tx, requests) = mpsc::unbounded_channel();

        Ok(Self {
            router,
            host,
            mount_id: mount.element_id.clone(),
            requests_tx,
            requests,
            history_events,
        })
    }

    /// Match the initial location and mount the first render.
    pub fn start(&mut self) -> Result<NavigationState, HostError> {
        let state = self.router.sync(NavigationSource::Initial);
        self.commit()?;

        tracing::info!(
            element_id = %self.mount_id,
            path = %state.path,
            outcome = state.outcome.label(),
            "Application mounted"
        );
        Ok(state)
    }

    /// The router output wrapped in application chrome.
    pub fn render(&self) -> View {
        View::element("div")
            .attr("id", "app-shell")
            .child(self.router.render())
    }

    fn commit(&self) -> Result<(), HostError> {
        self.host.mount(&self.mount_id, self.render())
    }

    /// Handle for requesting navigation from inside the mounted tree.
    pub fn navigator(&self) -> Navigator {
        Navigator::new(self.requests_tx.clone())
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Navigate immediately and commit the result.
    ///
    /// Unparseable locations are logged and leave the current page mounted.
    pub fn navigate(&mut self, href: &str) -> Result<NavigationState, HostError> {
        self.handle(NavigationRequest::Push(href.to_string()))
    }

    /// Apply one navigation request and commit the result.
    pub fn handle(&mut self, request: NavigationRequest) -> Result<NavigationState, HostError> {
        let result = match &request {
            NavigationRequest::Push(href) => self.router.navigate(href),
            NavigationRequest::Replace(href) => self.router.replace(href),
            NavigationRequest::Back => Ok(self.router.back()),
            NavigationRequest::Forward => Ok(self.router.forward()),
        };

        match result {
            Ok(state) => {
                self.commit()?;
                Ok(state)
            }
            Err(e) => {
                tracing::warn!(request = ?request, error = %e, "Navigation request rejected");
                Ok(self.router.state())
            }
        }
    }

    /// Re-match the history's current location and commit the result.
    fn resync(&mut self) -> Result<NavigationState, HostError> {
        let state = self.router.sync(NavigationSource::Pop);
        self.commit()?;
        Ok(state)
    }

    /// Run the event loop until `shutdown` fires, then unmount everything.
    ///
    /// Pending navigation requests and history events are drained before
    /// the shutdown signal is honoured.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) -> Result<(), HostError> {
        tracing::info!(element_id = %self.mount_id, "Navigation loop started");

        loop {
            tokio::select! {
                biased;

                Some(request) = self.requests.recv() => {
                    self.handle(request)?;
                }
                event = self.history_events.recv() => match event {
                    Ok(HistoryEvent { path }) => {
                        tracing::debug!(path = %path, "History traversal");
                        self.resync()?;
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "History listener lagged, resynchronising");
                        self.resync()?;
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        tracing::info!("History closed");
                        break;
                    }
                },
                _ = shutdown.recv() => {
                    tracing::info!("Shutdown signal received");
                    break;
                }
            }
        }

        self.stop()
    }

    /// Unmount the component tree and clear the attachment point.
    pub fn stop(mut self) -> Result<(), HostError> {
        self.router.teardown();
        self.host.unmount(&self.mount_id)?;
        tracing::info!("Application unmounted");
        Ok(())
    }
}
