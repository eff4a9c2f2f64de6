//! Navigation requests from inside the mounted tree.

use tokio::sync::mpsc;

/// A programmatic navigation the App event loop should perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationRequest {
    Push(String),
    Replace(String),
    Back,
    Forward,
}

/// Cloneable handle pages and layouts keep to request navigation.
///
/// Requests are queued and handled by the App loop in order; every send
/// returns false once the loop has stopped.
#[derive(Debug, Clone)]
pub struct Navigator {
    tx: mpsc::UnboundedSender<NavigationRequest>,
}

impl Navigator {
    pub(crate) fn new(tx: mpsc::UnboundedSender<NavigationRequest>) -> Self {
        Self { tx }
    }

    pub fn push(&self, path: impl Into<String>) -> bool {
        self.send(NavigationRequest::Push(path.into()))
    }

    pub fn replace(&self, path: impl Into<String>) -> bool {
        self.send(NavigationRequest::Replace(path.into()))
    }

    pub fn back(&self) -> bool {
        self.send(NavigationRequest::Back)
    }

    pub fn forward(&self) -> bool {
        self.send(NavigationRequest::Forward)
    }

    fn send(&self, request: NavigationRequest) -> bool {
        self.tx.send(request).is_ok()
    }
}
