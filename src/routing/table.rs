//! The dashboard route table.
//!
//! ```text
//! /        → MainLayout
//!   ""     →   PeersPage   (index)
//!   "logs" →   LogsPage
//! ```

use std::sync::Arc;

use crate::layout::MainLayout;
use crate::pages::{LogsPage, PeersPage};
use crate::routing::{RouteError, RouteNode, RouteTree};
use crate::view::Element;

/// Components bound into the dashboard route table.
#[derive(Debug, Clone)]
pub struct DashboardPages {
    pub layout: Element,
    pub peers: Element,
    pub logs: Element,
}

impl Default for DashboardPages {
    fn default() -> Self {
        Self {
            layout: Arc::new(MainLayout::new()),
            peers: Arc::new(PeersPage),
            logs: Arc::new(LogsPage),
        }
    }
}

/// Compile the dashboard route table around the given components.
pub fn dashboard_routes(pages: DashboardPages) -> Result<RouteTree, RouteError> {
    RouteTree::compile(
        RouteNode::root(pages.layout)
            .child(RouteNode::index(pages.peers))
            .child(RouteNode::new("logs", pages.logs)),
    )
}
