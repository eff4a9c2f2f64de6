//! The mountable capability and the layout insertion point.

use std::fmt;
use std::sync::Arc;

use crate::view::View;

/// Shared reference to a renderable unit, owned by the route tree.
pub type Element = Arc<dyn Mountable>;

/// A unit the router can mount, render into a parent slot and unmount.
///
/// Layouts place the `Slot` they receive somewhere in their output; leaves
/// ignore it. Lifecycle hooks are called by the router only, in strict
/// unmount-before-mount order.
pub trait Mountable: Send + Sync + fmt::Debug {
    /// Component name for logs and metrics.
    fn name(&self) -> &str;

    /// Render this component with the child matched beneath it.
    fn render(&self, slot: Slot) -> View;

    /// Called once when the component enters the mounted tree.
    fn mounted(&self) {}

    /// Called once when the component leaves the mounted tree.
    /// Pending work started by the component must be cancelled here.
    fn unmounted(&self) {}
}

/// The single insertion point of a layout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Slot(Option<View>);

impl Slot {
    pub fn empty() -> Self {
        Self(None)
    }

    pub fn filled(view: View) -> Self {
        Self(Some(view))
    }

    /// The child view, or `View::Empty` when nothing is mounted below.
    pub fn into_view(self) -> View {
        self.0.unwrap_or(View::Empty)
    }
}
