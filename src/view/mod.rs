//! Render model shared by layouts, leaves and the host.
//!
//! # Data Flow
//! ```text
//! Router match path [root, .., leaf]
//!     → leaf.render(Slot::empty())
//!     → parent.render(Slot::filled(child view))   (repeated up to the root)
//!     → App chrome wraps the root view
//!     → Host mounts the final View at the attachment point
//! ```
//!
//! # Design Decisions
//! - Views are plain data, independent of any rendering framework
//! - A layout only sees its `Slot`, never the concrete child type
//! - Mount lifecycle hooks are fire-and-forget; the core never awaits leaves

pub mod mountable;
pub mod node;

pub use mountable::{Element, Mountable, Slot};
pub use node::View;
