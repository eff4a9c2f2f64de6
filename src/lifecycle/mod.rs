//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validate config → Compile route table → Build router → Check host → First render
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Event loop stops → Unmount tree → Clear host
//!
//! Signals (signals.rs):
//!     SIGINT (Ctrl+C) → Trigger shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal and nothing is rendered
//! - Ordered startup: config first, then routes, then the host

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
