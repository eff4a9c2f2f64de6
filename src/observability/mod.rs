//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Router and App produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (navigation and mount counters)
//!     → tracing.rs (one span per navigation cycle, with a navigation ID)
//! ```
//!
//! # Design Decisions
//! - Structured logging through `tracing`
//! - Navigation ID flows through every event of one cycle
//! - Metrics go through the `metrics` facade; installing an exporter is up
//!   to the embedding application

pub mod logging;
pub mod metrics;
pub mod tracing;
