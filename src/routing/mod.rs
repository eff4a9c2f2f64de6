//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     RouteNode tree (declarative)
//!     → tree.rs (validate: index uniqueness, sibling conflicts)
//!     → Freeze as immutable RouteTree (arena of nodes, NodeId handles)
//!
//! Navigation:
//!     location path
//!     → matcher.rs (segment walk from the root)
//!     → Matched(match path) or Unmatched
//!     → router.rs (mount diff, fallback, publish NavigationState)
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Exact, case-sensitive segment matching; no wildcards or parameters
//! - Exact segment beats index child; index only when the path is exhausted
//! - Explicit Unmatched rather than silent default

pub mod matcher;
pub mod node;
pub mod router;
pub mod table;
pub mod tree;

pub use matcher::{match_location, MatchOutcome, MatchPath};
pub use node::RouteNode;
pub use router::{NavigationSource, NavigationState, Router, RouterPhase};
pub use table::{dashboard_routes, DashboardPages};
pub use tree::{NodeId, RouteError, RouteTree};
