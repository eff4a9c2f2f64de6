//! Route matching logic.
//!
//! # Responsibilities
//! - Split a location path into segments
//! - Walk the route tree from the root, one segment per level
//! - Descend through index children once the path is exhausted
//!
//! # Design Decisions
//! - Path matching is case-sensitive and exact per segment
//! - Empty segments (leading, trailing or doubled slashes) are ignored
//! - No wildcards or parameters, so matching is O(depth)

use serde::Serialize;

use crate::routing::{NodeId, RouteTree};

/// Ordered route nodes from the root to the deepest matched node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MatchPath(Vec<NodeId>);

impl MatchPath {
    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    /// Deepest matched node.
    pub fn leaf(&self) -> Option<NodeId> {
        self.0.last().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result of matching one location against the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "match_path", rename_all = "snake_case")]
pub enum MatchOutcome {
    /// No location has been matched yet.
    Pending,
    /// A contiguous walk from the root consumed the whole path.
    Matched(MatchPath),
    /// Some segment had no matching child.
    Unmatched,
}

impl MatchOutcome {
    /// The match path, empty unless matched.
    pub fn match_path(&self) -> &[NodeId] {
        match self {
            MatchOutcome::Matched(path) => path.nodes(),
            _ => &[],
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            MatchOutcome::Pending => "pending",
            MatchOutcome::Matched(_) => "matched",
            MatchOutcome::Unmatched => "unmatched",
        }
    }
}

/// Non-empty segments of `path`, in order.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Match `path` against `tree`.
pub fn match_location(tree: &RouteTree, path: &str) -> MatchOutcome {
    let mut current = tree.root();
    let mut walk = vec![current];

    for segment in segments(path) {
        match tree.child(current, segment) {
            Some(next) => {
                current = next;
                walk.push(next);
            }
            None => return MatchOutcome::Unmatched,
        }
    }

    while let Some(index) = tree.index_child(current) {
        current = index;
        walk.push(index);
    }

    MatchOutcome::Matched(MatchPath(walk))
}
