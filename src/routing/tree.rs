//! Compiled route tree.
//!
//! # Responsibilities
//! - Validate the declarative table once, at construction
//! - Store nodes in an arena addressed by `NodeId`
//! - Answer child and index lookups for the matcher
//!
//! # Design Decisions
//! - Immutable after construction; shared via `Arc`
//! - Configuration errors are rejected, never resolved by picking one

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use crate::routing::RouteNode;
use crate::view::Element;

/// Stable handle to a compiled route node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Error type for route table construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("route {parent} declares more than one index child")]
    DuplicateIndexChild { parent: String },

    #[error("route {parent} declares segment '{segment}' more than once")]
    DuplicateSegment { parent: String, segment: String },

    #[error("invalid route segment '{segment}': {reason}")]
    InvalidSegment { segment: String, reason: &'static str },
}

#[derive(Debug)]
struct CompiledNode {
    element: Element,
    href: String,
    parent: Option<NodeId>,
    children: HashMap<String, NodeId>,
    index: Option<NodeId>,
}

/// Immutable route tree. The root node is always `NodeId(0)`.
#[derive(Debug)]
pub struct RouteTree {
    nodes: Vec<CompiledNode>,
}

impl RouteTree {
    /// Validate and freeze a declarative route table.
    pub fn compile(root: RouteNode) -> Result<Self, RouteError> {
        if root.segment != "/" && !root.segment.is_empty() {
            return Err(RouteError::InvalidSegment {
                segment: root.segment,
                reason: "root route must be '/'",
            });
        }

        let mut tree = Self { nodes: Vec::new() };
        tree.insert(root, None, "/".to_string())?;

        tracing::debug!(nodes = tree.nodes.len(), "Route tree compiled");
        Ok(tree)
    }

    fn insert(
        &mut self,
        node: RouteNode,
        parent: Option<NodeId>,
        href: String,
    ) -> Result<NodeId, RouteError> {
        let id = NodeId(self.nodes.len());
        self.nodes.push(CompiledNode {
            element: node.element,
            href: href.clone(),
            parent,
            children: HashMap::new(),
            index: None,
        });

        for child in node.children {
            if child.segment.contains('/') {
                return Err(RouteError::InvalidSegment {
                    segment: child.segment,
                    reason: "segments cannot contain '/'",
                });
            }

            if child.is_index() {
                if self.nodes[id.0].index.is_some() {
                    return Err(RouteError::DuplicateIndexChild { parent: href });
                }
                let child_id = self.insert(child, Some(id), href.clone())?;
                self.nodes[id.0].index = Some(child_id);
            } else {
                if self.nodes[id.0].children.contains_key(&child.segment) {
                    return Err(RouteError::DuplicateSegment {
                        parent: href,
                        segment: child.segment,
                    });
                }
                let segment = child.segment.clone();
                let child_href = join_href(&href, &segment);
                let child_id = self.insert(child, Some(id), child_href)?;
                self.nodes[id.0].children.insert(segment, child_id);
            }
        }

        Ok(id)
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Child of `parent` bound to exactly `segment`.
    pub fn child(&self, parent: NodeId, segment: &str) -> Option<NodeId> {
        self.nodes.get(parent.0)?.children.get(segment).copied()
    }

    /// Index child of `parent`, if declared.
    pub fn index_child(&self, parent: NodeId) -> Option<NodeId> {
        self.nodes.get(parent.0)?.index
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0)?.parent
    }

    /// Element rendered for `id`.
    ///
    /// Node ids are only handed out by this tree, so the lookup cannot miss
    /// for ids obtained from it.
    pub fn element(&self, id: NodeId) -> &Element {
        &self.nodes[id.0].element
    }

    /// Canonical location of a node. Index children share their parent's.
    pub fn href_for(&self, id: NodeId) -> &str {
        &self.nodes[id.0].href
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn join_href(parent: &str, segment: &str) -> String {
    if parent.ends_with('/') {
        format!("{}{}", parent, segment)
    } else {
        format!("{}/{}", parent, segment)
    }
}
