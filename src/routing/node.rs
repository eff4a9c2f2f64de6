//! Declarative route definitions.

use crate::view::Element;

/// One entry of the route table before compilation.
///
/// An empty `segment` marks the index child of its parent.
#[derive(Debug, Clone)]
pub struct RouteNode {
    pub segment: String,
    pub element: Element,
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    /// A route bound to one path segment.
    pub fn new(segment: impl Into<String>, element: Element) -> Self {
        Self {
            segment: segment.into(),
            element,
            children: Vec::new(),
        }
    }

    /// The root route, mounted for every matched location.
    pub fn root(element: Element) -> Self {
        Self::new("/", element)
    }

    /// The default child, activated when no path segment remains.
    pub fn index(element: Element) -> Self {
        Self::new("", element)
    }

    /// Append a child route.
    pub fn child(mut self, child: RouteNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_index(&self) -> bool {
        self.segment.is_empty()
    }
}
