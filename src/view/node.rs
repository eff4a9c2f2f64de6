//! Framework-independent render tree.

use std::fmt::Write;

use serde::Serialize;

/// A node in the rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum View {
    /// Renders nothing.
    Empty,
    /// Escaped text content.
    Text { text: String },
    /// An element with attributes and children, in order.
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<View>,
    },
}

impl View {
    /// Create an element with no attributes or children.
    pub fn element(tag: impl Into<String>) -> Self {
        View::Element {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        View::Text { text: text.into() }
    }

    /// Add an attribute. No-op on non-element views.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let View::Element { attrs, .. } = &mut self {
            attrs.push((key.into(), value.into()));
        }
        self
    }

    /// Append a child. Empty children are dropped.
    pub fn child(mut self, child: View) -> Self {
        if let View::Element { children, .. } = &mut self {
            if !child.is_empty() {
                children.push(child);
            }
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, View::Empty)
    }

    /// Value of the given attribute on this node, if it is an element.
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        match self {
            View::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// Depth-first search for the first element carrying `key="value"`.
    pub fn find_by_attr(&self, key: &str, value: &str) -> Option<&View> {
        if self.get_attr(key) == Some(value) {
            return Some(self);
        }
        match self {
            View::Element { children, .. } => children
                .iter()
                .find_map(|c| c.find_by_attr(key, value)),
            _ => None,
        }
    }

    /// Concatenated text of this subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            View::Empty => {}
            View::Text { text } => out.push_str(text),
            View::Element { children, .. } => {
                for c in children {
                    c.collect_text(out);
                }
            }
        }
    }

    /// Serialize to an HTML fragment.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            View::Empty => {}
            View::Text { text } => out.push_str(&escape(text)),
            View::Element { tag, attrs, children } => {
                out.push('<');
                out.push_str(tag);
                for (k, v) in attrs {
                    let _ = write!(out, " {}=\"{}\"", k, escape(v));
                }
                out.push('>');
                for c in children {
                    c.write_html(out);
                }
                let _ = write!(out, "</{}>", tag);
            }
        }
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escapes_text_and_attrs() {
        let view = View::element("p")
            .attr("title", "a \"quoted\" <title>")
            .child(View::text("1 < 2 & 3"));
        assert_eq!(
            view.to_html(),
            "<p title=\"a &quot;quoted&quot; &lt;title&gt;\">1 &lt; 2 &amp; 3</p>"
        );
    }

    #[test]
    fn test_empty_children_are_dropped() {
        let view = View::element("div").child(View::Empty);
        assert_eq!(view.to_html(), "<div></div>");
    }

    #[test]
    fn test_find_by_attr() {
        let view = View::element("div").child(
            View::element("section")
                .attr("data-page", "logs")
                .child(View::text("Logs")),
        );
        let found = view.find_by_attr("data-page", "logs").unwrap();
        assert_eq!(found.text_content(), "Logs");
        assert!(view.find_by_attr("data-page", "peers").is_none());
    }
}
