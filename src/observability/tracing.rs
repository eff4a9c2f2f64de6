//! Navigation spans.

use ::tracing::Span;
use uuid::Uuid;

use crate::routing::NavigationSource;

/// Span covering one match/mount cycle.
pub fn navigation_span(path: &str, source: NavigationSource) -> Span {
    ::tracing::debug_span!(
        "navigation",
        navigation_id = %Uuid::new_v4(),
        path = %path,
        source = ?source,
    )
}
