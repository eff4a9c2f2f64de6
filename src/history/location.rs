//! Location normalisation.

use thiserror::Error;
use url::Url;

const BASE_URL: &str = "http://localhost/";

/// Error type for location parsing.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("invalid location '{href}': {source}")]
    Invalid {
        href: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported scheme '{scheme}' in location '{href}'")]
    UnsupportedScheme { href: String, scheme: String },

    #[error("location '{href}' is outside origin {origin}")]
    ForeignOrigin { href: String, origin: String },
}

/// A normalised location path.
///
/// Accepts absolute paths, relative paths (resolved against `/`) and full
/// http(s) URLs on the shell's own origin. Query and fragment are dropped,
/// dot segments are resolved and empty segments removed, so `//logs/`
/// becomes `/logs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
}

impl Location {
    /// Parse against the default `http://localhost/` origin.
    pub fn parse(href: &str) -> Result<Self, LocationError> {
        let base = Url::parse(BASE_URL).map_err(|source| LocationError::Invalid {
            href: href.to_string(),
            source,
        })?;
        Self::parse_with_base(href, &base)
    }

    /// Parse `href` relative to `base`. Full URLs must share its origin.
    pub fn parse_with_base(href: &str, base: &Url) -> Result<Self, LocationError> {
        let invalid = |source: url::ParseError| LocationError::Invalid {
            href: href.to_string(),
            source,
        };

        // A leading run of slashes would otherwise be read as a
        // scheme-relative URL with the first segment as its host.
        let rooted = href.trim_start_matches(&['/', '\\'][..]);
        let url = if rooted.len() == href.len() {
            base.join(href).map_err(invalid)?
        } else {
            base.join(&format!("/{}", rooted)).map_err(invalid)?
        };

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(LocationError::UnsupportedScheme {
                    href: href.to_string(),
                    scheme: scheme.to_string(),
                })
            }
        }

        if url.origin() != base.origin() {
            return Err(LocationError::ForeignOrigin {
                href: href.to_string(),
                origin: base.origin().ascii_serialization(),
            });
        }

        let segments: Vec<&str> = url.path().split('/').filter(|s| !s.is_empty()).collect();
        Ok(Self {
            path: format!("/{}", segments.join("/")),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn into_path(self) -> String {
        self.path
    }
}
