//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the dashboard shell.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ShellConfig {
    /// Host attachment point.
    pub mount: MountConfig,

    /// Router behaviour.
    pub routing: RoutingConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

/// Where the application is mounted in the host document.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct MountConfig {
    /// Id of the host element the shell renders into.
    pub element_id: String,
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            element_id: "root".to_string(),
        }
    }
}

/// What to show when a location matches no route.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Mount the built-in not-found page.
    #[default]
    NotFound,
    /// Mount nothing.
    Empty,
    /// Replace the current entry with `/`.
    RedirectHome,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RoutingConfig {
    pub fallback: FallbackPolicy,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` overrides it.
    pub log_level: String,

    /// Record navigation and mount counters.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
        }
    }
}
