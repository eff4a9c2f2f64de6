//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ShellConfig (validated, immutable)
//!     → read once by startup
//! ```
//!
//! # Design Decisions
//! - Config is read at startup only; the route table itself is compiled in
//! - All fields have defaults so an empty file is a valid config
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{FallbackPolicy, MountConfig, ObservabilityConfig, RoutingConfig, ShellConfig};
pub use validation::{validate_config, ValidationError};
