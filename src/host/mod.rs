//! Host document abstraction.
//!
//! The composition root renders into one named element of the host. The
//! `Host` trait is that element registry; `MemoryHost` backs tests and the
//! binary.

pub mod memory;

use std::fmt;

use thiserror::Error;

use crate::view::View;

pub use memory::MemoryHost;

/// Error type for host operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("host has no element with id '{id}'")]
    MissingElement { id: String },
}

/// Document the application mounts into.
pub trait Host: Send + Sync + fmt::Debug {
    /// Whether an element with `id` exists.
    fn has_element(&self, id: &str) -> bool;

    /// Replace the content of element `id` with `view`.
    fn mount(&self, id: &str, view: View) -> Result<(), HostError>;

    /// Clear the content of element `id`.
    fn unmount(&self, id: &str) -> Result<(), HostError>;
}
