//! In-process host document.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::host::{Host, HostError};
use crate::view::View;

/// Named elements with their current content.
#[derive(Debug, Default)]
pub struct MemoryHost {
    elements: Mutex<HashMap<String, Option<View>>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a host containing the given empty elements.
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let elements: HashMap<String, Option<View>> = ids.into_iter().map(|id| (id.into(), None)).collect();
        Self {
            elements: Mutex::new(elements),
        }
    }

    /// Current content of element `id`, if it exists and is mounted.
    pub fn content(&self, id: &str) -> Option<View> {
        self.lock().get(id).cloned().flatten()
    }

    /// Current content of element `id` as HTML.
    pub fn html(&self, id: &str) -> Option<String> {
        self.content(id).map(|view| view.to_html())
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Option<View>>> {
        self.elements.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Host for MemoryHost {
    fn has_element(&self, id: &str) -> bool {
        self.lock().contains_key(id)
    }

    fn mount(&self, id: &str, view: View) -> Result<(), HostError> {
        match self.lock().get_mut(id) {
            Some(slot) => {
                *slot = Some(view);
                Ok(())
            }
            None => Err(HostError::MissingElement { id: id.to_string() }),
        }
    }

    fn unmount(&self, id: &str) -> Result<(), HostError> {
        match self.lock().get_mut(id) {
            Some(slot) => {
                *slot = None;
                Ok(())
            }
            None => Err(HostError::MissingElement { id: id.to_string() }),
        }
    }
}
