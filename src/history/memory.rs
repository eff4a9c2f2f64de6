//! In-process session history.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::broadcast;

use crate::history::{History, HistoryEvent};

/// Buffered pop events per listener before it lags.
const EVENT_CAPACITY: usize = 64;

#[derive(Debug)]
struct Entries {
    stack: Vec<String>,
    cursor: usize,
}

/// History stack held in memory, with browser push/pop semantics.
#[derive(Debug)]
pub struct MemoryHistory {
    entries: Mutex<Entries>,
    events: broadcast::Sender<HistoryEvent>,
}

impl MemoryHistory {
    /// Create a history whose only entry is `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            entries: Mutex::new(Entries {
                stack: vec![initial.into()],
                cursor: 0,
            }),
            events,
        }
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.lock().stack.clone()
    }

    /// Move `delta` entries; negative is back. Returns false when out of range.
    pub fn go(&self, delta: isize) -> bool {
        let path = {
            let mut entries = self.lock();
            let target = entries.cursor as isize + delta;
            if delta == 0 || target < 0 || target >= entries.stack.len() as isize {
                return false;
            }
            entries.cursor = target as usize;
            entries.stack[entries.cursor].clone()
        };

        tracing::trace!(path = %path, delta, "History traversed");
        let _ = self.events.send(HistoryEvent { path });
        true
    }

    fn lock(&self) -> MutexGuard<'_, Entries> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        let entries = self.lock();
        entries.stack[entries.cursor].clone()
    }

    fn push(&self, path: &str) {
        let mut entries = self.lock();
        let next = entries.cursor + 1;
        entries.stack.truncate(next);
        entries.stack.push(path.to_string());
        entries.cursor = next;
    }

    fn replace(&self, path: &str) {
        let mut entries = self.lock();
        let cursor = entries.cursor;
        entries.stack[cursor] = path.to_string();
    }

    fn back(&self) -> bool {
        self.go(-1)
    }

    fn forward(&self) -> bool {
        self.go(1)
    }

    fn subscribe(&self) -> broadcast::Receiver<HistoryEvent> {
        self.events.subscribe()
    }
}
