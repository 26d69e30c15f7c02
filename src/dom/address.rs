//! In-memory location and session history.

use crate::core::PathToken;
use crate::router::AddressBar;

/// Session history with a cursor, like a browser tab.
///
/// Pushing an entry drops every entry ahead of the cursor.
#[derive(Clone, Debug, PartialEq)]
pub struct MemoryAddressBar {
    entries: Vec<Option<String>>,
    index: usize,
}

impl MemoryAddressBar {
    /// Start a session at `fragment` (`None` for a bare URL).
    pub fn new(fragment: Option<&str>) -> Self {
        Self {
            entries: vec![fragment.map(str::to_string)],
            index: 0,
        }
    }

    /// Move one entry back. Returns `false` at the start of the session.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Move one entry forward. Returns `false` at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Number of entries in the session.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl Default for MemoryAddressBar {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AddressBar for MemoryAddressBar {
    fn fragment(&self) -> Option<String> {
        self.entries.get(self.index).cloned().flatten()
    }

    fn push_entry(&mut self, path: &PathToken) {
        self.entries.truncate(self.index + 1);
        self.entries.push(Some(path.to_string()));
        self.index = self.entries.len() - 1;
    }
}
