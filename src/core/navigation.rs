//! Navigation bookkeeping owned by the router.

use super::path::PathToken;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mutable navigation state of one page session.
///
/// Only the router mutates it, and only inside a transition.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    current_path: PathToken,
    scroll_positions: HashMap<PathToken, u32>,
    is_transitioning: bool,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_path(&self) -> &PathToken {
        &self.current_path
    }

    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }

    /// Whether `path` would be a same-path request.
    pub fn is_current(&self, path: &PathToken) -> bool {
        self.current_path == *path
    }

    /// Record the offset at which navigation departs from the current path.
    ///
    /// Overwrites any earlier offset for that path.
    pub fn record_departure(&mut self, offset: u32) {
        self.scroll_positions
            .insert(self.current_path.clone(), offset);
    }

    /// Offset to restore when arriving at `path`; 0 if never departed.
    pub fn restore_offset(&self, path: &PathToken) -> u32 {
        self.scroll_positions.get(path).copied().unwrap_or(0)
    }

    pub fn recorded_offset(&self, path: &PathToken) -> Option<u32> {
        self.scroll_positions.get(path).copied()
    }

    pub fn visited_count(&self) -> usize {
        self.scroll_positions.len()
    }

    pub(crate) fn set_transitioning(&mut self, in_flight: bool) {
        self.is_transitioning = in_flight;
    }

    pub(crate) fn commit(&mut self, path: PathToken) {
        self.current_path = path;
    }
}
