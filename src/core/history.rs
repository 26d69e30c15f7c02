//! Phase change history.
//!
//! Keeps an ordered record of the phase changes a controller went through,
//! tagged with the transition that caused it. A history built with
//! [`PhaseHistory::with_limit`] keeps only the most recent changes.

use super::path::{PathToken, TransitionId};
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single phase change.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PhaseChange<S: State> {
    /// The phase being left
    pub from: S,
    /// The phase being entered
    pub to: S,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
    /// The transition that drove the change
    pub transition: TransitionId,
    /// The path that transition targets
    pub target: PathToken,
}

/// Ordered history of phase changes.
///
/// `record` consumes the history and returns it extended, so a history value
/// is never observed half-updated.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use segue::core::{PathToken, PhaseChange, PhaseHistory, TransitionId};
/// use segue::router::RouterPhase;
///
/// let id = TransitionId::new();
/// let history = PhaseHistory::new().record(PhaseChange {
///     from: RouterPhase::Idle,
///     to: RouterPhase::AwaitingLoad,
///     timestamp: Utc::now(),
///     transition: id,
///     target: PathToken::parse("#about"),
/// });
///
/// assert_eq!(history.get_path(), vec![&RouterPhase::Idle, &RouterPhase::AwaitingLoad]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PhaseHistory<S: State> {
    changes: VecDeque<PhaseChange<S>>,
    #[serde(default)]
    limit: Option<usize>,
}

impl<S: State> Default for PhaseHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> PhaseHistory<S> {
    pub fn new() -> Self {
        Self {
            changes: VecDeque::new(),
            limit: None,
        }
    }

    /// History that drops its oldest change once `limit` are held.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            changes: VecDeque::with_capacity(limit),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record a phase change, returning the extended history.
    pub fn record(mut self, change: PhaseChange<S>) -> Self {
        self.changes.push_back(change);
        if let Some(limit) = self.limit {
            while self.changes.len() > limit {
                self.changes.pop_front();
            }
        }
        self
    }

    /// Phases traversed, in order: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.changes.front() {
            path.push(&first.from);
        }
        for change in &self.changes {
            path.push(&change.to);
        }
        path
    }

    /// Phase changes caused by one transition.
    pub fn for_transition(&self, id: TransitionId) -> impl Iterator<Item = &PhaseChange<S>> {
        self.changes.iter().filter(move |c| c.transition == id)
    }

    /// Elapsed wall-clock time between the first and last recorded change.
    ///
    /// Returns `None` if nothing was recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.changes.front(), self.changes.back()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    pub fn changes(&self) -> &VecDeque<PhaseChange<S>> {
        &self.changes
    }

    /// Export the history as JSON for diagnostics.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
