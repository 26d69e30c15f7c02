//! Transition bookkeeping types.

use crate::core::{PathToken, TransitionId};

crate::state_enum! {
    /// Phase of the router's single in-flight slot.
    #[derive(Copy, Eq, Hash)]
    pub enum RouterPhase {
        /// No transition in flight
        Idle,
        /// Loader shown, waiting for the simulated page load
        AwaitingLoad,
        /// Outgoing page exiting while the incoming page settles
        Swapping,
    }
    resting: [Idle]
}

/// Timer payloads the router schedules for itself.
#[derive(Clone, Debug, PartialEq)]
pub enum RouterTask {
    /// Page load delay elapsed; start the visual swap
    BeginSwap { transition: TransitionId },
    /// Exit animation finished; clear the outgoing page's marks
    FinishExit { page: PathToken },
    /// Incoming page settled; restore scroll and complete the transition
    SettleEntry { transition: TransitionId },
}

impl RouterTask {
    pub fn transition(&self) -> Option<TransitionId> {
        match self {
            Self::BeginSwap { transition } | Self::SettleEntry { transition } => Some(*transition),
            Self::FinishExit { .. } => None,
        }
    }
}

/// Outcome of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    /// A transition started
    Accepted(TransitionId),
    /// The path is already current; nothing happened
    SamePath,
    /// Another transition is in flight; the request was dropped
    InFlight,
}

impl Admission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn transition(&self) -> Option<TransitionId> {
        match self {
            Self::Accepted(id) => Some(*id),
            _ => None,
        }
    }
}

/// The transition occupying the in-flight slot.
#[derive(Clone, Debug, PartialEq)]
pub struct InFlight {
    pub id: TransitionId,
    pub from: PathToken,
    pub to: PathToken,
}

/// Emitted once per finished transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Completion {
    pub transition: TransitionId,
    /// The requested path
    pub path: PathToken,
    /// Whether a page section for `path` was found and activated. When it
    /// was not, the current path is left as it was.
    pub page_shown: bool,
}
