//! Timer scheduling.
//!
//! Controllers never sleep. They hand a task and a named delay to a
//! [`Scheduler`], and the host feeds the task back when the delay elapses.
//! [`VirtualScheduler`] is a deterministic in-memory implementation driven by
//! an explicit clock.

mod virtual_clock;

pub use virtual_clock::{DueTimer, VirtualScheduler};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle of a scheduled timer, used for cancellation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct TimerId(u64);

impl TimerId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

/// Names of the fixed delays used across the site.
///
/// Durations come from [`crate::config::TimingConfig`]; the name only travels
/// with the timer for logging and inspection.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Delay {
    /// Simulated page acquisition before the swap starts
    PageLoad,
    /// Outgoing page exit animation
    ExitAnimation,
    /// Incoming page settle before scroll restore
    EntrySettle,
    /// Project card fade before display change
    FilterFade,
    /// Project card fade-in after being displayed
    FilterReveal,
    /// Simulated contact form submission
    ContactSubmit,
}

impl Delay {
    pub fn name(self) -> &'static str {
        match self {
            Self::PageLoad => "page-load",
            Self::ExitAnimation => "exit-animation",
            Self::EntrySettle => "entry-settle",
            Self::FilterFade => "filter-fade",
            Self::FilterReveal => "filter-reveal",
            Self::ContactSubmit => "contact-submit",
        }
    }
}

/// Something that can run a task after a named delay.
///
/// Tasks are plain values; the host decides how to deliver them back to the
/// component that scheduled them.
pub trait Scheduler<T> {
    /// Schedule `task` to become due after `delay`.
    fn schedule(&mut self, delay: Delay, task: T) -> TimerId;

    /// Cancel a pending timer. Returns `false` if it already fired or was
    /// never scheduled.
    fn cancel(&mut self, id: TimerId) -> bool;
}
