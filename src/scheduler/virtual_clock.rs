//! Deterministic scheduler driven by an explicit clock.

use super::{Delay, Scheduler, TimerId};
use crate::config::TimingConfig;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::time::Duration;
use tracing::trace;

/// A timer whose delay has elapsed.
#[derive(Clone, Debug, PartialEq)]
pub struct DueTimer<T> {
    pub id: TimerId,
    pub delay: Delay,
    /// Clock reading at which the timer became due
    pub due: Duration,
    pub task: T,
}

struct Pending<T> {
    delay: Delay,
    due: Duration,
    task: T,
}

/// In-memory timer queue.
///
/// Timers fire in due order; timers due at the same instant fire in the order
/// they were scheduled. Time only moves when the host calls
/// [`pop_due`](Self::pop_due) or [`set_now`](Self::set_now).
pub struct VirtualScheduler<T> {
    timing: TimingConfig,
    now: Duration,
    next_seq: u64,
    queue: BinaryHeap<Reverse<(Duration, u64)>>,
    pending: HashMap<u64, Pending<T>>,
}

impl<T> VirtualScheduler<T> {
    pub fn new(timing: TimingConfig) -> Self {
        Self {
            timing,
            now: Duration::ZERO,
            next_seq: 0,
            queue: BinaryHeap::new(),
            pending: HashMap::new(),
        }
    }

    /// Current clock reading, measured from construction.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers still waiting to fire.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Due time of the earliest live timer.
    pub fn next_due(&mut self) -> Option<Duration> {
        self.drop_cancelled_head();
        self.queue.peek().map(|Reverse((due, _))| *due)
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to
    /// its due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<DueTimer<T>> {
        self.drop_cancelled_head();
        let Reverse((due, seq)) = *self.queue.peek()?;
        if due > until {
            return None;
        }
        self.queue.pop();
        let timer = self.pending.remove(&seq)?;
        self.now = self.now.max(timer.due);
        trace!(timer = seq, delay = timer.delay.name(), due_ms = due.as_millis() as u64, "timer due");
        Some(DueTimer {
            id: TimerId::from_raw(seq),
            delay: timer.delay,
            due: timer.due,
            task: timer.task,
        })
    }

    /// Move the clock forward. The clock never goes backwards.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    fn drop_cancelled_head(&mut self) {
        while let Some(Reverse((_, seq))) = self.queue.peek() {
            if self.pending.contains_key(seq) {
                break;
            }
            self.queue.pop();
        }
    }
}

impl<T, U: Into<T>> Scheduler<U> for VirtualScheduler<T> {
    fn schedule(&mut self, delay: Delay, task: U) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let due = self.now.saturating_add(self.timing.duration_of(delay));
        self.queue.push(Reverse((due, seq)));
        self.pending.insert(
            seq,
            Pending {
                delay,
                due,
                task: task.into(),
            },
        );
        TimerId::from_raw(seq)
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        let cancelled = self.pending.remove(&id.raw()).is_some();
        if cancelled {
            trace!(timer = id.raw(), "timer cancelled");
        }
        cancelled
    }
}
