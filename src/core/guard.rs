//! Guard predicates for admitting work.
//!
//! Guards are pure boolean functions evaluated against a controller's phase
//! before it accepts a request.

use super::state::State;
use std::fmt;
use std::marker::PhantomData;

/// Pure predicate deciding whether a request may start from a phase.
///
/// # Example
///
/// ```rust
/// use segue::core::{Guard, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Closed,
///     Opening,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Opening => "Opening",
///         }
///     }
///
///     fn is_resting(&self) -> bool {
///         matches!(self, Self::Closed)
///     }
/// }
///
/// let guard = Guard::resting_only();
///
/// assert!(guard.check(&Door::Closed));
/// assert!(!guard.check(&Door::Opening));
/// ```
pub struct Guard<S: State> {
    label: &'static str,
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate.
    pub fn new<F>(label: &'static str, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            label,
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Guard that only admits requests from a resting phase.
    ///
    /// This is the single in-flight slot: while the controller is busy the
    /// guard rejects everything.
    pub fn resting_only() -> Self {
        Self::new("resting-only", |state: &S| state.is_resting())
    }

    /// Check whether the guard admits a request from this phase.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").field("label", &self.label).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Loading,
        Swapping,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Loading => "Loading",
                Self::Swapping => "Swapping",
            }
        }

        fn is_resting(&self) -> bool {
            matches!(self, Self::Idle)
        }
    }

    #[test]
    fn resting_only_admits_idle() {
        let guard = Guard::resting_only();

        assert!(guard.check(&TestState::Idle));
        assert!(!guard.check(&TestState::Loading));
        assert!(!guard.check(&TestState::Swapping));
    }

    #[test]
    fn custom_guard_uses_predicate() {
        let guard = Guard::new("not-swapping", |s: &TestState| {
            !matches!(s, TestState::Swapping)
        });

        assert!(guard.check(&TestState::Idle));
        assert!(guard.check(&TestState::Loading));
        assert!(!guard.check(&TestState::Swapping));
        assert_eq!(guard.label(), "not-swapping");
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::resting_only();
        let state = TestState::Loading;

        assert_eq!(guard.check(&state), guard.check(&state));
    }

    #[test]
    fn debug_shows_label() {
        let guard: Guard<TestState> = Guard::resting_only();
        assert_eq!(format!("{guard:?}"), "Guard { label: \"resting-only\" }");
    }
}
