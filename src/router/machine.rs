//! The navigation controller.

use super::transition::{Admission, Completion, InFlight, RouterPhase, RouterTask};
use super::view::{AddressBar, PageMark, PageView};
use crate::core::{Guard, NavigationState, PathToken, PhaseChange, PhaseHistory, TransitionId};
use crate::scheduler::{Delay, Scheduler};
use chrono::Utc;
use std::collections::HashSet;
use tracing::{debug, info, trace};

/// Everything the router touches outside itself, borrowed for one call.
pub struct RouterEnv<'a, V, A, S> {
    pub view: &'a mut V,
    pub address: &'a mut A,
    pub timers: &'a mut S,
}

impl<'a, V, A, S> RouterEnv<'a, V, A, S>
where
    V: PageView,
    A: AddressBar,
    S: Scheduler<RouterTask>,
{
    pub fn new(view: &'a mut V, address: &'a mut A, timers: &'a mut S) -> Self {
        Self {
            view,
            address,
            timers,
        }
    }
}

/// Phase changes a router keeps for diagnostics.
pub const PHASE_HISTORY_LIMIT: usize = 256;

/// Single-page navigation controller.
///
/// Owns the [`NavigationState`] and drives page swaps through a fixed
/// sequence of timers: page load, then exit and entry marks, then entry
/// settle. Exactly one transition can be in flight; requests arriving
/// meanwhile are dropped.
pub struct Router {
    state: NavigationState,
    phase: RouterPhase,
    admission: Guard<RouterPhase>,
    history: PhaseHistory<RouterPhase>,
    in_flight: Option<InFlight>,
    bound_links: HashSet<String>,
    initialized: bool,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            state: NavigationState::new(),
            phase: RouterPhase::Idle,
            admission: Guard::resting_only(),
            history: PhaseHistory::with_limit(PHASE_HISTORY_LIMIT),
            in_flight: None,
            bound_links: HashSet::new(),
            initialized: false,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_path(&self) -> &PathToken {
        self.state.current_path()
    }

    pub fn phase(&self) -> RouterPhase {
        self.phase
    }

    pub fn history(&self) -> &PhaseHistory<RouterPhase> {
        &self.history
    }

    pub fn in_flight(&self) -> Option<&InFlight> {
        self.in_flight.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Bind navigation links and navigate to the current location.
    ///
    /// Returns `false` if the router was already initialized, in which case
    /// nothing happens.
    pub fn init<V, A, S>(&mut self, env: &mut RouterEnv<'_, V, A, S>) -> bool
    where
        V: PageView,
        A: AddressBar,
        S: Scheduler<RouterTask>,
    {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        self.bound_links = env.view.nav_link_hrefs().into_iter().collect();

        let initial = PathToken::from_fragment(env.address.fragment().as_deref());
        info!(
            links = self.bound_links.len(),
            initial = %initial,
            "router initialized"
        );

        if !self.navigate_to(initial, false, env).is_accepted() {
            self.refresh_highlight(&mut *env.view);
        }
        true
    }

    /// Handle a click on a navigation link.
    ///
    /// Returns whether the default action was suppressed, which happens for
    /// every link bound by [`init`](Self::init).
    pub fn on_link_click<V, A, S>(&mut self, href: &str, env: &mut RouterEnv<'_, V, A, S>) -> bool
    where
        V: PageView,
        A: AddressBar,
        S: Scheduler<RouterTask>,
    {
        if !self.bound_links.contains(href) {
            return false;
        }
        self.navigate_to(PathToken::parse(href), true, env);
        true
    }

    /// Re-sync with the address bar after a back/forward notification.
    ///
    /// Never records a history entry.
    pub fn on_history_pop<V, A, S>(&mut self, env: &mut RouterEnv<'_, V, A, S>) -> Admission
    where
        V: PageView,
        A: AddressBar,
        S: Scheduler<RouterTask>,
    {
        let path = PathToken::from_fragment(env.address.fragment().as_deref());
        trace!(path = %path, "history pop");
        self.navigate_to(path, false, env)
    }

    /// Request a transition to `path`.
    ///
    /// Same-path requests and requests made while a transition is in flight
    /// are silent no-ops.
    pub fn navigate_to<V, A, S>(
        &mut self,
        path: PathToken,
        record_history: bool,
        env: &mut RouterEnv<'_, V, A, S>,
    ) -> Admission
    where
        V: PageView,
        A: AddressBar,
        S: Scheduler<RouterTask>,
    {
        if self.state.is_current(&path) {
            trace!(path = %path, "navigation to current path ignored");
            return Admission::SamePath;
        }
        if self.state.is_transitioning() || !self.admission.check(&self.phase) {
            debug!(
                path = %path,
                phase = ?self.phase,
                "navigation dropped, transition in flight"
            );
            return Admission::InFlight;
        }

        let id = TransitionId::new();
        let from = self.state.current_path().clone();

        self.state.set_transitioning(true);
        self.state.record_departure(env.view.scroll_offset());
        if record_history {
            env.address.push_entry(&path);
        }
        env.view.set_loader_visible(true);

        debug!(
            transition = %id,
            from = %from,
            to = %path,
            record_history,
            "navigation accepted"
        );

        self.enter(RouterPhase::AwaitingLoad, id, &path);
        self.in_flight = Some(InFlight { id, from, to: path });
        env.timers
            .schedule(Delay::PageLoad, RouterTask::BeginSwap { transition: id });

        Admission::Accepted(id)
    }

    /// Run a timer the router scheduled earlier.
    ///
    /// Returns the completion when this task finished a transition. Tasks
    /// belonging to a transition that is no longer in flight are ignored.
    pub fn handle_task<V, A, S>(
        &mut self,
        task: RouterTask,
        env: &mut RouterEnv<'_, V, A, S>,
    ) -> Option<Completion>
    where
        V: PageView,
        A: AddressBar,
        S: Scheduler<RouterTask>,
    {
        match task {
            RouterTask::BeginSwap { transition } => self.begin_swap(transition, env),
            RouterTask::FinishExit { page } => {
                // A page shown again since its exit began keeps its active mark.
                let marks: &[PageMark] = if &page == self.displayed_path() {
                    &[PageMark::Exit]
                } else {
                    &[PageMark::Active, PageMark::Exit]
                };
                env.view.remove_page_marks(page.page_id(), marks);
                trace!(page = %page, kept_active = marks.len() == 1, "exit finished");
                None
            }
            RouterTask::SettleEntry { transition } => self.settle_entry(transition, env),
        }
    }

    fn begin_swap<V, A, S>(
        &mut self,
        transition: TransitionId,
        env: &mut RouterEnv<'_, V, A, S>,
    ) -> Option<Completion>
    where
        V: PageView,
        A: AddressBar,
        S: Scheduler<RouterTask>,
    {
        let flight = self.current_flight(transition, RouterPhase::AwaitingLoad)?.clone();

        let incoming = flight.to.page_id();
        if !env.view.has_page(incoming) {
            debug!(transition = %transition, to = %flight.to, "no page for path");
            return Some(self.abandon(flight, &mut *env.view));
        }

        let outgoing = flight.from.page_id();
        if env.view.has_page(outgoing) {
            env.view.add_page_mark(outgoing, PageMark::Exit);
            env.timers.schedule(
                Delay::ExitAnimation,
                RouterTask::FinishExit {
                    page: flight.from.clone(),
                },
            );
        }

        env.view.add_page_mark(incoming, PageMark::Active);
        self.enter(RouterPhase::Swapping, transition, &flight.to);
        env.timers
            .schedule(Delay::EntrySettle, RouterTask::SettleEntry { transition });
        None
    }

    fn settle_entry<V, A, S>(
        &mut self,
        transition: TransitionId,
        env: &mut RouterEnv<'_, V, A, S>,
    ) -> Option<Completion>
    where
        V: PageView,
        A: AddressBar,
        S: Scheduler<RouterTask>,
    {
        let flight = self.current_flight(transition, RouterPhase::Swapping)?.clone();
        env.view.scroll_to(self.state.restore_offset(&flight.to));
        Some(self.complete(flight, &mut *env.view))
    }

    fn complete<V: PageView>(&mut self, flight: InFlight, view: &mut V) -> Completion {
        self.state.set_transitioning(false);
        view.set_loader_visible(false);
        self.state.commit(flight.to.clone());
        self.refresh_highlight(view);
        self.enter(RouterPhase::Idle, flight.id, &flight.to);
        self.in_flight = None;

        info!(
            transition = %flight.id,
            path = %flight.to,
            "transition complete"
        );

        Completion {
            transition: flight.id,
            path: flight.to,
            page_shown: true,
        }
    }

    /// Finish a transition whose target has no page: release the guard and
    /// hide the loader, leaving the current path and highlight untouched.
    fn abandon<V: PageView>(&mut self, flight: InFlight, view: &mut V) -> Completion {
        self.state.set_transitioning(false);
        view.set_loader_visible(false);
        self.enter(RouterPhase::Idle, flight.id, &flight.to);
        self.in_flight = None;

        info!(
            transition = %flight.id,
            path = %flight.to,
            current = %self.state.current_path(),
            "transition ended without a page"
        );

        Completion {
            transition: flight.id,
            path: flight.to,
            page_shown: false,
        }
    }

    /// Path whose page is, or is about to be, on screen.
    fn displayed_path(&self) -> &PathToken {
        match &self.in_flight {
            Some(flight) if self.phase == RouterPhase::Swapping => &flight.to,
            _ => self.state.current_path(),
        }
    }

    fn current_flight(&self, transition: TransitionId, expected: RouterPhase) -> Option<&InFlight> {
        match &self.in_flight {
            Some(flight) if flight.id == transition && self.phase == expected => Some(flight),
            _ => {
                trace!(transition = %transition, phase = ?self.phase, "stale router task ignored");
                None
            }
        }
    }

    /// Mark exactly the links whose href equals the current path.
    fn refresh_highlight<V: PageView>(&self, view: &mut V) {
        let current = self.state.current_path();
        for href in view.nav_link_hrefs() {
            let active = current == href.as_str();
            view.set_nav_link_active(&href, active);
        }
    }

    fn enter(&mut self, to: RouterPhase, transition: TransitionId, target: &PathToken) {
        let change = PhaseChange {
            from: self.phase,
            to,
            timestamp: Utc::now(),
            transition,
            target: target.clone(),
        };
        self.history = std::mem::take(&mut self.history).record(change);
        self.phase = to;
    }
}
