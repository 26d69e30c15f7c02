//! Hash-path navigation.
//!
//! The [`Router`] turns link clicks and history pops into timed page swaps.
//! A swap runs through three timers scheduled on the host's [`Scheduler`]:
//!
//! 1. page load: the loader is shown and nothing else changes,
//! 2. entry settle: the incoming page is active, the outgoing page exiting,
//! 3. exit animation: the outgoing page loses its marks.
//!
//! The transition completes at entry settle, when the saved scroll offset of
//! the destination is restored and the in-flight guard is cleared.
//!
//! [`Scheduler`]: crate::scheduler::Scheduler

mod machine;
mod transition;
mod view;

pub use machine::{Router, RouterEnv, PHASE_HISTORY_LIMIT};
pub use transition::{Admission, Completion, InFlight, RouterPhase, RouterTask};
pub use view::{AddressBar, PageMark, PageView};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimingConfig;
    use crate::core::{PathToken, TransitionId};
    use crate::dom::{MemoryAddressBar, MemoryDocument};
    use crate::scheduler::VirtualScheduler;
    use std::time::Duration;

    struct Harness {
        router: Router,
        doc: MemoryDocument,
        address: MemoryAddressBar,
        timers: VirtualScheduler<RouterTask>,
    }

    impl Harness {
        fn new() -> Self {
            Self::at(None)
        }

        fn at(fragment: Option<&str>) -> Self {
            Self::build(fragment, TimingConfig::default())
        }

        fn with_timing(timing: TimingConfig) -> Self {
            Self::build(None, timing)
        }

        fn build(fragment: Option<&str>, timing: TimingConfig) -> Self {
            let mut harness = Self {
                router: Router::new(),
                doc: MemoryDocument::portfolio(),
                address: MemoryAddressBar::new(fragment),
                timers: VirtualScheduler::new(timing),
            };
            harness.init();
            harness
        }

        fn init(&mut self) -> bool {
            let mut env = RouterEnv::new(&mut self.doc, &mut self.address, &mut self.timers);
            self.router.init(&mut env)
        }

        fn navigate(&mut self, path: &str, record_history: bool) -> Admission {
            let mut env = RouterEnv::new(&mut self.doc, &mut self.address, &mut self.timers);
            self.router
                .navigate_to(PathToken::parse(path), record_history, &mut env)
        }

        fn click(&mut self, href: &str) -> bool {
            let mut env = RouterEnv::new(&mut self.doc, &mut self.address, &mut self.timers);
            self.router.on_link_click(href, &mut env)
        }

        fn pop(&mut self) -> Admission {
            let mut env = RouterEnv::new(&mut self.doc, &mut self.address, &mut self.timers);
            self.router.on_history_pop(&mut env)
        }

        fn deliver(&mut self, task: RouterTask) -> Option<Completion> {
            let mut env = RouterEnv::new(&mut self.doc, &mut self.address, &mut self.timers);
            self.router.handle_task(task, &mut env)
        }

        /// Fire every timer due by `ms`, returning completions.
        fn advance_to(&mut self, ms: u64) -> Vec<Completion> {
            let until = Duration::from_millis(ms);
            let mut completions = Vec::new();
            while let Some(timer) = self.timers.pop_due(until) {
                completions.extend(self.deliver(timer.task));
            }
            self.timers.set_now(until);
            completions
        }

        fn settle(&mut self) -> Vec<Completion> {
            let mut completions = Vec::new();
            while let Some(timer) = self.timers.pop_due(Duration::MAX) {
                completions.extend(self.deliver(timer.task));
            }
            completions
        }
    }

    #[test]
    fn init_on_bare_url_highlights_home_without_transition() {
        let h = Harness::new();

        assert_eq!(h.router.current_path(), "#home");
        assert_eq!(h.router.phase(), RouterPhase::Idle);
        assert_eq!(h.doc.active_links(), vec!["#home"]);
        assert!(h.timers.is_idle());
    }

    #[test]
    fn init_with_fragment_navigates_without_pushing_history() {
        let mut h = Harness::at(Some("#about"));
        assert_eq!(h.router.phase(), RouterPhase::AwaitingLoad);

        h.settle();

        assert_eq!(h.router.current_path(), "#about");
        assert_eq!(h.doc.active_pages(), vec!["about"]);
        assert_eq!(h.address.len(), 1);
    }

    #[test]
    fn init_is_idempotent() {
        let mut h = Harness::new();
        assert!(!h.init());
        assert!(h.router.is_initialized());
    }

    #[test]
    fn same_path_navigation_changes_nothing() {
        let mut h = Harness::new();
        let before = h.doc.clone();

        assert_eq!(h.navigate("#home", true), Admission::SamePath);

        assert_eq!(h.doc, before);
        assert!(!h.router.state().is_transitioning());
        assert_eq!(h.address.len(), 1);
        assert!(h.timers.is_idle());
    }

    #[test]
    fn home_to_projects_runs_full_sequence() {
        let mut h = Harness::new();
        assert!(h.click("#projects"));

        assert!(h.doc.loader_visible());
        assert!(h.router.state().is_transitioning());
        assert_eq!(h.address.fragment().as_deref(), Some("#projects"));

        assert!(h.advance_to(499).is_empty());
        assert_eq!(h.doc.active_pages(), vec!["home"]);

        h.advance_to(500);
        assert!(h.doc.has_mark("home", PageMark::Exit));
        assert!(h.doc.has_mark("projects", PageMark::Active));
        assert_eq!(h.router.phase(), RouterPhase::Swapping);

        let completions = h.advance_to(550);
        assert_eq!(completions.len(), 1);
        assert!(completions[0].page_shown);
        assert!(!h.doc.loader_visible());
        assert!(!h.router.state().is_transitioning());
        assert_eq!(h.router.current_path(), "#projects");
        assert_eq!(h.doc.active_links(), vec!["#projects"]);

        h.advance_to(800);
        assert_eq!(h.doc.active_pages(), vec!["projects"]);
        assert!(h.doc.page("home").unwrap().marks.is_empty());
    }

    #[test]
    fn request_while_in_flight_is_dropped() {
        let mut h = Harness::new();
        assert!(h.navigate("#about", true).is_accepted());
        let target = h.router.in_flight().unwrap().to.clone();

        assert_eq!(h.navigate("#skills", true), Admission::InFlight);
        assert_eq!(h.router.in_flight().unwrap().to, target);
        assert_eq!(h.timers.pending(), 1);

        h.settle();
        assert_eq!(h.router.current_path(), "#about");
        assert_eq!(h.address.len(), 2);
    }

    #[test]
    fn phase_history_follows_swap_path() {
        let mut h = Harness::new();
        let id = h.navigate("#contact", true).transition().unwrap();
        h.settle();

        let phases: Vec<_> = h
            .router
            .history()
            .for_transition(id)
            .map(|change| change.to)
            .collect();
        assert_eq!(
            phases,
            vec![RouterPhase::AwaitingLoad, RouterPhase::Swapping, RouterPhase::Idle]
        );
    }

    #[test]
    fn phase_history_is_bounded() {
        let mut h = Harness::new();
        for round in 0..100 {
            let path = if round % 2 == 0 { "#about" } else { "#home" };
            h.navigate(path, true);
            h.settle();
        }

        let history = h.router.history();
        assert_eq!(history.limit(), Some(PHASE_HISTORY_LIMIT));
        assert_eq!(history.changes().len(), PHASE_HISTORY_LIMIT);
        assert_eq!(history.changes().back().unwrap().to, RouterPhase::Idle);
    }

    #[test]
    fn return_trip_restores_departure_offset() {
        let mut h = Harness::new();
        h.doc.scroll_to(320);

        h.navigate("#about", true);
        h.settle();
        assert_eq!(h.doc.scroll_y(), 0);

        h.navigate("#home", true);
        h.settle();
        assert_eq!(h.doc.scroll_y(), 320);
    }

    #[test]
    fn history_pop_never_pushes() {
        let mut h = Harness::new();
        h.click("#about");
        h.settle();
        assert_eq!(h.address.len(), 2);

        assert!(h.address.back());
        assert!(h.pop().is_accepted());
        h.settle();

        assert_eq!(h.router.current_path(), "#home");
        assert_eq!(h.address.len(), 2);
        assert_eq!(h.address.index(), 0);
    }

    #[test]
    fn pop_to_bare_url_goes_home() {
        let mut h = Harness::new();
        h.click("#skills");
        h.settle();

        h.address.back();
        h.pop();
        h.settle();

        assert_eq!(h.router.current_path(), "#home");
        assert_eq!(h.doc.active_pages(), vec!["home"]);
    }

    #[test]
    fn unknown_link_is_not_intercepted() {
        let mut h = Harness::new();
        assert!(!h.click("#blog"));
        assert!(h.timers.is_idle());
    }

    #[test]
    fn missing_page_keeps_current_path() {
        let mut h = Harness::new();
        h.doc.scroll_to(150);
        assert!(h.navigate("#blog", true).is_accepted());

        let completions = h.settle();

        assert_eq!(completions.len(), 1);
        assert!(!completions[0].page_shown);
        assert_eq!(completions[0].path, "#blog");
        assert_eq!(h.router.current_path(), "#home");
        assert_eq!(h.router.phase(), RouterPhase::Idle);
        assert!(!h.router.state().is_transitioning());
        assert!(!h.doc.loader_visible());
        assert_eq!(h.doc.active_links(), vec!["#home"]);
        assert_eq!(h.doc.active_pages(), vec!["home"]);
        assert!(!h.doc.has_mark("home", PageMark::Exit));
        assert_eq!(h.doc.scroll_y(), 150);
    }

    #[test]
    fn navigation_after_missing_page_still_works() {
        let mut h = Harness::new();
        h.navigate("#blog", true);
        h.advance_to(500);

        assert!(h.navigate("#about", true).is_accepted());
        h.settle();

        assert_eq!(h.router.current_path(), "#about");
        assert_eq!(h.doc.active_pages(), vec!["about"]);
        assert!(h.doc.page("home").unwrap().marks.is_empty());
    }

    #[test]
    fn late_exit_never_clears_the_shown_page() {
        let mut h = Harness::with_timing(TimingConfig {
            page_load_ms: 100,
            entry_settle_ms: 250,
            exit_animation_ms: 300,
            ..TimingConfig::default()
        });

        h.navigate("#about", true);
        h.advance_to(350);
        assert_eq!(h.router.current_path(), "#about");

        h.navigate("#nowhere", true);
        h.advance_to(450);
        assert_eq!(h.navigate("#about", true), Admission::SamePath);
        h.settle();

        assert_eq!(h.router.current_path(), "#about");
        assert_eq!(h.doc.active_pages(), vec!["about"]);
        assert!(!h.doc.has_mark("about", PageMark::Exit));
    }

    #[test]
    fn exit_outlasting_return_trip_keeps_page_active() {
        let mut h = Harness::with_timing(TimingConfig {
            page_load_ms: 100,
            entry_settle_ms: 50,
            exit_animation_ms: 300,
            ..TimingConfig::default()
        });

        h.navigate("#about", true);
        h.advance_to(150);
        assert_eq!(h.router.current_path(), "#about");

        h.navigate("#home", true);
        h.advance_to(300);
        assert_eq!(h.router.current_path(), "#home");

        h.advance_to(400);
        assert!(h.doc.has_mark("home", PageMark::Active));

        h.settle();
        assert_eq!(h.doc.active_pages(), vec!["home"]);
        assert!(h.doc.page("about").unwrap().marks.is_empty());
    }

    #[test]
    fn exit_shorter_than_settle_still_clears_outgoing_page() {
        let mut h = Harness::with_timing(TimingConfig {
            page_load_ms: 100,
            entry_settle_ms: 200,
            exit_animation_ms: 50,
            ..TimingConfig::default()
        });

        h.navigate("#contact", true);
        h.advance_to(150);
        assert!(h.doc.page("home").unwrap().marks.is_empty());

        h.settle();
        assert_eq!(h.doc.active_pages(), vec!["contact"]);
    }

    #[test]
    fn stale_tasks_are_ignored() {
        let mut h = Harness::new();
        h.navigate("#about", true);
        let before = h.doc.clone();

        let stale = TransitionId::new();
        assert!(h.deliver(RouterTask::BeginSwap { transition: stale }).is_none());
        assert!(h.deliver(RouterTask::SettleEntry { transition: stale }).is_none());

        assert_eq!(h.doc, before);
        assert_eq!(h.router.phase(), RouterPhase::AwaitingLoad);
    }

    #[test]
    fn settle_before_swap_is_ignored() {
        let mut h = Harness::new();
        let id = h.navigate("#about", true).transition().unwrap();

        assert!(h.deliver(RouterTask::SettleEntry { transition: id }).is_none());
        assert_eq!(h.router.phase(), RouterPhase::AwaitingLoad);
    }

    #[test]
    fn quick_return_keeps_page_active() {
        let mut h = Harness::new();
        h.navigate("#about", true);
        h.advance_to(550);

        h.navigate("#home", true);
        h.settle();

        assert_eq!(h.doc.active_pages(), vec!["home"]);
        assert!(h.doc.page("about").unwrap().marks.is_empty());
    }
}
