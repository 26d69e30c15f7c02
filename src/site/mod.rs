//! Site bootstrap and event loop.
//!
//! [`Site`] owns the document, the address bar, the timer queue and every
//! controller. Hosts feed it [`Event`]s and advance its clock; timers fire in
//! due order and are routed back to the controller that scheduled them.

use crate::config::{ConfigError, SiteConfig};
use crate::core::PathToken;
use crate::dom::{Anchor, Document, MemoryAddressBar};
use crate::router::{AddressBar, Admission, Completion, Router, RouterEnv, RouterTask};
use crate::scheduler::{DueTimer, VirtualScheduler};
use crate::widgets::{
    ContactForm, ContactMessage, ContactTask, FilterTask, MobileMenu, ProjectFilter,
    ScrollEffects, SkillAnimator,
};
use std::collections::VecDeque;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, trace};

/// Finished transitions and delivered messages a site keeps.
pub const RECENT_LIMIT: usize = 64;

/// Errors raised while bootstrapping a site.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Required element '{0}' is missing from the document")]
    MissingAnchor(Anchor),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Every timer payload the site schedules.
#[derive(Clone, Debug, PartialEq)]
pub enum SiteTask {
    Router(RouterTask),
    Filter(FilterTask),
    Contact(ContactTask),
}

impl From<RouterTask> for SiteTask {
    fn from(task: RouterTask) -> Self {
        Self::Router(task)
    }
}

impl From<FilterTask> for SiteTask {
    fn from(task: FilterTask) -> Self {
        Self::Filter(task)
    }
}

impl From<ContactTask> for SiteTask {
    fn from(task: ContactTask) -> Self {
        Self::Contact(task)
    }
}

/// Visitor and browser events.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// A navigation link was clicked
    LinkClicked(String),
    /// The address bar moved through session history
    HistoryPopped,
    /// The viewport scrolled to this offset
    Scrolled(u32),
    /// A project filter button was clicked
    FilterSelected(String),
    FormSubmitted,
    MenuToggled,
    BackToTopClicked,
}

/// A running portfolio site.
pub struct Site<D, A> {
    config: SiteConfig,
    document: D,
    address: A,
    timers: VirtualScheduler<SiteTask>,
    router: Router,
    filter: ProjectFilter,
    contact: ContactForm,
    menu: MobileMenu,
    scroll: ScrollEffects,
    skills: SkillAnimator,
    completions: VecDeque<Completion>,
    delivered: VecDeque<ContactMessage>,
}

fn keep_recent<T>(log: &mut VecDeque<T>, item: T) {
    log.push_back(item);
    while log.len() > RECENT_LIMIT {
        log.pop_front();
    }
}

impl<D: Document, A: AddressBar> Site<D, A> {
    /// Bootstrap once the document content is ready.
    ///
    /// Validates `config`, checks the required anchors, then initializes the
    /// router, project filter, contact form, mobile menu, scroll effects and
    /// skill animator, in that order.
    pub fn content_ready(
        mut document: D,
        mut address: A,
        config: SiteConfig,
    ) -> Result<Self, SiteError> {
        config.check()?;
        if let Some(missing) = Anchor::REQUIRED
            .iter()
            .copied()
            .find(|anchor| !document.has_anchor(*anchor))
        {
            return Err(SiteError::MissingAnchor(missing));
        }

        let mut timers: VirtualScheduler<SiteTask> = VirtualScheduler::new(config.timing.clone());

        let mut router = Router::new();
        router.init(&mut RouterEnv::new(&mut document, &mut address, &mut timers));

        let filter = ProjectFilter::setup(&config.filter, &document);
        let contact = ContactForm::new(&config.contact);
        let menu = MobileMenu::new();
        let scroll = ScrollEffects::new(&config.scroll);
        let mut skills = SkillAnimator::new(&config.skills);
        skills.trigger(&mut document);

        info!(
            path = %router.current_path(),
            pending = timers.pending(),
            "site ready"
        );

        Ok(Self {
            config,
            document,
            address,
            timers,
            router,
            filter,
            contact,
            menu,
            scroll,
            skills,
            completions: VecDeque::new(),
            delivered: VecDeque::new(),
        })
    }

    /// Handle one event.
    ///
    /// Returns whether the host should suppress the event's default action.
    pub fn dispatch(&mut self, event: Event) -> bool {
        trace!(event = ?event, "dispatch");
        match event {
            Event::LinkClicked(href) => {
                self.menu.on_nav_link_click(&mut self.document);
                let mut env = RouterEnv::new(&mut self.document, &mut self.address, &mut self.timers);
                self.router.on_link_click(&href, &mut env)
            }
            Event::HistoryPopped => {
                let mut env = RouterEnv::new(&mut self.document, &mut self.address, &mut self.timers);
                self.router.on_history_pop(&mut env);
                false
            }
            Event::Scrolled(offset) => {
                self.document.scroll_to(offset);
                self.after_scroll();
                false
            }
            Event::FilterSelected(filter) => {
                self.filter
                    .select(&filter, &mut self.document, &mut self.timers);
                false
            }
            Event::FormSubmitted => {
                if !self.contact.submit(&mut self.document, &mut self.timers) {
                    debug!("submit ignored, message already sending");
                }
                true
            }
            Event::MenuToggled => {
                self.menu.toggle(&mut self.document);
                false
            }
            Event::BackToTopClicked => {
                self.document.scroll_to(0);
                self.after_scroll();
                true
            }
        }
    }

    /// Programmatic navigation, recorded in history like a link click.
    pub fn navigate_to(&mut self, path: &str) -> Admission {
        let mut env = RouterEnv::new(&mut self.document, &mut self.address, &mut self.timers);
        self.router
            .navigate_to(PathToken::parse(path), true, &mut env)
    }

    /// Move the clock forward by `by`, firing every timer that falls due.
    ///
    /// Returns the number of timers fired.
    pub fn advance(&mut self, by: Duration) -> usize {
        let until = self.timers.now().saturating_add(by);
        let mut fired = 0;
        while let Some(timer) = self.timers.pop_due(until) {
            self.fire(timer);
            fired += 1;
        }
        self.timers.set_now(until);
        fired
    }

    /// Fire timers until none are pending.
    pub fn run_until_idle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(timer) = self.timers.pop_due(Duration::MAX) {
            self.fire(timer);
            fired += 1;
        }
        fired
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn address(&self) -> &A {
        &self.address
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn filter(&self) -> &ProjectFilter {
        &self.filter
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn skills(&self) -> &SkillAnimator {
        &self.skills
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Clock reading of the site's timer queue.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// The most recent finished transitions, oldest first.
    pub fn completions(&self) -> &VecDeque<Completion> {
        &self.completions
    }

    /// The most recent contact messages whose simulated submission finished.
    pub fn delivered(&self) -> &VecDeque<ContactMessage> {
        &self.delivered
    }

    fn fire(&mut self, timer: DueTimer<SiteTask>) {
        trace!(timer = %timer.id, delay = timer.delay.name(), "timer fired");
        match timer.task {
            SiteTask::Router(task) => {
                let mut env = RouterEnv::new(&mut self.document, &mut self.address, &mut self.timers);
                if let Some(completion) = self.router.handle_task(task, &mut env) {
                    self.on_completion(completion);
                }
            }
            SiteTask::Filter(task) => {
                self.filter
                    .handle_task(task, &mut self.document, &mut self.timers)
            }
            SiteTask::Contact(task) => {
                if let Some(message) = self.contact.handle_task(task, &mut self.document) {
                    keep_recent(&mut self.delivered, message);
                }
            }
        }
    }

    fn on_completion(&mut self, completion: Completion) {
        if completion.page_shown {
            self.skills.trigger(&mut self.document);
        }
        self.after_scroll();
        keep_recent(&mut self.completions, completion);
    }

    fn after_scroll(&mut self) {
        let offset = self.document.scroll_offset();
        self.scroll.update(offset, &mut self.document);
        self.skills.observe(&mut self.document);
    }
}

impl<D: Document> Site<D, MemoryAddressBar> {
    /// Step back through session history, as the browser's back button does.
    ///
    /// Returns `false` at the start of the session.
    pub fn back(&mut self) -> bool {
        if !self.address.back() {
            return false;
        }
        self.dispatch(Event::HistoryPopped);
        true
    }

    /// Step forward through session history.
    pub fn forward(&mut self) -> bool {
        if !self.address.forward() {
            return false;
        }
        self.dispatch(Event::HistoryPopped);
        true
    }
}
