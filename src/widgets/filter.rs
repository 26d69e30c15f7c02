//! Project card filtering.

use crate::config::FilterConfig;
use crate::scheduler::{Delay, Scheduler, TimerId};
use tracing::debug;

/// Opacity and vertical offset of a project card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fade {
    pub opacity: f32,
    pub offset_px: i32,
}

impl Fade {
    pub const SHOWN: Fade = Fade {
        opacity: 1.0,
        offset_px: 0,
    };

    pub fn hidden(offset_px: i32) -> Self {
        Self {
            opacity: 0.0,
            offset_px,
        }
    }
}

/// Document operations for the filter buttons and project cards.
pub trait FilterSurface {
    /// Filter value of every filter button, in document order.
    fn filter_buttons(&self) -> Vec<String>;

    fn set_filter_button_active(&mut self, filter: &str, active: bool);

    /// Ids of every project card, in document order.
    fn project_cards(&self) -> Vec<String>;

    fn card_categories(&self, card: &str) -> Vec<String>;

    fn set_card_fade(&mut self, card: &str, fade: Fade);

    fn set_card_displayed(&mut self, card: &str, displayed: bool);
}

/// Timer payloads of the project filter.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterTask {
    /// Fade-out finished on a matching card; display it
    Reveal { card: String },
    /// Card displayed; fade it back in
    FadeIn { card: String },
    /// Fade-out finished on a non-matching card; hide it
    Hide { card: String },
}

#[derive(Debug, Clone)]
struct Card {
    id: String,
    categories: Vec<String>,
}

/// Shows the project cards matching the selected category.
#[derive(Debug)]
pub struct ProjectFilter {
    config: FilterConfig,
    buttons: Vec<String>,
    cards: Vec<Card>,
    selected: Option<String>,
    pending: Vec<TimerId>,
}

impl ProjectFilter {
    /// Read the buttons and cards present in the document.
    pub fn setup<F: FilterSurface + ?Sized>(config: &FilterConfig, surface: &F) -> Self {
        let cards = surface
            .project_cards()
            .into_iter()
            .map(|id| Card {
                categories: surface.card_categories(&id),
                id,
            })
            .collect();
        Self {
            config: config.clone(),
            buttons: surface.filter_buttons(),
            cards,
            selected: None,
            pending: Vec::new(),
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether a card with these categories is shown under `filter`.
    pub fn matches(&self, filter: &str, categories: &[String]) -> bool {
        filter == self.config.all_token || categories.iter().any(|c| c == filter)
    }

    /// Activate the button for `filter` and start fading cards.
    ///
    /// Timers still pending from an earlier selection are cancelled first.
    pub fn select<F, S>(&mut self, filter: &str, surface: &mut F, timers: &mut S)
    where
        F: FilterSurface + ?Sized,
        S: Scheduler<FilterTask> + ?Sized,
    {
        for id in self.pending.drain(..) {
            timers.cancel(id);
        }
        for button in &self.buttons {
            surface.set_filter_button_active(button, button == filter);
        }

        let hidden = Fade::hidden(self.config.slide_offset_px);
        let mut shown = 0;
        for card in &self.cards {
            surface.set_card_fade(&card.id, hidden);
            let task = if self.matches(filter, &card.categories) {
                shown += 1;
                FilterTask::Reveal {
                    card: card.id.clone(),
                }
            } else {
                FilterTask::Hide {
                    card: card.id.clone(),
                }
            };
            self.pending.push(timers.schedule(Delay::FilterFade, task));
        }

        debug!(filter, shown, total = self.cards.len(), "projects filtered");
        self.selected = Some(filter.to_string());
    }

    pub fn handle_task<F, S>(&mut self, task: FilterTask, surface: &mut F, timers: &mut S)
    where
        F: FilterSurface + ?Sized,
        S: Scheduler<FilterTask> + ?Sized,
    {
        match task {
            FilterTask::Reveal { card } => {
                surface.set_card_displayed(&card, true);
                self.pending
                    .push(timers.schedule(Delay::FilterReveal, FilterTask::FadeIn { card }));
            }
            FilterTask::FadeIn { card } => surface.set_card_fade(&card, Fade::SHOWN),
            FilterTask::Hide { card } => surface.set_card_displayed(&card, false),
        }
    }
}
