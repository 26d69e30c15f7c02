//! Skill progress bars revealed on scroll-into-view.

use crate::config::SkillConfig;
use tracing::trace;

/// Document operations for skill cards.
pub trait SkillSurface {
    /// Ids of every skill card, in document order.
    fn skill_cards(&self) -> Vec<String>;

    /// Fraction of the card currently inside the viewport, in `[0, 1]`.
    fn visible_ratio(&self, card: &str) -> f32;

    /// Declared target width of the card's progress bar, in percent.
    fn target_percent(&self, card: &str) -> Option<u8>;

    fn set_progress_width(&mut self, card: &str, percent: u8);
}

/// Reveals each skill card's progress bar the first time it becomes visible.
///
/// `trigger` reinstalls the observer over every card, so a card revealed by
/// an earlier observer is revealed again (to the same width) by a later one.
#[derive(Debug, Clone)]
pub struct SkillAnimator {
    threshold: f32,
    observed: Vec<String>,
}

impl SkillAnimator {
    pub fn new(config: &SkillConfig) -> Self {
        Self {
            threshold: config.visibility_threshold,
            observed: Vec::new(),
        }
    }

    /// Observe every skill card afresh and reveal those already visible.
    pub fn trigger<S: SkillSurface + ?Sized>(&mut self, surface: &mut S) {
        self.observed = surface.skill_cards();
        self.observe(surface);
    }

    /// Reveal observed cards that crossed the visibility threshold and stop
    /// observing them.
    pub fn observe<S: SkillSurface + ?Sized>(&mut self, surface: &mut S) {
        let threshold = self.threshold;
        self.observed.retain(|card| {
            if surface.visible_ratio(card) < threshold {
                return true;
            }
            if let Some(percent) = surface.target_percent(card) {
                surface.set_progress_width(card, percent);
                trace!(card = %card, percent, "skill revealed");
            }
            false
        });
    }

    /// Cards still waiting to become visible.
    pub fn observed(&self) -> &[String] {
        &self.observed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct Cards {
        ratio: HashMap<String, f32>,
        width: HashMap<String, u8>,
        writes: usize,
    }

    impl Cards {
        fn with(cards: &[(&str, f32)]) -> Self {
            Self {
                ratio: cards.iter().map(|(c, r)| (c.to_string(), *r)).collect(),
                ..Self::default()
            }
        }
    }

    impl SkillSurface for Cards {
        fn skill_cards(&self) -> Vec<String> {
            let mut cards: Vec<_> = self.ratio.keys().cloned().collect();
            cards.sort();
            cards
        }

        fn visible_ratio(&self, card: &str) -> f32 {
            self.ratio.get(card).copied().unwrap_or(0.0)
        }

        fn target_percent(&self, _card: &str) -> Option<u8> {
            Some(85)
        }

        fn set_progress_width(&mut self, card: &str, percent: u8) {
            self.width.insert(card.to_string(), percent);
            self.writes += 1;
        }
    }

    #[test]
    fn visible_cards_are_revealed_and_unobserved() {
        let mut cards = Cards::with(&[("rust", 0.5), ("css", 0.0)]);
        let mut animator = SkillAnimator::new(&SkillConfig::default());

        animator.trigger(&mut cards);

        assert_eq!(cards.width.get("rust"), Some(&85));
        assert!(!cards.width.contains_key("css"));
        assert_eq!(animator.observed(), ["css".to_string()]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut cards = Cards::with(&[("rust", 0.1)]);
        let mut animator = SkillAnimator::new(&SkillConfig::default());

        animator.trigger(&mut cards);

        assert!(animator.observed().is_empty());
    }

    #[test]
    fn card_is_revealed_once_per_observer() {
        let mut cards = Cards::with(&[("rust", 1.0)]);
        let mut animator = SkillAnimator::new(&SkillConfig::default());

        animator.trigger(&mut cards);
        animator.observe(&mut cards);
        animator.observe(&mut cards);
        assert_eq!(cards.writes, 1);

        animator.trigger(&mut cards);
        assert_eq!(cards.writes, 2);
        assert_eq!(cards.width.get("rust"), Some(&85));
    }

    #[test]
    fn scrolling_into_view_reveals_later() {
        let mut cards = Cards::with(&[("css", 0.0)]);
        let mut animator = SkillAnimator::new(&SkillConfig::default());
        animator.trigger(&mut cards);

        cards.ratio.insert("css".to_string(), 0.4);
        animator.observe(&mut cards);

        assert_eq!(cards.width.get("css"), Some(&85));
        assert!(animator.observed().is_empty());
    }
}
