//! Scroll-dependent styling of the nav bar and back-to-top control.

use crate::config::ScrollConfig;

pub trait ScrollSurface {
    fn set_nav_scrolled(&mut self, scrolled: bool);

    fn set_back_to_top_visible(&mut self, visible: bool);
}

#[derive(Debug, Clone)]
pub struct ScrollEffects {
    config: ScrollConfig,
}

impl ScrollEffects {
    pub fn new(config: &ScrollConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Apply both thresholds for the given scroll offset.
    pub fn update<S: ScrollSurface + ?Sized>(&self, offset: u32, surface: &mut S) {
        surface.set_nav_scrolled(offset > self.config.nav_scrolled_after);
        surface.set_back_to_top_visible(offset > self.config.back_to_top_after);
    }
}
