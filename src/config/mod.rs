//! Site configuration.
//!
//! Every fixed delay and threshold the site uses lives here, with defaults
//! matching the stock portfolio markup. A configuration can be loaded from
//! JSON; missing fields keep their defaults.
//!
//! # Example
//!
//! ```rust
//! use segue::config::SiteConfig;
//! use std::time::Duration;
//!
//! let config = SiteConfig::from_json(r#"{ "timing": { "page_load_ms": 200 } }"#).unwrap();
//!
//! assert_eq!(config.timing.page_load(), Duration::from_millis(200));
//! assert_eq!(config.timing.entry_settle(), Duration::from_millis(50));
//! ```

mod validation;
mod violations;

pub use violations::{ConfigError, ConfigViolation};

use crate::scheduler::Delay;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub timing: TimingConfig,
    pub scroll: ScrollConfig,
    pub skills: SkillConfig,
    pub filter: FilterConfig,
    pub contact: ContactConfig,
}

impl SiteConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }
}

/// Fixed delays, in milliseconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub page_load_ms: u64,
    pub exit_animation_ms: u64,
    pub entry_settle_ms: u64,
    pub filter_fade_ms: u64,
    pub filter_reveal_ms: u64,
    pub contact_submit_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            page_load_ms: 500,
            exit_animation_ms: 300,
            entry_settle_ms: 50,
            filter_fade_ms: 300,
            filter_reveal_ms: 50,
            contact_submit_ms: 1500,
        }
    }
}

/// Longest delay, in milliseconds, a configuration may name.
pub const MAX_DELAY_MS: u64 = 60_000;

impl TimingConfig {
    /// Every delay with its configuration key.
    pub fn delays(&self) -> [(&'static str, u64); 6] {
        [
            ("timing.page_load_ms", self.page_load_ms),
            ("timing.exit_animation_ms", self.exit_animation_ms),
            ("timing.entry_settle_ms", self.entry_settle_ms),
            ("timing.filter_fade_ms", self.filter_fade_ms),
            ("timing.filter_reveal_ms", self.filter_reveal_ms),
            ("timing.contact_submit_ms", self.contact_submit_ms),
        ]
    }

    pub fn duration_of(&self, delay: Delay) -> Duration {
        let ms = match delay {
            Delay::PageLoad => self.page_load_ms,
            Delay::ExitAnimation => self.exit_animation_ms,
            Delay::EntrySettle => self.entry_settle_ms,
            Delay::FilterFade => self.filter_fade_ms,
            Delay::FilterReveal => self.filter_reveal_ms,
            Delay::ContactSubmit => self.contact_submit_ms,
        };
        Duration::from_millis(ms)
    }

    pub fn page_load(&self) -> Duration {
        self.duration_of(Delay::PageLoad)
    }

    pub fn entry_settle(&self) -> Duration {
        self.duration_of(Delay::EntrySettle)
    }

    /// Time from an accepted navigation until its guard clears.
    pub fn transition_total(&self) -> Duration {
        self.page_load().saturating_add(self.entry_settle())
    }
}

/// Scroll offsets past which the nav bar and back-to-top control change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub nav_scrolled_after: u32,
    pub back_to_top_after: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            nav_scrolled_after: 100,
            back_to_top_after: 500,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillConfig {
    /// Fraction of a skill card that must be visible before it is revealed
    pub visibility_threshold: f32,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: 0.1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Filter value that matches every card
    pub all_token: String,
    /// Vertical offset, in pixels, of a faded-out card
    pub slide_offset_px: i32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            all_token: "all".to_string(),
            slide_offset_px: 20,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub sending_label: String,
    pub success_notice: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            sending_label: "Sending...".to_string(),
            success_notice: "Message sent! I'll get back to you soon.".to_string(),
        }
    }
}
