//! Configuration validation.
//!
//! Uses `Validation` so a bad configuration reports every broken rule at
//! once rather than the first one found.

use super::violations::{ConfigError, ConfigViolation};
use super::{SiteConfig, MAX_DELAY_MS};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

fn rule(holds: bool, violation: impl FnOnce() -> ConfigViolation) -> Check {
    if holds {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

fn non_empty(value: &str, field: &'static str) -> Check {
    rule(!value.trim().is_empty(), || ConfigViolation::EmptyText { field })
}

impl SiteConfig {
    /// Check every rule, accumulating all violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let timing = &self.timing;
        let limit_ms = timing.page_load_ms.saturating_add(timing.entry_settle_ms);
        let threshold = self.skills.visibility_threshold;

        let mut checks: Vec<Check> = timing
            .delays()
            .into_iter()
            .map(|(field, ms)| {
                rule(ms <= MAX_DELAY_MS, || ConfigViolation::DelayTooLong { field, ms })
            })
            .collect();
        checks.extend([
            // A page still exiting must be cleared before the next swap can
            // mark it active again.
            rule(timing.exit_animation_ms <= limit_ms, || {
                ConfigViolation::ExitOutlastsNextSwap {
                    exit_ms: timing.exit_animation_ms,
                    limit_ms,
                }
            }),
            rule(
                self.scroll.back_to_top_after > self.scroll.nav_scrolled_after,
                || ConfigViolation::ScrollThresholdsOutOfOrder {
                    nav: self.scroll.nav_scrolled_after,
                    back_to_top: self.scroll.back_to_top_after,
                },
            ),
            rule(threshold > 0.0 && threshold <= 1.0, || {
                ConfigViolation::VisibilityThresholdOutOfRange(threshold)
            }),
            non_empty(&self.filter.all_token, "filter.all_token"),
            non_empty(&self.contact.sending_label, "contact.sending_label"),
        ]);

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate and convert the outcome into a `Result`.
    pub fn check(&self) -> Result<(), ConfigError> {
        match self.validate() {
            Validation::Success(()) => Ok(()),
            Validation::Failure(violations) => {
                Err(ConfigError::Invalid(violations.iter().cloned().collect()))
            }
        }
    }
}
