//! Contact form with a simulated submission.

use crate::config::ContactConfig;
use crate::scheduler::{Delay, Scheduler, TimerId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Values entered in the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Document operations for the contact form.
pub trait FormSurface {
    fn form_values(&self) -> ContactMessage;

    fn submit_label(&self) -> String;

    fn set_submit_state(&mut self, label: &str, disabled: bool);

    /// Clear every field.
    fn reset_form(&mut self);

    /// Surface a notice to the visitor.
    fn show_notice(&mut self, message: &str);
}

/// Timer payloads of the contact form.
#[derive(Clone, Debug, PartialEq)]
pub enum ContactTask {
    /// The simulated submission finished
    Delivered,
}

#[derive(Debug, Clone)]
struct Submission {
    timer: TimerId,
    original_label: String,
    message: ContactMessage,
}

#[derive(Debug)]
pub struct ContactForm {
    config: ContactConfig,
    in_flight: Option<Submission>,
}

impl ContactForm {
    pub fn new(config: &ContactConfig) -> Self {
        Self {
            config: config.clone(),
            in_flight: None,
        }
    }

    pub fn is_sending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Handle a submit. Returns `false` if a submission is already in flight,
    /// since the submit control is disabled while sending.
    pub fn submit<F, S>(&mut self, surface: &mut F, timers: &mut S) -> bool
    where
        F: FormSurface + ?Sized,
        S: Scheduler<ContactTask> + ?Sized,
    {
        if self.in_flight.is_some() {
            return false;
        }

        let message = surface.form_values();
        let original_label = surface.submit_label();
        surface.set_submit_state(&self.config.sending_label, true);

        let timer = timers.schedule(Delay::ContactSubmit, ContactTask::Delivered);
        debug!(
            timer = %timer,
            payload = %serde_json::to_string(&message).unwrap_or_default(),
            "contact form submitted"
        );

        self.in_flight = Some(Submission {
            timer,
            original_label,
            message,
        });
        true
    }

    /// Finish the in-flight submission. Returns the delivered message.
    pub fn handle_task<F>(&mut self, task: ContactTask, surface: &mut F) -> Option<ContactMessage>
    where
        F: FormSurface + ?Sized,
    {
        match task {
            ContactTask::Delivered => {
                let submission = self.in_flight.take()?;
                surface.reset_form();
                surface.set_submit_state(&submission.original_label, false);
                surface.show_notice(&self.config.success_notice);
                info!(timer = %submission.timer, from = %submission.message.email, "contact message delivered");
                Some(submission.message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimingConfig;
    use crate::scheduler::VirtualScheduler;
    use std::time::Duration;

    struct Form {
        values: ContactMessage,
        label: String,
        disabled: bool,
        notices: Vec<String>,
    }

    impl Form {
        fn filled() -> Self {
            Self {
                values: ContactMessage {
                    name: "Ada".into(),
                    email: "ada@example.com".into(),
                    message: "Hello".into(),
                },
                label: "Send Message".into(),
                disabled: false,
                notices: Vec::new(),
            }
        }
    }

    impl FormSurface for Form {
        fn form_values(&self) -> ContactMessage {
            self.values.clone()
        }

        fn submit_label(&self) -> String {
            self.label.clone()
        }

        fn set_submit_state(&mut self, label: &str, disabled: bool) {
            self.label = label.to_string();
            self.disabled = disabled;
        }

        fn reset_form(&mut self) {
            self.values = ContactMessage::default();
        }

        fn show_notice(&mut self, message: &str) {
            self.notices.push(message.to_string());
        }
    }

    #[test]
    fn submit_disables_and_relabels_control() {
        let mut form = Form::filled();
        let mut timers: VirtualScheduler<ContactTask> = VirtualScheduler::new(TimingConfig::default());
        let mut contact = ContactForm::new(&ContactConfig::default());

        assert!(contact.submit(&mut form, &mut timers));

        assert!(form.disabled);
        assert_eq!(form.label, "Sending...");
        assert!(contact.is_sending());
        assert!(timers.pop_due(Duration::from_millis(1499)).is_none());
    }

    #[test]
    fn delivery_resets_form_and_restores_control() {
        let mut form = Form::filled();
        let mut timers: VirtualScheduler<ContactTask> = VirtualScheduler::new(TimingConfig::default());
        let mut contact = ContactForm::new(&ContactConfig::default());
        contact.submit(&mut form, &mut timers);

        let timer = timers.pop_due(Duration::from_millis(1500)).unwrap();
        let delivered = contact.handle_task(timer.task, &mut form).unwrap();

        assert_eq!(delivered.email, "ada@example.com");
        assert_eq!(form.values, ContactMessage::default());
        assert_eq!(form.label, "Send Message");
        assert!(!form.disabled);
        assert_eq!(form.notices, vec![ContactConfig::default().success_notice]);
        assert!(!contact.is_sending());
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let mut form = Form::filled();
        let mut timers: VirtualScheduler<ContactTask> = VirtualScheduler::new(TimingConfig::default());
        let mut contact = ContactForm::new(&ContactConfig::default());

        assert!(contact.submit(&mut form, &mut timers));
        assert!(!contact.submit(&mut form, &mut timers));
        assert_eq!(timers.pending(), 1);
    }

    #[test]
    fn stray_delivery_does_nothing() {
        let mut form = Form::filled();
        let mut contact = ContactForm::new(&ContactConfig::default());

        assert!(contact.handle_task(ContactTask::Delivered, &mut form).is_none());
        assert!(form.notices.is_empty());
    }
}
