//! Contact page: form validation, a simulated send and toast notifications.
//!
//! Nothing leaves the process. A valid submission waits out the configured
//! delay, then clears the form and confirms with a success notification.

pub mod form;
pub mod notification;

use std::time::Duration;

use log::info;

use crate::constants::{SUBMIT_DELAY, SUCCESS_FLASH};

pub use form::{ContactError, ContactForm, FieldState, is_valid_email};
pub use notification::{Notification, NotificationKind, Notifications};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Sending { elapsed: Duration },
}

#[derive(Debug, Clone)]
pub struct ContactPage {
    pub form: ContactForm,
    state: SubmissionState,
    submit_delay: Duration,
    success_flash: Option<Duration>,
    notifications: Notifications,
}

impl Default for ContactPage {
    fn default() -> Self {
        Self::new(SUBMIT_DELAY, Notifications::default())
    }
}

impl ContactPage {
    pub fn new(submit_delay: Duration, notifications: Notifications) -> Self {
        Self {
            form: ContactForm::default(),
            state: SubmissionState::Idle,
            submit_delay,
            success_flash: None,
            notifications,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.state == SubmissionState::Idle
    }

    pub fn submit_label(&self) -> &'static str {
        match self.state {
            SubmissionState::Idle => SUBMIT_LABEL,
            SubmissionState::Sending { .. } => SENDING_LABEL,
        }
    }

    /// True for a short while after a message went out.
    pub fn shows_success(&self) -> bool {
        self.success_flash.is_some()
    }

    /// Validates the form and starts the simulated send. Validation failures
    /// are also shown as an error notification.
    pub fn submit(&mut self) -> Result<(), ContactError> {
        if !self.is_submit_enabled() {
            return Err(ContactError::AlreadySending);
        }
        if let Err(e) = self.form.validate() {
            self.notifications.show(e.to_string(), NotificationKind::Error);
            return Err(e);
        }

        info!("Sending message \"{}\"", self.form.subject);
        self.state = SubmissionState::Sending {
            elapsed: Duration::ZERO,
        };
        Ok(())
    }

    pub fn update(&mut self, dt: Duration) {
        self.notifications.update(dt);

        self.success_flash = self
            .success_flash
            .and_then(|remaining| remaining.checked_sub(dt))
            .filter(|remaining| !remaining.is_zero());

        if let SubmissionState::Sending { elapsed } = self.state {
            let elapsed = elapsed + dt;
            if elapsed >= self.submit_delay {
                self.finish_sending();
            } else {
                self.state = SubmissionState::Sending { elapsed };
            }
        }
    }

    fn finish_sending(&mut self) {
        self.state = SubmissionState::Idle;
        self.form.reset();
        self.success_flash = Some(SUCCESS_FLASH);
        self.notifications.show(SUCCESS_MESSAGE, NotificationKind::Success);
        info!("Message sent");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_page() -> ContactPage {
        let mut page = ContactPage::default();
        page.form = ContactForm {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            user_email: "grace@navy.mil".into(),
            subject: "Compilers".into(),
            message: "Let's talk.".into(),
        };
        page
    }

    #[test]
    fn invalid_form_shows_error_and_stays_idle() {
        let mut page = ContactPage::default();

        assert_eq!(page.submit(), Err(ContactError::MissingFields));

        assert_eq!(page.state(), SubmissionState::Idle);
        let note = page.notifications().current().unwrap();
        assert_eq!(note.kind, NotificationKind::Error);
        assert_eq!(note.message, "Please fill in all fields");
    }

    #[test]
    fn valid_submission_goes_through_sending() {
        let mut page = filled_page();

        page.submit().unwrap();
        assert!(!page.is_submit_enabled());
        assert_eq!(page.submit_label(), SENDING_LABEL);

        page.update(Duration::from_millis(1999));
        assert!(matches!(page.state(), SubmissionState::Sending { .. }));

        page.update(Duration::from_millis(1));
        assert_eq!(page.state(), SubmissionState::Idle);
        assert_eq!(page.submit_label(), SUBMIT_LABEL);
        assert_eq!(page.form, ContactForm::default());
        assert_eq!(page.notifications().current().unwrap().message, SUCCESS_MESSAGE);
    }

    #[test]
    fn double_submit_is_rejected() {
        let mut page = filled_page();
        page.submit().unwrap();

        assert_eq!(page.submit(), Err(ContactError::AlreadySending));
    }

    #[test]
    fn success_flash_is_brief() {
        let mut page = filled_page();
        page.submit().unwrap();
        page.update(SUBMIT_DELAY);
        assert!(page.shows_success());

        page.update(Duration::from_millis(499));
        assert!(page.shows_success());

        page.update(Duration::from_millis(1));
        assert!(!page.shows_success());
    }
}
