use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("A message is already being sent")]
    AlreadySending,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub user_email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    fn fields(&self) -> [&str; 5] {
        [
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.user_email.as_str(),
            self.subject.as_str(),
            self.message.as_str(),
        ]
    }

    /// Empty fields are reported before a malformed address.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.fields().iter().any(|value| value.is_empty()) {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(&self.user_email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Focus decoration of a single input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldState {
    pub focused: bool,
    pub filled: bool,
}

impl FieldState {
    /// Initial state for an input that may already hold a value.
    pub fn with_value(value: &str) -> Self {
        Self {
            focused: false,
            filled: !value.trim().is_empty(),
        }
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self, value: &str) {
        self.focused = false;
        self.filled = !value.trim().is_empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ContactForm {
        ContactForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            user_email: "ada@example.org".into(),
            subject: "Hello".into(),
            message: "Nice certificates.".into(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(complete().validate(), Ok(()));
    }

    #[test]
    fn any_empty_field_is_missing() {
        let mut form = complete();
        form.subject.clear();
        assert_eq!(form.validate(), Err(ContactError::MissingFields));

        let mut form = complete();
        form.user_email.clear();
        assert_eq!(form.validate(), Err(ContactError::MissingFields));
    }

    #[test]
    fn whitespace_only_fields_count_as_filled() {
        let mut form = complete();
        form.subject = "   ".into();
        form.message = "\n".into();

        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = complete();
        form.user_email = "ada@example".into();

        let err = form.validate().unwrap_err();

        assert_eq!(err, ContactError::InvalidEmail);
        assert_eq!(err.to_string(), "Please enter a valid email address");
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.domain.io"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaced name@example.com"));
        assert!(!is_valid_email("user@nodot"));
    }

    #[test]
    fn reset_clears_every_field() {
        let mut form = complete();

        form.reset();

        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn blur_marks_filled_inputs() {
        let mut field = FieldState::with_value("");
        field.focus();
        assert!(field.focused);

        field.blur("  text ");
        assert_eq!(field, FieldState { focused: false, filled: true });

        field.blur("   ");
        assert!(!field.filled);
    }
}
