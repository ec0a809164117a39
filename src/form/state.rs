//! Everything the signup card renders, kept as plain data so it can be
//! inspected without a DOM.

use std::collections::BTreeSet;

/// Which of the two mutually exclusive panels is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    ShowingSignupForm,
    ShowingOtpPanel,
}

/// Inputs that carry the `focused` marker class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    OtpCode,
}

impl Field {
    /// The `name` attribute of the input on the page.
    pub const fn name(self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Email => "email",
            Field::Password => "password",
            Field::OtpCode => "otp_code",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    ui: UiState,
    error: Option<String>,
    otp_email: String,
    focused: BTreeSet<Field>,
    signup_in_flight: bool,
    verify_in_flight: bool,
}

impl FormState {
    pub fn ui(&self) -> UiState {
        self.ui
    }

    /// The single error message currently on screen.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Email shown on the OTP panel; empty until the panel opens.
    pub fn otp_email(&self) -> &str {
        &self.otp_email
    }

    pub fn is_focused(&self, field: Field) -> bool {
        self.focused.contains(&field)
    }

    pub fn signup_in_flight(&self) -> bool {
        self.signup_in_flight
    }

    pub fn verify_in_flight(&self) -> bool {
        self.verify_in_flight
    }

    /// Replaces the visible error. An empty message leaves the current one in place.
    pub(crate) fn show_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        if !message.is_empty() {
            self.error = Some(message);
        }
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
    }

    /// Hides the signup panel and shows the code entry for `email`. There is
    /// no way back to the signup panel short of leaving the page.
    pub(crate) fn open_otp_panel(&mut self, email: &str) {
        self.ui = UiState::ShowingOtpPanel;
        self.otp_email = email.to_string();
        self.clear_error();
    }

    pub(crate) fn focus(&mut self, field: Field) {
        self.focused.insert(field);
    }

    /// Drops the marker only when the input was left empty.
    pub(crate) fn blur(&mut self, field: Field, value: &str) {
        if value.is_empty() {
            self.focused.remove(&field);
        }
    }

    pub(crate) fn set_signup_in_flight(&mut self, in_flight: bool) {
        self.signup_in_flight = in_flight;
    }

    pub(crate) fn set_verify_in_flight(&mut self, in_flight: bool) {
        self.verify_in_flight = in_flight;
    }
}
