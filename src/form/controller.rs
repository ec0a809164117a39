//! Signup form controller. It validates the fields locally, posts them to the
//! page URL, and either opens the OTP panel or leaves the page depending on
//! the answer. The OTP panel then posts `{email, otp}` to the verification
//! endpoint and leaves the page on success.
//!
//! Flow Overview: validate, submit signup, show the OTP panel, verify the code,
//! navigate.
//!
//! The controller is single-threaded. State lives in a `RefCell` that is never
//! borrowed across an `.await`, so other events can be handled while a request
//! is outstanding. Each action has its own in-flight flag and a second trigger
//! of the same action is dropped until the first one resolves.

use super::{
    csrf::CsrfTokenProvider,
    decision::{
        decide_signup, decide_verify, SignupOutcome, VerifyOutcome, OTP_REQUIRED,
        SIGNUP_UNAVAILABLE, VERIFICATION_FAILED,
    },
    navigation::Navigator,
    state::{Field, FormState, UiState},
    types::{OtpInput, SignupInput},
    validation::validate_signup,
};
use crate::client::{AppConfig, AppError, Transport, CSRF_HEADER};
use std::cell::RefCell;
use tracing::{debug, error, instrument, warn};

pub struct SignupFormController<T, C, N> {
    config: AppConfig,
    transport: T,
    csrf: C,
    navigator: N,
    state: RefCell<FormState>,
}

impl<T, C, N> SignupFormController<T, C, N>
where
    T: Transport,
    C: CsrfTokenProvider,
    N: Navigator,
{
    pub fn new(config: AppConfig, transport: T, csrf: C, navigator: N) -> Self {
        Self {
            config,
            transport,
            csrf,
            navigator,
            state: RefCell::new(FormState::default()),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Snapshot of what the card should currently render.
    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    /// Handles a signup form submission and returns the panel now visible.
    ///
    /// Validation failures and server rejections end up in the error field;
    /// a redirect hands off to the navigator.
    #[instrument(skip_all)]
    pub async fn on_signup_submit(&self, input: SignupInput) -> UiState {
        {
            let mut state = self.state.borrow_mut();
            if state.signup_in_flight() {
                debug!("signup already in flight, ignoring submit");
                return state.ui();
            }
            if let Err(err) = validate_signup(&input) {
                debug!(rule = ?err, "signup form rejected");
                state.show_error(err.to_string());
                return state.ui();
            }
            state.set_signup_in_flight(true);
        }

        let result = self.send_signup(&input).await;
        self.state.borrow_mut().set_signup_in_flight(false);

        match result {
            Ok(SignupOutcome::VerificationRequired) => {
                self.state.borrow_mut().open_otp_panel(&input.email);
            }
            Ok(SignupOutcome::Redirect(target)) => self.navigator.navigate_to(&target),
            Ok(SignupOutcome::Rejected(message)) => {
                debug!(%message, "signup rejected by server");
                self.state.borrow_mut().show_error(message);
            }
            Err(err) => {
                error!(error = %err, "signup request failed");
                self.state.borrow_mut().show_error(SIGNUP_UNAVAILABLE);
            }
        }

        self.state.borrow().ui()
    }

    /// Handles a click on the verify button with the typed `code` and the
    /// email shown on the OTP panel.
    #[instrument(skip_all)]
    pub async fn on_verify_otp_click(&self, code: &str, email: &str) {
        {
            let mut state = self.state.borrow_mut();
            if state.verify_in_flight() {
                debug!("verification already in flight, ignoring click");
                return;
            }
            if code.is_empty() {
                state.show_error(OTP_REQUIRED);
                return;
            }
            state.set_verify_in_flight(true);
        }

        let input = OtpInput {
            email: email.to_string(),
            otp: code.to_string(),
        };
        let result = self.send_verification(&input).await;
        self.state.borrow_mut().set_verify_in_flight(false);

        match result {
            Ok(VerifyOutcome::Redirect(target)) => self.navigator.navigate_to(&target),
            Ok(VerifyOutcome::Rejected(message)) => {
                debug!(%message, "verification rejected by server");
                self.state.borrow_mut().show_error(message);
            }
            Err(err) => {
                error!(error = %err, "verification request failed");
                self.state.borrow_mut().show_error(VERIFICATION_FAILED);
            }
        }
    }

    pub fn navigate_back(&self) {
        self.navigator.back();
    }

    pub fn on_focus(&self, field: Field) {
        self.state.borrow_mut().focus(field);
    }

    pub fn on_blur(&self, field: Field, value: &str) {
        self.state.borrow_mut().blur(field, value);
    }

    async fn send_signup(&self, input: &SignupInput) -> Result<SignupOutcome, AppError> {
        let url = self.config.signup_url()?;
        let payload = serde_json::to_string(&input.to_request())
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        let response = self
            .transport
            .post_json(&url, payload, &self.csrf_headers())
            .await?;
        decide_signup(&response, &self.config)
    }

    async fn send_verification(&self, input: &OtpInput) -> Result<VerifyOutcome, AppError> {
        let url = self.config.verify_url()?;
        let payload = serde_json::to_string(input)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        let response = self
            .transport
            .post_json(&url, payload, &self.csrf_headers())
            .await?;
        decide_verify(&response, &self.config)
    }

    fn csrf_headers(&self) -> Vec<(String, String)> {
        match self.csrf.csrf_token() {
            Some(token) => vec![(CSRF_HEADER.to_string(), token)],
            None => {
                warn!("csrf cookie missing, sending request without token");
                Vec::new()
            }
        }
    }
}
