//! Pure mapping from a server answer to what the form should do next.
//!
//! Bodies are decoded before the status is looked at, so an error page that
//! is not JSON counts as a decode failure rather than a rejection.

use super::types::{SignupResponse, VerifyResponse};
use crate::client::{AppConfig, AppError, RawResponse};

pub const SIGNUP_FAILED: &str = "Signup failed";
pub const SIGNUP_UNAVAILABLE: &str = "An error occurred. Please try again.";
pub const OTP_REQUIRED: &str = "Please enter the verification code";
pub const INVALID_CODE: &str = "Invalid code";
pub const VERIFICATION_FAILED: &str = "Verification failed";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignupOutcome {
    /// Server sent a code; switch to the OTP panel.
    VerificationRequired,
    Redirect(String),
    Rejected(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyOutcome {
    Redirect(String),
    Rejected(String),
}

/// # Errors
/// Returns `AppError::Parse` when the body is not the expected JSON object.
pub fn decide_signup(
    response: &RawResponse,
    config: &AppConfig,
) -> Result<SignupOutcome, AppError> {
    let body: SignupResponse = decode(&response.body)?;

    if !response.is_success() {
        let message = non_empty(body.msg)
            .or_else(|| non_empty(body.error))
            .unwrap_or_else(|| SIGNUP_FAILED.to_string());
        return Ok(SignupOutcome::Rejected(message));
    }

    if body.verification_required {
        return Ok(SignupOutcome::VerificationRequired);
    }

    let target = non_empty(body.redirect_url).unwrap_or_else(|| config.login_path.clone());
    Ok(SignupOutcome::Redirect(target))
}

/// # Errors
/// Returns `AppError::Parse` when the body is not the expected JSON object.
pub fn decide_verify(
    response: &RawResponse,
    config: &AppConfig,
) -> Result<VerifyOutcome, AppError> {
    let body: VerifyResponse = decode(&response.body)?;

    if response.is_success() {
        let target =
            non_empty(body.redirect_url).unwrap_or_else(|| config.dashboard_path.clone());
        Ok(VerifyOutcome::Redirect(target))
    } else {
        let message = non_empty(body.msg).unwrap_or_else(|| INVALID_CODE.to_string());
        Ok(VerifyOutcome::Rejected(message))
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, AppError> {
    serde_json::from_str(body)
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
