//! Form inputs and the wire payloads exchanged with the backend. The signup
//! request carries a plaintext password and the OTP request a one-time code, so
//! neither is ever logged.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Field values captured when the signup form is submitted.
#[derive(Clone, Debug)]
pub struct SignupInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: SecretString,
}

impl SignupInput {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }

    pub(crate) fn to_request(&self) -> SignupRequest<'_> {
        SignupRequest {
            first_name: &self.first_name,
            last_name: &self.last_name,
            email: &self.email,
            password: self.password.expose_secret(),
        }
    }
}

/// The email shown on the OTP panel plus the code the user typed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OtpInput {
    pub email: String,
    pub otp: String,
}

#[derive(Serialize)]
pub(crate) struct SignupRequest<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Union of the success and failure bodies of the signup endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SignupResponse {
    #[serde(default)]
    pub verification_required: bool,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Union of the success and failure bodies of the verification endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct VerifyResponse {
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}
