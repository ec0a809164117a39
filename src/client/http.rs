//! `reqwest` transport for the native front end. The client keeps a cookie
//! store so the `csrftoken` cookie fetched with the page travels with the
//! later POSTs, which is what a Django-style CSRF check compares the header to.

use super::{
    api::{RawResponse, Transport},
    errors::AppError,
};
use crate::{form::decode_cookie_value, APP_USER_AGENT};
use reqwest::{header::CONTENT_TYPE, Client};
use tracing::{debug, instrument};

#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// # Errors
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .cookie_store(true)
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self { client })
    }

    /// Loads the form page once and returns the decoded value of cookie
    /// `name`, the way a script on the rendered page would read it.
    ///
    /// # Errors
    /// Returns an error if the page cannot be reached.
    #[instrument(skip(self))]
    pub async fn fetch_cookie(&self, page_url: &str, name: &str) -> Result<Option<String>, AppError> {
        let response = self
            .client
            .get(page_url)
            .send()
            .await
            .map_err(map_request_error)?;

        debug!(status = response.status().as_u16(), "form page loaded");

        let value = response
            .cookies()
            .find(|cookie| cookie.name() == name)
            .map(|cookie| decode_cookie_value(cookie.value()));

        Ok(value)
    }
}

impl Transport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        payload: String,
        headers: &[(String, String)],
    ) -> Result<RawResponse, AppError> {
        let mut builder = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload);

        for (name, value) in headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await.map_err(map_request_error)?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to read response body: {err}")))?;

        Ok(RawResponse { status, body })
    }
}

fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_builder() {
        AppError::Serialization(format!("Failed to build request: {err}"))
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}
