//! `fetch` transport for the browser build. Requests are same-origin, so the
//! browser attaches the CSRF cookie itself; only the header is added here.

use crate::client::{AppError, RawResponse, Transport};
use gloo_net::http::Request;

#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn post_json(
        &self,
        url: &str,
        payload: String,
        headers: &[(String, String)],
    ) -> Result<RawResponse, AppError> {
        let mut builder = Request::post(url).header("Content-Type", "application/json");

        for (name, value) in headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let request = builder
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;
        let response = request
            .send()
            .await
            .map_err(|err| AppError::Network(format!("Unable to reach the server: {err}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to read response body: {err}")))?;

        Ok(RawResponse { status, body })
    }
}
