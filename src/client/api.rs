//! Transport seam for the form's JSON POSTs. The browser build talks through
//! `fetch`, the native build through `reqwest`; tests script the responses.
//! Implementations attach only the headers callers hand them and never log
//! request bodies, which carry passwords and one-time codes.

use super::errors::AppError;

/// Header carrying the anti-forgery token on every state-changing request.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Status and undecoded body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Mirrors `Response.ok`: any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a JSON payload and hands back whatever the server answered.
///
/// Non-2xx statuses are not errors here: the caller decides what a rejection
/// means. `Err` is reserved for requests that never produced a response.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(
        &self,
        url: &str,
        payload: String,
        headers: &[(String, String)],
    ) -> Result<RawResponse, AppError>;
}
