//! Anti-forgery token lookup. The form never stores the token itself; it asks
//! a provider right before each request.

use percent_encoding::percent_decode_str;

/// Cookie the server sets alongside the form page.
pub const CSRF_COOKIE: &str = "csrftoken";

pub trait CsrfTokenProvider {
    /// Current token, or `None` when the cookie is missing.
    fn csrf_token(&self) -> Option<String>;
}

/// A token known up front, used by the CLI after it loads the page and by tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticCsrfToken(Option<String>);

impl StaticCsrfToken {
    pub fn new(token: Option<String>) -> Self {
        Self(token)
    }
}

impl CsrfTokenProvider for StaticCsrfToken {
    fn csrf_token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Finds `name` in a `document.cookie` style string (`a=1; b=2`) and
/// percent-decodes its value.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(name)?.strip_prefix('='))
        .map(decode_cookie_value)
}

/// Undoes the percent-encoding servers apply to cookie values, the way
/// `decodeURIComponent` does in the browser.
pub fn decode_cookie_value(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}
