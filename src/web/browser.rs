//! Browser-backed seams: cookies from `document.cookie`, navigation through
//! `window.location` and `window.history`.

use crate::form::{cookie_value, CsrfTokenProvider, Navigator, CSRF_COOKIE};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument};

/// Reads the CSRF cookie fresh on every request.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookies;

impl CsrfTokenProvider for DocumentCookies {
    fn csrf_token(&self) -> Option<String> {
        let document = window()?.document()?;
        let cookies = document.dyn_into::<HtmlDocument>().ok()?.cookie().ok()?;
        cookie_value(&cookies, CSRF_COOKIE)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate_to(&self, href: &str) {
        let Some(window) = window() else {
            return;
        };
        if let Err(err) = window.location().set_href(href) {
            warn!(?err, "navigation failed");
        }
    }

    fn back(&self) {
        let Some(window) = window() else {
            return;
        };
        let result = window.history().and_then(|history| history.back());
        if let Err(err) = result {
            warn!(?err, "history back failed");
        }
    }
}

/// `window.location.href` of the page hosting the form.
pub fn page_url() -> Option<String> {
    window()?.location().href().ok()
}
