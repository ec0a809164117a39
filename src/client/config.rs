//! Endpoint configuration for the signup form. Paths default to build-time
//! values and, in the browser, may be overridden at runtime through
//! `window.SIGNUP_FORM_CONFIG` so static deployments can move endpoints
//! without rebuilding. Configuration values are public; do not store secrets here.

use super::errors::AppError;
use url::Url;

pub const DEFAULT_VERIFY_PATH: &str = "/verify-email/";
pub const DEFAULT_LOGIN_PATH: &str = "/login/";
pub const DEFAULT_DASHBOARD_PATH: &str = "/dashboard/";

/// Where the form posts and where it sends the user afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Absolute URL of the page hosting the form; signup posts back to it.
    pub page_url: String,
    pub verify_path: String,
    pub login_path: String,
    pub dashboard_path: String,
}

impl AppConfig {
    /// Builds a config for `page_url` with the default endpoint paths.
    pub fn new(page_url: impl Into<String>) -> Self {
        Self {
            page_url: page_url.into(),
            verify_path: DEFAULT_VERIFY_PATH.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            dashboard_path: DEFAULT_DASHBOARD_PATH.to_string(),
        }
    }

    /// Loads paths from build-time environment variables and applies runtime overrides.
    pub fn load(page_url: impl Into<String>) -> Self {
        let verify_path = option_env!("SIGNUP_FORM_VERIFY_PATH").unwrap_or(DEFAULT_VERIFY_PATH);
        let login_path = option_env!("SIGNUP_FORM_LOGIN_PATH").unwrap_or(DEFAULT_LOGIN_PATH);
        let dashboard_path =
            option_env!("SIGNUP_FORM_DASHBOARD_PATH").unwrap_or(DEFAULT_DASHBOARD_PATH);

        Self {
            page_url: page_url.into(),
            verify_path: verify_path.to_string(),
            login_path: login_path.to_string(),
            dashboard_path: dashboard_path.to_string(),
        }
        .with_overrides(runtime_value)
    }

    /// Replaces each endpoint path for which `lookup` yields a non-blank value.
    /// Keys are the field names: `verify_path`, `login_path`, `dashboard_path`.
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        for (key, slot) in [
            ("verify_path", &mut self.verify_path),
            ("login_path", &mut self.login_path),
            ("dashboard_path", &mut self.dashboard_path),
        ] {
            if let Some(path) = lookup(key).as_deref().and_then(non_blank) {
                *slot = path.to_string();
            }
        }
        self
    }

    /// Resolves `path` against the page URL the same way a browser resolves a
    /// relative `fetch` target.
    pub fn resolve(&self, path: &str) -> Result<String, AppError> {
        let base = Url::parse(self.page_url.trim())?;
        Ok(base.join(path.trim())?.to_string())
    }

    /// The signup form posts to the page it was served from.
    pub fn signup_url(&self) -> Result<String, AppError> {
        self.resolve("")
    }

    pub fn verify_url(&self) -> Result<String, AppError> {
        self.resolve(&self.verify_path)
    }
}

fn non_blank(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|trimmed| !trimmed.is_empty())
}

/// Reads `window.SIGNUP_FORM_CONFIG[key]` when the page defines it.
#[cfg(target_arch = "wasm32")]
fn runtime_value(key: &str) -> Option<String> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let overrides = Reflect::get(&window, &JsValue::from_str("SIGNUP_FORM_CONFIG")).ok()?;
    if overrides.is_null() || overrides.is_undefined() {
        return None;
    }
    Reflect::get(&overrides, &JsValue::from_str(key))
        .ok()?
        .as_string()
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_value(_key: &str) -> Option<String> {
    None
}
