//! Terminal wiring for the form controller: a `reqwest` transport, the CSRF
//! cookie read from one page load, and an in-memory history standing in for
//! the browser.

use crate::client::{AppConfig, HttpTransport};
use crate::form::{
    RecordingNavigator, SignupFormController, StaticCsrfToken, UiState, CSRF_COOKIE,
};
use anyhow::{anyhow, Result};
use tracing::{debug, warn};

pub type CliController = SignupFormController<HttpTransport, StaticCsrfToken, RecordingNavigator>;

/// Loads the form page for its CSRF cookie and returns a ready controller.
/// # Errors
/// Returns an error if the page cannot be reached.
pub async fn connect(config: AppConfig) -> Result<CliController> {
    let transport = HttpTransport::new()?;
    let token = transport.fetch_cookie(&config.page_url, CSRF_COOKIE).await?;

    if token.is_none() {
        warn!(cookie = CSRF_COOKIE, "page did not set a CSRF cookie");
    } else {
        debug!(cookie = CSRF_COOKIE, "CSRF cookie loaded");
    }

    Ok(SignupFormController::new(
        config,
        transport,
        StaticCsrfToken::new(token),
        RecordingNavigator::new(),
    ))
}

/// What the form would show a browser user once the action settled.
#[derive(Debug, PartialEq, Eq)]
pub enum Settled {
    /// The page was left for this absolute URL.
    Navigated(String),
    /// The OTP panel is waiting for a code sent to this address.
    AwaitingCode(String),
    /// The error element shows this message.
    Failed(String),
    Idle,
}

pub fn settle(controller: &CliController) -> Settled {
    if let Some(target) = controller.navigator().current() {
        let href = controller
            .config()
            .resolve(&target)
            .unwrap_or(target);
        return Settled::Navigated(href);
    }

    let state = controller.state();
    if let Some(message) = state.error() {
        return Settled::Failed(message.to_string());
    }
    if state.ui() == UiState::ShowingOtpPanel {
        return Settled::AwaitingCode(state.otp_email().to_string());
    }
    Settled::Idle
}

/// Prints the outcome; a displayed error becomes the process error.
/// # Errors
/// Returns the message the form would have shown.
pub fn report(controller: &CliController) -> Result<()> {
    match settle(controller) {
        Settled::Navigated(href) => println!("{href}"),
        Settled::AwaitingCode(email) => println!("verification code pending for {email}"),
        Settled::Failed(message) => return Err(anyhow!(message)),
        Settled::Idle => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Navigator;

    fn offline_controller() -> CliController {
        SignupFormController::new(
            AppConfig::new("https://shop.tld/signup/"),
            HttpTransport::new().unwrap(),
            StaticCsrfToken::default(),
            RecordingNavigator::new(),
        )
    }

    #[test]
    fn settle_resolves_navigation_against_the_page() {
        let controller = offline_controller();
        controller.navigator().navigate_to("/dashboard/");

        assert_eq!(
            settle(&controller),
            Settled::Navigated("https://shop.tld/dashboard/".to_string())
        );
    }

    #[test]
    fn settle_keeps_absolute_targets() {
        let controller = offline_controller();
        controller
            .navigator()
            .navigate_to("https://accounts.example.com/welcome");

        assert_eq!(
            settle(&controller),
            Settled::Navigated("https://accounts.example.com/welcome".to_string())
        );
    }

    #[tokio::test]
    async fn settle_reports_the_displayed_error() {
        let controller = offline_controller();
        controller.on_verify_otp_click("", "ada@example.com").await;

        assert_eq!(
            settle(&controller),
            Settled::Failed("Please enter the verification code".to_string())
        );
        assert!(report(&controller).is_err());
    }

    #[test]
    fn settle_is_idle_before_any_action() {
        assert_eq!(settle(&offline_controller()), Settled::Idle);
    }
}
