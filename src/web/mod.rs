//! Browser front end, compiled for `wasm32` only. The signup card is rendered
//! with Leptos using the element ids and classes the page's stylesheet
//! targets, and every DOM event is forwarded to the headless controller.

pub mod browser;
pub mod fetch;
pub mod page;

use crate::client::AppConfig;
use crate::form::SignupFormController;
use browser::{BrowserNavigator, DocumentCookies};
use fetch::FetchTransport;
use leptos::prelude::*;
use page::SignupCard;

pub type WebController = SignupFormController<FetchTransport, DocumentCookies, BrowserNavigator>;

/// Mounts the signup card into `<body>`, posting back to the current page.
pub fn mount() {
    let Some(page_url) = browser::page_url() else {
        return;
    };
    let config = AppConfig::load(page_url);

    mount_to_body(move || view! { <SignupCard config=config /> });
}
