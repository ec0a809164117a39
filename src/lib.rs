//! # signup-form
//!
//! Signup and email one-time-code verification for a server-rendered signup
//! page. The form collects first name, last name, email and password, checks
//! them locally, and posts them as JSON back to the page with a CSRF header.
//! When the server answers that the email needs verifying, the signup panel is
//! swapped for an OTP panel that posts the emailed code to the verification
//! endpoint.
//!
//! ## Layout
//!
//! - [`form`]: inputs, validation, panel state and the controller. Headless.
//! - [`client`]: endpoint configuration, errors and HTTP transports.
//! - `web` (`wasm32` only): the Leptos signup card bound to the controller.
//! - `cli` (native only): a terminal front end driving the same controller.
//!
//! Passwords and codes never appear in logs.

pub mod client;
pub mod form;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
#[cfg(target_arch = "wasm32")]
pub mod web;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
