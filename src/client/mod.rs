//! Shared client plumbing: endpoint configuration, error types and the HTTP
//! transports the form controller talks through.
//!
//! ## Request flow
//!
//! 1. **Signup:** the form POSTs its fields as JSON back to the page URL with
//!    an `X-CSRFToken` header read from the `csrftoken` cookie.
//! 2. **Verification:** when the server asks for it, the OTP panel POSTs
//!    `{email, otp}` to the verification path with the same header.
//!
//! Transports never decide what a status code means; the form layer does.

pub mod api;
pub mod config;
pub mod errors;
#[cfg(not(target_arch = "wasm32"))]
pub mod http;

pub use api::{RawResponse, Transport, CSRF_HEADER};
pub use config::AppConfig;
pub use errors::AppError;
#[cfg(not(target_arch = "wasm32"))]
pub use http::HttpTransport;
