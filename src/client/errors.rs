//! Failures below the form: bad endpoint URLs, unreachable servers and bodies
//! that cannot be read or written. The form never shows these texts; it maps
//! every variant to its own generic message and logs the detail.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}
