//! The signup form itself: inputs, validation, panel state and the controller
//! that ties them to the network. Nothing in here touches a DOM; the browser
//! and terminal front ends plug in through [`Transport`](crate::client::Transport),
//! [`CsrfTokenProvider`] and [`Navigator`].

pub mod controller;
pub mod csrf;
pub mod decision;
pub mod navigation;
pub mod state;
pub mod types;
pub mod validation;

pub use controller::SignupFormController;
pub use csrf::{cookie_value, decode_cookie_value, CsrfTokenProvider, StaticCsrfToken, CSRF_COOKIE};
pub use decision::{SignupOutcome, VerifyOutcome};
pub use navigation::{Navigator, RecordingNavigator};
pub use state::{Field, FormState, UiState};
pub use types::{OtpInput, SignupInput};
pub use validation::{valid_email, validate_signup, ValidationError};
