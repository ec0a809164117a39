//! Client-side checks run before anything leaves the page. Rules are applied
//! in a fixed order and only the first failure is reported.

use super::types::SignupInput;
use regex::Regex;
use secrecy::ExposeSecret;
use thiserror::Error;

/// Minimum password length accepted by the form.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// A violated form rule; `Display` is the message shown to the user.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("First name is required")]
    FirstNameRequired,
    #[error("Last name is required")]
    LastNameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

/// `local@domain.tld` with no whitespace and a single `@`. U+FEFF counts as
/// whitespace, as it does for `String.prototype.trim`.
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s\x{FEFF}]+@[^@\s\x{FEFF}]+\.[^@\s\x{FEFF}]+$")
        .is_ok_and(|regex| regex.is_match(email))
}

fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .is_empty()
}

/// Length as the browser reports it, in UTF-16 code units.
fn js_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Checks the signup fields in order: first name, last name, email presence,
/// email shape, password length.
///
/// # Errors
/// Returns the first rule the input violates.
pub fn validate_signup(input: &SignupInput) -> Result<(), ValidationError> {
    if is_blank(&input.first_name) {
        return Err(ValidationError::FirstNameRequired);
    }
    if is_blank(&input.last_name) {
        return Err(ValidationError::LastNameRequired);
    }
    if is_blank(&input.email) {
        return Err(ValidationError::EmailRequired);
    }
    if !valid_email(&input.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if js_length(input.password.expose_secret()) < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(first: &str, last: &str, email: &str, password: &str) -> SignupInput {
        SignupInput::new(first, last, email, password)
    }

    #[test]
    fn accepts_a_complete_form() {
        assert_eq!(
            validate_signup(&input("Ada", "Lovelace", "ada@example.com", "secret")),
            Ok(())
        );
    }

    #[test]
    fn reports_rules_in_order() {
        assert_eq!(
            validate_signup(&input("", "", "", "")),
            Err(ValidationError::FirstNameRequired)
        );
        assert_eq!(
            validate_signup(&input("Ada", " ", "", "")),
            Err(ValidationError::LastNameRequired)
        );
        assert_eq!(
            validate_signup(&input("Ada", "Lovelace", "\t", "")),
            Err(ValidationError::EmailRequired)
        );
        assert_eq!(
            validate_signup(&input("Ada", "Lovelace", "not-an-email", "")),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_signup(&input("Ada", "Lovelace", "a@b.co", "12345")),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn whitespace_only_names_are_blank() {
        assert_eq!(
            validate_signup(&input("   ", "Lovelace", "a@b.co", "secret")),
            Err(ValidationError::FirstNameRequired)
        );
    }

    #[test]
    fn email_shape() {
        assert!(valid_email("a@b.co"));
        assert!(valid_email("first.last+tag@mail.example.org"));
        assert!(!valid_email("not-an-email"));
        assert!(!valid_email("a@b"));
        assert!(!valid_email("a@@b.co"));
        assert!(!valid_email("a b@c.co"));
        assert!(!valid_email(" a@b.co"));
    }

    #[test]
    fn password_length_boundary() {
        assert_eq!(
            validate_signup(&input("Ada", "Lovelace", "a@b.co", "abcde")),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(
            validate_signup(&input("Ada", "Lovelace", "a@b.co", "abcdef")),
            Ok(())
        );
    }

    #[test]
    fn password_length_counts_utf16_units() {
        assert_eq!(
            validate_signup(&input("Ada", "Lovelace", "a@b.co", "ñññññ")),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(
            validate_signup(&input("Ada", "Lovelace", "a@b.co", "😀😀")),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(
            validate_signup(&input("Ada", "Lovelace", "a@b.co", "😀😀😀")),
            Ok(())
        );
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        assert_eq!(
            validate_signup(&input("\u{feff}", "Lovelace", "a@b.co", "secret")),
            Err(ValidationError::FirstNameRequired)
        );
        assert_eq!(
            validate_signup(&input("Ada", " \u{feff} ", "a@b.co", "secret")),
            Err(ValidationError::LastNameRequired)
        );
        assert_eq!(
            validate_signup(&input("Ada", "Lovelace", "\u{feff}", "secret")),
            Err(ValidationError::EmailRequired)
        );
        assert!(!valid_email("a\u{feff}b@c.co"));
    }

    #[test]
    fn messages_match_the_form_copy() {
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters")
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Invalid email address"
        );
    }
}
