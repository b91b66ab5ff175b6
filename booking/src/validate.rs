//! Contact-field validation run before a reservation is submitted.
//!
//! Rules apply in order and stop at the first failure. The quantity
//! selectors are not checked here; [`crate::FormData`] already refuses
//! values outside their options.

use std::sync::LazyLock;

use regex::Regex;

use crate::form::FormData;

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10,}$").expect("phone pattern is valid"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("email pattern is valid"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name is required.")]
    NameRequired,
    #[error("phone must contain at least 10 digits.")]
    PhoneInvalid,
    #[error("please enter a valid email.")]
    EmailInvalid,
}

/// Digits only, at least ten of them.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Whitespace as browsers count it, which includes the byte-order mark.
fn is_blank(value: &str) -> bool {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}').is_empty()
}

/// Check name, phone and email, in that order.
///
/// # Errors
///
/// Returns the first rule that fails.
pub fn validate(form: &FormData) -> Result<(), ValidationError> {
    if is_blank(&form.name) {
        return Err(ValidationError::NameRequired);
    }
    if !is_valid_phone(&form.phone) {
        return Err(ValidationError::PhoneInvalid);
    }
    if !is_valid_email(&form.email) {
        return Err(ValidationError::EmailInvalid);
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
