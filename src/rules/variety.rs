//! Character variety rules - uppercase, lowercase, digits, special chars.

use secrecy::{ExposeSecret, SecretString};

/// A special character is anything outside `A-Z`, `a-z` and `0-9`.
///
/// One definition serves both the displayed checklist and the strength score.
pub fn is_special_char(c: char) -> bool {
    !c.is_ascii_alphanumeric()
}

pub fn uppercase_rule(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_uppercase())
}

pub fn lowercase_rule(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_lowercase())
}

pub fn digit_rule(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_digit())
}

pub fn special_rule(password: &SecretString) -> bool {
    password.expose_secret().chars().any(is_special_char)
}
