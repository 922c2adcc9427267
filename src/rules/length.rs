//! Length rule - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

pub const MIN_LENGTH: usize = 8;

/// Checks if the password has at least [`MIN_LENGTH`] characters.
///
/// Counts characters, not bytes.
///
/// # Arguments
/// * `password` - The candidate password
///
/// # Returns
/// `true` when the password is long enough.
pub fn length_rule(password: &SecretString) -> bool {
    password.expose_secret().chars().count() >= MIN_LENGTH
}
