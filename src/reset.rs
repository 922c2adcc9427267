//! Form-level acceptance for the password-reset flow.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::rules::{PasswordRule, RuleChecklist};

/// Why a submitted new password was rejected.
///
/// Only one is reported per submit, checked in declaration order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResetError {
    #[error("Please fill in both password fields")]
    EmptyFields,
    #[error("Passwords do not match")]
    Mismatch,
    #[error("Password does not meet all requirements")]
    UnmetRequirements(Vec<PasswordRule>),
}

/// Accepts `new_password` only if both fields are filled, identical,
/// and every displayed requirement passes.
pub fn validate_reset(
    new_password: &SecretString,
    confirm_password: &SecretString,
) -> Result<(), ResetError> {
    let new = new_password.expose_secret();
    let confirm = confirm_password.expose_secret();

    if new.is_empty() || confirm.is_empty() {
        return Err(ResetError::EmptyFields);
    }
    if new != confirm {
        return Err(ResetError::Mismatch);
    }

    let failing = RuleChecklist::evaluate(new_password).failing();
    if !failing.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!("reset rejected: {} unmet requirement(s)", failing.len());
        return Err(ResetError::UnmetRequirements(failing));
    }

    Ok(())
}
