//! Input validation for entry fields.
//!
//! Both checks are pure; callers decide whether a failure aborts or is
//! reported.

use crate::core::constants::MIN_PASSWORD_LEN;
use crate::error::ValidationError;

/// Validate an account name.
///
/// The name must contain something other than whitespace. Trimming is only
/// used for the check; the caller keeps the original value.
///
/// # Errors
///
/// Returns `ValidationError::InvalidAccountName` if the name is blank.
pub fn validate_account_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::InvalidAccountName);
    }

    Ok(())
}

/// Validate a password.
///
/// Passwords must be at least `MIN_PASSWORD_LEN` characters long.
///
/// # Errors
///
/// Returns `ValidationError::InvalidPassword` if the password is too short.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::InvalidPassword);
    }

    Ok(())
}
