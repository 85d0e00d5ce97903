//! Registration input checks, applied before any hashing or storage work.

use super::errors::UserError;
use crate::{
    Result,
    constants::{MIN_NAME_LENGTH, MIN_PASSWORD_LENGTH},
};

/// Surrounding whitespace does not count toward the minimum; the name is
/// still stored as given.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().chars().count() < MIN_NAME_LENGTH {
        return Err(UserError::NameTooShort {
            min: MIN_NAME_LENGTH,
        }
        .into());
    }
    Ok(())
}

/// Emails are compared exactly; the only shape check is the `@`.
pub fn validate_email(email: &str) -> Result<()> {
    if !email.contains('@') {
        return Err(UserError::InvalidEmail {
            email: email.to_string(),
        }
        .into());
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(UserError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        }
        .into());
    }
    Ok(())
}

/// Check every registration field, reporting the first violation.
pub fn validate_registration(name: &str, email: &str, password: &str) -> Result<()> {
    validate_name(name)?;
    validate_email(email)?;
    validate_password(password)
}
