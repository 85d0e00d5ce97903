//! Error types for the user system
use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum UserError {
    #[error("Credential store is not initialized")]
    NotReady,

    /// Unknown email and wrong password look the same from outside.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email already registered: {email}")]
    EmailAlreadyRegistered { email: String },

    #[error("User id already exists: {id}")]
    DuplicateUserId { id: String },

    #[error("Name must have at least {min} characters")]
    NameTooShort { min: usize },

    #[error("Invalid email address: {email}")]
    InvalidEmail { email: String },

    #[error("Password must have at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Unknown role: {role}")]
    InvalidRole { role: String },

    #[error("Password hashing failed: {reason}")]
    PasswordHashingFailed { reason: String },
}

impl UserError {
    /// Check if the store was used before initialization completed.
    pub fn is_not_ready(&self) -> bool {
        matches!(self, UserError::NotReady)
    }

    /// Check if this error is a rejected login.
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, UserError::InvalidCredentials)
    }

    /// Check if this error indicates a uniqueness conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            UserError::EmailAlreadyRegistered { .. } | UserError::DuplicateUserId { .. }
        )
    }

    /// Check if this error came from registration input checks.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            UserError::NameTooShort { .. }
                | UserError::InvalidEmail { .. }
                | UserError::PasswordTooShort { .. }
                | UserError::InvalidRole { .. }
        )
    }
}

impl From<UserError> for crate::Error {
    fn from(err: UserError) -> Self {
        crate::Error::User(err)
    }
}
