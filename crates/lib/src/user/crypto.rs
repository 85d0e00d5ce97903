//! Password digests for the user system
//!
//! Argon2id with a fresh random salt per record. The salt and the cost
//! parameters travel inside the PHC string, so verification needs nothing but
//! the stored hash.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core},
};

use super::errors::UserError;
use crate::{Result, config::HashingParams};

/// Build an Argon2id hasher from the configured costs.
fn hasher(params: &HashingParams) -> Result<Argon2<'static>> {
    let params = Params::new(params.m_cost, params.t_cost, params.p_cost, None).map_err(|e| {
        UserError::PasswordHashingFailed {
            reason: format!("Invalid Argon2 parameters: {e}"),
        }
    })?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hash a password using Argon2id
///
/// # Returns
/// The PHC-format hash string, which embeds the random salt and the costs
pub fn hash_password(password: impl AsRef<str>, params: &HashingParams) -> Result<String> {
    let salt = SaltString::generate(&mut rand_core::OsRng);

    let password_hash = hasher(params)?
        .hash_password(password.as_ref().as_bytes(), &salt)
        .map_err(|e| UserError::PasswordHashingFailed {
            reason: format!("Password hashing failed: {e}"),
        })?
        .to_string();

    Ok(password_hash)
}

/// Verify a password against its hash
///
/// A stored hash that does not parse never matches.
///
/// # Returns
/// Ok(()) if password is correct, `UserError::InvalidCredentials` otherwise
pub fn verify_password(password: impl AsRef<str>, password_hash: impl AsRef<str>) -> Result<()> {
    #[cfg(test)]
    VERIFY_CALLS.with(|calls| calls.set(calls.get() + 1));

    let parsed_hash = PasswordHash::new(password_hash.as_ref()).map_err(|e| {
        tracing::warn!("Stored password hash is unreadable: {e}");
        UserError::InvalidCredentials
    })?;

    Argon2::default()
        .verify_password(password.as_ref().as_bytes(), &parsed_hash)
        .map_err(|_| UserError::InvalidCredentials.into())
}

// Per-thread count of `verify_password` calls
#[cfg(test)]
thread_local! {
    pub(crate) static VERIFY_CALLS: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}
