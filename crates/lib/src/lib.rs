//!
//! Radar: the newsroom credential store.
//! This library keeps the newsroom's accounts and the current session in a
//! local key-value medium, with no network backend.
//!
//! ## Core Concepts
//!
//! * **CredentialStore (`credentials::CredentialStore`)**: The owned context object. It is
//!   initialized once (loading the persisted table or seeding a fresh one) and then answers
//!   login, registration, logout and user listing requests.
//! * **Backends (`backend::Backend`)**: A pluggable key-value medium holding two text values,
//!   the user table snapshot and the current session.
//!     * **InMemory (`backend::InMemory`)**: process-local, for tests and throwaway runs.
//!     * **FileBackend (`backend::FileBackend`)**: one file per key, atomically replaced.
//! * **Users (`user`)**: Account records, Argon2id digests and the indexed table that enforces
//!   email uniqueness.
//! * **Snapshot**: The whole table, versioned, encoded as DAG-CBOR and then Base64, written
//!   after every registration.

pub mod backend;
pub mod clock;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod user;

pub use clock::{Clock, SystemClock};
pub use config::{HashingParams, SeedAccount, StoreConfig};
pub use credentials::CredentialStore;

#[cfg(any(test, feature = "testing"))]
pub use clock::FixedClock;

/// Result type used throughout the Radar library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Radar library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured user errors from the user module
    #[error(transparent)]
    User(user::UserError),

    /// Structured persistence errors from the backend module
    #[error(transparent)]
    Backend(backend::BackendError),

    /// A blocking task panicked or was cancelled
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::User(_) => "user",
            Error::Backend(_) => "backend",
            Error::Task(_) => "task",
        }
    }

    /// Check if the store was used before initialization completed.
    pub fn is_not_ready(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_not_ready(),
            _ => false,
        }
    }

    /// Check if this error is a rejected login.
    pub fn is_invalid_credentials(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_invalid_credentials(),
            _ => false,
        }
    }

    /// Check if this error indicates a conflict (already exists).
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_conflict(),
            _ => false,
        }
    }

    /// Check if this error is validation-related.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_validation_error(),
            _ => false,
        }
    }

    /// Check if this error is persistence-related.
    pub fn is_persistence_error(&self) -> bool {
        matches!(self, Error::Backend(_))
    }

    /// Check if this error indicates persisted data that cannot be trusted.
    pub fn is_corruption(&self) -> bool {
        match self {
            Error::Backend(backend_err) => backend_err.is_corruption(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Backend(backend_err) => backend_err.is_io_error(),
            _ => false,
        }
    }
}
