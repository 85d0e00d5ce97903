//! Backend error types for the Radar library.
//!
//! Covers the key-value medium itself and the codecs that turn its text
//! values back into a user table or a session.

use thiserror::Error;

/// Errors that can occur while reading or writing persisted state.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BackendError {
    /// File I/O error.
    #[error("File I/O error for key '{key}'")]
    FileIo {
        /// The key being read or written
        key: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Key cannot be mapped onto the medium.
    #[error("Invalid storage key: '{key}'")]
    InvalidKey {
        /// The rejected key
        key: String,
    },

    /// The persisted user table could not be decoded or is inconsistent.
    #[error("User snapshot is corrupted: {reason}")]
    SnapshotCorrupted {
        /// Description of what failed
        reason: String,
    },

    /// The persisted user table was written by an unknown format version.
    #[error("Unsupported snapshot version {found}; only version {supported} is supported")]
    UnsupportedSnapshotVersion {
        /// Version found in the snapshot
        found: u8,
        /// Version this build reads
        supported: u8,
    },

    /// The persisted session could not be decoded.
    #[error("Session is corrupted: {reason}")]
    SessionCorrupted {
        /// Description of what failed
        reason: String,
    },

    /// Encoding a value for storage failed.
    #[error("Encoding failed: {reason}")]
    EncodingFailed {
        /// Description of what failed
        reason: String,
    },
}

impl BackendError {
    /// Check if this error indicates persisted data that cannot be trusted.
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            BackendError::SnapshotCorrupted { .. }
                | BackendError::UnsupportedSnapshotVersion { .. }
                | BackendError::SessionCorrupted { .. }
        )
    }

    /// Check if this error is related to I/O operations.
    pub fn is_io_error(&self) -> bool {
        matches!(self, BackendError::FileIo { .. })
    }
}

// Conversion from BackendError to the main Error type
impl From<BackendError> for crate::Error {
    fn from(err: BackendError) -> Self {
        crate::Error::Backend(err)
    }
}
