//! Snapshot and session codecs
//!
//! The user table is written wholesale: rows in storage order inside a
//! versioned envelope, encoded as DAG-CBOR and then Base64 so the backend only
//! ever sees text. The session is the sanitized user as JSON.

use base64ct::{Base64, Encoding};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    backend::errors::BackendError,
    user::{User, UserRecord, UserTable},
};

/// The current snapshot format version.
/// v0 indicates this is an unstable format subject to breaking changes.
pub(crate) const SNAPSHOT_VERSION: u8 = 0;

/// Helper to check if version is default (0) for serde skip_serializing_if
fn is_v0(v: &u8) -> bool {
    *v == 0
}

/// Serializable form of the user table
#[derive(Serialize, Deserialize)]
struct SerializableTable {
    /// File format version for compatibility checking
    #[serde(rename = "_v", default, skip_serializing_if = "is_v0")]
    version: u8,
    users: Vec<UserRecord>,
}

/// Encode the whole table as text for the snapshot key.
pub(crate) fn encode_snapshot(table: &UserTable) -> Result<String> {
    let serializable = SerializableTable {
        version: SNAPSHOT_VERSION,
        users: table.records().to_vec(),
    };
    let bytes = serde_ipld_dagcbor::to_vec(&serializable).map_err(|e| BackendError::EncodingFailed {
        reason: format!("snapshot: {e}"),
    })?;
    Ok(Base64::encode_string(&bytes))
}

/// Rebuild a table from the text stored under the snapshot key.
pub(crate) fn decode_snapshot(text: &str) -> Result<UserTable> {
    let bytes = Base64::decode_vec(text.trim()).map_err(|e| BackendError::SnapshotCorrupted {
        reason: format!("invalid Base64: {e}"),
    })?;
    let serializable: SerializableTable =
        serde_ipld_dagcbor::from_slice(&bytes).map_err(|e| BackendError::SnapshotCorrupted {
            reason: format!("invalid DAG-CBOR: {e}"),
        })?;

    if serializable.version != SNAPSHOT_VERSION {
        return Err(BackendError::UnsupportedSnapshotVersion {
            found: serializable.version,
            supported: SNAPSHOT_VERSION,
        }
        .into());
    }

    UserTable::from_records(serializable.users).map_err(|e| {
        BackendError::SnapshotCorrupted {
            reason: e.to_string(),
        }
        .into()
    })
}

pub(crate) fn encode_session(user: &User) -> Result<String> {
    serde_json::to_string(user).map_err(|e| {
        BackendError::EncodingFailed {
            reason: format!("session: {e}"),
        }
        .into()
    })
}

pub(crate) fn decode_session(text: &str) -> Result<User> {
    serde_json::from_str(text).map_err(|e| {
        BackendError::SessionCorrupted {
            reason: e.to_string(),
        }
        .into()
    })
}
