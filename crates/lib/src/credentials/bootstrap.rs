//! Load-or-seed initialization
//!
//! Runs once per store, on the blocking pool: it reads the backend and, on
//! first use, hashes the seed passwords.

use tracing::{info, warn};
use uuid::Uuid;

use super::persistence::{decode_session, decode_snapshot, encode_snapshot};
use crate::{
    Clock, Result,
    backend::Backend,
    config::StoreConfig,
    user::{User, UserRecord, UserTable, crypto::hash_password},
};

/// State loaded by a successful initialization.
pub(super) struct Loaded {
    pub(super) table: UserTable,
    pub(super) session: Option<User>,
    /// Digest of a random secret, verified against when a login names no
    /// account so both rejection paths cost one Argon2 verification
    pub(super) decoy_hash: String,
}

/// Load the persisted table, or create and persist the seeded one.
///
/// Corrupt or unreadable snapshots are returned as errors; nothing is
/// overwritten in that case.
pub(super) fn load_or_seed(
    backend: &dyn Backend,
    config: &StoreConfig,
    clock: &dyn Clock,
) -> Result<Loaded> {
    let table = match backend.get(&config.snapshot_key)? {
        Some(text) => {
            let table = decode_snapshot(&text)?;
            info!(users = table.len(), "Loaded user snapshot");
            table
        }
        None => {
            let table = seed_table(config, clock)?;
            backend.set(&config.snapshot_key, &encode_snapshot(&table)?)?;
            info!(users = table.len(), "Created user table with seed accounts");
            table
        }
    };

    let session = restore_session(backend, config, &table)?;
    let decoy_hash = hash_password(Uuid::new_v4().to_string(), &config.hashing)?;
    Ok(Loaded {
        table,
        session,
        decoy_hash,
    })
}

fn seed_table(config: &StoreConfig, clock: &dyn Clock) -> Result<UserTable> {
    let mut table = UserTable::new();
    for seed in &config.seed_accounts {
        table.insert(UserRecord {
            id: Uuid::new_v4().to_string(),
            name: seed.name.clone(),
            email: seed.email.clone(),
            password_hash: hash_password(&seed.password, &config.hashing)?,
            role: seed.role,
            created_at: clock.now_secs(),
        })?;
    }
    Ok(table)
}

/// Bring back the session of the previous run, if it still names an account.
///
/// The user is re-read from the table so the session never outlives the row
/// it points at. Undecodable or stale sessions are dropped.
fn restore_session(
    backend: &dyn Backend,
    config: &StoreConfig,
    table: &UserTable,
) -> Result<Option<User>> {
    let Some(text) = backend.get(&config.session_key)? else {
        return Ok(None);
    };

    let restored = match decode_session(&text) {
        Ok(user) => match table.get(&user.id) {
            Some(record) if record.email == user.email => Some(record.to_user()),
            _ => {
                warn!(user_id = %user.id, "Discarding session for unknown account");
                None
            }
        },
        Err(e) => {
            warn!("Discarding unreadable session: {e}");
            None
        }
    };

    if restored.is_none() {
        backend.remove(&config.session_key)?;
    }
    Ok(restored)
}
