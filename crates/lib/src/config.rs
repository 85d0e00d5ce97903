//! Store configuration
//!
//! [`StoreConfig::default`] reproduces the stock newsroom setup: the fixed
//! storage keys, the two seed accounts and production Argon2 costs.

use std::fmt;

use crate::{
    constants::{SEED_ADMIN, SEED_EDITOR, SESSION_KEY, SNAPSHOT_KEY},
    user::Role,
};

/// Default Argon2 memory cost in KiB (19 MiB)
pub const DEFAULT_ARGON2_M_COST: u32 = 19 * 1024;
/// Default Argon2 time cost (iterations)
pub const DEFAULT_ARGON2_T_COST: u32 = 2;
/// Default Argon2 parallelism
pub const DEFAULT_ARGON2_P_COST: u32 = 1;

/// Argon2id cost parameters used for new digests.
///
/// Existing digests carry their own costs, so changing these never locks
/// anyone out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashingParams {
    /// Memory cost in KiB
    pub m_cost: u32,
    /// Iterations
    pub t_cost: u32,
    /// Parallelism
    pub p_cost: u32,
}

impl HashingParams {
    pub fn new(m_cost: u32, t_cost: u32, p_cost: u32) -> Self {
        Self {
            m_cost,
            t_cost,
            p_cost,
        }
    }
}

impl Default for HashingParams {
    fn default() -> Self {
        Self::new(
            DEFAULT_ARGON2_M_COST,
            DEFAULT_ARGON2_T_COST,
            DEFAULT_ARGON2_P_COST,
        )
    }
}

/// An account created when the store is initialized on empty storage.
#[derive(Clone)]
pub struct SeedAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl SeedAccount {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role,
        }
    }
}

impl fmt::Debug for SeedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedAccount")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Configuration for a [`CredentialStore`](crate::CredentialStore).
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Storage key for the encoded user table snapshot
    pub snapshot_key: String,

    /// Storage key for the encoded current session
    pub session_key: String,

    /// Accounts written on first initialization, in this order
    pub seed_accounts: Vec<SeedAccount>,

    /// Costs for new password digests
    pub hashing: HashingParams,
}

impl StoreConfig {
    /// Replace the hashing costs.
    pub fn with_hashing(mut self, hashing: HashingParams) -> Self {
        self.hashing = hashing;
        self
    }

    /// Replace the seed accounts.
    pub fn with_seed_accounts(mut self, seed_accounts: Vec<SeedAccount>) -> Self {
        self.seed_accounts = seed_accounts;
        self
    }

    /// Use a distinct pair of storage keys, e.g. to keep two stores in one medium.
    pub fn with_keys(mut self, snapshot_key: impl Into<String>, session_key: impl Into<String>) -> Self {
        self.snapshot_key = snapshot_key.into();
        self.session_key = session_key.into();
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        let (admin_name, admin_email, admin_password) = SEED_ADMIN;
        let (editor_name, editor_email, editor_password) = SEED_EDITOR;
        Self {
            snapshot_key: SNAPSHOT_KEY.to_string(),
            session_key: SESSION_KEY.to_string(),
            seed_accounts: vec![
                SeedAccount::new(admin_name, admin_email, admin_password, Role::Admin),
                SeedAccount::new(editor_name, editor_email, editor_password, Role::Editor),
            ],
            hashing: HashingParams::default(),
        }
    }
}
