//! The embedded credential store.
//!
//! `CredentialStore` owns the user table, the current session and the backend
//! they are persisted to. It moves through two states:
//!
//! - **uninitialized**: every operation except [`CredentialStore::initialize`]
//!   fails with [`UserError::NotReady`].
//! - **ready**: the table is loaded (or seeded and persisted) and all
//!   operations are available.
//!
//! Every mutation is written to the backend before it becomes visible in
//! memory, so a restart never loses a registration that returned `Ok`.

mod bootstrap;
pub(crate) mod persistence;


use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use handle_trait::Handle;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    Clock, Result, SystemClock,
    backend::Backend,
    config::StoreConfig,
    user::{
        Role, RoleCounts, User, UserError, UserRecord, UserTable,
        crypto::{hash_password, verify_password},
        validation::validate_registration,
    },
};
use persistence::{encode_session, encode_snapshot};

/// Internal state for CredentialStore
///
/// CredentialStore itself is just a cheap-to-clone handle wrapping
/// `Arc<StoreInternal>`.
struct StoreInternal {
    backend: Arc<dyn Backend>,
    clock: Arc<dyn Clock>,
    config: StoreConfig,
    /// Set exactly once, by the first initialization that succeeds
    state: OnceCell<Ready>,
}

/// Loaded state of a ready store.
struct Ready {
    table: RwLock<UserTable>,
    session: RwLock<Option<User>>,
    decoy_hash: String,
}

impl std::fmt::Debug for StoreInternal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreInternal")
            .field("backend", &self.backend)
            .field("clock", &self.clock)
            .field("config", &self.config)
            .field("ready", &self.state.initialized())
            .finish()
    }
}

/// Durable table of newsroom accounts plus the current session.
///
/// Construct one at application start and hand out clones (or references);
/// all clones share the same state.
///
/// ## Example
///
/// ```
/// # use std::sync::Arc;
/// # use radar::{CredentialStore, HashingParams, StoreConfig, backend::InMemory, user::Role};
/// # #[tokio::main]
/// # async fn main() -> radar::Result<()> {
/// let config = StoreConfig::default().with_hashing(HashingParams::new(1024, 1, 1));
/// let store = CredentialStore::with_config(Arc::new(InMemory::new()), config);
/// store.initialize().await?;
///
/// let admin = store.login("admin@radar.ia", "admin123")?;
/// assert_eq!(admin.role, Role::Admin);
///
/// store.register("New Ed", "new@radar.ia", "secret1", Role::Editor)?;
/// assert_eq!(store.list_users()?.len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Handle)]
pub struct CredentialStore {
    inner: Arc<StoreInternal>,
}

impl CredentialStore {
    /// Create an uninitialized store with the default configuration.
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self::with_config(backend, StoreConfig::default())
    }

    /// Create an uninitialized store with a custom configuration.
    pub fn with_config(backend: Arc<dyn Backend>, config: StoreConfig) -> Self {
        Self::with_clock(backend, config, Arc::new(SystemClock))
    }

    /// Create an uninitialized store with a custom configuration and clock.
    pub fn with_clock(backend: Arc<dyn Backend>, config: StoreConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(StoreInternal {
                backend,
                clock,
                config,
                state: OnceCell::new(),
            }),
        }
    }

    /// Load the persisted table, or seed and persist a fresh one.
    ///
    /// Safe to call any number of times, including concurrently: callers that
    /// arrive while initialization is running wait for it and then return.
    /// Seeding happens at most once.
    ///
    /// If the persisted data is unreadable this returns the error and the
    /// store stays uninitialized; the stored data is left untouched.
    pub async fn initialize(&self) -> Result<()> {
        let inner = &self.inner;
        inner
            .state
            .get_or_try_init(|| async {
                let backend = Arc::clone(&inner.backend);
                let clock = Arc::clone(&inner.clock);
                let config = inner.config.clone();
                let loaded = tokio::task::spawn_blocking(move || {
                    bootstrap::load_or_seed(backend.as_ref(), &config, clock.as_ref())
                })
                .await??;
                Ok::<_, crate::Error>(Ready {
                    table: RwLock::new(loaded.table),
                    session: RwLock::new(loaded.session),
                    decoy_hash: loaded.decoy_hash,
                })
            })
            .await
            .inspect_err(|e| warn!("Credential store initialization failed: {e}"))?;
        Ok(())
    }

    /// Whether initialization has completed.
    pub fn is_ready(&self) -> bool {
        self.inner.state.initialized()
    }

    /// The configuration this store was built with.
    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    fn ready(&self) -> Result<&Ready> {
        self.inner
            .state
            .get()
            .ok_or_else(|| UserError::NotReady.into())
    }

    /// Authenticate and start a session.
    ///
    /// Unknown email and wrong password both yield
    /// [`UserError::InvalidCredentials`], after the same amount of hashing
    /// work.
    pub fn login(&self, email: &str, password: &str) -> Result<User> {
        let ready = self.ready()?;
        let user = {
            let table = ready.read_table();
            let Some(record) = table.find_by_email(email) else {
                let _ = verify_password(password, &ready.decoy_hash);
                debug!("Login rejected");
                return Err(UserError::InvalidCredentials.into());
            };
            verify_password(password, &record.password_hash).inspect_err(|_| {
                debug!("Login rejected");
            })?;
            record.to_user()
        };

        self.start_session(ready, &user)?;
        info!(user_id = %user.id, role = %user.role, "User logged in");
        Ok(user)
    }

    /// Create an account and start a session for it.
    ///
    /// The new table is persisted before it replaces the in-memory one, so a
    /// duplicate email or a backend failure leaves every existing record (in
    /// memory and in the backend) as it was.
    ///
    /// Once the table is persisted the account exists; a failure to persist
    /// the session after that point is logged and the session is kept in
    /// memory only.
    pub fn register(&self, name: &str, email: &str, password: &str, role: Role) -> Result<User> {
        let ready = self.ready()?;
        validate_registration(name, email, password)?;

        if ready.read_table().contains_email(email) {
            return Err(email_in_use(email));
        }
        // Hashed outside the write lock; uniqueness is checked again below
        let password_hash = hash_password(password, &self.inner.config.hashing)?;

        let user = {
            let mut table = ready.write_table();
            if table.contains_email(email) {
                return Err(email_in_use(email));
            }

            let record = UserRecord {
                id: Uuid::new_v4().to_string(),
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
                role,
                created_at: self.inner.clock.now_secs(),
            };
            let user = record.to_user();

            let mut next = table.clone();
            next.insert(record)?;
            self.inner
                .backend
                .set(&self.inner.config.snapshot_key, &encode_snapshot(&next)?)?;
            *table = next;
            user
        };

        info!(user_id = %user.id, role = %user.role, "User registered");
        if let Err(e) = self.start_session(ready, &user) {
            warn!(user_id = %user.id, "Session not persisted after registration: {e}");
            *ready.write_session() = Some(user.clone());
        }
        Ok(user)
    }

    /// End the current session. The user table is not touched.
    pub fn logout(&self) -> Result<()> {
        let ready = self.ready()?;
        let mut session = ready.write_session();
        self.inner.backend.remove(&self.inner.config.session_key)?;
        if let Some(user) = session.take() {
            info!(user_id = %user.id, "User logged out");
        }
        Ok(())
    }

    /// The user of the current session, if any.
    pub fn current_user(&self) -> Result<Option<User>> {
        Ok(self.ready()?.read_session().clone())
    }

    /// All accounts in storage order, without digests.
    pub fn list_users(&self) -> Result<Vec<User>> {
        let table = self.ready()?.read_table();
        Ok(table.iter().map(UserRecord::to_user).collect())
    }

    /// Account counts per role.
    pub fn role_counts(&self) -> Result<RoleCounts> {
        let table = self.ready()?.read_table();
        Ok(RoleCounts::tally(table.iter().map(|r| &r.role)))
    }

    /// Persist the session, then make it current.
    fn start_session(&self, ready: &Ready, user: &User) -> Result<()> {
        let mut session = ready.write_session();
        self.inner
            .backend
            .set(&self.inner.config.session_key, &encode_session(user)?)?;
        *session = Some(user.clone());
        Ok(())
    }
}

fn email_in_use(email: &str) -> crate::Error {
    debug!("Registration rejected: email in use");
    UserError::EmailAlreadyRegistered {
        email: email.to_string(),
    }
    .into()
}

// Lock poisoning only means another thread panicked mid-operation; every
// mutation swaps in a complete value, so the data behind the lock is intact.
impl Ready {
    fn read_table(&self) -> RwLockReadGuard<'_, UserTable> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_table(&self) -> RwLockWriteGuard<'_, UserTable> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_session(&self) -> RwLockReadGuard<'_, Option<User>> {
        self.session.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_session(&self) -> RwLockWriteGuard<'_, Option<User>> {
        self.session.write().unwrap_or_else(PoisonError::into_inner)
    }
}
