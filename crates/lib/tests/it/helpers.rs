//! Shared setup for the integration tests.

#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use radar::{
    CredentialStore, HashingParams, Result, StoreConfig,
    backend::{Backend, BackendError, InMemory},
};

/// Cheap Argon2 costs so tests stay fast; digests still carry their own params.
pub fn fast_config() -> StoreConfig {
    StoreConfig::default().with_hashing(HashingParams::new(1024, 1, 1))
}

/// Create an uninitialized store on the given backend.
pub fn store_on(backend: Arc<dyn Backend>) -> CredentialStore {
    CredentialStore::with_config(backend, fast_config())
}

/// Create a ready store on a fresh InMemory backend.
///
/// Returns the backend too so tests can reload from it.
pub async fn ready_store() -> (CredentialStore, Arc<InMemory>) {
    let backend = Arc::new(InMemory::new());
    let store = store_on(backend.clone());
    store
        .initialize()
        .await
        .expect("Failed to initialize store");
    (store, backend)
}

/// Simulate a page reload: a brand new store on the same backend.
pub async fn reload(backend: &Arc<InMemory>) -> CredentialStore {
    let store = store_on(backend.clone());
    store
        .initialize()
        .await
        .expect("Failed to initialize reloaded store");
    store
}

/// Backend whose writes can be switched off to simulate a full or
/// unavailable medium, either entirely or for a single key. Reads always work.
#[derive(Debug, Default)]
pub struct FlakyBackend {
    inner: InMemory,
    fail_writes: AtomicBool,
    fail_key: Mutex<Option<String>>,
}

impl FlakyBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Fail writes to `key` only; `None` clears the override.
    pub fn fail_writes_to(&self, key: Option<&str>) {
        *self.fail_key.lock().unwrap() = key.map(str::to_string);
    }

    fn check(&self, key: &str) -> Result<()> {
        let key_fails = self.fail_key.lock().unwrap().as_deref() == Some(key);
        if key_fails || self.fail_writes.load(Ordering::SeqCst) {
            return Err(BackendError::FileIo {
                key: key.to_string(),
                source: std::io::Error::other("medium is full"),
            }
            .into());
        }
        Ok(())
    }
}

impl Backend for FlakyBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check(key)?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check(key)?;
        self.inner.remove(key)
    }
}
