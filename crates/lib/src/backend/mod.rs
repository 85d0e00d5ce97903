//! Durable key-value backends for Radar
//!
//! The credential store keeps exactly two values in its backend: the encoded
//! snapshot of the user table and the encoded current session. A backend only
//! has to offer whole-value reads and replacements under string keys.

pub mod errors;
pub mod file;
pub mod memory;

use std::fmt::Debug;

use crate::Result;

pub use errors::BackendError;
pub use file::FileBackend;
pub use memory::InMemory;

/// Key-value medium abstracting where the store's text values live.
///
/// Values are opaque text. `set` must replace the whole value atomically: a
/// reader sees either the previous value or the new one, never a mix.
///
/// All backends must be `Send` and `Sync`; initialization reads them from the
/// blocking thread pool.
pub trait Backend: Send + Sync + Debug {
    /// Reads the value stored under `key`.
    ///
    /// # Returns
    /// `Ok(None)` if nothing is stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the value under `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<()>;
}
