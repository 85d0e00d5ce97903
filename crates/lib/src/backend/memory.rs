//! In-memory backend implementation
//!
//! Suitable for testing, development, or a session that deliberately keeps
//! nothing once the process exits.

use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use super::Backend;
use crate::Result;

/// A process-local key-value map.
///
/// Share one `Arc<InMemory>` between two stores to simulate a page reload:
/// the second store sees exactly what the first one persisted.
#[derive(Debug, Default)]
pub struct InMemory {
    values: RwLock<HashMap<String, String>>,
}

impl InMemory {
    /// Creates a new, empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }
}

impl Backend for InMemory {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.remove(key);
        Ok(())
    }
}
