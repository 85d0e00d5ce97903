//! Indexed user table
//!
//! Rows are kept in insertion order (the order `list_users` reports) with a
//! primary index on `id` and a unique secondary index on `email`. Rows are
//! never updated or deleted, so the positions stored in the indexes stay valid.

use std::collections::HashMap;

use super::{errors::UserError, types::UserRecord};
use crate::Result;

#[derive(Clone, Debug, Default)]
pub struct UserTable {
    rows: Vec<UserRecord>,
    by_id: HashMap<String, usize>,
    by_email: HashMap<String, usize>,
}

impl UserTable {
    /// Creates a new, empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a table (and its indexes) from rows in storage order.
    ///
    /// Fails on the first row that breaks id or email uniqueness.
    pub fn from_records(records: Vec<UserRecord>) -> Result<Self> {
        let mut table = Self::new();
        for record in records {
            table.insert(record)?;
        }
        Ok(table)
    }

    /// Append a row, enforcing both unique constraints.
    ///
    /// The table is unchanged when an error is returned.
    pub fn insert(&mut self, record: UserRecord) -> Result<()> {
        if self.by_email.contains_key(&record.email) {
            return Err(UserError::EmailAlreadyRegistered {
                email: record.email,
            }
            .into());
        }
        if self.by_id.contains_key(&record.id) {
            return Err(UserError::DuplicateUserId { id: record.id }.into());
        }

        let position = self.rows.len();
        self.by_id.insert(record.id.clone(), position);
        self.by_email.insert(record.email.clone(), position);
        self.rows.push(record);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&UserRecord> {
        self.by_id.get(id).map(|&i| &self.rows[i])
    }

    /// Exact, case-sensitive lookup.
    pub fn find_by_email(&self, email: &str) -> Option<&UserRecord> {
        self.by_email.get(email).map(|&i| &self.rows[i])
    }

    pub fn contains_email(&self, email: &str) -> bool {
        self.by_email.contains_key(email)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in storage order.
    pub fn records(&self) -> &[UserRecord] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserRecord> {
        self.rows.iter()
    }
}
