//! Core data types for the user system

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::errors::UserError;

/// Newsroom role, fixed at registration time.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "editor" => Ok(Role::Editor),
            other => Err(UserError::InvalidRole {
                role: other.to_string(),
            }),
        }
    }
}

/// A user as seen by callers: everything except the password digest.
///
/// This is also the value persisted as the session.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Opaque identifier, stable for the lifetime of the account
    pub id: String,

    /// Display name
    pub name: String,

    /// Login identifier, unique across the table (case-sensitive)
    pub email: String,

    pub role: Role,

    /// Account creation timestamp (Unix seconds)
    pub created_at: i64,
}

/// A row of the user table.
///
/// Only the store and the snapshot codec see this type; queries hand out
/// [`User`] values.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,

    pub name: String,

    pub email: String,

    /// Argon2id hash in PHC string format (salt embedded)
    pub password_hash: String,

    pub role: Role,

    pub created_at: i64,
}

impl UserRecord {
    /// Strip the digest.
    pub fn to_user(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            created_at: self.created_at,
        }
    }
}

/// Per-role account counts for the administrative listing.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct RoleCounts {
    pub total: usize,
    pub admins: usize,
    pub editors: usize,
}

impl RoleCounts {
    pub(crate) fn tally<'a>(roles: impl IntoIterator<Item = &'a Role>) -> Self {
        roles.into_iter().fold(Self::default(), |mut counts, role| {
            counts.total += 1;
            match role {
                Role::Admin => counts.admins += 1,
                Role::Editor => counts.editors += 1,
            }
            counts
        })
    }
}
