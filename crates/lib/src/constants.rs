//! Constants used throughout the Radar library.
//!
//! Storage keys, seed accounts and the registration form limits live here so
//! the store, the codecs and the CLI agree on them.

/// Storage key holding the encoded snapshot of the user table.
pub const SNAPSHOT_KEY: &str = "radar_users_db";

/// Storage key holding the encoded current session.
pub const SESSION_KEY: &str = "radar_session";

/// Minimum number of characters in a display name (after trimming).
pub const MIN_NAME_LENGTH: usize = 3;

/// Minimum number of characters in a password.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Seed administrator created on the first initialization of an empty store.
pub const SEED_ADMIN: (&str, &str, &str) = ("Diretor Editorial", "admin@radar.ia", "admin123");

/// Seed editor created on the first initialization of an empty store.
pub const SEED_EDITOR: (&str, &str, &str) = ("Editor de SJC", "editor@radar.ia", "editor123");
