//! User system for Radar
//!
//! Account records, Argon2id password digests, the indexed user table and the
//! registration input rules.

pub mod crypto;
pub mod errors;
pub mod table;
pub mod types;
pub mod validation;

pub use errors::UserError;
pub use table::UserTable;
pub use types::*;
