//! Sabeh Storage Layer
//!
//! SQLite-based persistence for the client session.
//! The token/profile pair is committed and cleared transactionally.

mod credentials;
mod database;
mod error;
mod migrations;

pub use credentials::{CredentialStore, PersistedCredentials, PROFILE_KEY, TOKEN_KEY};
pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
