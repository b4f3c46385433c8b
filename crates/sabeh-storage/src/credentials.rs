//! Persisted session credentials
//!
//! Owns the `userToken`/`userData` pair. The two keys are committed and
//! cleared inside a single transaction; a half-written pair found on
//! load is repaired by clearing both keys and reporting no session.

use crate::database::Database;
use crate::Result;

/// Key for the bearer token.
pub const TOKEN_KEY: &str = "userToken";
/// Key for the serialized user profile.
pub const PROFILE_KEY: &str = "userData";

/// The durable copy of an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedCredentials {
    pub token: String,
    pub profile_json: String,
}

pub struct CredentialStore {
    db: Database,
}

impl CredentialStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Read the bearer token alone. Used by the request pipeline before
    /// each call; absence is not an error.
    pub fn token(&self) -> Result<Option<String>> {
        self.db.get_setting(TOKEN_KEY)
    }

    /// Load the persisted pair, repairing a half-written record.
    ///
    /// A crash between the legacy independent writes could leave one key
    /// without the other; such a record is unusable, so both keys are
    /// cleared and `None` is returned.
    pub fn load(&self) -> Result<Option<PersistedCredentials>> {
        let token = self.db.get_setting(TOKEN_KEY)?;
        let profile_json = self.db.get_setting(PROFILE_KEY)?;

        match (token, profile_json) {
            (Some(token), Some(profile_json)) => Ok(Some(PersistedCredentials {
                token,
                profile_json,
            })),
            (None, None) => Ok(None),
            _ => {
                tracing::warn!("Found partial credential record, clearing both keys");
                self.clear()?;
                Ok(None)
            }
        }
    }

    /// Commit the token/profile pair in one transaction.
    pub fn store(&self, token: &str, profile_json: &str) -> Result<()> {
        let updated_at = chrono::Utc::now().to_rfc3339();
        self.db.transaction(|conn| {
            conn.execute(
                "INSERT OR REPLACE INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)",
                rusqlite::params![TOKEN_KEY, token, updated_at],
            )?;
            conn.execute(
                "INSERT OR REPLACE INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)",
                rusqlite::params![PROFILE_KEY, profile_json, updated_at],
            )?;
            Ok(())
        })
    }

    /// Overwrite the profile, leaving the token untouched.
    pub fn store_profile(&self, profile_json: &str) -> Result<()> {
        self.db.set_setting(PROFILE_KEY, profile_json)
    }

    /// Delete both keys in one transaction. Safe to call when nothing is
    /// stored.
    pub fn clear(&self) -> Result<()> {
        self.db.transaction(|conn| {
            conn.execute("DELETE FROM settings WHERE key = ?1", [TOKEN_KEY])?;
            conn.execute("DELETE FROM settings WHERE key = ?1", [PROFILE_KEY])?;
            Ok(())
        })
    }
}

impl Clone for CredentialStore {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}
