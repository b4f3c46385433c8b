//! Sabeh session management
//!
//! One session per process:
//! - Created in the checking phase; `check_auth_status` ends it
//! - Credentials are persisted before in-memory state is touched
//! - A failed revalidation of the stored session forces a logout
//! - `logout` is idempotent and its remote call is best-effort
//!
//! Callers are expected to serialize login/logout/update calls; state is
//! only mutated after the awaited network and storage operations resolve.

mod error;
mod manager;
mod session;

pub use error::SessionError;
pub use manager::SessionManager;
pub use session::{AuthPhase, Session};

pub type Result<T> = std::result::Result<T, SessionError>;
