//! Sabeh client core
//!
//! Assembly layer for the logistics client: configuration, the portal
//! facade handed to the UI layer, and re-exports of the storage, API,
//! and session crates.

mod config;
mod error;
mod portal;

pub use config::Config;
pub use error::CoreError;
pub use portal::Portal;

// Re-export the component crates
pub use sabeh_api::{
    ApiClient, ApiConfig, ApiError, AuthApi, AuthPayload, Environment, ErrorKind, FreightApi,
    FreightBreakdown, FreightQuote, FreightRequest, NewsApi, NewsItem, ProfileUpdate,
    ResetPasswordRequest, Shipment, ShipmentSummary, ShipmentsApi, SignupRequest, UserProfile,
};
pub use sabeh_session::{AuthPhase, Session, SessionError, SessionManager};
pub use sabeh_storage::{CredentialStore, Database, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
