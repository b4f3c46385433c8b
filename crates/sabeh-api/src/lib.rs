//! Sabeh API layer
//!
//! - Every outbound request carries the stored bearer token when one exists
//! - A 401 response drops the persisted credentials before it is surfaced
//! - Failures are classified exactly once, at the transport boundary
//! - One attempt per call, no retries

mod client;
mod config;
mod endpoints;
mod error;
mod models;

pub use client::ApiClient;
pub use config::{ApiConfig, Environment, ENV_VAR};
pub use endpoints::{AuthApi, FreightApi, NewsApi, ShipmentsApi};
pub use error::{ApiError, ErrorKind};
pub use models::{
    AuthPayload, FreightBreakdown, FreightQuote, FreightRequest, NewsItem, ProfileUpdate,
    ResetPasswordRequest, Shipment, ShipmentSummary, SignupRequest, UserProfile,
};

pub type Result<T> = std::result::Result<T, ApiError>;
