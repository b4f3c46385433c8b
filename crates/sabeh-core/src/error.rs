//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] sabeh_storage::StorageError),

    #[error("API error: {0}")]
    Api(#[from] sabeh_api::ApiError),

    #[error("Session error: {0}")]
    Session(#[from] sabeh_session::SessionError),

    #[error("Configuration error: {0}")]
    Config(String),
}
