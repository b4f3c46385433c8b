//! Session error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("{0}")]
    Api(#[from] sabeh_api::ApiError),

    #[error("Storage error: {0}")]
    Storage(#[from] sabeh_storage::StorageError),

    #[error("Profile serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not authenticated")]
    NotAuthenticated,
}
