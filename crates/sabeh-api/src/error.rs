//! API error types
//!
//! Raw transport and HTTP failures are normalized here, once, into a
//! tagged union. The user-facing message is picked by priority: the
//! response body's `message` field, then its `error` field, then a
//! default derived from the status line.

use reqwest::StatusCode;
use thiserror::Error;

/// Five-way classification of a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No response was received.
    Network,
    /// The server answered 401.
    Auth,
    /// Any other 4xx.
    Validation,
    /// 5xx.
    Server,
    /// Anything else, including malformed responses.
    Unknown,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),

    #[error("{message}")]
    Auth { message: String },

    #[error("{message}")]
    Validation { status: u16, message: String },

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("{0}")]
    Unknown(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Storage error: {0}")]
    Storage(#[from] sabeh_storage::StorageError),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network(_) => ErrorKind::Network,
            ApiError::Auth { .. } => ErrorKind::Auth,
            ApiError::Validation { .. } => ErrorKind::Validation,
            ApiError::Server { .. } => ErrorKind::Server,
            ApiError::Unknown(_) | ApiError::InvalidUrl(_) | ApiError::Storage(_) => {
                ErrorKind::Unknown
            }
        }
    }

    /// HTTP status of the failed response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Auth { .. } => Some(401),
            ApiError::Validation { status, .. } | ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Classify a non-success HTTP response.
pub(crate) fn classify_response(status: StatusCode, body: &[u8]) -> ApiError {
    let message = message_from_body(body)
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));

    match status.as_u16() {
        401 => ApiError::Auth { message },
        status @ 400..=499 => ApiError::Validation { status, message },
        status @ 500..=599 => ApiError::Server { status, message },
        _ => ApiError::Unknown(message),
    }
}

/// Classify a transport failure (nothing came back from the server).
pub(crate) fn classify_transport(error: reqwest::Error) -> ApiError {
    if error.is_decode() {
        ApiError::Unknown(error.to_string())
    } else {
        ApiError::Network(error.to_string())
    }
}

/// Extract the server-supplied message from an error body, if any.
/// `message` takes priority over `error`.
fn message_from_body(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;

    for field in ["message", "error"] {
        if let Some(text) = value.get(field).and_then(|v| v.as_str()) {
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }

    None
}
