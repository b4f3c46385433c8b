//! Request pipeline
//!
//! Single path for every outbound call: attach the stored bearer token,
//! send once, and on the way back normalize failures and unwrap the
//! `{ success, data }` envelope. A 401 drops the persisted credentials
//! before the error reaches the caller.

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use sabeh_storage::CredentialStore;

use crate::config::ApiConfig;
use crate::error::{classify_response, classify_transport, ApiError};
use crate::Result;

const USER_AGENT: &str = concat!("sabeh-client/", env!("CARGO_PKG_VERSION"));

/// Standard response envelope; callers receive the `data` payload.
#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    store: CredentialStore,
}

impl ApiClient {
    pub fn new(config: ApiConfig, store: CredentialStore) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Unknown(e.to_string()))?;

        Ok(Self {
            http,
            config,
            store,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Execute a call and deserialize the envelope's `data` payload.
    pub async fn request<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let bytes = self.dispatch(method, path, body).await?;

        let envelope: Envelope<T> = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::Unknown(format!("Malformed response body: {}", e)))?;

        Ok(envelope.data)
    }

    /// Execute a call where only the status matters (logout,
    /// forgot/reset password). The body is discarded.
    pub async fn request_ack<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.dispatch(method, path, body).await?;
        Ok(())
    }

    async fn dispatch<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.endpoint(path)?;

        let mut request = self.http.request(method.clone(), url);

        // A missing token is not an error: the request goes out
        // unauthenticated and the server decides.
        if let Some(token) = self.store.token()? {
            request = request.bearer_auth(token);
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(method = %method, path, "Dispatching request");

        let response = request.send().await.map_err(classify_transport)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(classify_transport)?;

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(path, "Received 401, clearing persisted credentials");
            if let Err(e) = self.store.clear() {
                tracing::warn!(error = %e, "Failed to clear credentials after 401");
            }
        }

        if !status.is_success() {
            return Err(classify_response(status, &bytes));
        }

        Ok(bytes.to_vec())
    }
}

impl Clone for ApiClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            config: self.config.clone(),
            store: self.store.clone(),
        }
    }
}
