//! Session Manager
//!
//! Owns the in-memory session and is the only writer to the credential
//! store. Coordinates the auth API and the store so that durable state
//! is committed before in-memory state changes.

use parking_lot::RwLock;
use std::sync::Arc;

use sabeh_api::{AuthApi, AuthPayload, ProfileUpdate, SignupRequest, UserProfile};
use sabeh_storage::CredentialStore;

use crate::error::SessionError;
use crate::session::Session;
use crate::Result;

pub struct SessionManager {
    /// In-memory session, mutated only after awaited operations resolve
    session: Arc<RwLock<Session>>,
    /// Durable token/profile pair
    store: CredentialStore,
    /// Auth API surface
    auth: AuthApi,
}

impl SessionManager {
    pub fn new(store: CredentialStore, auth: AuthApi) -> Self {
        Self {
            session: Arc::new(RwLock::new(Session::new())),
            store,
            auth,
        }
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.session.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.session.read().is_loading()
    }

    /// Validate the persisted session at startup.
    ///
    /// Missing credentials resolve to unauthenticated without a network
    /// call. Present credentials are validated against the profile
    /// endpoint; any failure there forces a logout. Every branch ends
    /// the checking phase.
    pub async fn check_auth_status(&self) -> Session {
        let persisted = self.store.load().unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to read persisted credentials");
            None
        });

        match persisted {
            Some(persisted) => match self.auth.profile().await {
                Ok(user) => {
                    let mut session = self.session.write();
                    session.authenticate(persisted.token, user);
                    tracing::info!(
                        user_id = session.user.as_ref().map(|u| u.id),
                        "Restored persisted session"
                    );
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Stored session failed validation, logging out");
                    if let Err(e) = self.logout().await {
                        tracing::error!(error = %e, "Failed to clear invalid session");
                        self.session.write().clear();
                    }
                }
            },
            None => {
                self.session.write().clear();
            }
        }

        self.session()
    }

    /// Authenticate with email and password. On failure the session is
    /// left untouched and the normalized error is returned for display.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile> {
        let payload = self.auth.login(email, password).await?;
        self.commit_credentials(payload)
    }

    /// Register a new account; authenticates on success like `login`.
    pub async fn signup(&self, request: &SignupRequest) -> Result<UserProfile> {
        let payload = self.auth.signup(request).await?;
        self.commit_credentials(payload)
    }

    /// End the session. The remote call is best-effort and only made
    /// when currently authenticated; local state is cleared regardless.
    /// Safe to call when already unauthenticated.
    pub async fn logout(&self) -> Result<()> {
        if self.is_authenticated() {
            if let Err(e) = self.auth.logout().await {
                tracing::warn!(error = %e, "Remote logout failed, clearing local session anyway");
            }
        }

        self.store.clear()?;
        self.session.write().clear();

        tracing::info!("Session cleared");
        Ok(())
    }

    /// Update the profile of the authenticated user. The token is left
    /// untouched.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile> {
        if !self.is_authenticated() {
            return Err(SessionError::NotAuthenticated);
        }

        let user = self.auth.update_profile(update).await?;

        let profile_json = serde_json::to_string(&user)?;
        self.store.store_profile(&profile_json)?;
        self.session.write().set_user(user.clone());

        tracing::info!(user_id = user.id, "Profile updated");
        Ok(user)
    }

    /// Persist the token/profile pair, then update in-memory state.
    fn commit_credentials(&self, payload: AuthPayload) -> Result<UserProfile> {
        let profile_json = serde_json::to_string(&payload.user)?;
        self.store.store(&payload.token, &profile_json)?;

        let mut session = self.session.write();
        session.authenticate(payload.token, payload.user.clone());

        tracing::info!(user_id = payload.user.id, "Authenticated");
        Ok(payload.user)
    }
}

impl Clone for SessionManager {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            store: self.store.clone(),
            auth: self.auth.clone(),
        }
    }
}
