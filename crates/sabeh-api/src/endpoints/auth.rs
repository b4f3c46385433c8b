//! Authentication endpoints

use reqwest::Method;
use serde::Serialize;

use crate::client::ApiClient;
use crate::models::{AuthPayload, ProfileUpdate, ResetPasswordRequest, SignupRequest, UserProfile};
use crate::Result;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct ForgotPasswordRequest<'a> {
    email: &'a str,
}

#[derive(Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthPayload> {
        let body = LoginRequest { email, password };
        self.client
            .request(Method::POST, "/auth/login", Some(&body))
            .await
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthPayload> {
        self.client
            .request(Method::POST, "/auth/register", Some(request))
            .await
    }

    pub async fn logout(&self) -> Result<()> {
        self.client
            .request_ack(Method::POST, "/auth/logout", None::<&()>)
            .await
    }

    pub async fn profile(&self) -> Result<UserProfile> {
        self.client.request(Method::GET, "/me", None::<&()>).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile> {
        self.client.request(Method::PUT, "/me", Some(update)).await
    }

    pub async fn forgot_password(&self, email: &str) -> Result<()> {
        let body = ForgotPasswordRequest { email };
        self.client
            .request_ack(Method::POST, "/auth/forgot-password", Some(&body))
            .await
    }

    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<()> {
        self.client
            .request_ack(Method::POST, "/auth/reset-password", Some(request))
            .await
    }
}
