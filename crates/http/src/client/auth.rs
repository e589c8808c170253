//! Authentication API client methods

use super::{
    TaskdeckClient,
    error::ClientError,
    forms::{LoginForm, RegisterForm},
    session::Session,
};
use crate::config::ApiConfig;
use crate::types::TokenPairResponse;
use reqwest::Method;

/// Public authentication endpoints
#[derive(Clone)]
pub struct AuthApi {
    client: TaskdeckClient,
}

impl AuthApi {
    pub fn new(client: TaskdeckClient) -> Self {
        Self { client }
    }

    /// Sign in; nothing is sent when the form is incomplete
    pub async fn login(&self, form: &LoginForm) -> Result<Session, ClientError> {
        let body = form.validate()?;
        let request = self
            .client
            .request(Method::POST, ApiConfig::LOGIN_PATH)
            .json(&body);
        let tokens: TokenPairResponse = self.client.execute(request, "Login failed").await?;
        info!("Signed in");
        Ok(tokens.into())
    }

    /// Create an account; nothing is sent when the form is invalid
    pub async fn register(&self, form: &RegisterForm) -> Result<Session, ClientError> {
        let body = form.validate()?;
        let request = self
            .client
            .request(Method::POST, ApiConfig::REGISTER_PATH)
            .json(&body);
        let tokens: TokenPairResponse =
            self.client.execute(request, "Registration failed").await?;
        info!("Registered new account");
        Ok(tokens.into())
    }

    /// Tell the backend to revoke `refresh_token`
    ///
    /// Best effort: the outcome is only logged, local sign-out proceeds
    /// regardless.
    pub async fn logout(&self, refresh_token: Option<&str>) {
        let Some(refresh_token) = refresh_token else {
            debug!("Logout without a refresh token, skipping backend call");
            return;
        };

        let result = self
            .client
            .request_with_token(Method::POST, ApiConfig::LOGOUT_PATH, refresh_token)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => debug!("Backend logout succeeded"),
            Ok(response) => debug!("Backend logout answered {}", response.status()),
            Err(e) => debug!("Backend logout failed: {e}"),
        }
    }
}
