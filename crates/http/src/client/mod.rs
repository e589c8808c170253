//! Taskdeck HTTP client

pub mod auth;
pub mod error;
pub mod forms;
pub mod gateway;
pub mod session;
pub mod tasks;

pub use auth::AuthApi;
pub use gateway::AuthGateway;
pub use tasks::TaskApi;

use crate::config::ApiConfig;
use error::ClientError;
use reqwest::{Client, ClientBuilder, header};
use std::time::Duration;

/// Taskdeck API client
///
/// Holds the connection pool and base URL. Requests made through it carry
/// no credentials unless a token is passed explicitly; protected endpoints
/// go through [`AuthGateway`].
#[derive(Clone)]
pub struct TaskdeckClient {
    client: Client,
    base_url: String,
}

impl TaskdeckClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> TaskdeckClientBuilder {
        TaskdeckClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Create a request builder carrying `token` as bearer credential
    pub fn request_with_token(
        &self,
        method: reqwest::Method,
        path: &str,
        token: &str,
    ) -> reqwest::RequestBuilder {
        self.request(method, path)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
    }

    /// Execute a request and decode a successful JSON body
    ///
    /// Error statuses are turned into [`ClientError`] with the message taken
    /// from the response body, or `fallback` when there is none.
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        fallback: &str,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;

        if response.status().is_success() {
            decode_json(response).await
        } else {
            Err(ClientError::from_response(response, fallback).await)
        }
    }
}

/// Decode a JSON body that has already arrived
///
/// Only reading the body can fail as a transport error; a body that does not
/// match `T` is a [`ClientError::Serialization`].
pub(crate) async fn decode_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Builder for TaskdeckClient
#[derive(Default)]
pub struct TaskdeckClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl TaskdeckClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout (ignored in the browser)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<TaskdeckClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        #[cfg(target_arch = "wasm32")]
        let _ = self.timeout;

        client_builder = client_builder.user_agent(
            self.user_agent
                .unwrap_or_else(|| ApiConfig::USER_AGENT.to_string()),
        );

        let client = client_builder.build()?;

        Ok(TaskdeckClient { client, base_url })
    }
}
