//! Authenticated request gateway
//!
//! Every call to a protected endpoint goes through [`AuthGateway::send`]. The
//! stored access token is attached as bearer credential; a 401 triggers one
//! refresh with the refresh token followed by exactly one retry. A failed
//! refresh ends the session: both tokens are cleared and the session-end
//! callback fires so the UI can return to its entry page.

use super::{TaskdeckClient, decode_json, error::ClientError, session::TokenStore};
use crate::config::ApiConfig;
use crate::types::RefreshResponse;
use reqwest::{Method, Response, StatusCode};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::rc::Rc;

/// A protected request that can be issued more than once
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    path: String,
    body: Option<JsonValue>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Gateway for protected endpoints
#[derive(Clone)]
pub struct AuthGateway {
    client: TaskdeckClient,
    store: Rc<dyn TokenStore>,
    on_session_end: Rc<dyn Fn()>,
}

impl AuthGateway {
    /// Create a gateway reading and rotating tokens in `store`
    pub fn new(client: TaskdeckClient, store: Rc<dyn TokenStore>) -> Self {
        Self {
            client,
            store,
            on_session_end: Rc::new(|| {}),
        }
    }

    /// Set the callback fired when the session can no longer be recovered
    pub fn on_session_end(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_session_end = Rc::new(callback);
        self
    }

    pub fn client(&self) -> &TaskdeckClient {
        &self.client
    }

    pub fn store(&self) -> &Rc<dyn TokenStore> {
        &self.store
    }

    /// Issue `request` with the stored access token
    ///
    /// Any response other than 401 is returned untouched. On 401 the access
    /// token is refreshed and the request retried once; the retried response
    /// is returned whatever its status. If the refresh fails the session is
    /// ended and the original 401 response is returned.
    pub async fn send(&self, request: &ApiRequest) -> Result<Response, ClientError> {
        let Some(session) = self.store.session() else {
            warn!("No stored session for {} {}", request.method, request.path);
            self.end_session();
            return Err(ClientError::SessionExpired);
        };

        let response = self.dispatch(request, &session.access_token).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        debug!(
            "{} {} unauthorized, refreshing access token",
            request.method, request.path
        );
        let Some(access_token) = self.refresh_access_token(&session.refresh_token).await else {
            return Ok(response);
        };

        // Single retry; its outcome is final.
        self.dispatch(request, &access_token).await
    }

    /// Issue `request` and decode a successful JSON body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: &ApiRequest,
        fallback: &str,
    ) -> Result<T, ClientError> {
        let response = self.send(request).await?;

        if response.status().is_success() {
            decode_json(response).await
        } else {
            Err(ClientError::from_response(response, fallback).await)
        }
    }

    async fn dispatch(&self, request: &ApiRequest, token: &str) -> Result<Response, ClientError> {
        let mut builder =
            self.client
                .request_with_token(request.method.clone(), &request.path, token);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        Ok(builder.send().await?)
    }

    /// Mint a new access token; `None` means the session is over
    async fn refresh_access_token(&self, refresh_token: &str) -> Option<String> {
        let result = self
            .client
            .request_with_token(Method::POST, ApiConfig::REFRESH_PATH, refresh_token)
            .send()
            .await;

        let response = match result {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                warn!("Token refresh rejected with status {}", response.status());
                self.end_session();
                return None;
            }
            Err(e) => {
                warn!("Token refresh failed: {e}");
                self.end_session();
                return None;
            }
        };

        match response.json::<RefreshResponse>().await {
            Ok(body) => {
                self.store.replace_access_token(&body.access_token);
                info!("Access token refreshed");
                Some(body.access_token)
            }
            Err(e) => {
                warn!("Malformed token refresh response: {e}");
                self.end_session();
                None
            }
        }
    }

    fn end_session(&self) {
        self.store.clear();
        (self.on_session_end)();
    }
}
