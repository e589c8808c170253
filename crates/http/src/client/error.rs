//! Client error types

use crate::types::ErrorResponse;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Form input rejected before any request was made
    #[error("{0}")]
    Validation(String),

    /// No usable session; the stored tokens are gone
    #[error("Session expired")]
    SessionExpired,
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Build an error from a non-success response
    ///
    /// The message comes from the JSON error body when there is one,
    /// otherwise `fallback` is used.
    pub async fn from_response(response: reqwest::Response, fallback: &str) -> Self {
        let status = response.status();
        let message = match response.bytes().await {
            Ok(body) => serde_json::from_slice::<ErrorResponse>(&body)
                .ok()
                .and_then(|body| body.message()),
            Err(e) => {
                debug!("Failed to read error body: {e}");
                None
            }
        };

        Self::from_status(status, message.unwrap_or_else(|| fallback.to_string()))
    }

    /// Message suitable for inline display next to a form or list
    pub fn user_message(&self) -> String {
        match self {
            Self::ServerError { message, .. }
            | Self::AuthenticationFailed(message)
            | Self::NotFound(message)
            | Self::BadRequest(message)
            | Self::Forbidden(message)
            | Self::Validation(message) => message.clone(),
            Self::Request(_) => "Unable to reach the server".to_string(),
            Self::Serialization(_) => "Unexpected response from the server".to_string(),
            Self::Configuration(message) => format!("Client misconfigured: {message}"),
            Self::SessionExpired => "Your session has expired".to_string(),
        }
    }

    /// Whether the session is gone and the user has to sign in again
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}
