//! Session tokens and their storage

use crate::config::ApiConfig;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;

/// Access/refresh token pair issued by the backend
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
}

impl Session {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

impl From<crate::types::TokenPairResponse> for Session {
    fn from(pair: crate::types::TokenPairResponse) -> Self {
        Self::new(pair.access_token, pair.refresh_token)
    }
}

/// Durable key/value storage holding the session tokens
///
/// Implementors provide the three raw operations; the token accessors keep
/// the pair consistent: a session exists only while both tokens do.
pub trait TokenStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// The stored session, if both tokens are present
    fn session(&self) -> Option<Session> {
        let access_token = self.get(ApiConfig::ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())?;
        let refresh_token = self.get(ApiConfig::REFRESH_TOKEN_KEY).filter(|t| !t.is_empty())?;
        Some(Session {
            access_token,
            refresh_token,
        })
    }

    fn refresh_token(&self) -> Option<String> {
        self.session().map(|session| session.refresh_token)
    }

    fn has_session(&self) -> bool {
        self.session().is_some()
    }

    /// Store both tokens of a freshly issued session
    fn save(&self, session: &Session) {
        self.set(ApiConfig::ACCESS_TOKEN_KEY, &session.access_token);
        self.set(ApiConfig::REFRESH_TOKEN_KEY, &session.refresh_token);
    }

    /// Swap in a rotated access token, keeping the refresh token
    fn replace_access_token(&self, access_token: &str) {
        self.set(ApiConfig::ACCESS_TOKEN_KEY, access_token);
    }

    /// Forget both tokens
    fn clear(&self) {
        self.remove(ApiConfig::ACCESS_TOKEN_KEY);
        self.remove(ApiConfig::REFRESH_TOKEN_KEY);
    }
}

/// In-memory token store, for native use and tests
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store already holding `session`
    pub fn with_session(session: &Session) -> Self {
        let store = Self::new();
        store.save(session);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}
