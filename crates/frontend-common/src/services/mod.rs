//! API services shared by the UI
//!
//! [`Services`] is the explicit session object handed to components through
//! the session context: it owns the token store and the API handles built on
//! top of it. The async flows in [`auth`] and [`tasks`] turn API results into
//! inline messages and state actions.

pub mod auth;
pub mod tasks;

use std::rc::Rc;
use taskdeck_http::{AuthApi, AuthGateway, ClientError, TaskApi, TaskdeckClient, TokenStore};

/// API handles sharing one token store
pub struct Services {
    auth: AuthApi,
    tasks: TaskApi,
    store: Rc<dyn TokenStore>,
}

impl Services {
    /// Wire the APIs to `store`; `on_session_end` fires when the session
    /// cannot be recovered
    pub fn new(
        client: TaskdeckClient,
        store: Rc<dyn TokenStore>,
        on_session_end: impl Fn() + 'static,
    ) -> Self {
        let gateway = AuthGateway::new(client.clone(), store.clone()).on_session_end(on_session_end);
        Self {
            auth: AuthApi::new(client),
            tasks: TaskApi::new(gateway),
            store,
        }
    }

    /// Build the client for `base_url` and wire the APIs
    pub fn connect(
        base_url: &str,
        store: Rc<dyn TokenStore>,
        on_session_end: impl Fn() + 'static,
    ) -> Result<Self, ClientError> {
        let client = TaskdeckClient::new(base_url)?;
        Ok(Self::new(client, store, on_session_end))
    }

    pub fn auth(&self) -> &AuthApi {
        &self.auth
    }

    pub fn tasks(&self) -> &TaskApi {
        &self.tasks
    }

    pub fn store(&self) -> &Rc<dyn TokenStore> {
        &self.store
    }

    pub fn has_session(&self) -> bool {
        self.store.has_session()
    }

    /// Message to show inline for `error`
    ///
    /// `None` once the session is gone: the session-end callback has already
    /// sent the user back to the entry page.
    pub fn inline_error(&self, error: &ClientError) -> Option<String> {
        if error.is_session_expired() || !self.store.has_session() {
            debug!("Suppressing error after session end: {error}");
            None
        } else {
            Some(error.user_message())
        }
    }
}
