//! Session context and provider

use crate::components::ErrorBanner;
use crate::config::FrontendConfig;
use crate::services::Services;
use crate::storage::LocalTokenStore;
use std::rc::Rc;
use taskdeck_http::TokenStore;
use yew::prelude::*;

/// Whether a session is stored
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub authenticated: bool,
}

/// Session actions
pub enum SessionAction {
    /// Tokens were stored by a sign-in or registration
    SignedIn,
    /// Tokens were cleared, by sign-out or by a failed refresh
    SignedOut,
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let authenticated = matches!(action, SessionAction::SignedIn);
        if authenticated == self.authenticated {
            return self;
        }
        Rc::new(Self { authenticated })
    }
}

/// Session handed to components: the reducer handle plus the API services
#[derive(Clone)]
pub struct SessionContext {
    state: UseReducerHandle<SessionState>,
    services: Rc<Services>,
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && Rc::ptr_eq(&self.services, &other.services)
    }
}

impl SessionContext {
    pub fn is_authenticated(&self) -> bool {
        self.state.authenticated
    }

    pub fn services(&self) -> Rc<Services> {
        self.services.clone()
    }

    pub fn signed_in(&self) {
        self.state.dispatch(SessionAction::SignedIn);
    }

    pub fn signed_out(&self) {
        self.state.dispatch(SessionAction::SignedOut);
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    /// API base URL; defaults to [`FrontendConfig::api_base_url`]
    #[prop_or_default]
    pub base_url: Option<AttrValue>,
    pub children: Children,
}

/// Session provider component
///
/// Owns the token store and the API services. A failed token refresh
/// dispatches [`SessionAction::SignedOut`], which re-renders the routes
/// guarded on the session.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let store = use_memo((), |_| match LocalTokenStore::new() {
        Ok(store) => Some(Rc::new(store) as Rc<dyn TokenStore>),
        Err(e) => {
            error!("Cannot persist the session: {e}");
            None
        }
    });

    let state = {
        let store = store.clone();
        use_reducer(move || SessionState {
            authenticated: (*store).as_ref().is_some_and(|s| s.has_session()),
        })
    };

    let services = {
        let dispatcher = state.dispatcher();
        let base_url = props
            .base_url
            .as_ref()
            .map_or_else(FrontendConfig::api_base_url, |url| url.to_string());
        use_memo((), move |_| {
            let store = (*store).clone()?;
            let on_session_end = move || dispatcher.dispatch(SessionAction::SignedOut);
            match Services::connect(&base_url, store, on_session_end) {
                Ok(services) => Some(Rc::new(services)),
                Err(e) => {
                    error!("Failed to create API client: {e}");
                    None
                }
            }
        })
    };

    let Some(services) = (*services).clone() else {
        return html! {
            <ErrorBanner message="Unable to start the application. Please reload the page." />
        };
    };

    let context = SessionContext { state, services };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}

/// Hook to get the API services
#[hook]
pub fn use_services() -> Rc<Services> {
    use_session().services()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reducer_only_changes_on_transition() {
        let state = Rc::new(SessionState {
            authenticated: false,
        });
        let same = state.clone().reduce(SessionAction::SignedOut);
        assert!(Rc::ptr_eq(&state, &same));

        let signed_in = state.reduce(SessionAction::SignedIn);
        assert!(signed_in.authenticated);
        assert!(!signed_in.reduce(SessionAction::SignedOut).authenticated);
    }
}
